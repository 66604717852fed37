pub mod graph_config;
pub mod mail_config;
pub mod rdb_config;
pub mod report_config;
pub mod schedule_config;
pub mod smtp_config;
pub mod total_config;
