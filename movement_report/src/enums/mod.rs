pub mod mail_transport;
pub mod movement_category;
pub mod report_error;
