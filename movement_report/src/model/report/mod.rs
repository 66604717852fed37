pub mod daily_series;
pub mod report_artifact;
pub mod report_summary;
