use crate::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct ReportConfig {
    output_dir: String,
    days_back: u64,
}
