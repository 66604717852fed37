use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct RdbConfig {
    conn_str: String,
    timeout_secs: u64,
}
