use crate::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct ScheduleConfig {
    cron_schedule: String,
    poll_interval_secs: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            cron_schedule: "0 0 3 * * *".to_string(),
            poll_interval_secs: 60,
        }
    }
}
