use crate::common::*;

use crate::model::movement::movement_record::*;

#[async_trait]
pub trait QueryService: Send + Sync {
    #[doc = "Daily movement counts per capture medium, from `cutoff` onwards"]
    async fn fetch_movements(&self, cutoff: NaiveDate) -> anyhow::Result<Vec<MovementRecord>>;
}
