use crate::common::*;

use crate::model::report::{daily_series::*, report_artifact::*};

#[async_trait]
pub trait NotificationService: Send + Sync {
    async fn send_daily_report(
        &self,
        artifact: &ReportArtifact,
        series: &DailySeries,
    ) -> anyhow::Result<()>;
}
