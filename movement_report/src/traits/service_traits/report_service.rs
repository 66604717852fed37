use crate::common::*;

use crate::model::report::report_artifact::*;

#[async_trait]
pub trait ReportService: Send + Sync {
    #[doc = "One full pass: fetch -> build series -> render chart -> send e-mail"]
    async fn run_daily_report(&self, now: DateTime<Local>) -> anyhow::Result<ReportArtifact>;
}
