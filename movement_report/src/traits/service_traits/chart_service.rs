use crate::common::*;

use crate::model::report::{daily_series::*, report_artifact::*};

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Draw the daily series as a line chart (one line per category) and save it as a PNG
        # Arguments
        * `series`       - Dense daily series to plot
        * `window_days`  - Lookback window, shown in the title
        * `generated_at` - Timestamp used in the file name
    "]
    async fn render_daily_series(
        &self,
        series: &DailySeries,
        window_days: u64,
        generated_at: DateTime<Local>,
    ) -> anyhow::Result<ReportArtifact>;
}
