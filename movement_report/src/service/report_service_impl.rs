use crate::common::*;

use crate::model::{
    configs::report_config::*,
    movement::movement_record::*,
    report::{daily_series::*, report_artifact::*},
};

use crate::traits::service_traits::{
    chart_service::*, notification_service::*, query_service::*, report_service::*,
};

use crate::utils_modules::time_utils::*;

#[derive(Debug, new)]
pub struct ReportServiceImpl<Q: QueryService, C: ChartService, N: NotificationService> {
    query_service: Q,
    chart_service: C,
    notification_service: N,
    report_config: ReportConfig,
}

#[async_trait]
impl<Q, C, N> ReportService for ReportServiceImpl<Q, C, N>
where
    Q: QueryService,
    C: ChartService,
    N: NotificationService,
{
    #[doc = r#"
        일일 리포트 1회 실행.

        1. `today - days_back` 부터의 이동 건수 조회
        2. 날짜 x 분류 일자별 시리즈 생성 (빈 날짜는 0)
        3. 라인 차트 PNG 생성
        4. 차트를 인라인으로 첨부하여 메일 발송

        어느 단계든 실패하면 이후 단계는 실행하지 않는다.
    "#]
    async fn run_daily_report(&self, now: DateTime<Local>) -> anyhow::Result<ReportArtifact> {
        let today: NaiveDate = now.date_naive();
        let days_back: u64 = *self.report_config.days_back();
        let start_date: NaiveDate = window_start(today, days_back);

        info!(
            "[ReportServiceImpl->run_daily_report] window {} ~ {}",
            start_date, today
        );

        let records: Vec<MovementRecord> =
            self.query_service.fetch_movements(start_date).await?;

        let series: DailySeries = DailySeries::build(&records, start_date, today)?;

        let artifact: ReportArtifact = self
            .chart_service
            .render_daily_series(&series, days_back, now)
            .await?;

        self.notification_service
            .send_daily_report(&artifact, &series)
            .await?;

        Ok(artifact)
    }
}
