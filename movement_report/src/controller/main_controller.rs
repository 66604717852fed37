use crate::common::*;

use crate::model::{configs::schedule_config::*, report::report_artifact::*};

use crate::traits::service_traits::report_service::*;

use crate::utils_modules::time_utils::*;

#[derive(Debug, new)]
pub struct MainController<R: ReportService> {
    report_service: R,
    schedule_config: ScheduleConfig,
}

impl<R: ReportService> MainController<R> {
    #[doc = r#"
        메인 루프.

        1. 기동 직후 리포트를 1회 실행한다 (실패 시 에러를 그대로 반환하여 프로세스 종료)
        2. 크론 스케줄로 다음 실행 시각을 계산한다
        3. `poll_interval_secs` 간격으로 깨어나 실행 시각이 지났으면 리포트를 실행하고
           다음 실행 시각을 다시 계산한다. 예약 실행의 실패는 로그만 남기고 루프는 계속된다

        # Returns
        * `anyhow::Result<()>` - 기동 실행 실패 또는 스케줄 계산 불가 시 Err
    "#]
    pub async fn main_task(&self) -> anyhow::Result<()> {
        let schedule: cron::Schedule = self.parse_schedule()?;

        let artifact: ReportArtifact = self
            .report_service
            .run_daily_report(Local::now())
            .await
            .context("[MainController->main_task] startup run failed")?;

        info!("Startup report done: {}", artifact.file_path().display());

        let mut next_run: DateTime<Local> = self.next_run(&schedule, Local::now())?;
        info!("Next report scheduled at {}", next_run);

        let mut ticker: Interval =
            interval(Duration::from_secs(*self.schedule_config.poll_interval_secs()));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let now: DateTime<Local> = Local::now();
            if now < next_run {
                continue;
            }

            self.run_scheduled(now).await;

            /* 실행이 끝난 시점 기준으로 다음 실행 시각 계산 -> 중복 실행 없음 */
            next_run = self.next_run(&schedule, Local::now())?;
            info!("Next report scheduled at {}", next_run);
        }
    }

    fn parse_schedule(&self) -> anyhow::Result<cron::Schedule> {
        cron::Schedule::from_str(self.schedule_config.cron_schedule()).map_err(|e| {
            anyhow!(
                "[MainController->parse_schedule] invalid cron expression '{}': {:?}",
                self.schedule_config.cron_schedule(),
                e
            )
        })
    }

    fn next_run(
        &self,
        schedule: &cron::Schedule,
        now: DateTime<Local>,
    ) -> anyhow::Result<DateTime<Local>> {
        next_run_after(schedule, &now).ok_or_else(|| {
            anyhow!(
                "[MainController->next_run] schedule '{}' has no run after {}",
                self.schedule_config.cron_schedule(),
                now
            )
        })
    }

    #[doc = "예약 실행 1회. 실패는 error 로그로 남기고 삼킨다. 성공 여부를 반환"]
    async fn run_scheduled(&self, now: DateTime<Local>) -> bool {
        match self.report_service.run_daily_report(now).await {
            Ok(artifact) => {
                info!("Scheduled report done: {}", artifact.file_path().display());
                true
            }
            Err(e) => {
                error!("[MainController->run_scheduled] {:?}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingReport {
        runs: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl ReportService for CountingReport {
        async fn run_daily_report(&self, now: DateTime<Local>) -> anyhow::Result<ReportArtifact> {
            self.runs.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(anyhow!("database connection failed: timeout"));
            }
            Ok(ReportArtifact::new(PathBuf::from("chart.png"), now))
        }
    }

    fn controller(fail: bool, cron_schedule: &str) -> MainController<CountingReport> {
        MainController::new(
            CountingReport {
                runs: AtomicUsize::new(0),
                fail,
            },
            ScheduleConfig::new(cron_schedule.to_string(), 60),
        )
    }

    #[tokio::test]
    async fn scheduled_failure_is_swallowed() {
        let controller = controller(true, "0 0 3 * * *");

        assert!(!controller.run_scheduled(Local::now()).await);
        assert!(!controller.run_scheduled(Local::now()).await);
        assert_eq!(controller.report_service.runs.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn scheduled_success_is_reported() {
        let controller = controller(false, "0 0 3 * * *");
        assert!(controller.run_scheduled(Local::now()).await);
    }

    #[tokio::test]
    async fn startup_failure_ends_the_task() {
        let controller = controller(true, "0 0 3 * * *");

        let err = controller.main_task().await.unwrap_err();

        assert!(format!("{:?}", err).contains("startup run failed"));
        assert_eq!(controller.report_service.runs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn invalid_cron_fails_before_running() {
        let controller = controller(false, "not a cron");

        assert!(controller.main_task().await.is_err());
        assert_eq!(controller.report_service.runs.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn next_run_is_after_now() {
        let controller = controller(false, "0 0 3 * * *");
        let schedule = controller.parse_schedule().unwrap();
        let now = Local.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();

        let next = controller.next_run(&schedule, now).unwrap();
        assert!(next > now);
        assert_eq!(next.date_naive(), NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }
}
