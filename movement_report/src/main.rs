/*
Author      : Seunghwan Shin
Create date : 2025-10-00
Description : SQL Server 의 일자별 이동 건수(Computador / Coletor)를 조회하여
              라인 차트(PNG)로 그리고, 요약과 함께 메일 본문에 인라인으로 발송한다.
              기동 시 1회 실행 후 크론 스케줄(기본 매일 03:00)에 따라 반복 실행.

History     : 2025-10-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod dto;

mod enums;
use enums::mail_transport::*;

mod env_configuration;
use env_configuration::env_config::*;

mod repository;
use repository::{graph_repository_impl::*, sqlserver_repository_impl::*};

mod traits;
use traits::service_traits::notification_service::*;

mod model;
use model::configs::total_config::*;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{
    chart_service_impl::*, notification_service_impl::*, query_service_impl::*,
    report_service_impl::*, smtp_notification_service_impl::*,
};

mod controller;
use controller::main_controller::*;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    /* .env 로드 후 전역로거 설정 */
    let env_file: Option<PathBuf> = load_env_file();

    let _logger: LoggerHandle = set_global_logger()
        .unwrap_or_else(|e| panic!("[main] Failed to start the global logger: {:?}", e));

    info!("Movement report program start!");

    match env_file {
        Some(path) => info!("Settings loaded from {}", path.display()),
        None => warn!("No .env file found. Using the process environment only."),
    }

    let total_config: TotalConfig = TotalConfig::load().unwrap_or_else(|e| {
        let err_msg: &str = "[main] Invalid configuration.";
        error!("{} {:?}", err_msg, e);
        panic!("{} {:?}", err_msg, e)
    });

    /* SQL Server connection */
    let sqlserver_repository: SqlServerRepositoryImpl =
        SqlServerRepositoryImpl::new(total_config.rdb()).unwrap_or_else(|e| {
            let err_msg: &str =
                "[main] An issue occurred while initializing sqlserver_repository.";
            error!("{} {:?}", err_msg, e);
            panic!("{} {:?}", err_msg, e)
        });

    /* 의존 주입 */
    let query_service: QueryServiceImpl<SqlServerRepositoryImpl> =
        QueryServiceImpl::new(sqlserver_repository);
    let chart_service: ChartServiceImpl =
        ChartServiceImpl::new(PathBuf::from(total_config.report().output_dir()));

    match total_config.mail().transport() {
        MailTransport::Graph => {
            let graph_config = total_config.graph().clone().unwrap_or_else(|| {
                let err_msg: &str = "[main] Graph transport selected without Graph settings.";
                error!("{}", err_msg);
                panic!("{}", err_msg)
            });

            let sender_upn: String = graph_config.sender_upn().to_string();

            let graph_repository: GraphRepositoryImpl = GraphRepositoryImpl::new(graph_config)
                .unwrap_or_else(|e| {
                    let err_msg: &str =
                        "[main] An issue occurred while initializing graph_repository.";
                    error!("{} {:?}", err_msg, e);
                    panic!("{} {:?}", err_msg, e)
                });

            let notification_service: GraphNotificationServiceImpl<GraphRepositoryImpl> =
                GraphNotificationServiceImpl::new(
                    graph_repository,
                    sender_upn,
                    total_config.mail().clone(),
                );

            run_report_job(query_service, chart_service, notification_service, &total_config)
                .await;
        }
        MailTransport::Smtp => {
            let smtp_config = total_config.smtp().clone().unwrap_or_else(|| {
                let err_msg: &str = "[main] SMTP transport selected without SMTP settings.";
                error!("{}", err_msg);
                panic!("{}", err_msg)
            });

            let notification_service: SmtpNotificationServiceImpl =
                SmtpNotificationServiceImpl::new(smtp_config, total_config.mail().clone());

            run_report_job(query_service, chart_service, notification_service, &total_config)
                .await;
        }
    }
}

#[doc = "리포트 서비스를 조립하고 스케줄 루프를 실행한다. 반환되면 치명적 오류"]
async fn run_report_job<N: NotificationService>(
    query_service: QueryServiceImpl<SqlServerRepositoryImpl>,
    chart_service: ChartServiceImpl,
    notification_service: N,
    total_config: &TotalConfig,
) {
    let report_service: ReportServiceImpl<
        QueryServiceImpl<SqlServerRepositoryImpl>,
        ChartServiceImpl,
        N,
    > = ReportServiceImpl::new(
        query_service,
        chart_service,
        notification_service,
        total_config.report().clone(),
    );

    let main_controller: MainController<_> =
        MainController::new(report_service, total_config.schedule().clone());

    main_controller.main_task().await.unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });
}
