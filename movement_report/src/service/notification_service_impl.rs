use crate::common::*;

use crate::dto::graph::send_mail_request::*;

use crate::enums::report_error::*;

use crate::model::{
    configs::mail_config::*,
    report::{daily_series::*, report_artifact::*, report_summary::*},
};

use crate::traits::{
    repository_traits::graph_repository::*, service_traits::notification_service::*,
};

use crate::utils_modules::io_utils::*;

#[doc = "HTML 본문에서 `cid:chart1` 으로 참조하는 인라인 이미지 ID"]
pub const INLINE_CONTENT_ID: &str = "chart1";

#[doc = r#"
    Validates the addressing of a report e-mail and returns the parsed recipient list.

    # Errors
    * `ReportError::Configuration` - sender blank, no recipient left after trimming,
      or the chart file missing on disk
"#]
pub fn validate_addressing(
    sender: &str,
    mail_config: &MailConfig,
    artifact: &ReportArtifact,
) -> Result<Vec<String>, ReportError> {
    let mut missing: Vec<String> = Vec::new();

    if sender.trim().is_empty() {
        missing.push("sender".to_string());
    }

    let recipients: Vec<String> = mail_config.recipients();
    if recipients.is_empty() {
        missing.push("EMAIL_TO".to_string());
    }

    let invalid: Vec<String> = if artifact.file_path().is_file() {
        Vec::new()
    } else {
        vec![format!("chart image {}", artifact.file_path().display())]
    };

    if missing.is_empty() && invalid.is_empty() {
        Ok(recipients)
    } else {
        Err(ReportError::Configuration { missing, invalid })
    }
}

#[derive(Debug, new)]
pub struct GraphNotificationServiceImpl<R: GraphRepository> {
    graph_repository: R,
    sender_upn: String,
    mail_config: MailConfig,
}

#[async_trait]
impl<R: GraphRepository> NotificationService for GraphNotificationServiceImpl<R> {
    #[doc = r#"
        Graph `sendMail` 으로 차트를 인라인 첨부하여 발송한다.

        1. 발신자/수신자/이미지 파일 검증
        2. client-credentials 토큰 발급
        3. 요약 HTML 렌더링 후 전송 (`saveToSentItems = true`)
    "#]
    async fn send_daily_report(
        &self,
        artifact: &ReportArtifact,
        series: &DailySeries,
    ) -> anyhow::Result<()> {
        let recipients: Vec<String> =
            validate_addressing(&self.sender_upn, &self.mail_config, artifact)?;

        let token: String = self.graph_repository.acquire_token().await?;

        if token.trim().is_empty() {
            return Err(ReportError::Auth("empty access token".to_string()).into());
        }

        let content_bytes: String = read_file_base64(artifact.file_path()).await?;

        let template: String =
            load_html_template(self.mail_config.html_template_path().as_deref())?;

        let html_content: String = ReportSummary::from_series(series).render_html(
            &template,
            INLINE_CONTENT_ID,
            *artifact.generated_at(),
        );

        let request: SendMailRequest = SendMailRequest::new(
            GraphMessage::new(
                self.mail_config.email_subject().to_string(),
                ItemBody::html(html_content),
                recipients.iter().map(|addr| Recipient::of(addr)).collect(),
                vec![FileAttachment::inline_png(
                    artifact.file_name(),
                    content_bytes,
                    INLINE_CONTENT_ID,
                )],
            ),
            true,
        );

        self.graph_repository
            .send_mail(&token, &self.sender_upn, &request)
            .await?;

        info!("Report e-mail sent via Graph to {}", recipients.join(", "));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::enums::mail_transport::*;

    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeGraph {
        token: String,
        sent: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl GraphRepository for FakeGraph {
        async fn acquire_token(&self) -> anyhow::Result<String> {
            Ok(self.token.clone())
        }

        async fn send_mail(
            &self,
            token: &str,
            sender_upn: &str,
            request: &SendMailRequest,
        ) -> anyhow::Result<()> {
            let body: String = serde_json::to_string(request)?;
            self.sent
                .lock()
                .unwrap()
                .push((format!("{}|{}", token, sender_upn), body));
            Ok(())
        }
    }

    fn mail_config(email_to: &str) -> MailConfig {
        MailConfig::new(
            MailTransport::Graph,
            email_to.to_string(),
            "Pacotes por meio de movimento (Diário)".to_string(),
            None,
        )
    }

    fn series() -> DailySeries {
        let day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        DailySeries::build(&[], day, day).unwrap()
    }

    fn artifact_in(dir: &Path) -> ReportArtifact {
        let path: PathBuf = dir.join("chart.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();
        ReportArtifact::new(path, Local::now())
    }

    #[tokio::test]
    async fn sends_inline_chart_to_every_recipient() {
        let dir = tempfile::tempdir().unwrap();
        let service = GraphNotificationServiceImpl::new(
            FakeGraph {
                token: "tkn".to_string(),
                ..FakeGraph::default()
            },
            "reports@corp.com".to_string(),
            mail_config("a@corp.com, b@corp.com"),
        );

        service
            .send_daily_report(&artifact_in(dir.path()), &series())
            .await
            .unwrap();

        let sent = service.graph_repository.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "tkn|reports@corp.com");

        let body: Value = serde_json::from_str(&sent[0].1).unwrap();
        assert_eq!(body["saveToSentItems"], true);
        assert_eq!(body["message"]["toRecipients"].as_array().unwrap().len(), 2);
        assert_eq!(body["message"]["attachments"][0]["contentId"], "chart1");
        assert!(body["message"]["body"]["content"]
            .as_str()
            .unwrap()
            .contains("cid:chart1"));
    }

    #[tokio::test]
    async fn blank_recipients_fail_before_authenticating() {
        let dir = tempfile::tempdir().unwrap();
        let service = GraphNotificationServiceImpl::new(
            FakeGraph::default(),
            "reports@corp.com".to_string(),
            mail_config(" , "),
        );

        let err = service
            .send_daily_report(&artifact_in(dir.path()), &series())
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::Configuration { .. })
        ));
        assert!(service.graph_repository.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn missing_image_is_a_configuration_error() {
        let artifact = ReportArtifact::new(PathBuf::from("does/not/exist.png"), Local::now());
        let config = mail_config("a@corp.com");

        match validate_addressing("reports@corp.com", &config, &artifact) {
            Err(ReportError::Configuration { missing, invalid }) => {
                assert!(missing.is_empty());
                assert_eq!(invalid.len(), 1);
            }
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn empty_token_is_an_auth_error() {
        let dir = tempfile::tempdir().unwrap();
        let service = GraphNotificationServiceImpl::new(
            FakeGraph::default(),
            "reports@corp.com".to_string(),
            mail_config("a@corp.com"),
        );

        let err = service
            .send_daily_report(&artifact_in(dir.path()), &series())
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::Auth(_))
        ));
    }
}
