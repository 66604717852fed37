use crate::common::*;

use crate::enums::report_error::*;

use crate::model::{
    configs::{mail_config::*, smtp_config::*},
    report::{daily_series::*, report_artifact::*, report_summary::*},
};

use crate::service::notification_service_impl::{validate_addressing, INLINE_CONTENT_ID};

use crate::traits::service_traits::notification_service::*;

use crate::utils_modules::io_utils::*;

#[derive(Debug, Getters, new)]
#[getset(get = "pub")]
pub struct SmtpNotificationServiceImpl {
    smtp_config: SmtpConfig,
    mail_config: MailConfig,
}

impl SmtpNotificationServiceImpl {
    #[doc = r#"
        HTML 본문과 차트 이미지를 `multipart/related` 메시지로 구성한다.

        # Arguments
        * `recipients`   - 수신자 목록 (검증 완료)
        * `html_content` - `cid:chart1` 을 참조하는 HTML 본문
        * `image`        - PNG 바이트
    "#]
    fn build_message(
        &self,
        recipients: &[String],
        html_content: &str,
        image: Vec<u8>,
    ) -> anyhow::Result<Message> {
        let mut builder = Message::builder()
            .from(self.smtp_config.email_from().parse()?)
            .subject(self.mail_config.email_subject().as_str());

        for recipient in recipients {
            builder = builder.to(recipient.parse()?);
        }

        let image_part: SinglePart = Attachment::new_inline(INLINE_CONTENT_ID.to_string())
            .body(image, ContentType::parse("image/png")?);

        let email: Message = builder.multipart(
            MultiPart::related()
                .singlepart(SinglePart::html(html_content.to_string()))
                .singlepart(image_part),
        )?;

        Ok(email)
    }
}

#[async_trait]
impl NotificationService for SmtpNotificationServiceImpl {
    async fn send_daily_report(
        &self,
        artifact: &ReportArtifact,
        series: &DailySeries,
    ) -> anyhow::Result<()> {
        let recipients: Vec<String> =
            validate_addressing(self.smtp_config.email_from(), &self.mail_config, artifact)?;

        let image: Vec<u8> = tokio::fs::read(artifact.file_path())
            .await
            .with_context(|| {
                format!(
                    "[SmtpNotificationServiceImpl->send_daily_report] Failed to read {}",
                    artifact.file_path().display()
                )
            })?;

        let template: String =
            load_html_template(self.mail_config.html_template_path().as_deref())?;

        let html_content: String = ReportSummary::from_series(series).render_html(
            &template,
            INLINE_CONTENT_ID,
            *artifact.generated_at(),
        );

        let email: Message = self.build_message(&recipients, &html_content, image)?;

        let creds: Credentials = Credentials::new(
            self.smtp_config.credential_id().to_string(),
            self.smtp_config.credential_pw().to_string(),
        );

        let mailer: AsyncSmtpTransport<Tokio1Executor> =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(
                self.smtp_config.smtp_host().as_str(),
            )
            .map_err(|e| ReportError::Delivery {
                status: None,
                detail: format!("invalid SMTP relay: {}", e),
            })?
            .port(*self.smtp_config.smtp_port())
            .credentials(creds)
            .build();

        match mailer.send(email).await {
            Ok(response) => {
                info!(
                    "Report e-mail sent via SMTP to {} ({})",
                    recipients.join(", "),
                    response.code()
                );
                Ok(())
            }
            Err(e) => Err(ReportError::Delivery {
                status: e
                    .status()
                    .and_then(|code| code.to_string().parse::<u16>().ok()),
                detail: e.to_string(),
            }
            .into()),
        }
    }
}
