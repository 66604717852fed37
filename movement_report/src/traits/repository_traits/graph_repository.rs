use crate::common::*;

use crate::dto::graph::send_mail_request::*;

#[async_trait]
pub trait GraphRepository: Send + Sync {
    async fn acquire_token(&self) -> anyhow::Result<String>;
    async fn send_mail(
        &self,
        token: &str,
        sender_upn: &str,
        request: &SendMailRequest,
    ) -> anyhow::Result<()>;
}
