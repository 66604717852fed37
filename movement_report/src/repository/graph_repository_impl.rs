use crate::common::*;

use crate::dto::graph::{send_mail_request::*, token_response::*};

use crate::enums::report_error::*;

use crate::model::configs::graph_config::*;

use crate::traits::repository_traits::graph_repository::*;

const LOGIN_AUTHORITY: &str = "https://login.microsoftonline.com";
const GRAPH_API_BASE: &str = "https://graph.microsoft.com/v1.0";
const GRAPH_SCOPE: &str = "https://graph.microsoft.com/.default";

#[derive(Debug, Clone)]
pub struct GraphRepositoryImpl {
    client: Client,
    graph_config: GraphConfig,
}

impl GraphRepositoryImpl {
    pub fn new(graph_config: GraphConfig) -> anyhow::Result<Self> {
        let client: Client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("[GraphRepositoryImpl->new] failed to build HTTP client")?;

        Ok(GraphRepositoryImpl {
            client,
            graph_config,
        })
    }
}

#[async_trait]
impl GraphRepository for GraphRepositoryImpl {
    #[doc = "OAuth2 client-credentials flow against the tenant's token endpoint"]
    async fn acquire_token(&self) -> anyhow::Result<String> {
        let url: String = format!(
            "{}/{}/oauth2/v2.0/token",
            LOGIN_AUTHORITY,
            encode(self.graph_config.tenant_id())
        );

        let form: [(&str, &str); 4] = [
            ("client_id", self.graph_config.client_id().as_str()),
            ("client_secret", self.graph_config.client_secret().as_str()),
            ("scope", GRAPH_SCOPE),
            ("grant_type", "client_credentials"),
        ];

        let response: reqwest::Response = self
            .client
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(|e| ReportError::Auth(format!("token request failed: {}", e)))?;

        let status: StatusCode = response.status();

        let token_response: TokenResponse = response.json().await.map_err(|e| {
            ReportError::Auth(format!("unreadable token response (HTTP {}): {}", status, e))
        })?;

        match token_response.usable_token() {
            Some(token) => {
                info!(
                    "[GraphRepositoryImpl->acquire_token] {}",
                    token_response.lifetime_note()
                );
                Ok(token.to_string())
            }
            None => Err(ReportError::Auth(token_response.failure_reason()).into()),
        }
    }

    #[doc = "POST /users/{sender}/sendMail - Graph answers 202 Accepted on success"]
    async fn send_mail(
        &self,
        token: &str,
        sender_upn: &str,
        request: &SendMailRequest,
    ) -> anyhow::Result<()> {
        let url: String = format!("{}/users/{}/sendMail", GRAPH_API_BASE, encode(sender_upn));

        let response: reqwest::Response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(request)
            .send()
            .await
            .map_err(|e| ReportError::Delivery {
                status: None,
                detail: e.to_string(),
            })?;

        let status: StatusCode = response.status();

        if status == StatusCode::OK || status == StatusCode::ACCEPTED {
            return Ok(());
        }

        let body: String = response.text().await.unwrap_or_default();

        Err(ReportError::Delivery {
            status: Some(status.as_u16()),
            detail: body,
        }
        .into())
    }
}
