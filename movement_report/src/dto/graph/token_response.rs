use crate::common::*;

#[doc = r#"
    OAuth2 token endpoint response (client-credentials grant).

    Success carries `access_token`; failure carries `error` and `error_description`.
"#]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl TokenResponse {
    #[doc = "A token is usable only when present and non-blank"]
    pub fn usable_token(&self) -> Option<&str> {
        self.access_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    #[doc = "e.g. `Bearer token, expires in 3599s`"]
    pub fn lifetime_note(&self) -> String {
        format!(
            "{} token, expires in {}",
            self.token_type.as_deref().unwrap_or("unknown"),
            self.expires_in
                .map_or_else(|| "unknown time".to_string(), |secs| format!("{}s", secs))
        )
    }

    pub fn failure_reason(&self) -> String {
        format!(
            "{} - {}",
            self.error.as_deref().unwrap_or("no access_token in response"),
            self.error_description.as_deref().unwrap_or("")
        )
    }
}
