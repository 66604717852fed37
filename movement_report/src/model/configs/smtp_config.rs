use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct SmtpConfig {
    smtp_host: String,
    smtp_port: u16,
    credential_id: String,
    credential_pw: String,
    email_from: String,
}
