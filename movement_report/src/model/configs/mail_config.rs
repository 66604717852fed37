use crate::common::*;

use crate::enums::mail_transport::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct MailConfig {
    transport: MailTransport,
    email_to: String,
    email_subject: String,
    html_template_path: Option<String>,
}

impl MailConfig {
    #[doc = "Splits the comma-separated `EMAIL_TO` list, trimming entries and dropping blanks"]
    pub fn recipients(&self) -> Vec<String> {
        self.email_to
            .split(',')
            .map(str::trim)
            .filter(|addr| !addr.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipients_are_trimmed_and_blanks_dropped() {
        let config = MailConfig::new(
            MailTransport::Graph,
            " a@corp.com, ,b@corp.com ,".to_string(),
            "subject".to_string(),
            None,
        );

        assert_eq!(config.recipients(), vec!["a@corp.com", "b@corp.com"]);
    }
}
