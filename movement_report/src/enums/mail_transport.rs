use crate::common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailTransport {
    Graph,
    Smtp,
}

impl FromStr for MailTransport {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "graph" => Ok(MailTransport::Graph),
            "smtp" => Ok(MailTransport::Smtp),
            other => Err(anyhow!("unknown mail transport '{}'", other)),
        }
    }
}
