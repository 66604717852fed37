use crate::common::*;

use crate::model::configs::{
    graph_config::*, mail_config::*, rdb_config::*, report_config::*, schedule_config::*,
    smtp_config::*,
};

use crate::enums::{mail_transport::*, report_error::*};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

#[doc = r#"
    All settings of the report job, resolved once at startup and handed to
    each component. The transport-specific section is present only for the
    selected transport.
"#]
#[derive(Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct TotalConfig {
    rdb: RdbConfig,
    mail: MailConfig,
    graph: Option<GraphConfig>,
    smtp: Option<SmtpConfig>,
    report: ReportConfig,
    schedule: ScheduleConfig,
}

#[doc = r#"
    Unvalidated settings from one source (TOML file or environment).
    Numeric values that failed to parse are remembered in `invalid`.
"#]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSettings {
    pub db_conn_str: Option<String>,
    pub db_timeout_secs: Option<u64>,
    pub email_to: Option<String>,
    pub email_from: Option<String>,
    pub email_subject: Option<String>,
    pub output_dir: Option<String>,
    pub days_back: Option<u64>,
    pub mail_transport: Option<String>,
    pub azure_tenant_id: Option<String>,
    pub azure_client_id: Option<String>,
    pub azure_client_secret: Option<String>,
    pub graph_sender_upn: Option<String>,
    pub smtp_host: Option<String>,
    pub smtp_port: Option<u16>,
    pub smtp_user: Option<String>,
    pub smtp_pass: Option<String>,
    pub report_cron: Option<String>,
    pub poll_interval_secs: Option<u64>,
    pub html_template_path: Option<String>,
    #[serde(skip)]
    pub invalid: Vec<String>,
}

macro_rules! overlay_fields {
    ($base:ident, $top:ident, $($field:ident),+ $(,)?) => {
        $( if $top.$field.is_some() { $base.$field = $top.$field; } )+
    };
}

impl RawSettings {
    #[doc = r#"
        Collects settings through a key lookup (normally `get_env_opt`).

        # Arguments
        * `lookup` - returns the trimmed, non-empty value of a setting name
    "#]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut invalid: Vec<String> = Vec::new();

        let mut parse_num = |key: &str| -> Option<u64> {
            let raw: String = lookup(key)?;
            match raw.parse::<u64>() {
                Ok(v) => Some(v),
                Err(_) => {
                    invalid.push(format!("{}='{}'", key, raw));
                    None
                }
            }
        };

        let db_timeout_secs: Option<u64> = parse_num(DB_TIMEOUT_SECS);
        let days_back: Option<u64> = parse_num(DAYS_BACK);
        let poll_interval_secs: Option<u64> = parse_num(POLL_INTERVAL_SECS);
        let smtp_port_raw: Option<u64> = parse_num(SMTP_PORT);

        let smtp_port: Option<u16> = smtp_port_raw.and_then(|port| match u16::try_from(port) {
            Ok(port) => Some(port),
            Err(_) => {
                invalid.push(format!("{}='{}'", SMTP_PORT, port));
                None
            }
        });

        RawSettings {
            db_conn_str: lookup(DB_CONN_STR),
            db_timeout_secs,
            email_to: lookup(EMAIL_TO),
            email_from: lookup(EMAIL_FROM),
            email_subject: lookup(EMAIL_SUBJECT),
            output_dir: lookup(OUTPUT_DIR),
            days_back,
            mail_transport: lookup(MAIL_TRANSPORT),
            azure_tenant_id: lookup(AZURE_TENANT_ID),
            azure_client_id: lookup(AZURE_CLIENT_ID),
            azure_client_secret: lookup(AZURE_CLIENT_SECRET),
            graph_sender_upn: lookup(GRAPH_SENDER_UPN),
            smtp_host: lookup(SMTP_HOST),
            smtp_port,
            smtp_user: lookup(SMTP_USER),
            smtp_pass: lookup(SMTP_PASS),
            report_cron: lookup(REPORT_CRON),
            poll_interval_secs,
            html_template_path: lookup(HTML_TEMPLATE_PATH),
            invalid,
        }
    }

    #[doc = "Values present in `top` replace the ones in `self`."]
    pub fn overlay(mut self, top: RawSettings) -> Self {
        overlay_fields!(
            self,
            top,
            db_conn_str,
            db_timeout_secs,
            email_to,
            email_from,
            email_subject,
            output_dir,
            days_back,
            mail_transport,
            azure_tenant_id,
            azure_client_id,
            azure_client_secret,
            graph_sender_upn,
            smtp_host,
            smtp_port,
            smtp_user,
            smtp_pass,
            report_cron,
            poll_interval_secs,
            html_template_path,
        );
        self.invalid.extend(top.invalid);
        self
    }

    #[doc = r#"
        Applies defaults and validates the settings in one pass.

        Every missing required name and every invalid value is collected, so
        a single `ReportError::Configuration` describes everything that needs
        fixing.
    "#]
    pub fn into_config(self) -> Result<TotalConfig, ReportError> {
        let mut missing: Vec<String> = Vec::new();
        let mut invalid: Vec<String> = self.invalid;

        let mut require = |value: Option<String>, key: &str| -> String {
            value.unwrap_or_else(|| {
                missing.push(key.to_string());
                String::new()
            })
        };

        let db_conn_str: String = require(self.db_conn_str, DB_CONN_STR);
        let email_to: String = require(self.email_to, EMAIL_TO);

        let transport: MailTransport = match self.mail_transport.as_deref() {
            None => MailTransport::Graph,
            Some(raw) => raw.parse::<MailTransport>().unwrap_or_else(|_| {
                invalid.push(format!("{}='{}'", MAIL_TRANSPORT, raw));
                MailTransport::Graph
            }),
        };

        let graph: Option<GraphConfig> = match transport {
            MailTransport::Graph => Some(GraphConfig::new(
                require(self.azure_tenant_id, AZURE_TENANT_ID),
                require(self.azure_client_id, AZURE_CLIENT_ID),
                require(self.azure_client_secret, AZURE_CLIENT_SECRET),
                require(self.graph_sender_upn, GRAPH_SENDER_UPN),
            )),
            MailTransport::Smtp => None,
        };

        let smtp: Option<SmtpConfig> = match transport {
            MailTransport::Smtp => {
                let smtp_host: String = require(self.smtp_host, SMTP_HOST);
                let smtp_user: String = require(self.smtp_user, SMTP_USER);
                let smtp_pass: String = require(self.smtp_pass, SMTP_PASS);
                let email_from: String = self.email_from.unwrap_or_else(|| smtp_user.clone());

                Some(SmtpConfig::new(
                    smtp_host,
                    self.smtp_port.unwrap_or(DEFAULT_SMTP_PORT),
                    smtp_user,
                    smtp_pass,
                    email_from,
                ))
            }
            MailTransport::Graph => None,
        };

        let schedule_defaults: ScheduleConfig = ScheduleConfig::default();
        let cron_schedule: String = self
            .report_cron
            .unwrap_or_else(|| schedule_defaults.cron_schedule().to_string());

        if cron::Schedule::from_str(&cron_schedule).is_err() {
            invalid.push(format!("{}='{}'", REPORT_CRON, cron_schedule));
        }

        let poll_interval_secs: u64 = self
            .poll_interval_secs
            .unwrap_or(*schedule_defaults.poll_interval_secs());

        if poll_interval_secs == 0 {
            invalid.push(format!("{}='0'", POLL_INTERVAL_SECS));
        }

        if !missing.is_empty() || !invalid.is_empty() {
            return Err(ReportError::Configuration { missing, invalid });
        }

        Ok(TotalConfig {
            rdb: RdbConfig::new(
                db_conn_str,
                self.db_timeout_secs.unwrap_or(DEFAULT_DB_TIMEOUT_SECS),
            ),
            mail: MailConfig::new(
                transport,
                email_to,
                self.email_subject
                    .unwrap_or_else(|| DEFAULT_EMAIL_SUBJECT.to_string()),
                self.html_template_path,
            ),
            graph,
            smtp,
            report: ReportConfig::new(
                self.output_dir
                    .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string()),
                self.days_back.unwrap_or(DEFAULT_DAYS_BACK),
            ),
            schedule: ScheduleConfig::new(cron_schedule, poll_interval_secs),
        })
    }
}

impl TotalConfig {
    #[doc = r#"
        Resolves the configuration: optional TOML file (`REPORT_CONFIG_PATH`),
        then environment variables on top, then defaults.

        # Returns
        * `anyhow::Result<TotalConfig>` - `ReportError::Configuration` lists every missing name
    "#]
    pub fn load() -> anyhow::Result<Self> {
        let file_settings: RawSettings = match get_env_opt(REPORT_CONFIG_PATH) {
            Some(path) => {
                info!("[TotalConfig->load] reading settings file: {}", path);
                read_toml_from_file::<RawSettings>(&path).with_context(|| {
                    format!("[TotalConfig->load] failed to read settings file '{}'", path)
                })?
            }
            None => RawSettings::default(),
        };

        let env_settings: RawSettings = RawSettings::from_lookup(get_env_opt);

        let config: TotalConfig = file_settings.overlay(env_settings).into_config()?;

        Ok(config)
    }
}
