use crate::common::*;

/* Setting names. The same names, lowercased, are the keys of the optional TOML file. */
pub const REPORT_CONFIG_PATH: &str = "REPORT_CONFIG_PATH";
pub const DB_CONN_STR: &str = "DB_CONN_STR";
pub const DB_TIMEOUT_SECS: &str = "DB_TIMEOUT_SECS";
pub const EMAIL_TO: &str = "EMAIL_TO";
pub const EMAIL_FROM: &str = "EMAIL_FROM";
pub const EMAIL_SUBJECT: &str = "EMAIL_SUBJECT";
pub const OUTPUT_DIR: &str = "OUTPUT_DIR";
pub const DAYS_BACK: &str = "DAYS_BACK";
pub const MAIL_TRANSPORT: &str = "MAIL_TRANSPORT";
pub const AZURE_TENANT_ID: &str = "AZURE_TENANT_ID";
pub const AZURE_CLIENT_ID: &str = "AZURE_CLIENT_ID";
pub const AZURE_CLIENT_SECRET: &str = "AZURE_CLIENT_SECRET";
pub const GRAPH_SENDER_UPN: &str = "GRAPH_SENDER_UPN";
pub const SMTP_HOST: &str = "SMTP_HOST";
pub const SMTP_PORT: &str = "SMTP_PORT";
pub const SMTP_USER: &str = "SMTP_USER";
pub const SMTP_PASS: &str = "SMTP_PASS";
pub const REPORT_CRON: &str = "REPORT_CRON";
pub const POLL_INTERVAL_SECS: &str = "POLL_INTERVAL_SECS";
pub const HTML_TEMPLATE_PATH: &str = "HTML_TEMPLATE_PATH";
pub const LOG_DIR: &str = "LOG_DIR";
pub const LOG_LEVEL: &str = "LOG_LEVEL";

pub const DEFAULT_EMAIL_SUBJECT: &str = "Pacotes por meio de movimento (Diário)";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_DAYS_BACK: u64 = 14;
pub const DEFAULT_DB_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SMTP_PORT: u16 = 587;
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[doc = "Reads an environment variable, treating unset and blank values alike."]
pub fn get_env_opt(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

#[doc = r#"
    Loads the `.env` file into the process environment.

    The file next to the executable wins, so a deployed binary finds its own
    settings regardless of the working directory. Otherwise the usual
    `dotenv()` lookup from the working directory applies.

    # Returns
    * `Option<PathBuf>` - the file that was loaded, if any
"#]
pub fn load_env_file() -> Option<PathBuf> {
    let beside_exe: Option<PathBuf> = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(".env")))
        .filter(|path| path.exists());

    if let Some(path) = beside_exe {
        if dotenv::from_path(&path).is_ok() {
            return Some(path);
        }
    }

    dotenv().ok()
}
