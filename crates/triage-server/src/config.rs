//! Startup configuration from the environment.
//!
//! Required values that are absent fail here, before any table access, with
//! a message naming the variable and what to set it to.

use std::env;
use std::path::PathBuf;

/// Which store backend to talk to.
pub enum BackendConfig {
    /// The deployed script endpoint in front of the spreadsheet.
    AppsScript {
        webapp_url: String,
        token: Option<String>,
    },
    /// The spreadsheet values API, called directly with a service account.
    Sheets {
        spreadsheet_id: String,
        sheet: String,
        key_path: PathBuf,
    },
}

pub struct ServerConfig {
    pub bind: String,
    pub backend: BackendConfig,
}

pub fn from_env() -> eyre::Result<ServerConfig> {
    let bind = env::var("TRIAGE_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let backend = match env::var("TRIAGE_BACKEND").as_deref() {
        Err(_) | Ok("apps_script") => BackendConfig::AppsScript {
            webapp_url: require(
                "TRIAGE_WEBAPP_URL",
                "the script endpoint URL (https://script.google.com/macros/s/.../exec)",
            )?,
            token: env::var("TRIAGE_TOKEN").ok().filter(|t| !t.is_empty()),
        },
        Ok("sheets") => BackendConfig::Sheets {
            spreadsheet_id: require("TRIAGE_SPREADSHEET_ID", "the spreadsheet identifier")?,
            sheet: env::var("TRIAGE_SHEET").unwrap_or_else(|_| "Sheet1".to_string()),
            key_path: PathBuf::from(require(
                "TRIAGE_SERVICE_ACCOUNT_KEY",
                "the path to a service-account key JSON file",
            )?),
        },
        Ok(other) => eyre::bail!(
            "unknown TRIAGE_BACKEND {other:?}; expected \"apps_script\" or \"sheets\""
        ),
    };

    Ok(ServerConfig { bind, backend })
}

fn require(var: &str, what: &str) -> eyre::Result<String> {
    env::var(var)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| eyre::eyre!("missing {var}: set it to {what}"))
}
