//! triage-store
//!
//! The Patient Record Store boundary: one [`store::RecordStore`] contract,
//! two backends — the deployed script endpoint in front of the spreadsheet
//! ([`apps_script::AppsScriptStore`]) and the spreadsheet values API called
//! directly ([`sheets::SheetsStore`]).

pub mod apps_script;
pub mod auth;
pub mod error;
mod http;
pub mod sheets;
pub mod store;
pub mod wire;
