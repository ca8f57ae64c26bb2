//! Service-account authorization for the direct values API backend.
//!
//! Mints an RS256-signed assertion from the service-account key, exchanges
//! it at the token URI for a bearer token, and caches the token until
//! shortly before expiry.

use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::StoreError;

const SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME: Duration = Duration::from_secs(3600);

/// Refresh this long before the token actually expires.
const REFRESH_MARGIN: Duration = Duration::from_secs(60);

/// The fields of a service-account key file this backend needs.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

impl ServiceAccountKey {
    /// Load and parse a key file. An unreadable or malformed file is a
    /// configuration failure, surfaced as [`StoreError::Auth`] for the
    /// startup path to make fatal.
    pub fn from_file(path: &Path) -> Result<Self, StoreError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            StoreError::Auth(format!("failed to read key file {}: {e}", path.display()))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            StoreError::Auth(format!("malformed key file {}: {e}", path.display()))
        })
    }
}

#[derive(Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: u64,
    exp: u64,
}

struct CachedToken {
    token: String,
    expires_at: Instant,
}

pub struct ServiceAccountAuth {
    key: ServiceAccountKey,
    cached: Mutex<Option<CachedToken>>,
}

impl ServiceAccountAuth {
    pub fn new(key: ServiceAccountKey) -> Self {
        Self {
            key,
            cached: Mutex::new(None),
        }
    }

    /// A bearer token for the spreadsheet scope, minted on demand and
    /// reused until [`REFRESH_MARGIN`] before expiry.
    pub async fn bearer(&self, http: &reqwest::Client) -> Result<String, StoreError> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref() {
            if Instant::now() < token.expires_at {
                return Ok(token.token.clone());
            }
        }

        let assertion = self.sign_assertion()?;

        #[derive(Deserialize)]
        struct TokenResponse {
            access_token: String,
            expires_in: u64,
        }

        let response = http
            .post(&self.key.token_uri)
            .form(&[("grant_type", GRANT_TYPE), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(|e| StoreError::Auth(format!("token exchange failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StoreError::Auth(format!("token exchange failed: {e}")))?;

        if !status.is_success() {
            return Err(StoreError::Auth(format!(
                "token endpoint returned HTTP {}: {}",
                status.as_u16(),
                crate::wire::preview(&body)
            )));
        }

        let token: TokenResponse = serde_json::from_str(&body).map_err(|e| {
            StoreError::Auth(format!("token endpoint returned unexpected body: {e}"))
        })?;

        let expires_at =
            Instant::now() + Duration::from_secs(token.expires_in).saturating_sub(REFRESH_MARGIN);
        debug!(expires_in = token.expires_in, "minted service-account token");

        *cached = Some(CachedToken {
            token: token.access_token.clone(),
            expires_at,
        });

        Ok(token.access_token)
    }

    fn sign_assertion(&self) -> Result<String, StoreError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| StoreError::Auth(format!("system clock before epoch: {e}")))?
            .as_secs();

        let claims = Claims {
            iss: &self.key.client_email,
            scope: SCOPE,
            aud: &self.key.token_uri,
            iat: now,
            exp: now + ASSERTION_LIFETIME.as_secs(),
        };

        let encoding_key = EncodingKey::from_rsa_pem(self.key.private_key.as_bytes())
            .map_err(|e| StoreError::Auth(format!("invalid private key: {e}")))?;

        jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)
            .map_err(|e| StoreError::Auth(format!("failed to sign assertion: {e}")))
    }
}
