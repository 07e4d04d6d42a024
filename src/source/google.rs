use super::Grid;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SHEETS_API: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime of a signed assertion; Google caps it at one hour.
const ASSERTION_TTL_SECS: i64 = 3600;

/// Auth file contents. A service-account key (`client_email` +
/// `private_key`) wins; a bare `access_token` or `api_key` is accepted too.
#[derive(Debug, Deserialize)]
struct Credentials {
    client_email: Option<String>,
    private_key: Option<String>,
    private_key_id: Option<String>,
    token_uri: Option<String>,
    access_token: Option<String>,
    api_key: Option<String>,
}

/// How a values request is authorized.
#[derive(Debug)]
enum Auth {
    Bearer(String),
    ApiKey(String),
}

/// Key material of a Google service account, as downloaded from the console.
#[derive(Debug, Clone)]
pub struct ServiceAccountKey {
    client_email: String,
    private_key: String,
    private_key_id: Option<String>,
    token_uri: String,
}

#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl ServiceAccountKey {
    /// Read a service-account key file.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let mut creds = read_credentials(path)?;
        Self::take_from(&mut creds).ok_or_else(|| {
            AppError::Fetch(format!("{} is not a service account key", path.display()))
        })
    }

    fn take_from(creds: &mut Credentials) -> Option<Self> {
        if creds.client_email.is_none() || creds.private_key.is_none() {
            return None;
        }
        Some(Self {
            client_email: creds.client_email.take()?,
            private_key: creds.private_key.take()?,
            private_key_id: creds.private_key_id.take(),
            token_uri: creds
                .token_uri
                .take()
                .unwrap_or_else(|| DEFAULT_TOKEN_URI.to_string()),
        })
    }

    /// Signed RS256 assertion for the read-only Sheets scope, issued at `now`.
    pub fn assertion_at(&self, now: DateTime<Utc>) -> AppResult<String> {
        let key = EncodingKey::from_rsa_pem(self.private_key.as_bytes())
            .map_err(|e| AppError::Fetch(format!("invalid private_key: {e}")))?;

        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.private_key_id.clone();

        let claims = Claims {
            iss: &self.client_email,
            scope: SHEETS_SCOPE,
            aud: &self.token_uri,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ASSERTION_TTL_SECS)).timestamp(),
        };

        jsonwebtoken::encode(&header, &claims, &key)
            .map_err(|e| AppError::Fetch(format!("cannot sign token request: {e}")))
    }

    /// Trade a fresh assertion for an OAuth access token.
    pub fn access_token(&self, client: &reqwest::blocking::Client) -> AppResult<String> {
        let assertion = self.assertion_at(Utc::now())?;
        log::debug!("Requesting access token for {}", self.client_email);

        let response = client
            .post(&self.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                AppError::Fetch(format!("token request to {} failed: {e}", self.token_uri))
            })?;
        let token: TokenResponse = response
            .json()
            .map_err(|e| AppError::Fetch(format!("unexpected token response: {e}")))?;

        Ok(token.access_token)
    }
}

fn read_credentials(path: &Path) -> AppResult<Credentials> {
    log::info!("Loading Google credentials from {}", path.display());
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Fetch(format!("cannot read {}: {e}", path.display())))?;
    serde_json::from_str(&raw)
        .map_err(|e| AppError::Fetch(format!("invalid credentials file: {e}")))
}

/// `values.get` response; `values` is omitted for an empty worksheet.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Grid,
}

/// Google Sheets spreadsheet read through the v4 values API.
#[derive(Debug, Clone)]
pub struct GoogleSheetsSource {
    key: String,
    auth_file: PathBuf,
}

impl GoogleSheetsSource {
    pub fn new(key: &str, auth_file: impl Into<PathBuf>) -> Self {
        Self {
            key: key.to_string(),
            auth_file: auth_file.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// `values.get` endpoint for `worksheet`; every path part is percent-encoded.
    pub fn values_url(&self, worksheet: &str) -> AppResult<Url> {
        let mut url = Url::parse(SHEETS_API)
            .map_err(|e| AppError::Fetch(format!("invalid API url: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| AppError::Fetch(format!("{SHEETS_API} cannot take a path")))?
            .push(&self.key)
            .push("values")
            .push(worksheet);
        Ok(url)
    }

    fn authorize(&self, client: &reqwest::blocking::Client) -> AppResult<Auth> {
        let mut creds = read_credentials(&self.auth_file)?;

        if let Some(account) = ServiceAccountKey::take_from(&mut creds) {
            return account.access_token(client).map(Auth::Bearer);
        }
        if let Some(token) = creds.access_token {
            return Ok(Auth::Bearer(token));
        }
        if let Some(api_key) = creds.api_key {
            return Ok(Auth::ApiKey(api_key));
        }
        Err(AppError::Fetch(format!(
            "{} has no service account key, access_token or api_key",
            self.auth_file.display()
        )))
    }

    pub fn fetch(&self, worksheet: &str) -> AppResult<Grid> {
        let url = self.values_url(worksheet)?;
        let client = reqwest::blocking::Client::new();
        let auth = self.authorize(&client)?;

        let mut request = client
            .get(url)
            .query(&[("valueRenderOption", "FORMATTED_VALUE")]);
        request = match &auth {
            Auth::Bearer(token) => request.bearer_auth(token),
            Auth::ApiKey(api_key) => request.query(&[("key", api_key.as_str())]),
        };

        let response = request
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| AppError::Fetch(e.to_string()))?;
        let range: ValueRange = response
            .json()
            .map_err(|e| AppError::Fetch(format!("unexpected response: {e}")))?;

        Ok(range.values)
    }
}
