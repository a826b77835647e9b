use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use jsonwebtoken::{Algorithm, DecodingKey, Header, Validation, decode, decode_header};
use once_cell::sync::Lazy;
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::Deserialize;

use business::domain::shared::value_objects::UserId;

use crate::config::firebase_config::FirebaseConfig;

const GOOGLE_CERTS_URL: &str =
    "https://www.googleapis.com/robot/v1/metadata/x509/securetoken@system.gserviceaccount.com";
const CACHE_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, Deserialize)]
struct FirebaseClaims {
    sub: String,
    email: Option<String>,
    name: Option<String>,
    picture: Option<String>,
}

/// Identity of the caller, taken from verified token claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub uid: UserId,
    pub email: Option<String>,
    pub name: Option<String>,
    pub picture: Option<String>,
}

impl From<FirebaseClaims> for AuthenticatedUser {
    fn from(claims: FirebaseClaims) -> Self {
        Self {
            uid: UserId::new(claims.sub),
            email: claims.email,
            name: claims.name,
            picture: claims.picture,
        }
    }
}

struct CachedCerts {
    keys: HashMap<String, DecodingKey>,
    fetched_at: Instant,
}

static CERTS_CACHE: Lazy<RwLock<Option<CachedCerts>>> = Lazy::new(|| RwLock::new(None));

async fn fetch_google_certs() -> Result<HashMap<String, DecodingKey>, String> {
    let response: HashMap<String, String> = reqwest::get(GOOGLE_CERTS_URL)
        .await
        .map_err(|e| format!("auth.certs_fetch_failed: {e}"))?
        .json()
        .await
        .map_err(|e| format!("auth.certs_parse_failed: {e}"))?;

    response
        .into_iter()
        .map(|(kid, pem)| {
            DecodingKey::from_rsa_pem(pem.as_bytes())
                .map(|key| (kid, key))
                .map_err(|e| format!("auth.cert_decode_failed: {e}"))
        })
        .collect()
}

fn certs_are_fresh() -> Result<bool, String> {
    let cache = CERTS_CACHE
        .read()
        .map_err(|e| format!("auth.cache_read_failed: {e}"))?;
    Ok(cache
        .as_ref()
        .is_some_and(|cached| cached.fetched_at.elapsed() < CACHE_TTL))
}

async fn refresh_certs_if_stale() -> Result<(), String> {
    if certs_are_fresh()? {
        return Ok(());
    }

    let keys = fetch_google_certs().await?;
    let mut cache = CERTS_CACHE
        .write()
        .map_err(|e| format!("auth.cache_write_failed: {e}"))?;
    *cache = Some(CachedCerts {
        keys,
        fetched_at: Instant::now(),
    });
    Ok(())
}

fn verify_token(token: &str, project_id: &str) -> Result<AuthenticatedUser, String> {
    let header: Header =
        decode_header(token).map_err(|e| format!("auth.invalid_token_header: {e}"))?;
    let kid = header.kid.ok_or("auth.missing_kid")?;

    let cache = CERTS_CACHE
        .read()
        .map_err(|e| format!("auth.cache_read_failed: {e}"))?;
    let cached = cache.as_ref().ok_or("auth.certs_not_loaded")?;
    let decoding_key = cached.keys.get(&kid).ok_or("auth.unknown_kid")?;

    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&[project_id]);
    validation.set_issuer(&[format!("https://securetoken.google.com/{project_id}")]);
    validation.validate_exp = true;

    let token_data = decode::<FirebaseClaims>(token, decoding_key, &validation)
        .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

    Ok(token_data.claims.into())
}

/// Firebase ID token sent as a bearer token.
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    bearer_format = "JWT",
    checker = "firebase_bearer_checker"
)]
pub struct FirebaseBearer(pub AuthenticatedUser);

async fn firebase_bearer_checker(
    _req: &Request,
    bearer: poem_openapi::auth::Bearer,
) -> Option<AuthenticatedUser> {
    let config = match FirebaseConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Firebase auth is not configured: {e}");
            return None;
        }
    };

    if let Err(e) = refresh_certs_if_stale().await {
        tracing::error!("Failed to fetch Google certs: {e}");
        return None;
    }

    match verify_token(&bearer.token, &config.project_id) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!("Firebase auth failed: {e}");
            None
        }
    }
}
