//! Public key set used to verify bearer tokens.
//!
//! The cache holds an immutable [`KeySet`] snapshot. Readers clone the `Arc`
//! under a short read lock; a refresh builds a new set and swaps it in, so a
//! reader never observes a half-updated map. Refreshes are serialised so a
//! burst of misses results in a single fetch.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::DecodingKey;
use parking_lot::RwLock;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Floor between refreshes triggered by an unknown `kid`.
pub const DEFAULT_MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Error, Debug, Clone)]
pub enum KeySetError {
    #[error("key set client could not be built: {0}")]
    Client(String),
    #[error("key set request failed: {0}")]
    Fetch(String),
    #[error("key set endpoint answered {0}")]
    Status(u16),
    #[error("key set body could not be decoded: {0}")]
    Decode(String),
}

/// Where a key set comes from.
#[async_trait]
pub trait KeySource: Send + Sync {
    async fn fetch(&self) -> Result<JwkSet, KeySetError>;
}

/// Fetches the issuer's published JWKS document over HTTPS.
pub struct RemoteKeySource {
    client: reqwest::Client,
    url: String,
}

impl RemoteKeySource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, KeySetError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| KeySetError::Client(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl KeySource for RemoteKeySource {
    async fn fetch(&self) -> Result<JwkSet, KeySetError> {
        debug!(url = %self.url, "fetching key set");
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| KeySetError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(KeySetError::Status(status.as_u16()));
        }

        response
            .json::<JwkSet>()
            .await
            .map_err(|e| KeySetError::Decode(e.to_string()))
    }
}

/// A fixed key set, for deployments that pin keys and for tests.
pub struct StaticKeySource(JwkSet);

impl StaticKeySource {
    pub fn new(set: JwkSet) -> Self {
        Self(set)
    }
}

#[async_trait]
impl KeySource for StaticKeySource {
    async fn fetch(&self) -> Result<JwkSet, KeySetError> {
        Ok(self.0.clone())
    }
}

/// Key id to verification key.
#[derive(Clone, Default)]
pub struct KeySet {
    keys: HashMap<String, DecodingKey>,
}

impl KeySet {
    /// Build from a JWKS document. Keys without a `kid` or that cannot be
    /// turned into a verification key are skipped.
    pub fn from_jwks(set: &JwkSet) -> Self {
        let mut keys = HashMap::with_capacity(set.keys.len());
        for jwk in &set.keys {
            let Some(kid) = jwk.common.key_id.clone() else {
                warn!("skipping key without kid");
                continue;
            };
            match DecodingKey::from_jwk(jwk) {
                Ok(key) => {
                    keys.insert(kid, key);
                }
                Err(e) => warn!(kid = %kid, error = %e, "skipping unusable key"),
            }
        }
        Self { keys }
    }

    pub fn get(&self, kid: &str) -> Option<&DecodingKey> {
        self.keys.get(kid)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[derive(Clone)]
struct Snapshot {
    keys: Arc<KeySet>,
    fetched_at: Instant,
}

#[derive(Clone)]
struct FailedFetch {
    error: KeySetError,
    at: Instant,
}

/// Process-wide key set cache with a TTL.
///
/// A snapshot older than `ttl` is refetched on next use. An unknown `kid`
/// also forces a refetch (key rotation), at most once per
/// `min_refresh_interval`. When a refetch fails the previous snapshot keeps
/// serving, and no further fetch is attempted until `min_refresh_interval`
/// has passed since the failure.
pub struct KeySetCache {
    source: Arc<dyn KeySource>,
    ttl: Duration,
    min_refresh_interval: Duration,
    current: RwLock<Option<Snapshot>>,
    last_failure: RwLock<Option<FailedFetch>>,
    refresh_lock: Mutex<()>,
}

impl KeySetCache {
    pub fn new(source: Arc<dyn KeySource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            min_refresh_interval: DEFAULT_MIN_REFRESH_INTERVAL.min(ttl),
            current: RwLock::new(None),
            last_failure: RwLock::new(None),
            refresh_lock: Mutex::new(()),
        }
    }

    pub fn with_min_refresh_interval(mut self, interval: Duration) -> Self {
        self.min_refresh_interval = interval;
        self
    }

    /// Look up the verification key for `kid`, fetching if needed.
    ///
    /// `Ok(None)` means the key set loaded but does not contain `kid`.
    pub async fn decoding_key(&self, kid: &str) -> Result<Option<DecodingKey>, KeySetError> {
        let requested_at = Instant::now();

        if let Some(snapshot) = self.snapshot() {
            let age = requested_at.saturating_duration_since(snapshot.fetched_at);
            if age < self.ttl {
                if let Some(key) = snapshot.keys.get(kid) {
                    return Ok(Some(key.clone()));
                }
                if age < self.min_refresh_interval {
                    debug!(kid = %kid, "unknown kid; refresh throttled");
                    return Ok(None);
                }
            }
        }

        if let Some(failure) = self.last_failure() {
            if requested_at.saturating_duration_since(failure.at) < self.min_refresh_interval {
                debug!(kid = %kid, "key set fetch backing off after failure");
                let keys = self.fall_back(failure.error)?;
                return Ok(keys.get(kid).cloned());
            }
        }

        let keys = self.refresh(requested_at).await?;
        Ok(keys.get(kid).cloned())
    }

    /// Drop the current snapshot so the next lookup refetches.
    pub fn invalidate(&self) {
        *self.current.write() = None;
        *self.last_failure.write() = None;
        info!("key set invalidated");
    }

    fn snapshot(&self) -> Option<Snapshot> {
        self.current.read().clone()
    }

    fn last_failure(&self) -> Option<FailedFetch> {
        self.last_failure.read().clone()
    }

    /// Stale keys when there are any, otherwise the fetch error.
    fn fall_back(&self, error: KeySetError) -> Result<Arc<KeySet>, KeySetError> {
        match self.snapshot() {
            Some(stale) => Ok(stale.keys),
            None => Err(error),
        }
    }

    async fn refresh(&self, requested_at: Instant) -> Result<Arc<KeySet>, KeySetError> {
        let _guard = self.refresh_lock.lock().await;

        // Someone else refreshed while we waited for the lock.
        if let Some(snapshot) = self.snapshot() {
            if snapshot.fetched_at > requested_at {
                return Ok(snapshot.keys);
            }
        }

        // Someone else's fetch failed while we waited.
        if let Some(failure) = self.last_failure() {
            if failure.at > requested_at {
                return self.fall_back(failure.error);
            }
        }

        match self.source.fetch().await {
            Ok(jwks) => {
                let keys = Arc::new(KeySet::from_jwks(&jwks));
                info!(keys = keys.len(), "key set refreshed");
                *self.current.write() = Some(Snapshot {
                    keys: Arc::clone(&keys),
                    fetched_at: Instant::now(),
                });
                *self.last_failure.write() = None;
                Ok(keys)
            }
            Err(err) => {
                *self.last_failure.write() = Some(FailedFetch {
                    error: err.clone(),
                    at: Instant::now(),
                });
                if self.snapshot().is_some() {
                    warn!(error = %err, "key set refresh failed; serving previous snapshot");
                } else {
                    warn!(error = %err, "key set unavailable");
                }
                self.fall_back(err)
            }
        }
    }
}
