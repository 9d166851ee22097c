use crate::geocoding::adapter::Geocoder;
use crate::geocoding::error::{GeocodeError, GeocodeOutcome};
use crate::geocoding::readiness::ReadinessFlag;
use crate::geocoding::retry::RetryPolicy;
use crate::models::GeocodeResult;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;
use tracing::debug;

/// Cache identity: the address plus whether the SDK was ready at query time.
///
/// A not-ready lookup caches `None` under `ready == false`, so the flag
/// turning true lands on a fresh key instead of that stale answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub address: String,
    pub ready: bool,
}

type Settled = GeocodeOutcome<Option<GeocodeResult>>;

/// `None` until the lookup for the key finishes
type Entry = watch::Receiver<Option<Settled>>;

type Entries = Arc<Mutex<HashMap<CacheKey, Entry>>>;

/// Cached, de-duplicated, retried geocoding for display code.
///
/// Settled successes stay until [`GeocodeQuery::invalidate`] or
/// [`GeocodeQuery::clear`] removes them; there is no size or age limit,
/// so long-running callers own eviction.
pub struct GeocodeQuery {
    geocoder: Geocoder,
    readiness: ReadinessFlag,
    retry: RetryPolicy,
    entries: Entries,
}

impl GeocodeQuery {
    pub fn new(geocoder: Geocoder, readiness: ReadinessFlag, retry: RetryPolicy) -> Self {
        Self {
            geocoder,
            readiness,
            retry,
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Coordinates for `address`.
    ///
    /// `Ok(None)` means the lookup was skipped: empty address or SDK not
    /// ready. Each cache miss runs on its own task, so every caller for a
    /// key shares one SDK call and dropping a caller only stops its wait.
    /// A failure is handed to everyone waiting on it and then forgotten.
    pub async fn fetch(&self, address: &str) -> Settled {
        let key = CacheKey {
            address: address.to_string(),
            ready: self.readiness.is_ready(),
        };
        let mut entry = self.entry(&key);

        let settled = match entry.wait_for(Option::is_some).await {
            Ok(settled) => (*settled).clone(),
            Err(_) => None,
        };
        // The lookup task went away without answering (panicked).
        settled.unwrap_or(Err(GeocodeError::CallbackDropped))
    }

    /// Cached outcome for `address` under the current readiness, if settled.
    pub fn cached(&self, address: &str) -> Option<Settled> {
        let key = CacheKey {
            address: address.to_string(),
            ready: self.readiness.is_ready(),
        };
        let entries = lock(&self.entries);
        entries.get(&key).and_then(|entry| entry.borrow().clone())
    }

    /// Forget both readiness variants for `address`.
    pub fn invalidate(&self, address: &str) {
        lock(&self.entries).retain(|key, _| key.address != address);
    }

    pub fn clear(&self) {
        lock(&self.entries).clear();
    }

    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entry(&self, key: &CacheKey) -> Entry {
        let mut entries = lock(&self.entries);
        if let Some(entry) = entries.get(key) {
            debug!("Geocode cache hit for {:?}", key);
            return entry.clone();
        }

        let (tx, rx) = watch::channel(None);
        entries.insert(key.clone(), rx.clone());
        drop(entries);

        if key.address.is_empty() || !key.ready {
            debug!("Skipping geocode for {:?}", key);
            tx.send_replace(Some(Ok(None)));
        } else {
            debug!("Geocode cache miss for '{}'", key.address);
            tokio::spawn(lookup(
                self.geocoder.clone(),
                self.retry,
                key.clone(),
                tx,
                self.entries.clone(),
            ));
        }
        rx
    }
}

async fn lookup(
    geocoder: Geocoder,
    retry: RetryPolicy,
    key: CacheKey,
    tx: watch::Sender<Option<Settled>>,
    entries: Entries,
) {
    let outcome = retry
        .run(|| geocoder.geocode(&key.address))
        .await
        .map(Some);

    if outcome.is_err() {
        let mut entries = lock(&entries);
        let ours = entries
            .get(&key)
            .is_some_and(|current| current.same_channel(&tx.subscribe()));
        if ours {
            entries.remove(&key);
        }
    }
    tx.send_replace(Some(outcome));
}

fn lock(entries: &Entries) -> MutexGuard<'_, HashMap<CacheKey, Entry>> {
    entries.lock().unwrap_or_else(|e| e.into_inner())
}
