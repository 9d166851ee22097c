use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// Callback handed to [`MapSdk::geocode`]: HTTP-style status plus the body.
///
/// `Fn` rather than `FnOnce` because nothing stops an SDK from answering
/// twice; the adapter keeps only the first answer.
pub type GeocodeCallback = Box<dyn Fn(u16, GeocodeResponse) + Send + Sync>;

/// One candidate address; coordinates arrive as strings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddressCandidate {
    #[serde(default)]
    pub road_address: String,
    #[serde(default)]
    pub jibun_address: String,
    pub x: String,
    pub y: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub addresses: Vec<AddressCandidate>,
}

/// Callback-based geocoding capability exposed by the mapping SDK
pub trait MapSdk: Send + Sync {
    /// Start a lookup for `query`; `callback` fires when it completes.
    fn geocode(&self, query: &str, callback: GeocodeCallback);
}

/// Process-wide holder for the lazily loaded SDK.
///
/// Starts empty; whatever loads the SDK calls [`SdkSlot::install`].
#[derive(Clone, Default)]
pub struct SdkSlot {
    inner: Arc<RwLock<Option<Arc<dyn MapSdk>>>>,
}

impl SdkSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loaded(sdk: Arc<dyn MapSdk>) -> Self {
        let slot = Self::new();
        slot.install(sdk);
        slot
    }

    pub fn install(&self, sdk: Arc<dyn MapSdk>) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(sdk);
    }

    pub fn get(&self) -> Option<Arc<dyn MapSdk>> {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.get().is_some()
    }
}
