pub mod adapter;
pub mod error;
pub mod naver;
pub mod query;
pub mod readiness;
pub mod retry;
pub mod sdk;

pub use adapter::Geocoder;
pub use error::GeocodeError;
pub use naver::NaverGeocodeSdk;
pub use query::{CacheKey, GeocodeQuery};
pub use readiness::{ReadinessFlag, ReadinessPoller};
pub use retry::RetryPolicy;
pub use sdk::{AddressCandidate, GeocodeCallback, GeocodeResponse, MapSdk, SdkSlot};
