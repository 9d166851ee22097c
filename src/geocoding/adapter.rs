use crate::geocoding::error::{GeocodeError, GeocodeOutcome};
use crate::geocoding::sdk::{GeocodeResponse, SdkSlot};
use crate::models::GeocodeResult;
use std::sync::Mutex;
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// Turns the SDK's callback into a future and classifies its status
#[derive(Clone)]
pub struct Geocoder {
    sdk: SdkSlot,
}

impl Geocoder {
    pub fn new(sdk: SdkSlot) -> Self {
        Self { sdk }
    }

    pub fn sdk(&self) -> &SdkSlot {
        &self.sdk
    }

    /// Resolve `address` to the first candidate's coordinates.
    pub async fn geocode(&self, address: &str) -> GeocodeOutcome<GeocodeResult> {
        let Some(sdk) = self.sdk.get() else {
            debug!("Map SDK not loaded, cannot geocode '{}'", address);
            return Err(GeocodeError::ServiceUnavailable);
        };

        let (tx, rx) = oneshot::channel();
        let tx = Mutex::new(Some(tx));
        let query = address.to_string();

        sdk.geocode(
            address,
            Box::new(move |status, response| {
                let sender = tx.lock().unwrap_or_else(|e| e.into_inner()).take();
                match sender {
                    Some(sender) => {
                        let _ = sender.send(settle(status, response));
                    }
                    None => warn!("Map SDK answered '{}' more than once, ignoring", query),
                }
            }),
        );

        rx.await.unwrap_or(Err(GeocodeError::CallbackDropped))
    }
}

fn settle(status: u16, response: GeocodeResponse) -> GeocodeOutcome<GeocodeResult> {
    if status != 200 {
        warn!("Geocoder returned status {}", status);
        return Err(GeocodeError::from_status(status));
    }

    let first = response
        .addresses
        .into_iter()
        .next()
        .ok_or(GeocodeError::NoResults)?;

    match (first.x.trim().parse::<f64>(), first.y.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => Ok(GeocodeResult { x, y }),
        _ => Err(GeocodeError::InvalidCoordinates {
            x: first.x,
            y: first.y,
        }),
    }
}
