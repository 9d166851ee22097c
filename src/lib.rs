//! Read-side helpers for an activity booking front end: relative times,
//! rating tiers, reservation labels, today's open slots and cached
//! address geocoding.

pub mod api;
pub mod config;
pub mod display;
pub mod geocoding;
pub mod models;
pub mod schedule;

pub use config::AppConfig;
pub use display::{format_relative_time, status_label, summarize, ReservationStatus};
pub use geocoding::{GeocodeError, GeocodeQuery, Geocoder};
pub use models::{GeocodeResult, TimeSlot};
pub use schedule::filter_available;
