pub mod rating;
pub mod relative_time;
pub mod status;

pub use rating::{summarize, RatingSummary, RatingTier, ReviewHeadline};
pub use relative_time::{format_relative_time, format_relative_time_at, NO_DATE};
pub use status::{status_label, ReservationStatus, UnknownStatusCode};
