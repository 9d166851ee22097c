use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle state of a reservation as reported by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Canceled,
    Declined,
    Completed,
}

impl ReservationStatus {
    pub const ALL: [ReservationStatus; 5] = [
        Self::Pending,
        Self::Confirmed,
        Self::Canceled,
        Self::Declined,
        Self::Completed,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Canceled => "canceled",
            Self::Declined => "declined",
            Self::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "예약 신청",
            Self::Confirmed => "예약 승인",
            Self::Canceled => "예약 취소",
            Self::Declined => "예약 거절",
            Self::Completed => "체험 완료",
        }
    }
}

pub fn status_label(status: ReservationStatus) -> &'static str {
    status.label()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown reservation status: {0}")]
pub struct UnknownStatusCode(pub String);

impl FromStr for ReservationStatus {
    type Err = UnknownStatusCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.code() == s)
            .ok_or_else(|| UnknownStatusCode(s.to_string()))
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_status_has_a_distinct_label() {
        let labels: HashSet<_> = ReservationStatus::ALL
            .iter()
            .map(|status| status_label(*status))
            .collect();
        assert_eq!(labels.len(), 5);
        assert!(labels.iter().all(|label| !label.is_empty()));
    }

    #[test]
    fn codes_round_trip_through_from_str() {
        for status in ReservationStatus::ALL {
            assert_eq!(status.code().parse::<ReservationStatus>(), Ok(status));
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        for code in ["", "Pending", "cancelled", "refunded"] {
            assert_eq!(
                code.parse::<ReservationStatus>(),
                Err(UnknownStatusCode(code.to_string()))
            );
        }
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&ReservationStatus::Declined).unwrap();
        assert_eq!(json, "\"declined\"");
        assert!(serde_json::from_str::<ReservationStatus>("\"expired\"").is_err());
    }
}
