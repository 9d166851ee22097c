use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::display::ReservationStatus;

/// A bookable interval within a single day, times as `"HH:MM"`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub start_time: String,
    pub end_time: String,
}

impl TimeSlot {
    pub fn new(start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            id: None,
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// Parse `start_time` as `HH:MM` or `HH:MM:SS`, two digits per field.
    /// Seconds are validated and then dropped.
    pub fn starts_at(&self) -> Option<NaiveTime> {
        parse_hour_minute(&self.start_time)
    }
}

fn parse_hour_minute(value: &str) -> Option<NaiveTime> {
    let fields: Vec<u32> = value
        .trim()
        .split(':')
        .map(two_digits)
        .collect::<Option<_>>()?;

    match fields[..] {
        [hours, minutes] => NaiveTime::from_hms_opt(hours, minutes, 0),
        [hours, minutes, seconds] if seconds < 60 => NaiveTime::from_hms_opt(hours, minutes, 0),
        _ => None,
    }
}

fn two_digits(field: &str) -> Option<u32> {
    if field.len() != 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Slots offered on one calendar day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailySchedule {
    pub date: NaiveDate,
    pub times: Vec<TimeSlot>,
}

/// Activity as returned by the listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: i64,
    pub user_id: Option<i64>,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: i64,
    pub address: String,
    pub banner_image_url: Option<String>,
    pub rating: f64,
    pub review_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubImage {
    pub id: i64,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Schedule entry attached to an activity detail, one slot per row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySchedule {
    pub id: i64,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDetail {
    #[serde(flatten)]
    pub activity: Activity,
    #[serde(default)]
    pub sub_images: Vec<SubImage>,
    #[serde(default)]
    pub schedules: Vec<ActivitySchedule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPage {
    pub cursor_id: Option<i64>,
    pub total_count: u64,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reviewer {
    pub id: i64,
    pub nickname: String,
    pub profile_image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub user: Reviewer,
    pub activity_id: i64,
    pub rating: f64,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPage {
    pub average_rating: f64,
    pub total_count: u64,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservedActivity {
    pub id: i64,
    pub title: String,
    pub banner_image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    pub activity: ReservedActivity,
    pub schedule_id: i64,
    pub status: ReservationStatus,
    pub review_submitted: bool,
    pub total_price: i64,
    pub head_count: u32,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationPage {
    pub cursor_id: Option<i64>,
    pub total_count: u64,
    pub reservations: Vec<Reservation>,
}

/// Projected map coordinates for one address
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeocodeResult {
    pub x: f64,
    pub y: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_start_parses_with_or_without_seconds() {
        assert_eq!(
            TimeSlot::new("09:30", "10:30").starts_at(),
            NaiveTime::from_hms_opt(9, 30, 0)
        );
        assert_eq!(
            TimeSlot::new("14:05:59", "15:00").starts_at(),
            NaiveTime::from_hms_opt(14, 5, 0)
        );
    }

    #[test]
    fn slot_start_rejects_garbage() {
        assert_eq!(TimeSlot::new("noon", "13:00").starts_at(), None);
        assert_eq!(TimeSlot::new("25:00", "26:00").starts_at(), None);
        assert_eq!(TimeSlot::new("12", "13:00").starts_at(), None);
    }

    #[test]
    fn slot_start_is_strict_about_field_shape() {
        for start in ["+9:30", "9:30", "09:3", "14:05:zz", "14:05:60", "1:2:3:4", "14:05:00:00"] {
            assert_eq!(TimeSlot::new(start, "23:00").starts_at(), None, "{start:?}");
        }
        assert_eq!(
            TimeSlot::new(" 08:15 ", "09:00").starts_at(),
            NaiveTime::from_hms_opt(8, 15, 0)
        );
    }

    #[test]
    fn available_schedule_payload_deserializes() {
        let payload = serde_json::json!([
            {
                "date": "2026-10-18",
                "times": [
                    { "id": 7, "startTime": "12:00", "endTime": "13:00" },
                    { "id": 8, "startTime": "15:00", "endTime": "16:00" }
                ]
            }
        ]);

        let days: Vec<DailySchedule> = serde_json::from_value(payload).unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].times[1].id, Some(8));
        assert_eq!(days[0].times[1].start_time, "15:00");
    }

    #[test]
    fn reservation_status_deserializes_from_code() {
        let payload = serde_json::json!({
            "id": 1,
            "activity": { "id": 3, "title": "Surfing", "bannerImageUrl": null },
            "scheduleId": 9,
            "status": "confirmed",
            "reviewSubmitted": false,
            "totalPrice": 20000,
            "headCount": 2,
            "date": "2026-10-20",
            "startTime": "10:00",
            "endTime": "11:00",
            "createdAt": "2026-10-01T09:00:00Z",
            "updatedAt": "2026-10-01T09:00:00Z"
        });

        let reservation: Reservation = serde_json::from_value(payload).unwrap();
        assert_eq!(reservation.status, ReservationStatus::Confirmed);
        assert_eq!(reservation.head_count, 2);
    }
}
