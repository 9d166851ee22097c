use crate::models::TimeSlot;
use chrono::{Local, NaiveDate, NaiveDateTime};
use tracing::warn;

/// Slots still bookable on `selected`, measured against the local clock.
///
/// `None` stays `None`. Days other than today come back untouched.
pub fn filter_available(
    schedules: Option<&[TimeSlot]>,
    selected: NaiveDate,
) -> Option<Vec<TimeSlot>> {
    filter_available_at(schedules, selected, Local::now().naive_local())
}

/// Same as [`filter_available`] with an explicit local `now`.
///
/// On today's date a slot survives only if its start is strictly after
/// `now`. Slots whose start time does not parse are dropped.
pub fn filter_available_at(
    schedules: Option<&[TimeSlot]>,
    selected: NaiveDate,
    now: NaiveDateTime,
) -> Option<Vec<TimeSlot>> {
    let schedules = schedules?;

    if selected != now.date() {
        return Some(schedules.to_vec());
    }

    let available = schedules
        .iter()
        .filter(|slot| match slot.starts_at() {
            Some(start) => selected.and_time(start) > now,
            None => {
                warn!(
                    "Dropping slot with malformed start time '{}'",
                    slot.start_time
                );
                false
            }
        })
        .cloned()
        .collect();

    Some(available)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn now() -> NaiveDateTime {
        today().and_time(NaiveTime::from_hms_opt(13, 30, 20).unwrap())
    }

    fn slots() -> Vec<TimeSlot> {
        vec![
            TimeSlot::new("15:00", "16:00"),
            TimeSlot::new("09:00", "10:00"),
            TimeSlot::new("13:30", "14:30"),
            TimeSlot::new("13:31", "14:31"),
        ]
    }

    #[test]
    fn absent_schedules_stay_absent() {
        assert_eq!(filter_available_at(None, today(), now()), None);
    }

    #[test]
    fn other_days_pass_through_unchanged() {
        let slots = slots();
        let tomorrow = today().succ_opt().unwrap();
        let yesterday = today().pred_opt().unwrap();

        assert_eq!(
            filter_available_at(Some(slots.as_slice()), tomorrow, now()),
            Some(slots.clone())
        );
        assert_eq!(
            filter_available_at(Some(slots.as_slice()), yesterday, now()),
            Some(slots.clone())
        );
    }

    #[test]
    fn today_keeps_only_future_starts() {
        let kept = filter_available_at(Some(slots().as_slice()), today(), now()).unwrap();
        let starts: Vec<_> = kept.iter().map(|s| s.start_time.as_str()).collect();
        assert_eq!(starts, vec!["15:00", "13:31"]);
    }

    #[test]
    fn slot_starting_this_minute_is_excluded() {
        let on_the_minute = today().and_time(NaiveTime::from_hms_opt(13, 30, 0).unwrap());
        let slots = vec![TimeSlot::new("13:30", "14:30")];
        assert_eq!(
            filter_available_at(Some(slots.as_slice()), today(), on_the_minute),
            Some(vec![])
        );
    }

    #[test]
    fn malformed_start_times_are_dropped_today_only() {
        let slots = vec![TimeSlot::new("soon", "16:00"), TimeSlot::new("18:00", "19:00")];

        let kept = filter_available_at(Some(slots.as_slice()), today(), now()).unwrap();
        assert_eq!(kept, vec![TimeSlot::new("18:00", "19:00")]);

        let tomorrow = today().succ_opt().unwrap();
        assert_eq!(
            filter_available_at(Some(slots.as_slice()), tomorrow, now()),
            Some(slots.clone())
        );
    }

    #[test]
    fn empty_list_stays_empty() {
        assert_eq!(filter_available_at(Some(&[][..]), today(), now()), Some(vec![]));
    }
}
