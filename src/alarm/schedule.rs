//! "Next alarm" computation for the banner on the alarm list.
//!
//! Nothing here fires anything; it only answers "when would the next active
//! alarm ring, given the wall clock `now`".

use super::{Alarm, AlarmId, AlarmStore};
use chrono::{Datelike, Duration, NaiveDateTime};

/// Earliest upcoming alarm across a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextAlarm {
    pub id: AlarmId,
    pub at: NaiveDateTime,
    pub smart_wake_up: bool,
}

impl NextAlarm {
    /// Banner text, e.g. `"7h 15min"` or `"7h 15min (smart wake)"`.
    pub fn describe(&self, now: NaiveDateTime) -> String {
        let countdown = format_countdown(self.at - now);
        if self.smart_wake_up {
            format!("{} (smart wake)", countdown)
        } else {
            countdown
        }
    }
}

/// Next time `alarm` rings strictly after `now`, or `None` if it is inactive.
///
/// An alarm with no day flagged is one-shot: today if the time is still
/// ahead, otherwise tomorrow.
pub fn next_occurrence(alarm: &Alarm, now: NaiveDateTime) -> Option<NaiveDateTime> {
    if !alarm.is_active {
        return None;
    }

    let time = alarm.time.to_naive_time();
    let today = now.date();

    if alarm.working_day.is_empty() {
        let candidate = today.and_time(time);
        return Some(if candidate > now {
            candidate
        } else {
            candidate + Duration::days(1)
        });
    }

    // Offset 7 covers "same weekday next week" when today's time has passed.
    (0..=7).find_map(|offset| {
        let date = today + Duration::days(offset);
        let weekday = date.weekday().num_days_from_sunday() as usize;
        let candidate = date.and_time(time);
        (alarm.working_day.is_set(weekday) && candidate > now).then_some(candidate)
    })
}

/// Earliest upcoming ring across all active alarms.
pub fn next_alarm(store: &AlarmStore, now: NaiveDateTime) -> Option<NextAlarm> {
    store
        .iter()
        .filter_map(|alarm| {
            next_occurrence(alarm, now).map(|at| NextAlarm {
                id: alarm.id,
                at,
                smart_wake_up: alarm.smart_wake_up,
            })
        })
        .min_by_key(|next| (next.at, next.id))
}

/// Render a duration as `"7h 15min"`. Minutes below one hour render as
/// `"45min"`; negative durations as `"0min"`.
pub fn format_countdown(duration: Duration) -> String {
    let minutes = duration.num_minutes().max(0);
    let hours = minutes / 60;
    let minutes = minutes % 60;
    if hours > 0 {
        format!("{}h {}min", hours, minutes)
    } else {
        format!("{}min", minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alarm::{AlarmDraft, AlarmTime, WorkingDays};
    use chrono::NaiveDate;

    // 2024-01-03 was a Wednesday.
    fn wednesday(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 3)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn alarm(hour: u8, minute: u8, days: [u8; 7]) -> Alarm {
        let mut store = AlarmStore::new();
        let id = store.add(AlarmDraft {
            time: AlarmTime::new(hour, minute).unwrap(),
            is_active: true,
            working_day: WorkingDays::from_numbers(days).unwrap(),
            ..AlarmDraft::default()
        });
        store.get(id).unwrap().clone()
    }

    #[test]
    fn test_inactive_alarm_never_rings() {
        let mut a = alarm(7, 0, [1; 7]);
        a.is_active = false;
        assert_eq!(next_occurrence(&a, wednesday(6, 0)), None);
    }

    #[test]
    fn test_one_shot_today_or_tomorrow() {
        let a = alarm(7, 0, [0; 7]);
        assert_eq!(next_occurrence(&a, wednesday(6, 0)), Some(wednesday(7, 0)));
        assert_eq!(
            next_occurrence(&a, wednesday(7, 0)),
            Some(wednesday(7, 0) + Duration::days(1))
        );
    }

    #[test]
    fn test_repeating_skips_unflagged_days() {
        // Sunday and Friday only
        let a = alarm(8, 30, [1, 0, 0, 0, 0, 1, 0]);
        let next = next_occurrence(&a, wednesday(9, 0)).unwrap();
        assert_eq!(next, wednesday(8, 30) + Duration::days(2));
    }

    #[test]
    fn test_same_weekday_next_week() {
        // Wednesday only, already past today
        let a = alarm(6, 0, [0, 0, 0, 1, 0, 0, 0]);
        let next = next_occurrence(&a, wednesday(6, 0)).unwrap();
        assert_eq!(next, wednesday(6, 0) + Duration::days(7));
    }

    #[test]
    fn test_next_alarm_picks_earliest_active() {
        let store = AlarmStore::with_samples();
        let next = next_alarm(&store, wednesday(7, 30)).unwrap();
        // Graph Theory at 08:30 runs on Wednesdays
        assert_eq!(next.at, wednesday(8, 30));
        assert!(!next.smart_wake_up);
        assert_eq!(next.describe(wednesday(7, 30)), "1h 0min");
    }

    #[test]
    fn test_next_alarm_empty_store() {
        assert!(next_alarm(&AlarmStore::new(), wednesday(7, 0)).is_none());
    }

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(Duration::minutes(435)), "7h 15min");
        assert_eq!(format_countdown(Duration::minutes(45)), "45min");
        assert_eq!(format_countdown(Duration::minutes(-5)), "0min");
    }

    #[test]
    fn test_smart_wake_suffix() {
        let next = NextAlarm {
            id: AlarmId(1),
            at: wednesday(7, 0),
            smart_wake_up: true,
        };
        assert_eq!(next.describe(wednesday(6, 0)), "1h 0min (smart wake)");
    }
}
