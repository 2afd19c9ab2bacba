use chrono::NaiveDate;
use my_alarm::alarm::{
    next_alarm, AlarmDraft, AlarmPatch, AlarmStore, AlarmTime, TimeInput, TimeInputOutcome,
    WeekdaySelector, WorkingDays,
};

fn draft(hour: u8, minute: u8, days: [u8; 7], subject: &str) -> AlarmDraft {
    AlarmDraft {
        time: AlarmTime::new(hour, minute).unwrap(),
        is_active: true,
        test_subject: subject.to_string(),
        working_day: WorkingDays::from_numbers(days).unwrap(),
        ..AlarmDraft::default()
    }
}

#[test]
fn test_add_then_remove_leaves_others_alone() {
    let mut store = AlarmStore::with_samples();
    let before = store.as_slice().to_vec();

    let id = store.add(draft(6, 15, [1, 0, 1, 1, 0, 1, 1], "Linear Algebra"));
    assert_eq!(store.len(), before.len() + 1);
    assert_eq!(
        store.get(id).unwrap().working_day.as_numbers(),
        [1, 0, 1, 1, 0, 1, 1]
    );

    let removed = store.remove(id).unwrap();
    assert_eq!(removed.test_subject, "Linear Algebra");
    assert_eq!(store.as_slice(), before.as_slice());
}

#[test]
fn test_drafts_get_distinct_ids() {
    let mut store = AlarmStore::new();
    let first = store.add(AlarmDraft::default());
    let second = store.add(AlarmDraft::default());
    assert_ne!(first, second);

    // Ids are not reused after a removal
    store.remove(second);
    let third = store.add(AlarmDraft::default());
    assert_ne!(third, second);
    assert_ne!(third, first);
}

#[test]
fn test_toggle_active_flips_exactly_one_record() {
    let mut store = AlarmStore::with_samples();
    let before = store.as_slice().to_vec();
    let target = before[1].id;

    assert!(store.toggle_active(target));

    for (old, new) in before.iter().zip(store.iter()) {
        if old.id == target {
            assert_eq!(new.is_active, !old.is_active);
            let mut restored = new.clone();
            restored.is_active = old.is_active;
            assert_eq!(&restored, old);
        } else {
            assert_eq!(new, old);
        }
    }
}

#[test]
fn test_operations_on_unknown_id_change_nothing() {
    let mut store = AlarmStore::with_samples();
    let before = store.as_slice().to_vec();
    let ghost = store.add(AlarmDraft::default());
    store.remove(ghost);

    assert!(store.remove(ghost).is_none());
    assert!(!store.toggle_active(ghost));
    assert!(!store.toggle_smart_wake_up(ghost));
    assert!(!store.edit(ghost, AlarmPatch::default()));
    assert_eq!(store.as_slice(), before.as_slice());
}

#[test]
fn test_editor_inputs_flow_into_store() {
    let mut store = AlarmStore::with_samples();
    let id = store.get_index(0).unwrap().id;

    let mut time = TimeInput::from_time(store.get(id).unwrap().time);
    for c in "0615".chars() {
        time.type_char(c);
    }
    assert!(time.is_dismissed());

    let mut days = WeekdaySelector::from_working_days(WorkingDays::NONE);
    days.toggle(1);
    days.toggle(3);
    // double toggle restores
    days.toggle(5);
    days.toggle(5);

    let patch = AlarmPatch {
        time: Some(time.to_time()),
        working_day: Some(days.to_working_days()),
        ..AlarmPatch::default()
    };
    assert!(store.edit(id, patch));

    let alarm = store.get(id).unwrap();
    assert_eq!(alarm.time.to_string(), "06:15");
    assert_eq!(alarm.working_day.as_numbers(), [0, 1, 0, 1, 0, 0, 0]);
    assert_eq!(alarm.test_subject, "Probability");
}

#[test]
fn test_hour_rejects_25() {
    let mut time = TimeInput::new();
    assert_eq!(time.type_char('2'), TimeInputOutcome::Advanced);
    assert_eq!(time.type_char('5'), TimeInputOutcome::Rejected);
    assert_eq!(time.formatted(), "20:00");
}

#[test]
fn test_next_alarm_skips_inactive_and_picks_earliest() {
    let mut store = AlarmStore::new();
    // 2024-01-01 is a Monday
    let now = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(22, 0, 0)
        .unwrap();

    let weekday = store.add(draft(7, 0, [0, 1, 1, 1, 1, 1, 0], "Statistics"));
    let off = store.add(draft(5, 0, [1, 1, 1, 1, 1, 1, 1], "Calculus"));
    store.toggle_active(off);

    let next = next_alarm(&store, now).unwrap();
    assert_eq!(next.id, weekday);
    assert_eq!(next.describe(now), "9h 0min (smart wake)");
}
