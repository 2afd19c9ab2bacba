//! In-memory alarm collection shared by the list and editor screens.
//!
//! All operations are synchronous and total. Operations on an id that is not
//! in the store are no-ops and report that through their return value.

use super::{Alarm, AlarmId, AlarmTime, QuestionCount, WorkingDays, DEFAULT_SOUND, DEFAULT_VOLUME};
use tracing::debug;

/// Fields of an alarm that has not been committed yet.
///
/// A draft has no id; the store assigns one in [`AlarmStore::add`], so two
/// editors open on new alarms can never collide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmDraft {
    pub time: AlarmTime,
    pub is_active: bool,
    pub test_subject: String,
    pub working_day: WorkingDays,
    pub smart_wake_up: bool,
    pub question_count: QuestionCount,
    pub volume: u8,
    pub sound: String,
}

impl Default for AlarmDraft {
    /// Placeholder values used when the editor opens from "add".
    fn default() -> Self {
        Self {
            time: AlarmTime::default(),
            is_active: false,
            test_subject: String::new(),
            working_day: WorkingDays::NONE,
            smart_wake_up: true,
            question_count: QuestionCount::Five,
            volume: DEFAULT_VOLUME,
            sound: DEFAULT_SOUND.to_string(),
        }
    }
}

impl From<&Alarm> for AlarmDraft {
    fn from(alarm: &Alarm) -> Self {
        Self {
            time: alarm.time,
            is_active: alarm.is_active,
            test_subject: alarm.test_subject.clone(),
            working_day: alarm.working_day,
            smart_wake_up: alarm.smart_wake_up,
            question_count: alarm.question_count,
            volume: alarm.volume,
            sound: alarm.sound.clone(),
        }
    }
}

/// Partial update for [`AlarmStore::edit`]. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlarmPatch {
    pub time: Option<AlarmTime>,
    pub is_active: Option<bool>,
    pub test_subject: Option<String>,
    pub working_day: Option<WorkingDays>,
    pub smart_wake_up: Option<bool>,
    pub question_count: Option<QuestionCount>,
    pub volume: Option<u8>,
    pub sound: Option<String>,
}

impl From<AlarmDraft> for AlarmPatch {
    fn from(draft: AlarmDraft) -> Self {
        Self {
            time: Some(draft.time),
            is_active: Some(draft.is_active),
            test_subject: Some(draft.test_subject),
            working_day: Some(draft.working_day),
            smart_wake_up: Some(draft.smart_wake_up),
            question_count: Some(draft.question_count),
            volume: Some(draft.volume),
            sound: Some(draft.sound),
        }
    }
}

impl AlarmPatch {
    fn apply(self, alarm: &mut Alarm) {
        if let Some(time) = self.time {
            alarm.time = time;
        }
        if let Some(is_active) = self.is_active {
            alarm.is_active = is_active;
        }
        if let Some(subject) = self.test_subject {
            alarm.test_subject = subject;
        }
        if let Some(days) = self.working_day {
            alarm.working_day = days;
        }
        if let Some(smart) = self.smart_wake_up {
            alarm.smart_wake_up = smart;
        }
        if let Some(count) = self.question_count {
            alarm.question_count = count;
        }
        if let Some(volume) = self.volume {
            alarm.volume = volume.min(100);
        }
        if let Some(sound) = self.sound {
            alarm.sound = sound;
        }
    }
}

/// Ordered list of alarms with store-assigned ids.
#[derive(Debug, Clone)]
pub struct AlarmStore {
    alarms: Vec<Alarm>,
    next_id: u32,
}

impl Default for AlarmStore {
    fn default() -> Self {
        Self {
            alarms: Vec::new(),
            next_id: 1,
        }
    }
}

impl AlarmStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the two demo alarms shown on first launch.
    pub fn with_samples() -> Self {
        let mut store = Self::new();
        store.add(AlarmDraft {
            time: AlarmTime::new(7, 0).unwrap_or_default(),
            is_active: true,
            test_subject: "Probability".to_string(),
            working_day: WorkingDays::EVERY_DAY,
            smart_wake_up: true,
            ..AlarmDraft::default()
        });
        store.add(AlarmDraft {
            time: AlarmTime::new(8, 30).unwrap_or_default(),
            is_active: true,
            test_subject: "Graph Theory".to_string(),
            working_day: WorkingDays::from_flags([true, false, true, true, false, true, true]),
            smart_wake_up: false,
            ..AlarmDraft::default()
        });
        store
    }

    /// Commit a draft as a new alarm and return its freshly assigned id.
    pub fn add(&mut self, draft: AlarmDraft) -> AlarmId {
        let id = AlarmId(self.next_id);
        self.next_id += 1;
        let alarm = Alarm {
            id,
            time: draft.time,
            is_active: draft.is_active,
            test_subject: draft.test_subject,
            working_day: draft.working_day,
            smart_wake_up: draft.smart_wake_up,
            question_count: draft.question_count,
            volume: draft.volume.min(100),
            sound: draft.sound,
        };
        debug!("Added alarm {} at {}", id, alarm.time);
        self.alarms.push(alarm);
        id
    }

    /// Flip `is_active` on the matching alarm. Returns `false` if absent.
    pub fn toggle_active(&mut self, id: AlarmId) -> bool {
        match self.get_mut(id) {
            Some(alarm) => {
                alarm.is_active = !alarm.is_active;
                true
            }
            None => false,
        }
    }

    /// Flip `smart_wake_up` on the matching alarm. Returns `false` if absent.
    pub fn toggle_smart_wake_up(&mut self, id: AlarmId) -> bool {
        match self.get_mut(id) {
            Some(alarm) => {
                alarm.smart_wake_up = !alarm.smart_wake_up;
                true
            }
            None => false,
        }
    }

    /// Remove the matching alarm, returning it if it existed.
    pub fn remove(&mut self, id: AlarmId) -> Option<Alarm> {
        let index = self.alarms.iter().position(|a| a.id == id)?;
        debug!("Removed alarm {}", id);
        Some(self.alarms.remove(index))
    }

    /// Apply `patch` to the matching alarm. Returns `false` if absent.
    pub fn edit(&mut self, id: AlarmId, patch: AlarmPatch) -> bool {
        match self.get_mut(id) {
            Some(alarm) => {
                patch.apply(alarm);
                debug!("Edited alarm {}", id);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: AlarmId) -> Option<&Alarm> {
        self.alarms.iter().find(|a| a.id == id)
    }

    fn get_mut(&mut self, id: AlarmId) -> Option<&mut Alarm> {
        self.alarms.iter_mut().find(|a| a.id == id)
    }

    /// Alarm at a list position (as rendered).
    pub fn get_index(&self, index: usize) -> Option<&Alarm> {
        self.alarms.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alarm> {
        self.alarms.iter()
    }

    pub fn as_slice(&self) -> &[Alarm] {
        &self.alarms
    }

    pub fn len(&self) -> usize {
        self.alarms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alarms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_starts_at_midnight() {
        let draft = AlarmDraft::default();
        assert_eq!(draft.time.to_string(), "00:00");
        assert!(!draft.is_active);
    }

    #[test]
    fn test_samples() {
        let store = AlarmStore::with_samples();
        assert_eq!(store.len(), 2);
        let first = store.get_index(0).unwrap();
        assert_eq!(first.time.to_string(), "07:00");
        assert_eq!(first.test_subject, "Probability");
        assert!(first.smart_wake_up);
        let second = store.get_index(1).unwrap();
        assert_eq!(second.working_day.as_numbers(), [1, 0, 1, 1, 0, 1, 1]);
        assert!(!second.smart_wake_up);
    }

    #[test]
    fn test_add_assigns_fresh_ids() {
        let mut store = AlarmStore::new();
        let a = store.add(AlarmDraft::default());
        let b = store.add(AlarmDraft::default());
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut store = AlarmStore::new();
        let a = store.add(AlarmDraft::default());
        store.remove(a);
        let b = store.add(AlarmDraft::default());
        assert_ne!(a, b);
    }

    #[test]
    fn test_toggle_active_only_touches_target() {
        let mut store = AlarmStore::with_samples();
        let before = store.as_slice().to_vec();
        let id = before[1].id;
        assert!(store.toggle_active(id));

        let after = store.as_slice();
        assert_eq!(after[0], before[0]);
        let mut expected = before[1].clone();
        expected.is_active = !expected.is_active;
        assert_eq!(after[1], expected);
    }

    #[test]
    fn test_toggle_smart_wake_up() {
        let mut store = AlarmStore::with_samples();
        let id = store.get_index(0).unwrap().id;
        assert!(store.toggle_smart_wake_up(id));
        assert!(!store.get(id).unwrap().smart_wake_up);
    }

    #[test]
    fn test_missing_id_is_noop() {
        let mut store = AlarmStore::with_samples();
        let before = store.as_slice().to_vec();
        let missing = AlarmId(999);
        assert!(!store.toggle_active(missing));
        assert!(!store.toggle_smart_wake_up(missing));
        assert!(store.remove(missing).is_none());
        assert!(!store.edit(missing, AlarmPatch::default()));
        assert_eq!(store.as_slice(), before.as_slice());
    }

    #[test]
    fn test_edit_applies_only_patched_fields() {
        let mut store = AlarmStore::with_samples();
        let id = store.get_index(0).unwrap().id;
        let patch = AlarmPatch {
            test_subject: Some("Linear Algebra".to_string()),
            volume: Some(250),
            ..AlarmPatch::default()
        };
        assert!(store.edit(id, patch));
        let alarm = store.get(id).unwrap();
        assert_eq!(alarm.test_subject, "Linear Algebra");
        assert_eq!(alarm.volume, 100);
        assert_eq!(alarm.time.to_string(), "07:00");
    }
}
