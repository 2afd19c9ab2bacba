//! Alarm domain model.
//!
//! An [`Alarm`] is one configured wake event: a wall-clock time, the weekdays
//! it repeats on, an active switch, and the quiz that has to be answered to
//! turn it off. Alarms live in an in-memory [`AlarmStore`] and are never
//! persisted.

pub mod schedule;
pub mod store;
pub mod time_input;
pub mod weekdays;

pub use schedule::{format_countdown, next_alarm, next_occurrence, NextAlarm};
pub use store::{AlarmDraft, AlarmPatch, AlarmStore};
pub use time_input::{TimeInput, TimeInputOutcome};
pub use weekdays::{WeekdaySelector, DAY_INITIALS, DAY_NAMES};

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default sound title used by the editor.
pub const DEFAULT_SOUND: &str = "Réveil classique";

/// Default sound volume (0..=100).
pub const DEFAULT_VOLUME: u8 = 50;

/// Identifier of an alarm, unique within one [`AlarmStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlarmId(pub u32);

impl fmt::Display for AlarmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Wall-clock time of an alarm. Always a valid `00:00`..=`23:59`, midnight by default.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct AlarmTime {
    hour: u8,
    minute: u8,
}

impl AlarmTime {
    /// Create a time, rejecting out-of-range components.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ValidationError> {
        if hour > 23 {
            return Err(ValidationError::new("hour", format!("{} is not in 0..=23", hour)));
        }
        if minute > 59 {
            return Err(ValidationError::new("minute", format!("{} is not in 0..=59", minute)));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Convert to a chrono time for schedule arithmetic.
    pub fn to_naive_time(&self) -> chrono::NaiveTime {
        chrono::NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or(chrono::NaiveTime::MIN)
    }
}

impl fmt::Display for AlarmTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for AlarmTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| ValidationError::new("time", format!("'{}' is not HH:MM", s)))?;
        if hour.len() != 2 || minute.len() != 2 {
            return Err(ValidationError::new("time", format!("'{}' is not HH:MM", s)));
        }
        let hour: u8 = hour
            .parse()
            .map_err(|_| ValidationError::new("time", format!("'{}' is not HH:MM", s)))?;
        let minute: u8 = minute
            .parse()
            .map_err(|_| ValidationError::new("time", format!("'{}' is not HH:MM", s)))?;
        Self::new(hour, minute)
    }
}

impl TryFrom<String> for AlarmTime {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AlarmTime> for String {
    fn from(value: AlarmTime) -> Self {
        value.to_string()
    }
}

/// Seven repeat flags, Sunday first.
///
/// Serialized as an array of seven `0`/`1` numbers. Any other shape is
/// rejected on deserialization, so the length invariant always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct WorkingDays([bool; 7]);

impl WorkingDays {
    pub const NONE: Self = Self([false; 7]);
    pub const EVERY_DAY: Self = Self([true; 7]);

    pub fn from_flags(flags: [bool; 7]) -> Self {
        Self(flags)
    }

    /// Build from the numeric form, e.g. `[1, 0, 1, 1, 0, 1, 1]`.
    pub fn from_numbers(numbers: [u8; 7]) -> Result<Self, ValidationError> {
        Self::try_from(numbers.to_vec())
    }

    /// Whether the alarm repeats on `day` (0 = Sunday). Out of range is `false`.
    pub fn is_set(&self, day: usize) -> bool {
        self.0.get(day).copied().unwrap_or(false)
    }

    pub fn set(&mut self, day: usize, on: bool) {
        if let Some(flag) = self.0.get_mut(day) {
            *flag = on;
        }
    }

    /// True when no day is flagged (a one-shot alarm).
    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(|d| *d)
    }

    pub fn flags(&self) -> [bool; 7] {
        self.0
    }

    /// The numeric form used on the wire, e.g. `[1, 0, 1, 1, 0, 1, 1]`.
    pub fn as_numbers(&self) -> [u8; 7] {
        self.0.map(u8::from)
    }
}

impl TryFrom<Vec<u8>> for WorkingDays {
    type Error = ValidationError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        if value.len() != 7 {
            return Err(ValidationError::new(
                "working_day",
                format!("expected 7 entries, got {}", value.len()),
            ));
        }
        let mut flags = [false; 7];
        for (i, v) in value.iter().enumerate() {
            flags[i] = match v {
                0 => false,
                1 => true,
                other => {
                    return Err(ValidationError::new(
                        "working_day",
                        format!("entry {} is {}, expected 0 or 1", i, other),
                    ))
                }
            };
        }
        Ok(Self(flags))
    }
}

impl From<WorkingDays> for Vec<u8> {
    fn from(value: WorkingDays) -> Self {
        value.as_numbers().to_vec()
    }
}

/// Number of quiz questions to answer before the alarm stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum QuestionCount {
    #[default]
    Five,
    Six,
    Seven,
}

impl QuestionCount {
    pub const ALL: [QuestionCount; 3] = [Self::Five, Self::Six, Self::Seven];

    pub fn value(&self) -> u8 {
        match self {
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
        }
    }

    /// Cycle to the next option, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            Self::Five => Self::Six,
            Self::Six => Self::Seven,
            Self::Seven => Self::Five,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Five => Self::Seven,
            Self::Six => Self::Five,
            Self::Seven => Self::Six,
        }
    }
}

impl TryFrom<u8> for QuestionCount {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(Self::Five),
            6 => Ok(Self::Six),
            7 => Ok(Self::Seven),
            other => Err(ValidationError::new(
                "question_count",
                format!("{} is not one of 5, 6, 7", other),
            )),
        }
    }
}

impl From<QuestionCount> for u8 {
    fn from(value: QuestionCount) -> Self {
        value.value()
    }
}

/// One configured wake event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alarm {
    pub id: AlarmId,
    pub time: AlarmTime,
    pub is_active: bool,
    pub test_subject: String,
    pub working_day: WorkingDays,
    pub smart_wake_up: bool,
    #[serde(default)]
    pub question_count: QuestionCount,
    #[serde(default = "default_volume")]
    pub volume: u8,
    #[serde(default = "default_sound")]
    pub sound: String,
}

fn default_volume() -> u8 {
    DEFAULT_VOLUME
}

fn default_sound() -> String {
    DEFAULT_SOUND.to_string()
}

impl Alarm {
    /// Label shown next to the smart wake flag in lists.
    pub fn wake_mode_label(&self) -> &'static str {
        if self.smart_wake_up {
            "Smart Wake"
        } else {
            "Standard"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alarm_time_display_is_zero_padded() {
        assert_eq!(AlarmTime::new(7, 5).unwrap().to_string(), "07:05");
        assert_eq!(AlarmTime::new(23, 59).unwrap().to_string(), "23:59");
    }

    #[test]
    fn test_alarm_time_rejects_out_of_range() {
        assert!(AlarmTime::new(24, 0).is_err());
        assert!(AlarmTime::new(0, 60).is_err());
    }

    #[test]
    fn test_alarm_time_parse() {
        assert_eq!("08:30".parse::<AlarmTime>().unwrap(), AlarmTime::new(8, 30).unwrap());
        assert!("8:30".parse::<AlarmTime>().is_err());
        assert!("25:00".parse::<AlarmTime>().is_err());
        assert!("0830".parse::<AlarmTime>().is_err());
    }

    #[test]
    fn test_working_days_wire_format() {
        let days = WorkingDays::from_numbers([1, 0, 1, 1, 0, 1, 1]).unwrap();
        assert!(days.is_set(0));
        assert!(!days.is_set(1));
        let json = serde_json::to_string(&days).unwrap();
        assert_eq!(json, "[1,0,1,1,0,1,1]");
    }

    #[test]
    fn test_working_days_rejects_bad_shapes() {
        assert!(serde_json::from_str::<WorkingDays>("[1,0,1]").is_err());
        assert!(serde_json::from_str::<WorkingDays>("[1,0,1,1,0,1,2]").is_err());
        assert!(serde_json::from_str::<WorkingDays>("[0,0,0,0,0,0,0,0]").is_err());
    }

    #[test]
    fn test_working_days_out_of_range_index() {
        let mut days = WorkingDays::EVERY_DAY;
        assert!(!days.is_set(7));
        days.set(9, false);
        assert_eq!(days, WorkingDays::EVERY_DAY);
    }

    #[test]
    fn test_question_count_cycles() {
        assert_eq!(QuestionCount::Five.next(), QuestionCount::Six);
        assert_eq!(QuestionCount::Seven.next(), QuestionCount::Five);
        assert_eq!(QuestionCount::Five.prev(), QuestionCount::Seven);
        assert!(QuestionCount::try_from(4).is_err());
    }

    #[test]
    fn test_alarm_json_shape() {
        let alarm = Alarm {
            id: AlarmId(2),
            time: AlarmTime::new(8, 30).unwrap(),
            is_active: true,
            test_subject: "Graph Theory".to_string(),
            working_day: WorkingDays::from_numbers([1, 0, 1, 1, 0, 1, 1]).unwrap(),
            smart_wake_up: false,
            question_count: QuestionCount::Five,
            volume: 50,
            sound: DEFAULT_SOUND.to_string(),
        };
        let value = serde_json::to_value(&alarm).unwrap();
        assert_eq!(value["time"], "08:30");
        assert_eq!(value["isActive"], true);
        assert_eq!(value["testSubject"], "Graph Theory");
        assert_eq!(value["workingDay"], serde_json::json!([1, 0, 1, 1, 0, 1, 1]));
        assert_eq!(value["smartWakeUp"], false);
    }
}
