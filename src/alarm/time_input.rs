//! Keystroke-level entry of an `HH:MM` alarm time.
//!
//! The editor shows four one-digit fields (H1 H2 : M1 M2). Each keystroke is
//! fed to [`TimeInput::input`] with the slot it was typed into; the validator
//! decides whether the digit is kept and where focus goes next.

use super::AlarmTime;

/// Number of digit slots (H1, H2, M1, M2).
pub const SLOT_COUNT: usize = 4;

/// Result of feeding one keystroke into a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeInputOutcome {
    /// Empty input: slot reset to `0`, focus moved back (if there was a slot before).
    Cleared,
    /// Digit accepted, focus moved to the next slot.
    Advanced,
    /// Digit accepted in the last slot, input dismissed.
    Dismissed,
    /// Input refused. Digits and focus are unchanged.
    Rejected,
}

/// Four digit slots plus the focused slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeInput {
    digits: [u8; SLOT_COUNT],
    /// `None` once input has been dismissed.
    focus: Option<usize>,
}

impl Default for TimeInput {
    fn default() -> Self {
        Self {
            digits: [0; SLOT_COUNT],
            focus: Some(0),
        }
    }
}

impl TimeInput {
    /// `00:00` with focus on the first slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill from an existing alarm time.
    pub fn from_time(time: AlarmTime) -> Self {
        Self {
            digits: [time.hour() / 10, time.hour() % 10, time.minute() / 10, time.minute() % 10],
            focus: Some(0),
        }
    }

    /// Feed `text` typed into `slot`.
    pub fn input(&mut self, slot: usize, text: &str) -> TimeInputOutcome {
        if slot >= SLOT_COUNT {
            return TimeInputOutcome::Rejected;
        }

        if text.is_empty() {
            self.digits[slot] = 0;
            if slot > 0 {
                self.focus = Some(slot - 1);
            }
            return TimeInputOutcome::Cleared;
        }

        let mut chars = text.chars();
        let digit = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_digit() => c as u8 - b'0',
            _ => return TimeInputOutcome::Rejected,
        };

        let mut candidate = self.digits;
        candidate[slot] = digit;
        // 2 in the tens place starts a new hour in the 20s
        if slot == 0 && digit == 2 && candidate[1] > 3 {
            candidate[1] = 0;
        }
        if !Self::is_valid(&candidate) {
            return TimeInputOutcome::Rejected;
        }

        self.digits = candidate;
        if slot + 1 < SLOT_COUNT {
            self.focus = Some(slot + 1);
            TimeInputOutcome::Advanced
        } else {
            self.focus = None;
            TimeInputOutcome::Dismissed
        }
    }

    /// Feed a single character into the focused slot.
    ///
    /// When input is dismissed the first slot is focused again first.
    pub fn type_char(&mut self, c: char) -> TimeInputOutcome {
        let slot = self.focus.unwrap_or(0);
        if self.focus.is_none() {
            self.focus = Some(0);
        }
        let mut buf = [0u8; 4];
        self.input(slot, c.encode_utf8(&mut buf))
    }

    /// Clear the focused slot (backspace).
    pub fn clear_focused(&mut self) -> TimeInputOutcome {
        let slot = self.focus.unwrap_or(SLOT_COUNT - 1);
        if self.focus.is_none() {
            self.focus = Some(slot);
        }
        self.input(slot, "")
    }

    // H1 <= 2, hour <= 23, M1 <= 5. M2 is unconstrained.
    fn is_valid(digits: &[u8; SLOT_COUNT]) -> bool {
        let [h1, h2, m1, _] = *digits;
        h1 <= 2 && !(h1 == 2 && h2 > 3) && m1 <= 5
    }

    pub fn digits(&self) -> [u8; SLOT_COUNT] {
        self.digits
    }

    pub fn focused_slot(&self) -> Option<usize> {
        self.focus
    }

    /// Focus a slot directly (out of range is ignored).
    pub fn focus(&mut self, slot: usize) {
        if slot < SLOT_COUNT {
            self.focus = Some(slot);
        }
    }

    pub fn focus_next(&mut self) {
        let next = self.focus.map_or(0, |s| (s + 1).min(SLOT_COUNT - 1));
        self.focus = Some(next);
    }

    pub fn focus_prev(&mut self) {
        let prev = self.focus.map_or(SLOT_COUNT - 1, |s| s.saturating_sub(1));
        self.focus = Some(prev);
    }

    pub fn is_dismissed(&self) -> bool {
        self.focus.is_none()
    }

    /// The four digits without separator, e.g. `"0730"`.
    pub fn raw(&self) -> String {
        self.digits.iter().map(|d| char::from(b'0' + d)).collect()
    }

    /// Display form, always exactly `HH:MM`.
    pub fn formatted(&self) -> String {
        let [h1, h2, m1, m2] = self.digits;
        format!("{}{}:{}{}", h1, h2, m1, m2)
    }

    /// The entered time. Always valid because every accepted keystroke is.
    pub fn to_time(&self) -> AlarmTime {
        let [h1, h2, m1, m2] = self.digits;
        AlarmTime::new(h1 * 10 + h2, m1 * 10 + m2).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_then_five_rejects_second_hour_digit() {
        let mut input = TimeInput::new();
        assert_eq!(input.input(0, "2"), TimeInputOutcome::Advanced);
        assert_eq!(input.raw(), "2000");
        assert_eq!(input.input(1, "5"), TimeInputOutcome::Rejected);
        assert_eq!(input.raw(), "2000");
        assert_eq!(input.formatted(), "20:00");
        assert_eq!(input.focused_slot(), Some(1));
    }

    #[test]
    fn test_first_hour_digit_above_two_rejected() {
        let mut input = TimeInput::new();
        assert_eq!(input.input(0, "3"), TimeInputOutcome::Rejected);
        assert_eq!(input.focused_slot(), Some(0));
        assert_eq!(input.raw(), "0000");
    }

    #[test]
    fn test_first_minute_digit_above_five_rejected() {
        let mut input = TimeInput::new();
        input.focus(2);
        assert_eq!(input.input(2, "6"), TimeInputOutcome::Rejected);
        assert_eq!(input.input(2, "5"), TimeInputOutcome::Advanced);
        assert_eq!(input.focused_slot(), Some(3));
    }

    #[test]
    fn test_second_minute_digit_unconstrained() {
        let mut input = TimeInput::new();
        assert_eq!(input.input(3, "9"), TimeInputOutcome::Dismissed);
        assert_eq!(input.formatted(), "00:09");
        assert!(input.is_dismissed());
    }

    #[test]
    fn test_raising_first_digit_to_two_resets_second() {
        let mut input = TimeInput::new();
        input.input(0, "1");
        input.input(1, "9");
        assert_eq!(input.formatted(), "19:00");
        // 29 would not be a valid hour
        assert_eq!(input.input(0, "2"), TimeInputOutcome::Advanced);
        assert_eq!(input.formatted(), "20:00");
        assert_eq!(input.focused_slot(), Some(1));
    }

    #[test]
    fn test_retyping_prefilled_time_into_the_twenties() {
        let mut input = TimeInput::from_time(AlarmTime::new(8, 30).unwrap());
        for c in "2015".chars() {
            input.type_char(c);
        }
        assert_eq!(input.formatted(), "20:15");
        assert!(input.is_dismissed());
    }

    #[test]
    fn test_empty_input_resets_and_moves_back() {
        let mut input = TimeInput::from_time(AlarmTime::new(8, 30).unwrap());
        input.focus(2);
        assert_eq!(input.input(2, ""), TimeInputOutcome::Cleared);
        assert_eq!(input.formatted(), "08:00");
        assert_eq!(input.focused_slot(), Some(1));
    }

    #[test]
    fn test_empty_input_at_first_slot_keeps_focus() {
        let mut input = TimeInput::from_time(AlarmTime::new(18, 0).unwrap());
        assert_eq!(input.input(0, ""), TimeInputOutcome::Cleared);
        assert_eq!(input.formatted(), "08:00");
        assert_eq!(input.focused_slot(), Some(0));
    }

    #[test]
    fn test_non_digit_rejected_without_focus_change() {
        let mut input = TimeInput::new();
        input.focus(1);
        assert_eq!(input.input(1, "a"), TimeInputOutcome::Rejected);
        assert_eq!(input.input(1, "12"), TimeInputOutcome::Rejected);
        assert_eq!(input.input(1, "-"), TimeInputOutcome::Rejected);
        assert_eq!(input.focused_slot(), Some(1));
        assert_eq!(input.raw(), "0000");
    }

    #[test]
    fn test_full_entry_sequence() {
        let mut input = TimeInput::new();
        for c in ['0', '7', '4', '5'] {
            input.type_char(c);
        }
        assert_eq!(input.formatted(), "07:45");
        assert_eq!(input.to_time(), AlarmTime::new(7, 45).unwrap());
        assert!(input.is_dismissed());
    }

    #[test]
    fn test_typing_after_dismiss_restarts_at_first_slot() {
        let mut input = TimeInput::new();
        input.input(3, "1");
        assert!(input.is_dismissed());
        assert_eq!(input.type_char('1'), TimeInputOutcome::Advanced);
        assert_eq!(input.formatted(), "10:01");
    }

    #[test]
    fn test_any_sequence_stays_valid() {
        // Exhaustive-ish walk over every slot and character pair, twice over.
        let chars = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'x'];
        let mut input = TimeInput::new();
        for round in 0..2 {
            for slot in 0..SLOT_COUNT {
                for c in chars {
                    let mut buf = [0u8; 4];
                    input.input((slot + round) % SLOT_COUNT, c.encode_utf8(&mut buf));
                    let t = input.to_time();
                    assert!(t.hour() <= 23);
                    assert!(t.minute() <= 59);
                    assert_eq!(input.formatted(), t.to_string());
                }
                input.input(slot, "");
            }
        }
    }
}
