//! "Repeat on these days" selection used by the alarm editor.

use super::WorkingDays;
use std::collections::HashSet;

/// Single-letter labels, Sunday first.
pub const DAY_INITIALS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// Full day names, Sunday first.
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Set of selected day indices (0 = Sunday .. 6 = Saturday).
///
/// The set itself is unordered; anything that renders it goes through
/// [`WeekdaySelector::iter_canonical`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekdaySelector {
    selected: HashSet<usize>,
}

impl WeekdaySelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_working_days(days: WorkingDays) -> Self {
        Self {
            selected: (0..7).filter(|d| days.is_set(*d)).collect(),
        }
    }

    /// Flip membership of `day`. Returns the new membership, or `None` when
    /// `day` is not a weekday index.
    pub fn toggle(&mut self, day: usize) -> Option<bool> {
        if day >= DAY_INITIALS.len() {
            return None;
        }
        if self.selected.remove(&day) {
            Some(false)
        } else {
            self.selected.insert(day);
            Some(true)
        }
    }

    pub fn is_selected(&self, day: usize) -> bool {
        self.selected.contains(&day)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// `(index, initial, selected)` for every day, Sunday..Saturday.
    pub fn iter_canonical(&self) -> impl Iterator<Item = (usize, &'static str, bool)> + '_ {
        DAY_INITIALS
            .iter()
            .enumerate()
            .map(move |(i, initial)| (i, *initial, self.is_selected(i)))
    }

    pub fn to_working_days(&self) -> WorkingDays {
        let mut flags = [false; 7];
        for day in &self.selected {
            flags[*day] = true;
        }
        WorkingDays::from_flags(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut sel = WeekdaySelector::new();
        assert_eq!(sel.toggle(3), Some(true));
        assert!(sel.is_selected(3));
        assert_eq!(sel.toggle(3), Some(false));
        assert!(!sel.is_selected(3));
    }

    #[test]
    fn test_double_toggle_restores_selection() {
        let mut sel = WeekdaySelector::from_working_days(
            WorkingDays::from_numbers([1, 0, 1, 1, 0, 1, 1]).unwrap(),
        );
        let before = sel.clone();
        for day in 0..7 {
            sel.toggle(day);
            sel.toggle(day);
            assert_eq!(sel, before);
        }
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut sel = WeekdaySelector::new();
        assert_eq!(sel.toggle(7), None);
        assert!(sel.is_empty());
    }

    #[test]
    fn test_canonical_order_independent_of_toggle_order() {
        let mut sel = WeekdaySelector::new();
        for day in [6, 0, 4, 2] {
            sel.toggle(day);
        }
        let rendered: Vec<(usize, bool)> = sel.iter_canonical().map(|(i, _, on)| (i, on)).collect();
        assert_eq!(
            rendered,
            vec![
                (0, true),
                (1, false),
                (2, true),
                (3, false),
                (4, true),
                (5, false),
                (6, true)
            ]
        );
    }

    #[test]
    fn test_working_days_conversion() {
        let days = WorkingDays::from_numbers([0, 1, 0, 0, 0, 1, 0]).unwrap();
        let sel = WeekdaySelector::from_working_days(days);
        assert_eq!(sel.len(), 2);
        assert_eq!(sel.to_working_days(), days);
    }
}
