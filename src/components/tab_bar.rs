use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Tabs};

/// Tabs of the main shell, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MainTab {
    #[default]
    Alarms,
    AwakeningStats,
    QuizSummary,
    Settings,
}

impl MainTab {
    pub const ALL: [MainTab; 4] = [
        MainTab::Alarms,
        MainTab::AwakeningStats,
        MainTab::QuizSummary,
        MainTab::Settings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            MainTab::Alarms => "Alarms",
            MainTab::AwakeningStats => "Awakening Stats",
            MainTab::QuizSummary => "Quiz Summary",
            MainTab::Settings => "Settings",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    /// Next tab, wrapping around.
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping around.
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub struct TabBar;

impl TabBar {
    pub fn render(frame: &mut Frame, area: Rect, selected: MainTab) {
        let t = theme();
        let tabs = Tabs::new(MainTab::ALL.iter().map(|tab| tab.title()))
            .select(selected.index())
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(t.border_style()),
            )
            .style(t.muted_style())
            .highlight_style(t.title_style().add_modifier(Modifier::UNDERLINED))
            .divider(" │ ");
        frame.render_widget(tabs, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle_wraps() {
        assert_eq!(MainTab::Alarms.next(), MainTab::AwakeningStats);
        assert_eq!(MainTab::Settings.next(), MainTab::Alarms);
        assert_eq!(MainTab::Alarms.prev(), MainTab::Settings);
    }

    #[test]
    fn test_tab_titles() {
        let titles: Vec<_> = MainTab::ALL.iter().map(|t| t.title()).collect();
        assert_eq!(titles, ["Alarms", "Awakening Stats", "Quiz Summary", "Settings"]);
    }
}
