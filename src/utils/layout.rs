use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split an area into header, content and footer rows.
pub fn create_standard_layout(area: Rect, header_height: u16, footer_height: u16) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Center a popup of `percent_x` by `percent_y` of `area`.
pub fn center_popup(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y.min(100)) / 2),
            Constraint::Percentage(percent_y.min(100)),
            Constraint::Percentage((100 - percent_y.min(100)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x.min(100)) / 2),
            Constraint::Percentage(percent_x.min(100)),
            Constraint::Percentage((100 - percent_x.min(100)) / 2),
        ])
        .split(vertical[1])[1]
}

/// Center a fixed-size box inside `area`, shrinking it if `area` is smaller.
pub fn center_fixed(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout_heights() {
        let (header, content, footer) = create_standard_layout(Rect::new(0, 0, 80, 24), 3, 2);
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 2);
        assert_eq!(content.height, 19);
    }

    #[test]
    fn test_center_fixed_clamps() {
        let area = Rect::new(0, 0, 20, 10);
        let inner = center_fixed(area, 40, 4);
        assert_eq!(inner.width, 20);
        assert_eq!(inner.height, 4);
        assert_eq!(inner.y, 3);
    }

    #[test]
    fn test_center_popup_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = center_popup(area, 60, 40);
        assert!(popup.x >= area.x && popup.right() <= area.right());
        assert!(popup.y >= area.y && popup.bottom() <= area.bottom());
    }
}
