use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTier {
    Wide,    // ≥90 cols: list and editor side by side
    Stacked, // <90 cols: editor below the list
}

impl LayoutTier {
    pub fn from_area(area: Rect) -> Self {
        if area.width >= 90 {
            LayoutTier::Wide
        } else {
            LayoutTier::Stacked
        }
    }
}

pub struct AppLayout {
    pub header: Rect,
    pub list: Rect,
    pub editor: Rect,
    pub status: Rect,
    pub footer: Rect,
    pub tier: LayoutTier,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let tier = LayoutTier::from_area(area);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(8),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        let (list, editor) = match tier {
            LayoutTier::Wide => {
                let horizontal = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
                    .split(vertical[1]);
                (horizontal[0], horizontal[1])
            }
            LayoutTier::Stacked => {
                let stacked = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(5), Constraint::Length(6)])
                    .split(vertical[1]);
                (stacked[0], stacked[1])
            }
        };

        Self {
            header: vertical[0],
            list,
            editor,
            status: vertical[2],
            footer: vertical[3],
            tier,
        }
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    const MIN_POPUP_WIDTH: u16 = 44;
    const MIN_POPUP_HEIGHT: u16 = 7;

    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let requested_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let target_w = requested_w.max(MIN_POPUP_WIDTH).min(area.width);
    let target_h = requested_h.max(MIN_POPUP_HEIGHT).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_threshold_at_90_cols() {
        assert_eq!(
            LayoutTier::from_area(Rect::new(0, 0, 90, 30)),
            LayoutTier::Wide
        );
        assert_eq!(
            LayoutTier::from_area(Rect::new(0, 0, 89, 30)),
            LayoutTier::Stacked
        );
    }

    #[test]
    fn wide_layout_places_panels_side_by_side() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.tier, LayoutTier::Wide);
        assert_eq!(layout.list.y, layout.editor.y);
        assert!(layout.list.x < layout.editor.x);
    }

    #[test]
    fn stacked_layout_places_editor_below_list() {
        let layout = AppLayout::new(Rect::new(0, 0, 60, 30));
        assert_eq!(layout.tier, LayoutTier::Stacked);
        assert!(layout.list.y < layout.editor.y);
        assert_eq!(layout.list.x, layout.editor.x);
    }

    #[test]
    fn centered_rect_stays_within_area() {
        let area = Rect::new(0, 0, 30, 5);
        let rect = centered_rect(60, 40, area);
        assert!(rect.width <= area.width);
        assert!(rect.height <= area.height);
        assert!(rect.right() <= area.right());
        assert!(rect.bottom() <= area.bottom());
    }
}
