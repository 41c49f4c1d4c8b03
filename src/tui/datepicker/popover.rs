use ratatui::layout::Rect;

/// Minimum gap kept between the popover and the screen edge
pub const SCREEN_MARGIN: u16 = 1;

/// Place a popover of `width` x `height` anchored to `trigger`: directly
/// below it, right edges aligned, clamped so it never crosses the screen
/// margin on any side. On a screen too small for the panel the rect is
/// shrunk to what fits.
pub fn anchor(trigger: Rect, width: u16, height: u16, screen: Rect) -> Rect {
    let width = width.min(screen.width.saturating_sub(SCREEN_MARGIN * 2));
    let height = height.min(screen.height.saturating_sub(SCREEN_MARGIN * 2));

    let right_edge = trigger.x + trigger.width;
    let min_x = screen.x + SCREEN_MARGIN;
    let max_x = (screen.x + screen.width).saturating_sub(SCREEN_MARGIN + width);
    let x = right_edge.saturating_sub(width).clamp(min_x, max_x.max(min_x));

    let below = trigger.y + trigger.height;
    let min_y = screen.y + SCREEN_MARGIN;
    let max_y = (screen.y + screen.height).saturating_sub(SCREEN_MARGIN + height);
    let y = below.clamp(min_y, max_y.max(min_y));

    Rect::new(x, y, width, height)
}

/// True when a pointer event at (column, row) falls outside both the trigger
/// and the panel. A hit here dismisses the popover.
pub fn is_outside_click(column: u16, row: u16, trigger: Rect, panel: Rect) -> bool {
    let inside = |r: Rect| {
        column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
    };
    !inside(trigger) && !inside(panel)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 120,
        height: 40,
    };

    #[test]
    fn test_anchor_below_right_aligned() {
        let trigger = Rect::new(60, 3, 20, 1);
        let panel = anchor(trigger, 30, 12, SCREEN);
        // Right edges aligned: 60 + 20 - 30 = 50
        assert_eq!(panel, Rect::new(50, 4, 30, 12));
    }

    #[test]
    fn test_anchor_clamps_to_left_margin() {
        let trigger = Rect::new(2, 3, 10, 1);
        let panel = anchor(trigger, 30, 12, SCREEN);
        assert_eq!(panel.x, SCREEN_MARGIN);
        assert_eq!(panel.y, 4);
    }

    #[test]
    fn test_anchor_clamps_to_bottom() {
        let trigger = Rect::new(60, 38, 20, 1);
        let panel = anchor(trigger, 30, 12, SCREEN);
        assert!(panel.y + panel.height + SCREEN_MARGIN <= SCREEN.height);
    }

    #[test]
    fn test_anchor_shrinks_on_tiny_screen() {
        let screen = Rect::new(0, 0, 20, 8);
        let trigger = Rect::new(0, 0, 5, 1);
        let panel = anchor(trigger, 30, 12, screen);
        assert!(panel.width <= 18);
        assert!(panel.height <= 6);
    }

    #[test]
    fn test_outside_click_detection() {
        let trigger = Rect::new(60, 3, 20, 1);
        let panel = Rect::new(50, 4, 30, 12);

        // Inside the panel
        assert!(!is_outside_click(55, 10, trigger, panel));
        // Inside the trigger
        assert!(!is_outside_click(60, 3, trigger, panel));
        // Left of the panel
        assert!(is_outside_click(10, 10, trigger, panel));
        // Below the panel
        assert!(is_outside_click(55, 30, trigger, panel));
        // Exactly one past the panel's right edge
        assert!(is_outside_click(80, 10, trigger, panel));
    }
}
