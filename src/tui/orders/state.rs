use ratatui::layout::Rect;

use crate::tui::datepicker::DatePicker;

pub struct State {
    pub subtab_focused: bool,
    /// Selected row in the orders table
    pub selected_index: usize,
    /// The date range popover, Some while open
    pub picker: Option<DatePicker>,
    /// Screen area of the range trigger, recorded during the last draw
    pub trigger_area: Option<Rect>,
    /// Screen area of the open popover, recorded during the last draw
    pub popover_area: Option<Rect>,
}

impl State {
    pub fn new() -> Self {
        State {
            subtab_focused: false,
            selected_index: 0,
            picker: None,
            trigger_area: None,
            popover_area: None,
        }
    }

    /// Keep the selected row within the current order list
    pub fn clamp_selection(&mut self, order_count: usize) {
        if order_count == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= order_count {
            self.selected_index = order_count - 1;
        }
    }

    pub fn close_picker(&mut self) {
        self.picker = None;
        self.popover_area = None;
    }
}
