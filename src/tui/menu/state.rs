pub struct State {
    pub subtab_focused: bool,
    /// Selected row in the flattened item list
    pub selected_index: usize,
}

impl State {
    pub fn new() -> Self {
        State {
            subtab_focused: false,
            selected_index: 0,
        }
    }

    pub fn clamp_selection(&mut self, item_count: usize) {
        if item_count == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= item_count {
            self.selected_index = item_count - 1;
        }
    }
}
