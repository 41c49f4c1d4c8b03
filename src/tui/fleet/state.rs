pub struct State {
    pub subtab_focused: bool,
    pub selected_index: usize,
}

impl State {
    pub fn new() -> Self {
        State {
            subtab_focused: false,
            selected_index: 0,
        }
    }

    pub fn clamp_selection(&mut self, slot_count: usize) {
        if slot_count == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= slot_count {
            self.selected_index = slot_count - 1;
        }
    }
}
