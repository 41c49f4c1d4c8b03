use super::{fleet, menu, orders};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentTab {
    Orders,
    Menu,
    Fleet,
    Help,
    Settings,
}

impl CurrentTab {
    pub fn all() -> [CurrentTab; 5] {
        [
            CurrentTab::Orders,
            CurrentTab::Menu,
            CurrentTab::Fleet,
            CurrentTab::Help,
            CurrentTab::Settings,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            CurrentTab::Orders => "Orders",
            CurrentTab::Menu => "Menu",
            CurrentTab::Fleet => "Fleet",
            CurrentTab::Help => "Help",
            CurrentTab::Settings => "Settings",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            CurrentTab::Orders => 0,
            CurrentTab::Menu => 1,
            CurrentTab::Fleet => 2,
            CurrentTab::Help => 3,
            CurrentTab::Settings => 4,
        }
    }

    /// Tab for a number-key press, '1' through '5'
    pub fn from_digit(c: char) -> Option<CurrentTab> {
        let idx = c.to_digit(10)? as usize;
        Self::all().get(idx.checked_sub(1)?).copied()
    }
}

pub struct AppState {
    pub current_tab: CurrentTab,
    pub orders: orders::State,
    pub menu: menu::State,
    pub fleet: fleet::State,
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            current_tab: CurrentTab::Orders,
            orders: orders::State::new(),
            menu: menu::State::new(),
            fleet: fleet::State::new(),
            should_quit: false,
        }
    }

    pub fn next_tab(&mut self) {
        let all = CurrentTab::all();
        self.current_tab = all[(self.current_tab.index() + 1) % all.len()];
    }

    pub fn previous_tab(&mut self) {
        let all = CurrentTab::all();
        self.current_tab = all[(self.current_tab.index() + all.len() - 1) % all.len()];
    }

    /// Whether the active tab has claimed keyboard focus for its content
    pub fn subtab_focused(&self) -> bool {
        match self.current_tab {
            CurrentTab::Orders => self.orders.subtab_focused,
            CurrentTab::Menu => self.menu.subtab_focused,
            CurrentTab::Fleet => self.fleet.subtab_focused,
            CurrentTab::Help | CurrentTab::Settings => false,
        }
    }

    /// A popover steals all input while open
    pub fn popover_open(&self) -> bool {
        self.current_tab == CurrentTab::Orders && self.orders.picker.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_order_and_titles() {
        let titles: Vec<&str> = CurrentTab::all().iter().map(|t| t.title()).collect();
        assert_eq!(titles, vec!["Orders", "Menu", "Fleet", "Help", "Settings"]);
        for (i, tab) in CurrentTab::all().iter().enumerate() {
            assert_eq!(tab.index(), i);
        }
    }

    #[test]
    fn test_from_digit() {
        assert_eq!(CurrentTab::from_digit('1'), Some(CurrentTab::Orders));
        assert_eq!(CurrentTab::from_digit('5'), Some(CurrentTab::Settings));
        assert_eq!(CurrentTab::from_digit('6'), None);
        assert_eq!(CurrentTab::from_digit('0'), None);
        assert_eq!(CurrentTab::from_digit('x'), None);
    }

    #[test]
    fn test_tab_cycling_wraps() {
        let mut app = AppState::new();
        app.previous_tab();
        assert_eq!(app.current_tab, CurrentTab::Settings);
        app.next_tab();
        assert_eq!(app.current_tab, CurrentTab::Orders);
        app.next_tab();
        assert_eq!(app.current_tab, CurrentTab::Menu);
    }
}
