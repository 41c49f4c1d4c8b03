//! Date range selector: a 42-cell month grid, a start/end selection state
//! machine, and the popover placement math. The widget in `widget` renders
//! it; the orders tab owns one instance per session.

pub mod grid;
pub mod popover;
pub mod selection;
pub mod widget;

pub use grid::{DayCell, MonthGrid, ViewMonth, GRID_CELLS};
pub use popover::{anchor, is_outside_click, SCREEN_MARGIN};
pub use selection::{DayRole, Selection};
pub use widget::CalendarWidget;

use chrono::{Duration, NaiveDate};

/// Explicit picker configuration; exactly these fields, nothing passes
/// through implicitly.
#[derive(Debug, Clone, Copy)]
pub struct PickerConfig {
    /// Reference date for selectability and navigation bounds
    pub today: NaiveDate,
    /// Month shown when the picker opens; defaults to the month of `today`
    pub initial_month: Option<ViewMonth>,
}

impl PickerConfig {
    pub fn new(today: NaiveDate) -> Self {
        PickerConfig {
            today,
            initial_month: None,
        }
    }
}

/// The interactive date range picker: displayed month, its grid, the range
/// selection, and a keyboard cursor.
///
/// Every operation is an immediate in-memory computation over the 42-cell
/// grid; none can fail.
#[derive(Debug, Clone)]
pub struct DatePicker {
    today: NaiveDate,
    grid: MonthGrid,
    selection: Selection,
    cursor: NaiveDate,
}

impl DatePicker {
    pub fn new(config: PickerConfig) -> Self {
        let view = config
            .initial_month
            .unwrap_or_else(|| ViewMonth::containing(config.today));
        let grid = MonthGrid::build(view, config.today);
        let cursor = grid.clamp(config.today);
        DatePicker {
            today: config.today,
            grid,
            selection: Selection::default(),
            cursor,
        }
    }

    /// Open with a pre-existing selection, e.g. the currently applied filter
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn view(&self) -> ViewMonth {
        self.grid.view()
    }

    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    /// Move the keyboard cursor by whole days, clamped to the visible grid
    pub fn move_cursor(&mut self, days: i64) {
        self.cursor = self.grid.clamp(self.cursor + Duration::days(days));
    }

    /// Click the date under the cursor
    pub fn click_cursor(&mut self) {
        self.selection.click(self.cursor, self.today);
    }

    /// Click an arbitrary date (mouse path); future dates are no-ops
    pub fn click(&mut self, date: NaiveDate) {
        self.selection.click(date, self.today);
    }

    pub fn clear(&mut self) {
        self.selection.clear();
    }

    /// Show the previous month. Returns the month now displayed.
    pub fn prev_month(&mut self) -> ViewMonth {
        self.show_month(self.view().prev())
    }

    /// Show the next month, unless that would move past today's month
    pub fn next_month(&mut self) -> Option<ViewMonth> {
        self.view()
            .next_bounded(self.today)
            .map(|next| self.show_month(next))
    }

    fn show_month(&mut self, view: ViewMonth) -> ViewMonth {
        self.grid = MonthGrid::build(view, self.today);
        self.cursor = self.grid.clamp(self.cursor);
        view
    }

    /// The range a confirm action would commit: a complete range as-is, a
    /// lone start as a single day, nothing when empty.
    pub fn applied_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.selection
            .range()
            .or_else(|| self.selection.start().map(|start| (start, start)))
    }

    pub fn classify(&self, date: NaiveDate) -> DayRole {
        self.selection.classify(date, self.today)
    }

    pub fn summary(&self, date_format: &str) -> String {
        self.selection.summary(date_format)
    }
}
