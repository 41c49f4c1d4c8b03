use chrono::{Datelike, Duration, NaiveDate};
use std::collections::HashMap;

/// A month grid is always 6 weeks of 7 days
pub const GRID_CELLS: usize = 42;

/// One rendered cell of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// True only for days belonging to the displayed month
    pub is_current_month: bool,
    /// True iff the date is not after the injected "today"
    pub is_selectable: bool,
}

/// The (year, month) pair currently displayed, kept as the first day of that
/// month so navigation is plain date arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewMonth {
    first: NaiveDate,
}

impl ViewMonth {
    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        ViewMonth {
            first: first_of_month(date),
        }
    }

    pub fn from_ymd(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| ViewMonth { first })
    }

    pub fn first(&self) -> NaiveDate {
        self.first
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn prev(&self) -> Self {
        ViewMonth {
            first: first_of_month(self.first - Duration::days(1)),
        }
    }

    /// The following month, but never past the month containing `today`
    pub fn next_bounded(&self, today: NaiveDate) -> Option<Self> {
        let next = ViewMonth {
            first: first_of_month(self.first + Duration::days(32)),
        };
        if next.first <= first_of_month(today) {
            Some(next)
        } else {
            None
        }
    }

    /// "February 2025"
    pub fn label(&self) -> String {
        self.first.format("%B %Y").to_string()
    }
}

/// Fixed 42-cell grid for one displayed month.
///
/// Cells run in chronological order: trailing days of the previous month (as
/// many as the weekday of the 1st demands, Sunday-based), every day of the
/// displayed month, then days of the next month up to 42. Cell roles are
/// looked up by date through a prebuilt index rather than scanning.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    view: ViewMonth,
    cells: Vec<DayCell>,
    index: HashMap<NaiveDate, usize>,
}

impl MonthGrid {
    pub fn build(view: ViewMonth, today: NaiveDate) -> Self {
        let first = view.first();
        // 0 = Sunday; equals the number of leading padding cells
        let lead = first.weekday().num_days_from_sunday() as i64;
        let start = first - Duration::days(lead);

        let mut cells = Vec::with_capacity(GRID_CELLS);
        let mut index = HashMap::with_capacity(GRID_CELLS);
        for offset in 0..GRID_CELLS as i64 {
            let date = start + Duration::days(offset);
            index.insert(date, cells.len());
            cells.push(DayCell {
                date,
                is_current_month: date.year() == view.year() && date.month() == view.month(),
                is_selectable: date <= today,
            });
        }

        MonthGrid { view, cells, index }
    }

    pub fn view(&self) -> ViewMonth {
        self.view
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// O(1) lookup of the cell showing `date`, if it is on this grid
    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.index.get(&date).map(|&i| &self.cells[i])
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.index.contains_key(&date)
    }

    pub fn first_date(&self) -> NaiveDate {
        self.cells[0].date
    }

    pub fn last_date(&self) -> NaiveDate {
        self.cells[GRID_CELLS - 1].date
    }

    /// Clamp a date to the grid's span
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.max(self.first_date()).min(self.last_date())
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .expect("day 1 exists in every month")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn grid(y: i32, m: u32, today: NaiveDate) -> MonthGrid {
        MonthGrid::build(ViewMonth::from_ymd(y, m).unwrap(), today)
    }

    #[test]
    fn test_grid_always_42_cells() {
        let today = d(2025, 6, 15);
        for (y, m) in [(2025, 2), (2024, 2), (2025, 6), (2025, 12), (1999, 1), (2025, 3)] {
            assert_eq!(grid(y, m, today).cells().len(), GRID_CELLS, "{}-{}", y, m);
        }
    }

    #[test]
    fn test_cells_chronologically_contiguous() {
        let g = grid(2025, 2, d(2025, 2, 10));
        for w in g.cells().windows(2) {
            assert_eq!(w[0].date + Duration::days(1), w[1].date);
        }
    }

    #[test]
    fn test_current_month_cells_match_month_length() {
        let today = d(2026, 1, 1);
        for (y, m, len) in [(2025, 2, 28), (2024, 2, 29), (2025, 4, 30), (2025, 1, 31)] {
            let g = grid(y, m, today);
            let current: Vec<_> = g.cells().iter().filter(|c| c.is_current_month).collect();
            assert_eq!(current.len(), len, "{}-{}", y, m);
            // Contiguity: current-month cells form one block
            let first_idx = g.cells().iter().position(|c| c.is_current_month).unwrap();
            assert!(g.cells()[first_idx..first_idx + len]
                .iter()
                .all(|c| c.is_current_month));
        }
    }

    #[test]
    fn test_first_cell_weekday_matches_first_of_month() {
        let today = d(2026, 1, 1);
        for (y, m) in [(2025, 2), (2025, 6), (2024, 9), (2023, 10)] {
            let g = grid(y, m, today);
            let first_of_month = d(y, m, 1);
            let lead = first_of_month.weekday().num_days_from_sunday() as usize;
            assert_eq!(g.cells()[lead].date, first_of_month);
            assert_eq!(g.first_date().weekday(), Weekday::Sun);
        }
    }

    #[test]
    fn test_selectability_uniform_rule() {
        let today = d(2025, 2, 10);
        let g = grid(2025, 2, today);
        for cell in g.cells() {
            assert_eq!(cell.is_selectable, cell.date <= today, "{}", cell.date);
        }
    }

    #[test]
    fn test_february_2025_scenario() {
        // Feb 1 2025 is a Saturday (weekday index 6): 6 leading January cells,
        // 28 February cells, 8 trailing March cells.
        let today = d(2025, 2, 10);
        let g = grid(2025, 2, today);

        assert_eq!(g.cells().len(), 42);
        assert_eq!(d(2025, 2, 1).weekday(), Weekday::Sat);
        assert_eq!(g.first_date(), d(2025, 1, 26));
        assert_eq!(g.cells()[5].date, d(2025, 1, 31));
        assert!(g.cells()[..6].iter().all(|c| !c.is_current_month));
        assert_eq!(g.cells()[6].date, d(2025, 2, 1));
        assert_eq!(g.cells()[33].date, d(2025, 2, 28));
        assert!(g.cells()[34..].iter().all(|c| !c.is_current_month));
        assert_eq!(g.cells()[34..].len(), 8);
        assert_eq!(g.last_date(), d(2025, 3, 8));

        for cell in g.cells() {
            if cell.date > today {
                assert!(!cell.is_selectable, "{}", cell.date);
            } else {
                assert!(cell.is_selectable, "{}", cell.date);
            }
        }
    }

    #[test]
    fn test_month_starting_sunday_has_no_leading_padding() {
        // June 2025 starts on a Sunday
        let g = grid(2025, 6, d(2025, 6, 15));
        assert_eq!(g.cells()[0].date, d(2025, 6, 1));
        assert!(g.cells()[0].is_current_month);
        // 30 days => 12 trailing padding cells
        assert_eq!(g.cells().iter().filter(|c| !c.is_current_month).count(), 12);
    }

    #[test]
    fn test_indexed_lookup_matches_cells() {
        let g = grid(2025, 2, d(2025, 2, 10));
        for cell in g.cells() {
            assert_eq!(g.cell(cell.date), Some(cell));
        }
        assert_eq!(g.cell(d(2025, 4, 1)), None);
        assert!(g.contains(d(2025, 2, 14)));
    }

    #[test]
    fn test_clamp_to_grid_span() {
        let g = grid(2025, 2, d(2025, 2, 10));
        assert_eq!(g.clamp(d(2024, 12, 1)), g.first_date());
        assert_eq!(g.clamp(d(2025, 6, 1)), g.last_date());
        assert_eq!(g.clamp(d(2025, 2, 14)), d(2025, 2, 14));
    }

    #[test]
    fn test_view_month_navigation() {
        let view = ViewMonth::from_ymd(2025, 1).unwrap();
        assert_eq!(view.prev(), ViewMonth::from_ymd(2024, 12).unwrap());

        let today = d(2025, 2, 10);
        let next = view.next_bounded(today).unwrap();
        assert_eq!(next, ViewMonth::from_ymd(2025, 2).unwrap());
        // Cannot navigate past the month containing today
        assert_eq!(next.next_bounded(today), None);
    }

    #[test]
    fn test_view_month_containing_and_label() {
        let view = ViewMonth::containing(d(2025, 2, 10));
        assert_eq!(view.first(), d(2025, 2, 1));
        assert_eq!(view.label(), "February 2025");
    }

    #[test]
    fn test_view_month_rejects_invalid() {
        assert!(ViewMonth::from_ymd(2025, 13).is_none());
        assert!(ViewMonth::from_ymd(2025, 0).is_none());
    }
}
