use chrono::NaiveDate;

/// Rendering role of a day cell, in precedence order: selection endpoints win
/// over the in-range band, which wins over the inert-future marker, which
/// wins over the today marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayRole {
    /// start == end == this date
    SingleDay,
    RangeStart,
    RangeEnd,
    /// Strictly between start and end
    InRange,
    /// Future date, clicks are ignored
    NotSelectable,
    /// Today, when not part of the selection
    Today,
    Normal,
}

/// Zero, one, or two selected dates.
///
/// The click protocol:
/// - empty, or a complete range exists: the clicked date becomes the new start
/// - start only, same date clicked: back to empty
/// - start only, different date clicked: the pair is stored ordered, so
///   `start <= end` holds after every mutation
///
/// Clicks on dates after `today` are no-ops in every state. All operations
/// are total; nothing here can fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl Selection {
    /// A complete single-day selection (start == end)
    pub fn single(date: NaiveDate) -> Self {
        Selection {
            start: Some(date),
            end: Some(date),
        }
    }

    /// A complete range; the pair is stored ordered
    pub fn from_range(a: NaiveDate, b: NaiveDate) -> Self {
        Selection {
            start: Some(a.min(b)),
            end: Some(a.max(b)),
        }
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// The applied pair, only when the range is complete
    pub fn range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        *self = Selection::default();
    }

    pub fn click(&mut self, date: NaiveDate, today: NaiveDate) {
        if date > today {
            return;
        }

        match (self.start, self.end) {
            // Fresh range; a previous complete range is discarded
            (None, _) | (Some(_), Some(_)) => {
                self.start = Some(date);
                self.end = None;
            }
            (Some(start), None) => {
                if date == start {
                    self.clear();
                } else {
                    self.start = Some(start.min(date));
                    self.end = Some(start.max(date));
                }
            }
        }
    }

    pub fn classify(&self, date: NaiveDate, today: NaiveDate) -> DayRole {
        match (self.start, self.end) {
            (Some(start), Some(end)) => {
                if start == end && date == start {
                    return DayRole::SingleDay;
                }
                if date == start {
                    return DayRole::RangeStart;
                }
                if date == end {
                    return DayRole::RangeEnd;
                }
                if date > start && date < end {
                    return DayRole::InRange;
                }
            }
            (Some(start), None) => {
                if date == start {
                    return DayRole::SingleDay;
                }
            }
            (None, _) => {}
        }

        if date > today {
            DayRole::NotSelectable
        } else if date == today {
            DayRole::Today
        } else {
            DayRole::Normal
        }
    }

    /// Human-readable summary of the current selection
    pub fn summary(&self, date_format: &str) -> String {
        let fmt = |d: NaiveDate| d.format(date_format).to_string();
        match (self.start, self.end) {
            (None, _) => "Pick a start date".to_string(),
            (Some(start), None) => format!("from {}, pick an end date", fmt(start)),
            (Some(start), Some(end)) if start == end => {
                format!("Selected Day: {}", fmt(start))
            }
            (Some(start), Some(end)) => format!("Range: {} - {}", fmt(start), fmt(end)),
        }
    }
}
