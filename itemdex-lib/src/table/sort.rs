//! Type-aware row ordering

use std::cmp::Ordering;

use super::ItemRow;

/// Sort direction for a table column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Applies the direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// A sortable column selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    /// The item name column.
    Name,
    /// An attribute column, by registry ordinal.
    Attribute(usize),
}

/// Click-to-sort bookkeeping.
///
/// Repeated presses on the same column alternate the direction; moving
/// to a different column starts over ascending.
///
/// # Example
///
/// ```
/// use itemdex_lib::table::{SortColumn, SortOrder, SortState};
///
/// let mut state = SortState::new();
/// assert_eq!(state.press(SortColumn::Name), SortOrder::Ascending);
/// assert_eq!(state.press(SortColumn::Name), SortOrder::Descending);
/// assert_eq!(state.press(SortColumn::Attribute(3)), SortOrder::Ascending);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    last_column: Option<SortColumn>,
    order: SortOrder,
}

impl SortState {
    /// Creates a state with no press history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a header press and returns the direction to sort by.
    pub fn press(&mut self, column: SortColumn) -> SortOrder {
        self.order = if self.last_column == Some(column) {
            self.order.toggled()
        } else {
            SortOrder::Ascending
        };
        self.last_column = Some(column);
        self.order
    }

    /// Forgets the press history, for when a new table replaces the
    /// current one.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Direction of the most recent press.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// The column pressed last, if any.
    pub fn last_column(&self) -> Option<SortColumn> {
        self.last_column
    }
}

/// Sorts rows by `column`, keeping rows that compare equal in their
/// current relative order.
pub fn sort_rows(rows: &mut [ItemRow], column: SortColumn, order: SortOrder) {
    rows.sort_by(|a, b| order.apply(compare_cells(a.sort_text(column), b.sort_text(column))));
}

/// Compares two cell texts the way sortable headers do.
///
/// Cells with a leading number compare numerically, so `"10"` sorts
/// after `"2"`. A numeric cell against a non-numeric one treats the
/// non-numeric side as zero. Two non-numeric cells fall back to
/// caseless lexicographic order with a raw tiebreak, keeping the
/// result total and deterministic.
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    match (leading_number(a), leading_number(b)) {
        (Some(left), Some(right)) => left.partial_cmp(&right).unwrap_or(Ordering::Equal),
        (Some(left), None) => left.partial_cmp(&0.0).unwrap_or(Ordering::Equal),
        (None, Some(right)) => 0.0_f64.partial_cmp(&right).unwrap_or(Ordering::Equal),
        (None, None) => collate(a, b),
    }
}

/// Parses the leading decimal prefix of `text`, if any.
///
/// Cell parsing is lenient: leading whitespace is skipped and trailing
/// garbage ignored, so `"1.5 kg"` reads as 1.5. A signed `Infinity`
/// literal (exact case) counts as numeric. Text without a leading
/// number yields `None`.
fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(&(b'+' | b'-'))) {
        end = 1;
    }
    if text[end..].starts_with("Infinity") {
        return Some(if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    let integer_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut has_digits = end > integer_start;

    if bytes.get(end) == Some(&b'.') {
        let fraction_start = end + 1;
        let mut scan = fraction_start;
        while bytes.get(scan).is_some_and(u8::is_ascii_digit) {
            scan += 1;
        }
        if scan > fraction_start || has_digits {
            end = scan;
            has_digits = has_digits || scan > fraction_start;
        }
    }
    if !has_digits {
        return None;
    }

    if matches!(bytes.get(end), Some(&(b'e' | b'E'))) {
        let mut scan = end + 1;
        if matches!(bytes.get(scan), Some(&(b'+' | b'-'))) {
            scan += 1;
        }
        let exponent_start = scan;
        while bytes.get(scan).is_some_and(u8::is_ascii_digit) {
            scan += 1;
        }
        if scan > exponent_start {
            end = scan;
        }
    }

    text[..end].parse().ok()
}

/// Caseless lexicographic comparison with a raw tiebreak.
fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    match folded {
        Ordering::Equal => a.cmp(b),
        ordering => ordering,
    }
}

// ============================================================================
// Tests
// ============================================================================
