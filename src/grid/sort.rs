//! Column sorting

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Order for the next sort
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_descending(self) -> bool {
        self == SortDirection::Descending
    }
}

/// How rows with equal keys are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortStrategy {
    /// Stable ordering that keeps every row
    #[default]
    Stable,
    /// One row per distinct key; the last row with a given key wins
    CollapseDuplicates,
}

/// Sort `rows` by the cell in column `col`.
///
/// Missing cells sort as `""`. Keys compare by code point order.
pub fn sort_rows(
    rows: &mut Vec<Vec<String>>,
    col: usize,
    direction: SortDirection,
    strategy: SortStrategy,
) {
    match strategy {
        SortStrategy::Stable => {
            // sort_by is stable, and comparing in reverse keeps ties in input order
            rows.sort_by(|a, b| {
                let ord = sort_key(a, col).cmp(sort_key(b, col));
                if direction.is_descending() {
                    ord.reverse()
                } else {
                    ord
                }
            });
        }
        SortStrategy::CollapseDuplicates => {
            let mut by_key: BTreeMap<String, Vec<String>> = BTreeMap::new();
            for row in rows.drain(..) {
                let key = row.get(col).cloned().unwrap_or_default();
                by_key.insert(key, row);
            }
            if direction.is_descending() {
                rows.extend(by_key.into_values().rev());
            } else {
                rows.extend(by_key.into_values());
            }
        }
    }
}

fn sort_key(row: &[String], col: usize) -> &str {
    row.get(col).map(String::as_str).unwrap_or("")
}
