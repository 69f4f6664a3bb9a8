//! core/linkage.rs — Agglomerative linkage table.
//!
//! Each row merges two existing clusters into a new one. With `n` leaves,
//! ids `0..n` are leaves and row `r` creates cluster `n + r`.
//! Example: 3 leaves, rows `[0,1,0.5,2]`, `[2,3,1.0,3]` → root id 4.

use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinkageError {
    #[error("linkage: table is empty")]
    Empty,

    #[error("linkage: row {row} refers to cluster {id}, only ids below {limit} exist yet")]
    IdOutOfRange { row: usize, id: usize, limit: usize },

    #[error("linkage: row {row} merges cluster {id} with itself")]
    SelfMerge { row: usize, id: usize },

    #[error("linkage: row {row} merges cluster {id}, already merged at row {first}")]
    AlreadyMerged { row: usize, id: usize, first: usize },

    #[error("linkage: row {row} has invalid distance {distance}")]
    InvalidDistance { row: usize, distance: f64 },

    #[error("linkage: row {row} claims {count} members, children hold {expected}")]
    CountMismatch {
        row: usize,
        count: usize,
        expected: usize,
    },

    #[error("linkage: line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// One merge step: `(left, right, distance, count)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkageRow {
    pub left: usize,
    pub right: usize,
    pub distance: f64,
    pub count: usize,
}

impl LinkageRow {
    pub const fn new(left: usize, right: usize, distance: f64, count: usize) -> Self {
        Self {
            left,
            right,
            distance,
            count,
        }
    }
}

/// Validated linkage table. Row order is merge order.
#[derive(Clone, Debug)]
pub struct Linkage {
    rows: Vec<LinkageRow>,
}

impl Linkage {
    /// Validate and wrap merge rows.
    pub fn new(rows: Vec<LinkageRow>) -> Result<Self, LinkageError> {
        if rows.is_empty() {
            return Err(LinkageError::Empty);
        }
        let n = rows.len() + 1;
        // merged_at[id] = row that consumed cluster `id`
        let mut merged_at: Vec<Option<usize>> = vec![None; 2 * n - 1];
        let mut sizes: Vec<usize> = vec![1; n];
        sizes.reserve(n - 1);

        for (r, row) in rows.iter().enumerate() {
            let limit = n + r;
            for id in [row.left, row.right] {
                if id >= limit {
                    return Err(LinkageError::IdOutOfRange { row: r, id, limit });
                }
                if let Some(first) = merged_at[id] {
                    return Err(LinkageError::AlreadyMerged { row: r, id, first });
                }
            }
            if row.left == row.right {
                return Err(LinkageError::SelfMerge {
                    row: r,
                    id: row.left,
                });
            }
            if !row.distance.is_finite() || row.distance < 0.0 {
                return Err(LinkageError::InvalidDistance {
                    row: r,
                    distance: row.distance,
                });
            }
            let expected = sizes[row.left] + sizes[row.right];
            if row.count != expected {
                return Err(LinkageError::CountMismatch {
                    row: r,
                    count: row.count,
                    expected,
                });
            }
            merged_at[row.left] = Some(r);
            merged_at[row.right] = Some(r);
            sizes.push(expected);
        }

        debug!(rows = rows.len(), leaves = n, "linkage validated");
        Ok(Self { rows })
    }

    /// Parse rows of four numbers. Commas, whitespace and brackets separate
    /// fields; blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Result<Self, LinkageError> {
        let mut rows = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.split('#').next().unwrap_or("");
            let fields: Vec<&str> = line
                .split(|c: char| c == ',' || c.is_whitespace() || "[]()".contains(c))
                .filter(|f| !f.is_empty())
                .collect();
            if fields.is_empty() {
                continue;
            }
            if fields.len() != 4 {
                return Err(LinkageError::Parse {
                    line: line_no,
                    reason: format!("expected 4 fields, found {}", fields.len()),
                });
            }
            let left = parse_id(fields[0], line_no)?;
            let right = parse_id(fields[1], line_no)?;
            let distance = fields[2]
                .parse::<f64>()
                .map_err(|e| LinkageError::Parse {
                    line: line_no,
                    reason: format!("distance {:?}: {e}", fields[2]),
                })?;
            let count = parse_id(fields[3], line_no)?;
            rows.push(LinkageRow::new(left, right, distance, count));
        }
        Self::new(rows)
    }

    #[inline]
    pub fn rows(&self) -> &[LinkageRow] {
        &self.rows
    }

    /// Number of original observations.
    #[inline]
    pub fn n_leaves(&self) -> usize {
        self.rows.len() + 1
    }

    /// Id of the final cluster.
    #[inline]
    pub fn root(&self) -> usize {
        2 * self.n_leaves() - 2
    }

    /// Largest merge distance (third column).
    pub fn max_distance(&self) -> f64 {
        self.rows.iter().map(|r| r.distance).fold(0.0f64, f64::max)
    }

    /// Distance cutoff for threshold coloring: `ratio × max_distance`.
    pub fn color_threshold(&self, ratio: f64) -> f64 {
        ratio * self.max_distance()
    }

    /// Row that created cluster `id`, or `None` for a leaf.
    #[inline]
    pub fn row_of(&self, id: usize) -> Option<&LinkageRow> {
        id.checked_sub(self.n_leaves()).and_then(|r| self.rows.get(r))
    }
}

fn parse_id(field: &str, line: usize) -> Result<usize, LinkageError> {
    // numpy prints integer columns of a float array as "38." or "38.0"
    let value = field.parse::<f64>().map_err(|e| LinkageError::Parse {
        line,
        reason: format!("{field:?}: {e}"),
    })?;
    if value < 0.0 || value.fract() != 0.0 || !value.is_finite() {
        return Err(LinkageError::Parse {
            line,
            reason: format!("{field:?} is not a non-negative integer"),
        });
    }
    Ok(value as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Vec<LinkageRow> {
        vec![
            LinkageRow::new(0, 1, 0.5, 2),
            LinkageRow::new(2, 3, 1.0, 3),
        ]
    }

    #[test]
    fn accepts_well_formed_table() {
        let z = Linkage::new(small()).unwrap();
        assert_eq!(z.n_leaves(), 3);
        assert_eq!(z.root(), 4);
        assert_eq!(z.max_distance(), 1.0);
        assert_eq!(z.row_of(3).unwrap().distance, 0.5);
        assert!(z.row_of(2).is_none());
    }

    #[test]
    fn rejects_forward_reference() {
        let rows = vec![
            LinkageRow::new(0, 4, 0.5, 2),
            LinkageRow::new(1, 2, 1.0, 3),
        ];
        assert_eq!(
            Linkage::new(rows).unwrap_err(),
            LinkageError::IdOutOfRange {
                row: 0,
                id: 4,
                limit: 3
            }
        );
    }

    #[test]
    fn rejects_double_merge_and_bad_counts() {
        let rows = vec![
            LinkageRow::new(0, 1, 0.5, 2),
            LinkageRow::new(1, 2, 1.0, 2),
        ];
        assert!(matches!(
            Linkage::new(rows),
            Err(LinkageError::AlreadyMerged { row: 1, id: 1, first: 0 })
        ));

        let mut rows = small();
        rows[1].count = 4;
        assert!(matches!(
            Linkage::new(rows),
            Err(LinkageError::CountMismatch {
                row: 1,
                count: 4,
                expected: 3
            })
        ));
    }

    #[test]
    fn rejects_negative_or_nan_distance() {
        let mut rows = small();
        rows[0].distance = f64::NAN;
        assert!(matches!(
            Linkage::new(rows),
            Err(LinkageError::InvalidDistance { row: 0, .. })
        ));
        let mut rows = small();
        rows[1].distance = -1.0;
        assert!(Linkage::new(rows).is_err());
    }

    #[test]
    fn parses_numpy_style_literal() {
        let text = "test = ignored\n";
        assert!(Linkage::parse(text).is_err());

        let text = "[[0, 1, 0.5, 2],\n# comment\n\n[2., 3., 1.0, 3.]]\n";
        let z = Linkage::parse(text).unwrap();
        assert_eq!(z.rows(), small().as_slice());
    }

    #[test]
    fn parse_reports_line_numbers() {
        let err = Linkage::parse("0 1 0.5 2\n2 3 x 3\n").unwrap_err();
        assert!(matches!(err, LinkageError::Parse { line: 2, .. }));
        let err = Linkage::parse("0 1 0.5\n").unwrap_err();
        assert!(matches!(err, LinkageError::Parse { line: 1, .. }));
    }
}
