//! Travel-time matrix consumed by the solvers.

use crate::error::MatrixError;

/// Directed travel time of a single leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TravelTime {
    Seconds(u32),
    Unreachable,
}

impl TravelTime {
    pub fn seconds(&self) -> Option<u32> {
        match self {
            TravelTime::Seconds(s) => Some(*s),
            TravelTime::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, TravelTime::Seconds(_))
    }

    /// Converts a raw duration from a routing backend.
    ///
    /// `None` means the backend found no route. Negative or non-finite
    /// values are rejected rather than guessed at.
    pub fn from_raw(raw: Option<f64>) -> Result<Self, MatrixError> {
        match raw {
            None => Ok(TravelTime::Unreachable),
            Some(value) if value.is_finite() && value >= 0.0 && value <= u32::MAX as f64 => {
                Ok(TravelTime::Seconds(value.round() as u32))
            }
            Some(value) => Err(MatrixError::InvalidDuration(value)),
        }
    }
}

impl From<u32> for TravelTime {
    fn from(seconds: u32) -> Self {
        TravelTime::Seconds(seconds)
    }
}

/// Square matrix of directed travel times in seconds.
///
/// Index 0 is the fixed start/end location. The diagonal is never read by
/// the solvers and the matrix need not be symmetric.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeMatrix {
    data: Vec<TravelTime>,
    size: usize,
}

impl TimeMatrix {
    /// Builds a matrix from rows, checking that it is square.
    pub fn new(rows: Vec<Vec<TravelTime>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(MatrixError::NotSquare {
                    row: row_index,
                    expected: size,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self { data, size })
    }

    /// Builds a fully reachable matrix from whole seconds.
    pub fn from_seconds(rows: Vec<Vec<u32>>) -> Result<Self, MatrixError> {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(TravelTime::Seconds).collect())
                .collect(),
        )
    }

    /// Builds a matrix from backend durations where `None` is unreachable.
    pub fn from_raw(rows: Vec<Vec<Option<f64>>>) -> Result<Self, MatrixError> {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(TravelTime::from_raw).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(rows)
    }

    /// Number of locations, start included.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of destinations, start excluded.
    pub fn destination_count(&self) -> usize {
        self.size.saturating_sub(1)
    }

    /// Travel time from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> TravelTime {
        self.data[from * self.size + to]
    }

    pub fn set(&mut self, from: usize, to: usize, time: TravelTime) {
        self.data[from * self.size + to] = time;
    }

    /// Whether some location cannot be entered or cannot be left.
    ///
    /// Such a location rules out every closed tour.
    pub fn has_isolated_node(&self) -> bool {
        self.size > 1
            && (0..self.size).any(|node| {
                let others = || (0..self.size).filter(move |&other| other != node);
                !others().any(|other| self.get(other, node).is_reachable())
                    || !others().any(|other| self.get(node, other).is_reachable())
            })
    }

    /// Returns a copy with every leg into and out of `node` made unreachable.
    pub fn isolate(mut self, node: usize) -> Self {
        for other in 0..self.size {
            if other != node {
                self.set(node, other, TravelTime::Unreachable);
                self.set(other, node, TravelTime::Unreachable);
            }
        }
        self
    }
}
