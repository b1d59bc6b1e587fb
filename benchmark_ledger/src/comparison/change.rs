//!
//! The change of one bench between two records.
//!

///
/// The change of one bench between two records.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Change<'a> {
    /// The bench name.
    pub name: &'a str,
    /// The unit of both values.
    pub unit: &'a str,
    /// The value in the previous record.
    pub previous: f64,
    /// The value in the current record.
    pub current: f64,
}

impl Change<'_> {
    ///
    /// Returns `(current - previous) / previous`, or `None` if the previous value is zero.
    ///
    pub fn relative(&self) -> Option<f64> {
        if self.previous == 0.0 {
            return None;
        }
        Some((self.current - self.previous) / self.previous)
    }

    ///
    /// Whether the change is an improvement in the given direction.
    ///
    pub fn is_improvement(&self, is_bigger_better: bool) -> bool {
        if is_bigger_better {
            self.current > self.previous
        } else {
            self.current < self.previous
        }
    }

    ///
    /// Whether the change is a regression in the given direction.
    ///
    pub fn is_regression(&self, is_bigger_better: bool) -> bool {
        self.current != self.previous && !self.is_improvement(is_bigger_better)
    }
}
