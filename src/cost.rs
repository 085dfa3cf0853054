use std::collections::HashMap;
use std::fmt;

use crate::error::{OsaError, Result};

/// The four edit operations of optimal string alignment.
///
/// Exactly these four kinds exist; the adjacent-swap operation is always
/// named a transposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditopKind {
    Insert,
    Delete,
    Replace,
    Transpose,
}

impl EditopKind {
    /// The full set of operation kinds.
    pub const ALL: [EditopKind; 4] = [
        EditopKind::Insert,
        EditopKind::Delete,
        EditopKind::Replace,
        EditopKind::Transpose,
    ];

    /// Upper-case label used in diagnostic reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            EditopKind::Insert => "INSERT",
            EditopKind::Delete => "DELETE",
            EditopKind::Replace => "REPLACE",
            EditopKind::Transpose => "TRANSPOSE",
        }
    }
}

impl fmt::Display for EditopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A total mapping from the four operation kinds to a non-negative weight.
///
/// This is the single configuration surface for the whole crate: construct
/// it either from four named weights ([`CostConfig::new`]) or from a map
/// keyed by [`EditopKind`] (`TryFrom<&HashMap<EditopKind, f64>>`). All
/// validation happens here, so the compute entry points are infallible.
///
/// # Examples
///
/// ```
/// use editdistance::{CostConfig, EditopKind};
///
/// let config = CostConfig::new(1.0, 1.0, 1.0, 1.0).unwrap();
/// assert_eq!(config.weight(EditopKind::Transpose), 1.0);
///
/// assert!(CostConfig::new(1.0, -1.0, 1.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostConfig {
    insert: f64,
    delete: f64,
    replace: f64,
    transpose: f64,
}

impl CostConfig {
    /// Creates a configuration from four named weights.
    ///
    /// Returns an error if any weight is negative or non-finite: negative
    /// weights break the minimal-cost interpretation of the recurrence, and
    /// NaN/infinite weights poison both the `min` and the tie tolerance.
    pub fn new(insert: f64, delete: f64, replace: f64, transpose: f64) -> Result<Self> {
        let config = Self {
            insert,
            delete,
            replace,
            transpose,
        };
        for kind in EditopKind::ALL {
            let weight = config.weight(kind);
            if !weight.is_finite() || weight < 0.0 {
                return Err(OsaError::invalid_configuration(format!(
                    "weight for {kind} must be finite and non-negative, got {weight}"
                )));
            }
        }
        Ok(config)
    }

    /// The classic configuration: every operation costs 1.
    pub fn unit() -> Self {
        Self {
            insert: 1.0,
            delete: 1.0,
            replace: 1.0,
            transpose: 1.0,
        }
    }

    /// The weight charged for one operation of the given kind.
    pub fn weight(&self, kind: EditopKind) -> f64 {
        match kind {
            EditopKind::Insert => self.insert,
            EditopKind::Delete => self.delete,
            EditopKind::Replace => self.replace,
            EditopKind::Transpose => self.transpose,
        }
    }

    pub fn insert(&self) -> f64 {
        self.insert
    }

    pub fn delete(&self) -> f64 {
        self.delete
    }

    pub fn replace(&self) -> f64 {
        self.replace
    }

    pub fn transpose(&self) -> f64 {
        self.transpose
    }
}

impl Default for CostConfig {
    fn default() -> Self {
        Self::unit()
    }
}

impl TryFrom<&HashMap<EditopKind, f64>> for CostConfig {
    type Error = OsaError;

    /// Builds a configuration from a cost-by-kind map.
    ///
    /// The map must cover all four kinds; extra validation (sign,
    /// finiteness) is the same as [`CostConfig::new`].
    fn try_from(costs: &HashMap<EditopKind, f64>) -> Result<Self> {
        let weight_for = |kind: EditopKind| -> Result<f64> {
            costs.get(&kind).copied().ok_or_else(|| {
                OsaError::invalid_configuration(format!("missing weight for {kind}"))
            })
        };
        let insert = weight_for(EditopKind::Insert)?;
        let delete = weight_for(EditopKind::Delete)?;
        let replace = weight_for(EditopKind::Replace)?;
        let transpose = weight_for(EditopKind::Transpose)?;
        Self::new(insert, delete, replace, transpose)
    }
}
