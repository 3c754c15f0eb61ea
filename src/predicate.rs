//! Comparison kinds and output modes.
//!
//! [`ComparisonKind`] selects one of the four ordering predicates applied as
//! `val <op> threshold`. [`OutputMode`] selects whether a scan collects the
//! matching values or their positions.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::FilterError;

// --- ComparisonKind ---

/// Ordering predicate evaluated against the threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComparisonKind {
    /// `val < threshold`
    Lt,
    /// `val <= threshold`
    Le,
    /// `val > threshold`
    Gt,
    /// `val >= threshold`
    Ge,
}

impl ComparisonKind {
    /// All four kinds, in id order.
    pub const ALL: [ComparisonKind; 4] = [
        ComparisonKind::Gt,
        ComparisonKind::Lt,
        ComparisonKind::Ge,
        ComparisonKind::Le,
    ];

    /// Numeric id: 0=GT, 1=LT, 2=GE, 3=LE.
    pub fn id(self) -> u32 {
        match self {
            ComparisonKind::Gt => 0,
            ComparisonKind::Lt => 1,
            ComparisonKind::Ge => 2,
            ComparisonKind::Le => 3,
        }
    }

    /// Operator symbol, e.g. `"<="`.
    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonKind::Lt => "<",
            ComparisonKind::Le => "<=",
            ComparisonKind::Gt => ">",
            ComparisonKind::Ge => ">=",
        }
    }

    /// The complementary predicate: every comparable element matches exactly
    /// one of `self` and `self.negate()`.
    pub fn negate(self) -> ComparisonKind {
        match self {
            ComparisonKind::Lt => ComparisonKind::Ge,
            ComparisonKind::Ge => ComparisonKind::Lt,
            ComparisonKind::Le => ComparisonKind::Gt,
            ComparisonKind::Gt => ComparisonKind::Le,
        }
    }

    /// Whether an ordering of `val` relative to the threshold satisfies this predicate.
    #[inline]
    pub fn accepts(self, ord: Ordering) -> bool {
        match self {
            ComparisonKind::Lt => ord == Ordering::Less,
            ComparisonKind::Le => ord != Ordering::Greater,
            ComparisonKind::Gt => ord == Ordering::Greater,
            ComparisonKind::Ge => ord != Ordering::Less,
        }
    }

    /// Evaluate `val <op> threshold`.
    ///
    /// Returns `None` when the two values have no ordering (e.g. NaN).
    #[inline]
    pub fn evaluate<T: PartialOrd>(self, val: &T, threshold: &T) -> Option<bool> {
        val.partial_cmp(threshold).map(|ord| self.accepts(ord))
    }
}

impl fmt::Display for ComparisonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ComparisonKind {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lt" | "<" => Ok(ComparisonKind::Lt),
            "le" | "lte" | "<=" => Ok(ComparisonKind::Le),
            "gt" | ">" => Ok(ComparisonKind::Gt),
            "ge" | "gte" | ">=" => Ok(ComparisonKind::Ge),
            other => Err(FilterError::InvalidArgument(format!(
                "unknown comparison kind '{}'",
                other
            ))),
        }
    }
}

impl TryFrom<u32> for ComparisonKind {
    type Error = FilterError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        ComparisonKind::ALL
            .get(id as usize)
            .copied()
            .ok_or_else(|| FilterError::InvalidArgument(format!("unknown comparison id {}", id)))
    }
}

// --- OutputMode ---

/// What a scan collects for each matching element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputMode {
    /// The matching values, in input order.
    #[default]
    Values,
    /// Zero-based positions of the matches, ascending.
    Indices,
}

impl OutputMode {
    pub fn name(self) -> &'static str {
        match self {
            OutputMode::Values => "values",
            OutputMode::Indices => "indices",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputMode {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "values" => Ok(OutputMode::Values),
            "indices" => Ok(OutputMode::Indices),
            other => Err(FilterError::InvalidArgument(format!(
                "unknown output mode '{}'",
                other
            ))),
        }
    }
}

impl TryFrom<u32> for OutputMode {
    type Error = FilterError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(OutputMode::Values),
            1 => Ok(OutputMode::Indices),
            _ => Err(FilterError::InvalidArgument(format!(
                "unknown output mode id {}",
                id
            ))),
        }
    }
}
