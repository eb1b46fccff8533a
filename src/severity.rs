//! Alert severity levels and their merge rules.
//!
//! `Ok`, `Warning` and `Critical` form a total order. `Unknown` sits outside
//! that order: it never compares against the other levels and absorbs any
//! merge it takes part in.

use std::cmp::Ordering;

use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// Status level of a single domain or of a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Every inspected certificate is valid beyond the warning threshold.
    #[strum(to_string = "OK")]
    Ok,
    /// At least one certificate expires within the warning threshold.
    Warning,
    /// A certificate expires within the critical threshold, or the domain
    /// could not be resolved or connected to.
    Critical,
    /// Status could not be determined.
    Unknown,
}

impl Severity {
    /// Position in the `Ok < Warning < Critical` order, `None` for `Unknown`.
    fn rank(self) -> Option<u8> {
        match self {
            Severity::Ok => Some(0),
            Severity::Warning => Some(1),
            Severity::Critical => Some(2),
            Severity::Unknown => None,
        }
    }

    /// Merges two severities without ever downgrading.
    ///
    /// Returns the greater of the two under `Ok < Warning < Critical`.
    /// If either side is `Unknown` the result is `Unknown`.
    #[must_use]
    pub fn escalate(self, other: Severity) -> Severity {
        match (self.rank(), other.rank()) {
            (Some(a), Some(b)) if b > a => other,
            (Some(_), Some(_)) => self,
            _ => Severity::Unknown,
        }
    }

    /// Process exit code for this severity (monitoring plugin convention).
    pub fn exit_code(self) -> i32 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
            Severity::Unknown => 3,
        }
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.rank(), other.rank()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            (None, None) => Some(Ordering::Equal),
            _ => None,
        }
    }
}
