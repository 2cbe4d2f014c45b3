//! Acceptance policy for Autobahn test outcomes.

use crate::index::TestResult;
use std::fmt;

/// `behavior` values that count as a pass.
pub const ACCEPTED_BEHAVIOR: &[&str] = &["OK", "UNIMPLEMENTED", "INFORMATIONAL"];

/// `behaviorClose` values that count as a pass.
pub const ACCEPTED_BEHAVIOR_CLOSE: &[&str] = &["OK", "INFORMATIONAL"];

/// Which part of a result fell outside the accepted sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Behavior,
    BehaviorClose,
    Both,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Behavior => write!(f, "behavior"),
            Self::BehaviorClose => write!(f, "behaviorClose"),
            Self::Both => write!(f, "behavior and behaviorClose"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptancePolicy {
    behavior: &'static [&'static str],
    behavior_close: &'static [&'static str],
}

impl AcceptancePolicy {
    pub fn new(behavior: &'static [&'static str], behavior_close: &'static [&'static str]) -> Self {
        Self {
            behavior,
            behavior_close,
        }
    }

    /// `None` when the result is accepted. Both fields are checked by exact,
    /// case-sensitive membership.
    pub fn rejection(&self, result: &TestResult) -> Option<Rejection> {
        let behavior_ok = self.behavior.contains(&result.behavior.as_str());
        let close_ok = self.behavior_close.contains(&result.behavior_close.as_str());
        match (behavior_ok, close_ok) {
            (true, true) => None,
            (false, true) => Some(Rejection::Behavior),
            (true, false) => Some(Rejection::BehaviorClose),
            (false, false) => Some(Rejection::Both),
        }
    }
}

impl Default for AcceptancePolicy {
    fn default() -> Self {
        Self::new(ACCEPTED_BEHAVIOR, ACCEPTED_BEHAVIOR_CLOSE)
    }
}
