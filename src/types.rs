use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered ticket holder and the numbers bought under that name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holder {
    pub name: String,
    pub numbers: Vec<String>,
}

impl Holder {
    /// Literal membership check, "00217" and "217" are different tickets
    pub fn holds(&self, number: &str) -> bool {
        self.numbers.iter().any(|n| n == number)
    }
}

/// A winning number and the amount it paid, in whole euros
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prize {
    pub number: String,
    pub amount: u64,
}

/// Outcome of checking a name/number pair against the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VerificationResult {
    Success { holder_name: String, number: String },
    NumberNotFound { holder_name: String },
    NameNotFound,
}

impl VerificationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, VerificationResult::Success { .. })
    }
}

/// A number registered under more than one holder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateReport {
    pub number: String,
    pub holders: Vec<String>,
}

/// Everything one person won
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonTotal {
    pub name: String,
    pub total: u64,
    pub prizes: Vec<Prize>,
}

impl PersonTotal {
    pub fn has_won(&self) -> bool {
        self.total > 0
    }
}

/// Owner of a winning number, or the unknown sentinel when nobody holds it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Owner {
    Known(String),
    Unknown,
}

impl From<Option<&str>> for Owner {
    fn from(name: Option<&str>) -> Self {
        match name {
            Some(name) => Owner::Known(name.to_string()),
            None => Owner::Unknown,
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Owner::Known(name) => write!(f, "{}", name),
            Owner::Unknown => write!(f, "Unknown"),
        }
    }
}

/// One row of the prize ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPrize {
    /// 1-based position after sorting by amount
    pub rank: usize,
    pub number: String,
    pub amount: u64,
    pub owner: Owner,
}

/// Verdict sent back for a `verifyTicket` request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub status: VerdictStatus,
    pub timestamp: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VerdictStatus {
    Checked { outcome: VerificationResult },
    Rejected { code: String, reason: String },
}
