//! Registry Table Module
//!
//! The registry itself: an ordered list of holders, each with the ticket
//! numbers registered under their name. Construction checks the data once;
//! after that every query is infallible.

use super::normalize::normalize;
use crate::{DuplicateReport, Holder, VerificationResult, error::DataError};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Number of digits in a ticket number
pub const TICKET_DIGITS: usize = 5;

/// True iff `number` is exactly five ASCII digits
pub fn validate_format(number: &str) -> bool {
    number.len() == TICKET_DIGITS && number.bytes().all(|b| b.is_ascii_digit())
}

/// Immutable name → ticket numbers table
///
/// Holders keep the order they were registered in. Names are unique keys,
/// ticket numbers are not guaranteed unique across holders.
#[derive(Debug, Clone)]
pub struct Registry {
    holders: Vec<Holder>,
}

impl Registry {
    /// Build a registry from holders in registration order
    ///
    /// # Errors
    /// * `EmptyHolderName` if a name is blank
    /// * `RepeatedHolder` if the same name appears twice
    /// * `MalformedTicket` if a number is not five digits
    ///
    /// A number shared by two holders is accepted here; use
    /// [`Registry::detect_duplicates`] to surface it.
    pub fn new(holders: Vec<Holder>) -> Result<Self, DataError> {
        let mut seen = HashSet::new();

        for (position, holder) in holders.iter().enumerate() {
            if holder.name.trim().is_empty() {
                return Err(DataError::EmptyHolderName { position });
            }
            if !seen.insert(holder.name.as_str()) {
                return Err(DataError::RepeatedHolder {
                    name: holder.name.clone(),
                });
            }
            if let Some(bad) = holder.numbers.iter().find(|n| !validate_format(n)) {
                return Err(DataError::MalformedTicket {
                    holder: holder.name.clone(),
                    number: bad.clone(),
                });
            }
        }

        debug!("Registry built with {} holders", holders.len());
        Ok(Self { holders })
    }

    /// Holders in registration order
    pub fn holders(&self) -> &[Holder] {
        &self.holders
    }

    pub fn len(&self) -> usize {
        self.holders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holders.is_empty()
    }

    /// Holder names in lexicographic order, for a name picker
    pub fn names_sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.holders.iter().map(|h| h.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Total number of tickets registered across all holders
    pub fn total_tickets(&self) -> usize {
        self.holders.iter().map(|h| h.numbers.len()).sum()
    }

    /// Check whether `number` is registered under `name`
    ///
    /// The name is compared after [`normalize`], the number literally. The
    /// first holder whose folded name matches decides the outcome.
    pub fn verify(&self, name: &str, number: &str) -> VerificationResult {
        let wanted = normalize(name);

        match self.holders.iter().find(|h| normalize(&h.name) == wanted) {
            Some(holder) if holder.holds(number) => VerificationResult::Success {
                holder_name: holder.name.clone(),
                number: number.to_string(),
            },
            Some(holder) => VerificationResult::NumberNotFound {
                holder_name: holder.name.clone(),
            },
            None => VerificationResult::NameNotFound,
        }
    }

    /// First holder, in registration order, who holds `number`
    pub fn find_owner(&self, number: &str) -> Option<&str> {
        self.holders
            .iter()
            .find(|h| h.holds(number))
            .map(|h| h.name.as_str())
    }

    /// Every registered number, sorted ascending by numeric value
    ///
    /// Equal values keep their registration order.
    pub fn list_all(&self) -> Vec<String> {
        let mut numbers: Vec<String> = self
            .holders
            .iter()
            .flat_map(|h| h.numbers.iter().cloned())
            .collect();
        numbers.sort_by_cached_key(|n| n.parse::<u32>().ok());
        numbers
    }

    /// Every number held by two or more holders, in first-seen order
    pub fn detect_duplicates(&self) -> Vec<DuplicateReport> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut owners: Vec<(&str, Vec<&str>)> = Vec::new();

        for holder in &self.holders {
            for number in &holder.numbers {
                let slot = *index.entry(number.as_str()).or_insert_with(|| {
                    owners.push((number.as_str(), Vec::new()));
                    owners.len() - 1
                });
                let names = &mut owners[slot].1;
                if !names.contains(&holder.name.as_str()) {
                    names.push(holder.name.as_str());
                }
            }
        }

        owners
            .into_iter()
            .filter(|(_, names)| names.len() > 1)
            .map(|(number, names)| DuplicateReport {
                number: number.to_string(),
                holders: names.into_iter().map(str::to_string).collect(),
            })
            .collect()
    }

    /// Duplicate report for a single number, if it has several holders
    pub fn check_duplicate(&self, number: &str) -> Option<DuplicateReport> {
        let holders: Vec<String> = self
            .holders
            .iter()
            .filter(|h| h.holds(number))
            .map(|h| h.name.clone())
            .collect();

        if holders.len() > 1 {
            Some(DuplicateReport {
                number: number.to_string(),
                holders,
            })
        } else {
            None
        }
    }
}
