//! Seed Data Module
//!
//! The registry and the prize list ship inside the binary as TOML documents.
//! A config file may point at replacement files in the same format.
//!
//! # Registry format
//! ```toml
//! [[holder]]
//! name = "Claire Todd"
//! numbers = ["56290"]
//! ```
//!
//! # Prize format
//! ```toml
//! [[prize]]
//! number = "56290"
//! amount = 500
//! ```

use crate::{Holder, Prize, error::DataError, registry::{Registry, validate_format}};
use serde::Deserialize;
use std::{fs, path::Path};
use tracing::info;

const EMBEDDED_REGISTRY: &str = include_str!("../../data/registry.toml");
const EMBEDDED_PRIZES: &str = include_str!("../../data/prizes.toml");

#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    holder: Vec<Holder>,
}

#[derive(Debug, Deserialize)]
struct PrizeFile {
    #[serde(default)]
    prize: Vec<Prize>,
}

/// Parse a registry document; `source_name` only labels errors
pub fn parse_registry(source_name: &str, text: &str) -> Result<Registry, DataError> {
    let file: RegistryFile = toml::from_str(text).map_err(|source| DataError::Parse {
        source_name: source_name.to_string(),
        source,
    })?;
    Registry::new(file.holder)
}

/// Parse a prize document; `source_name` only labels errors
pub fn parse_prizes(source_name: &str, text: &str) -> Result<Vec<Prize>, DataError> {
    let file: PrizeFile = toml::from_str(text).map_err(|source| DataError::Parse {
        source_name: source_name.to_string(),
        source,
    })?;

    let mut total: u64 = 0;
    for (position, prize) in file.prize.iter().enumerate() {
        if !validate_format(&prize.number) {
            return Err(DataError::MalformedPrize {
                position,
                number: prize.number.clone(),
            });
        }
        // Any per-person total is bounded by the grand total
        total = total
            .checked_add(prize.amount)
            .ok_or(DataError::AmountOverflow { position })?;
    }
    Ok(file.prize)
}

/// The registry compiled into the binary
pub fn embedded_registry() -> Result<Registry, DataError> {
    parse_registry("embedded registry", EMBEDDED_REGISTRY)
}

/// The prize list compiled into the binary
pub fn embedded_prizes() -> Result<Vec<Prize>, DataError> {
    parse_prizes("embedded prizes", EMBEDDED_PRIZES)
}

/// Load the registry from `path`, or the embedded one when unset
pub fn load_registry(path: Option<&Path>) -> anyhow::Result<Registry> {
    let registry = match path {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            parse_registry(&path.display().to_string(), &text)?
        }
        None => embedded_registry()?,
    };
    info!(
        "Loaded registry: {} holders, {} tickets",
        registry.len(),
        registry.total_tickets()
    );
    Ok(registry)
}

/// Load the prize list from `path`, or the embedded one when unset
pub fn load_prizes(path: Option<&Path>) -> anyhow::Result<Vec<Prize>> {
    let prizes = match path {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            parse_prizes(&path.display().to_string(), &text)?
        }
        None => embedded_prizes()?,
    };
    info!("Loaded {} prizes", prizes.len());
    Ok(prizes)
}
