use crate::{error::RequestError, registry::{Registry, validate_format}};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct Validator {
    registry: Arc<Registry>,
}

impl Validator {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Validate a verification request
    /// Returns Ok(()) if the registry may be queried, Err(RequestError) otherwise
    pub fn validate(&self, name: &str, number: &str) -> Result<(), RequestError> {
        debug!("Validating verification request for number {:?}", number);

        // 1. Require a name
        self.check_name(name)?;

        // 2. Check number format
        self.check_format(number)?;

        // 3. Refuse numbers registered to several holders
        self.check_duplicate(number)?;

        debug!("Verification request accepted");
        Ok(())
    }

    fn check_name(&self, name: &str) -> Result<(), RequestError> {
        if name.trim().is_empty() {
            return Err(RequestError::EmptyName);
        }
        Ok(())
    }

    fn check_format(&self, number: &str) -> Result<(), RequestError> {
        if !validate_format(number.trim()) {
            return Err(RequestError::InvalidFormat {
                number: number.to_string(),
            });
        }
        Ok(())
    }

    /// A duplicate is not an error in the data, but ownership of the number
    /// cannot be confirmed automatically.
    fn check_duplicate(&self, number: &str) -> Result<(), RequestError> {
        if let Some(report) = self.registry.check_duplicate(number.trim()) {
            warn!(
                "Number {} is registered to {} holders: {:?}",
                report.number,
                report.holders.len(),
                report.holders
            );
            return Err(RequestError::DuplicateNumberDetected {
                number: report.number,
                holders: report.holders,
            });
        }
        Ok(())
    }
}
