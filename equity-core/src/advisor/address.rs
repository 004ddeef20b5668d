use std::fmt;

use serde::{Deserialize, Serialize};

use super::market::AdvisorError;

/// Street address of the property to be valued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl Default for PropertyAddress {
    fn default() -> Self {
        Self {
            street: String::new(),
            city: String::new(),
            state: "WI".to_string(),
            zip: String::new(),
        }
    }
}

impl PropertyAddress {
    /// Requires street, city and zip to be filled in.
    ///
    /// # Errors
    ///
    /// [`AdvisorError::InvalidAddress`] when any of them is blank.
    pub fn validate(&self) -> Result<(), AdvisorError> {
        let blank = [&self.street, &self.city, &self.zip]
            .iter()
            .any(|part| part.trim().is_empty());
        if blank {
            return Err(AdvisorError::InvalidAddress(
                "Please enter a full address.".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for PropertyAddress {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "{}, {}, {} {}",
            self.street.trim(),
            self.city.trim(),
            self.state.trim(),
            self.zip.trim()
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn address() -> PropertyAddress {
        PropertyAddress {
            street: "915 Washington St".to_string(),
            city: "Manitowoc".to_string(),
            zip: "54220".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn displays_single_line_address() {
        assert_eq!(
            address().to_string(),
            "915 Washington St, Manitowoc, WI 54220"
        );
    }

    #[test]
    fn complete_address_is_valid() {
        assert_eq!(address().validate(), Ok(()));
    }

    #[test]
    fn blank_street_is_rejected() {
        let addr = PropertyAddress {
            street: "   ".to_string(),
            ..address()
        };

        assert_eq!(
            addr.validate(),
            Err(AdvisorError::InvalidAddress(
                "Please enter a full address.".to_string()
            ))
        );
    }

    #[test]
    fn missing_zip_is_rejected() {
        let addr = PropertyAddress {
            zip: String::new(),
            ..address()
        };

        assert!(addr.validate().is_err());
    }
}
