use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a cell on a memory grid, numbered row-major from zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(usize);

impl CellId {
    /// Creates a new `CellId`
    #[must_use]
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    /// Returns the underlying index
    #[must_use]
    pub fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellId({})", self.0)
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card_{}", self.0)
    }
}

/// Error type for parsing a `CellId` from a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    raw: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse CellId from {:?}", self.raw)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for CellId {
    type Err = ParseIdError;

    /// Accepts both the bare index (`"3"`) and the display form (`"card_3"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("card_").unwrap_or(s);
        digits
            .parse::<usize>()
            .map(CellId::new)
            .map_err(|_| ParseIdError { raw: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_id_parses_display_form() {
        let id = CellId::new(5);
        assert_eq!(id.to_string().parse::<CellId>().unwrap(), id);
        assert_eq!("5".parse::<CellId>().unwrap(), id);
        assert!("card_x".parse::<CellId>().is_err());
    }
}
