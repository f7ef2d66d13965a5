//! Domain entities: core data structures

use std::fmt;

/// A vampire in a lineage tree.
///
/// Names are assumed unique within a lineage for lookup purposes;
/// uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vampire {
    /// Identifying name of the vampire
    pub name: String,
    /// Year the vampire was converted
    pub year_converted: i32,
}

impl Vampire {
    pub fn new(name: &str, year_converted: i32) -> Self {
        Self {
            name: name.to_string(),
            year_converted,
        }
    }
}

impl fmt::Display for Vampire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.year_converted)
    }
}
