//! Description acceptability.

use std::fmt;

/// Whether a description is the preferred term of its concept in a language,
/// or one of its acceptable synonyms.
///
/// ```
/// use snomed_types::Acceptability;
///
/// assert_eq!(Acceptability::Acceptable.to_string(), "acceptable");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Acceptability {
    /// Preferred term.
    Preferred,
    /// Acceptable synonym.
    Acceptable,
}

impl Acceptability {
    /// Lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Preferred => "preferred",
            Self::Acceptable => "acceptable",
        }
    }
}

impl fmt::Display for Acceptability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
