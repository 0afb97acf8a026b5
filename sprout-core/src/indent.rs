//! Indentation configuration for generated files.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawIndent")]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (Java, Kotlin, Groovy, Gradle).
    pub const FOUR_SPACES: Self = Self::Spaces(4);

    /// 2-space indentation.
    pub const TWO_SPACES: Self = Self::Spaces(2);

    /// The text for one indent level.
    pub fn unit(&self) -> String {
        match self {
            Self::Spaces(width) => " ".repeat(usize::from(*width)),
            Self::Tab => "\t".to_string(),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::FOUR_SPACES
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spaces(width) => write!(f, "{}", width),
            Self::Tab => write!(f, "tab"),
        }
    }
}

impl FromStr for Indent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("tab") || s == "\t" {
            return Ok(Self::Tab);
        }
        match s.parse::<u8>() {
            Ok(width) if width > 0 => Ok(Self::Spaces(width)),
            _ => Err(format!(
                "invalid indent '{}', expected 'tab' or a number of spaces",
                s
            )),
        }
    }
}

impl Serialize for Indent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Accepts both `indent = 2` and `indent = "tab"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawIndent {
    Width(u8),
    Text(String),
}

impl TryFrom<RawIndent> for Indent {
    type Error = String;

    fn try_from(raw: RawIndent) -> Result<Self, Self::Error> {
        match raw {
            RawIndent::Width(0) => Err("indent width must be at least 1".to_string()),
            RawIndent::Width(width) => Ok(Self::Spaces(width)),
            RawIndent::Text(text) => text.parse(),
        }
    }
}
