use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

/// A platform version such as `2.1.0.RELEASE`, `2.1.0.M1` or `2.2.0-SNAPSHOT`.
///
/// Versions order by their numeric components first, then by qualifier:
/// milestones < release candidates < snapshots < releases.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "String")]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
    qualifier: Option<Qualifier>,
}

/// The trailing part of a version, e.g. `RELEASE`, `M1` or `BUILD-SNAPSHOT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Qualifier {
    id: String,
    number: Option<u32>,
    separator: char,
}

impl Qualifier {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn number(&self) -> Option<u32> {
        self.number
    }

    /// Qualifier ids are matched case-insensitively (`m1` is a milestone).
    fn rank(&self) -> u8 {
        let is = |id: &str| self.id.eq_ignore_ascii_case(id);
        if is("M") {
            0
        } else if is("RC") {
            1
        } else if is("BUILD-SNAPSHOT") || is("SNAPSHOT") {
            2
        } else {
            3
        }
    }

    fn is_release(&self) -> bool {
        self.rank() == 3
    }
}

impl TryFrom<String> for Version {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            qualifier: None,
        }
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }

    pub fn qualifier(&self) -> Option<&Qualifier> {
        self.qualifier.as_ref()
    }

    /// Whether this is a GA version (no qualifier, or `RELEASE`-like).
    pub fn is_release(&self) -> bool {
        self.qualifier.as_ref().is_none_or(Qualifier::is_release)
    }

    /// Whether this is a snapshot build.
    pub fn is_snapshot(&self) -> bool {
        self.qualifier.as_ref().is_some_and(|q| q.rank() == 2)
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (&self.qualifier, &other.qualifier) {
                (None, None) => Ordering::Equal,
                (None, Some(q)) => 3.cmp(&q.rank()),
                (Some(q), None) => q.rank().cmp(&3),
                (Some(a), Some(b)) => a
                    .rank()
                    .cmp(&b.rank())
                    .then_with(|| a.number.cmp(&b.number)),
            })
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(q) = &self.qualifier {
            write!(f, "{}{}", q.separator, q.id)?;
            if let Some(n) = q.number {
                write!(f, "{}", n)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("invalid version '{}', expected 'X.Y.Z[.QUALIFIER]'", s);

        let mut rest = s;
        let mut numbers = [0u32; 3];
        for (i, slot) in numbers.iter_mut().enumerate() {
            let end = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            if end == 0 {
                return Err(invalid());
            }
            *slot = rest[..end].parse().map_err(|_| invalid())?;
            rest = &rest[end..];
            if i < 2 {
                rest = rest.strip_prefix('.').ok_or_else(invalid)?;
            }
        }

        let qualifier = match rest.chars().next() {
            None => None,
            Some(separator @ ('.' | '-')) => {
                let raw = &rest[1..];
                let split = raw
                    .find(|c: char| c.is_ascii_digit())
                    .unwrap_or(raw.len());
                let (id, number) = raw.split_at(split);
                if id.is_empty() || id.chars().any(|c| !(c.is_ascii_alphabetic() || c == '-')) {
                    return Err(invalid());
                }
                let number = if number.is_empty() {
                    None
                } else {
                    Some(number.parse().map_err(|_| invalid())?)
                };
                Some(Qualifier {
                    id: id.to_string(),
                    number,
                    separator,
                })
            }
            Some(_) => return Err(invalid()),
        };

        Ok(Self {
            major: numbers[0],
            minor: numbers[1],
            patch: numbers[2],
            qualifier,
        })
    }
}
