//! Dotted-numeric version ordering and the `Support` type.
//!
//! Generic string ordering misorders multi-digit version components
//! ("9" vs "10"), so versions are parsed into numeric components and
//! ordered componentwise, with missing trailing components treated as
//! zero ("10" == "10.0"). Anything that does not parse as a plain dotted
//! number (Safari "TP", empty strings) never satisfies a requirement.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// A parsed dotted-numeric version, e.g. "10.0.1".
#[derive(Debug, Clone, Eq)]
pub struct Version(Vec<u64>);

impl Version {
    /// Parse a dotted numeric version string.
    ///
    /// Returns `None` when any component is not a plain decimal number, so
    /// values like "TP" or "" are unrepresentable rather than misordered.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed
            .split('.')
            .map(|component| component.parse::<u64>().ok())
            .collect::<Option<Vec<u64>>>()
            .map(Self)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.0.len().max(other.0.len());
        for i in 0..len {
            let a = self.0.get(i).copied().unwrap_or(0);
            let b = other.0.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}

/// Native support of one plugin on one browser, as recorded in the plugin
/// catalog.
///
/// Absence of support is an explicit variant, never an in-band sentinel
/// string, and comparison is defined only for `Since`. `Since` keeps the
/// raw catalog string so the report can display it verbatim.
///
/// Serializes as the raw version string, or `null` for `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Support {
    /// No known native support; a transform plugin is required.
    Unknown,
    /// Natively supported since the given catalog version string.
    Since(String),
}

impl Support {
    /// Build from a plugin catalog lookup result.
    pub fn from_entry(entry: Option<&String>) -> Self {
        match entry {
            Some(version) => Self::Since(version.clone()),
            None => Self::Unknown,
        }
    }

    /// Whether a browser at `browser_version` natively covers this requirement.
    ///
    /// True iff both sides parse as dotted-numeric versions and the required
    /// version is less than or equal to the browser version. Malformed data on
    /// either side degrades to "unsupported" so the report always renders.
    pub fn satisfied_by(&self, browser_version: &str) -> bool {
        match self {
            Self::Unknown => false,
            Self::Since(required) => {
                match (Version::parse(required), Version::parse(browser_version)) {
                    (Some(required), Some(available)) => required <= available,
                    _ => false,
                }
            }
        }
    }
}
