//! Public value types shared by the engine and its callers.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ID newtypes
// ---------------------------------------------------------------------------

macro_rules! string_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(NodeName);

/// Dense index of a node inside a [`crate::Graph`]. Assigned in input order.
pub type NodeIndex = usize;

/// Delimiter used both in edge tokens (`A-B`) and in rendered paths (`A-B-C`).
pub const PATH_DELIMITER: char = '-';

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// A shortest path from source to sink, inclusive of both ends.
///
/// `path.len() == distance + 1` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    pub path: Vec<NodeName>,
    /// Hop count (every edge weighs 1).
    pub distance: usize,
}

impl PathResult {
    /// First node on the path; `None` only for a hand-built empty path.
    pub fn source(&self) -> Option<&NodeName> {
        self.path.first()
    }

    pub fn sink(&self) -> Option<&NodeName> {
        self.path.last()
    }
}

impl std::fmt::Display for PathResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, name) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, "{PATH_DELIMITER}")?;
            }
            f.write_str(name.as_str())?;
        }
        Ok(())
    }
}
