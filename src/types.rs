//! Common types used throughout pagerange
//!
//! This module contains the display-sequence entry type shared by the
//! calculator, the listing query store, and the CLI/HTTP surfaces.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ============================================================================
// Range Entries
// ============================================================================

/// Wire marker for an elided run of pages
pub const DOTS: &str = "dots";

/// One slot in a rendered pagination range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeEntry {
    /// A 1-based page number
    Page(u32),
    /// Elided run of pages. Never a page itself.
    Ellipsis,
}

impl RangeEntry {
    /// Page number, or `None` for an ellipsis
    pub fn page(&self) -> Option<u32> {
        match self {
            Self::Page(page) => Some(*page),
            Self::Ellipsis => None,
        }
    }

    /// Check if this is an ellipsis marker
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

impl fmt::Display for RangeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(page) => f.pad(&page.to_string()),
            Self::Ellipsis => f.pad("…"),
        }
    }
}

impl Serialize for RangeEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(page) => serializer.serialize_u32(*page),
            Self::Ellipsis => serializer.serialize_str(DOTS),
        }
    }
}

impl<'de> Deserialize<'de> for RangeEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Page(u32),
            Marker(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Page(page) => Ok(Self::Page(page)),
            Raw::Marker(marker) if marker == DOTS => Ok(Self::Ellipsis),
            Raw::Marker(other) => Err(serde::de::Error::custom(format!(
                "expected a page number or \"{DOTS}\", got \"{other}\""
            ))),
        }
    }
}

// ============================================================================
// Sort Order
// ============================================================================

/// Direction of a sorted listing column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Map a table sorting flag (`desc: true`) to an order
    pub fn from_desc(desc: bool) -> Self {
        if desc {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}
