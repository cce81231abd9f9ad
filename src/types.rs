//! Type-safe field names for the publish form
//!
//! The wizard form is addressed by camelCase names on the wire. This enum
//! gives those names a closed, exhaustively matchable type while keeping
//! the exact strings for parsing and display.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// A validated field of the publish form.
///
/// Declaration order is the order fields are validated and reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter, AsRefStr)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    LocalName,
    DescriptionMessage,
    Country,
    City,
    District,
    Street,
    Latitude,
    Longitude,
    Price,
    Capacity,
    PhotoUrls,
    Features,
    LocalCategoryId,
}

impl Field {
    /// Every field, in declaration order.
    pub fn all() -> impl Iterator<Item = Field> {
        Self::iter()
    }

    /// Parse a wire name, `None` for anything outside the form.
    pub fn lookup(name: &str) -> Option<Self> {
        name.parse().ok()
    }
}
