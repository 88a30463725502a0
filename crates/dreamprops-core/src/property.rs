//! Property records and listing-type classification.
//!
//! Records arrive without any sale/rent attribute. [`ListingType::of`] assigns
//! one from the SHA-256 digest of the identifier so that the featured tabs,
//! the type filter, and card badges all agree and stay stable across runs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::ids::PropertyId;

/// One real-estate listing as returned by the data source.
///
/// Never mutated after loading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    /// Listing identifier.
    pub id: PropertyId,
    /// Display name.
    pub name: String,
    /// Building number within the street address.
    pub building_number: String,
    /// City.
    pub city: String,
    /// State or region.
    pub state: String,
    /// Country.
    pub country: String,
    /// Owner display name.
    pub owner_name: String,
    /// Owner contact number, shown only to signed-in users.
    pub contact_number: String,
    /// Optional image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl PropertyRecord {
    /// Case-insensitive substring match over the searchable fields.
    ///
    /// `needle` must already be lower-cased. An empty needle matches
    /// everything.
    pub fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        [
            &self.name,
            &self.city,
            &self.state,
            &self.country,
            &self.owner_name,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }

    /// Derived listing type of this record.
    pub fn listing_type(&self) -> ListingType {
        ListingType::of(&self.id)
    }
}

/// Sale/rent classification of a listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    /// Offered for sale.
    Sale,
    /// Offered for rent.
    Rent,
}

impl ListingType {
    /// Classify an identifier: even first digest byte is sale, odd is rent.
    pub fn of(id: &PropertyId) -> Self {
        let digest = Sha256::digest(id.as_str().as_bytes());
        if digest[0] % 2 == 0 {
            Self::Sale
        } else {
            Self::Rent
        }
    }

    /// Badge label shown on a card.
    pub fn badge(self) -> &'static str {
        match self {
            Self::Sale => "For Sale",
            Self::Rent => "For Rent",
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sale => write!(f, "sale"),
            Self::Rent => write!(f, "rent"),
        }
    }
}

/// Advisory type filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeHint {
    /// Only sale listings.
    Sale,
    /// Only rent listings.
    Rent,
    /// No type restriction.
    #[default]
    Unspecified,
}

impl TypeHint {
    /// Whether a listing of type `ty` passes this hint.
    pub fn admits(self, ty: ListingType) -> bool {
        match self {
            Self::Unspecified => true,
            Self::Sale => ty == ListingType::Sale,
            Self::Rent => ty == ListingType::Rent,
        }
    }
}

impl From<ListingType> for TypeHint {
    fn from(ty: ListingType) -> Self {
        match ty {
            ListingType::Sale => Self::Sale,
            ListingType::Rent => Self::Rent,
        }
    }
}

impl FromStr for TypeHint {
    type Err = String;

    /// Parses `sale`, `rent`, or an empty string (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sale" => Ok(Self::Sale),
            "rent" => Ok(Self::Rent),
            "" | "any" | "all" => Ok(Self::Unspecified),
            other => Err(format!("unknown listing type: {other}")),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
