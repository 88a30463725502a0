//! Property card view-models.

use dreamprops_core::PropertyRecord;
use serde::Serialize;

/// Badge on featured cards.
pub const FEATURED_BADGE: &str = "Featured";

/// Fallback image service used when a record has no image.
const FALLBACK_IMAGE_BASE: &str = "https://picsum.photos/320/200?random=";

/// Owner contact slot on a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum ContactView {
    /// Signed in: the contact number.
    Visible(String),
    /// Signed out: a "Login to View Contact" prompt.
    LoginToView,
}

/// Everything the presentation layer needs to draw one listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyCard {
    /// Record identifier.
    pub id: String,
    /// Display name.
    pub title: String,
    /// `"<building> <city>, <state>, <country>"`.
    pub location: String,
    /// Owner display name.
    pub owner: String,
    /// Badge text.
    pub badge: String,
    /// Image URL, never empty.
    pub image_url: String,
    /// Contact slot.
    pub contact: ContactView,
}

impl PropertyCard {
    /// Card for `record` with an explicit badge.
    pub fn new(record: &PropertyRecord, badge: &str, signed_in: bool) -> Self {
        let image_url = match record.image.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => format!("{FALLBACK_IMAGE_BASE}{}", record.id),
        };
        let contact = if signed_in {
            ContactView::Visible(record.contact_number.clone())
        } else {
            ContactView::LoginToView
        };

        Self {
            id: record.id.to_string(),
            title: record.name.clone(),
            location: format!(
                "{} {}, {}, {}",
                record.building_number, record.city, record.state, record.country
            ),
            owner: record.owner_name.clone(),
            badge: badge.to_string(),
            image_url,
            contact,
        }
    }

    /// Card badged with the record's derived listing type.
    pub fn typed(record: &PropertyRecord, signed_in: bool) -> Self {
        Self::new(record, record.listing_type().badge(), signed_in)
    }

    /// Card badged as featured.
    pub fn featured(record: &PropertyRecord, signed_in: bool) -> Self {
        Self::new(record, FEATURED_BADGE, signed_in)
    }
}
