//! Rendering hooks.
//!
//! The core never draws anything itself. It hands view-models to a
//! [`Presenter`]; a terminal, a web frontend, or a test recorder decides what
//! to do with them.

use dreamprops_auth::Session;
use dreamprops_core::{ListingType, Notice};
use dreamprops_listings::{LoadState, PaginationView};
use dreamprops_router::{NavLink, Page};
use serde::Serialize;

use crate::cards::PropertyCard;

/// A region of the UI that shows property cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    /// Featured strip on the home page.
    Featured,
    /// Sale/rent tab on the home page.
    ByType(ListingType),
    /// Paginated full listing.
    Listing,
}

impl Section {
    /// Placeholder shown when the section has no cards.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Featured => "No featured properties available.",
            Self::ByType(_) => "No properties available for this type.",
            Self::Listing => "No properties found matching your criteria.",
        }
    }
}

/// What a section displays.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum SectionContent {
    /// One or more cards.
    Cards(Vec<PropertyCard>),
    /// Empty-state message.
    Placeholder(String),
}

impl SectionContent {
    /// Cards, or the section's placeholder when there are none.
    pub fn for_section(section: Section, cards: Vec<PropertyCard>) -> Self {
        if cards.is_empty() {
            Self::Placeholder(section.placeholder().to_string())
        } else {
            Self::Cards(cards)
        }
    }
}

/// Presentation-layer collaborator.
pub trait Presenter {
    /// Show `page` and hide every other page.
    fn activate_page(&mut self, page: &Page, nav: &[NavLink]);

    /// Replace the contents of a card section.
    fn render_section(&mut self, section: Section, content: &SectionContent);

    /// Replace the pagination bar; `None` hides it.
    fn render_pagination(&mut self, pagination: Option<&PaginationView>);

    /// Update the loading/error banner.
    fn set_load_state(&mut self, state: &LoadState);

    /// Open the notification dialog.
    fn show_notice(&mut self, notice: &Notice);

    /// Close the notification dialog.
    fn dismiss_notice(&mut self);

    /// Update the signed-in/out header.
    fn render_auth(&mut self, session: Option<&Session>);
}
