//! Plain-text presenter.
//!
//! Collects what the application asks to draw and renders a single screen
//! once the command has finished.

use std::fmt::Write as _;

use dreamprops_app::{ContactView, Presenter, PropertyCard, Section, SectionContent};
use dreamprops_auth::Session;
use dreamprops_core::{ListingType, Notice};
use dreamprops_listings::{LoadState, PaginationView};
use dreamprops_router::{NavLink, Page};

/// Buffers presenter calls and renders them as text.
#[derive(Debug, Default)]
pub struct TerminalPresenter {
    page: Option<Page>,
    nav: Vec<NavLink>,
    sections: Vec<(Section, SectionContent)>,
    pagination: Option<PaginationView>,
    banner: Option<String>,
    user: Option<String>,
    notices: Vec<Notice>,
}

impl TerminalPresenter {
    /// Empty presenter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the current screen.
    pub fn screen(&self) -> String {
        let mut out = String::new();
        self.write_header(&mut out);

        if let Some(banner) = &self.banner {
            let _ = writeln!(out, "\n!! {banner}");
        }
        for notice in &self.notices {
            let _ = writeln!(out, "\n[{}] {}", notice.title, notice.message);
        }

        match &self.page {
            Some(Page::Home) => {
                self.write_section(&mut out, Section::Featured, "Featured Properties");
                for ty in [ListingType::Sale, ListingType::Rent] {
                    self.write_section(&mut out, Section::ByType(ty), ty.badge());
                }
            }
            Some(Page::Properties) => {
                self.write_section(&mut out, Section::Listing, "All Properties");
                if let Some(bar) = &self.pagination {
                    let _ = writeln!(out, "\n{}", pagination_line(bar));
                }
            }
            Some(Page::Login) => out.push_str("\nSign in with your email and password.\n"),
            Some(Page::Signup) => out.push_str("\nCreate an account to view owner contacts.\n"),
            Some(Page::Other(id)) => {
                let _ = writeln!(out, "\n({id})");
            }
            None => {}
        }
        out
    }

    fn write_header(&self, out: &mut String) {
        out.push_str("DreamProps ");
        for link in &self.nav {
            if link.active {
                let _ = write!(out, " [{}]", link.page);
            } else {
                let _ = write!(out, "  {} ", link.page);
            }
        }
        match &self.user {
            Some(name) => {
                let _ = writeln!(out, "   | {name} (logout)");
            }
            None => out.push_str("   | login  signup\n"),
        }
    }

    fn write_section(&self, out: &mut String, section: Section, heading: &str) {
        let Some((_, content)) = self.sections.iter().find(|(s, _)| *s == section) else {
            return;
        };
        let _ = writeln!(out, "\n== {heading} ==");
        match content {
            SectionContent::Placeholder(text) => {
                let _ = writeln!(out, "  {text}");
            }
            SectionContent::Cards(cards) => {
                for card in cards {
                    write_card(out, card);
                }
            }
        }
    }
}

fn write_card(out: &mut String, card: &PropertyCard) {
    let contact = match &card.contact {
        ContactView::Visible(number) => number.as_str(),
        ContactView::LoginToView => "Login to View Contact",
    };
    let _ = writeln!(out, "  {} [{}]", card.title, card.badge);
    let _ = writeln!(out, "    {}", card.location);
    let _ = writeln!(out, "    Owner: {}  Contact: {contact}", card.owner);
    let _ = writeln!(out, "    {}", card.image_url);
}

fn pagination_line(bar: &PaginationView) -> String {
    let mut line = String::from(if bar.has_previous { "< Prev" } else { "(< Prev)" });
    for page in &bar.pages {
        if *page == bar.current {
            let _ = write!(line, " [{page}]");
        } else {
            let _ = write!(line, " {page}");
        }
    }
    line.push_str(if bar.has_next { " Next >" } else { " (Next >)" });
    let _ = write!(line, "   page {} of {}", bar.current, bar.total);
    line
}

impl Presenter for TerminalPresenter {
    fn activate_page(&mut self, page: &Page, nav: &[NavLink]) {
        self.page = Some(page.clone());
        self.nav = nav.to_vec();
    }

    fn render_section(&mut self, section: Section, content: &SectionContent) {
        match self.sections.iter_mut().find(|(s, _)| *s == section) {
            Some(slot) => slot.1 = content.clone(),
            None => self.sections.push((section, content.clone())),
        }
    }

    fn render_pagination(&mut self, pagination: Option<&PaginationView>) {
        self.pagination = pagination.cloned();
    }

    fn set_load_state(&mut self, state: &LoadState) {
        self.banner = match state {
            LoadState::Failed { message } => Some(message.clone()),
            _ => None,
        };
    }

    fn show_notice(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }

    fn dismiss_notice(&mut self) {
        tracing::trace!(shown = self.notices.len(), "notice dismissed");
    }

    fn render_auth(&mut self, session: Option<&Session>) {
        self.user = session.map(|s| s.name.clone());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn card(contact: ContactView) -> PropertyCard {
        PropertyCard {
            id: "7".to_string(),
            title: "Lake House".to_string(),
            location: "12 Austin, TX, USA".to_string(),
            owner: "Rae".to_string(),
            badge: "For Rent".to_string(),
            image_url: "https://picsum.photos/320/200?random=7".to_string(),
            contact,
        }
    }

    fn nav(active: &Page) -> Vec<NavLink> {
        Page::BUILT_IN
            .iter()
            .map(|page| NavLink {
                page: page.clone(),
                active: page == active,
            })
            .collect()
    }

    #[test]
    fn listing_screen_shows_cards_and_pagination() {
        let mut term = TerminalPresenter::new();
        term.activate_page(&Page::Properties, &nav(&Page::Properties));
        term.render_section(
            Section::Listing,
            &SectionContent::Cards(vec![card(ContactView::LoginToView)]),
        );
        term.render_pagination(PaginationView::build(2, 3).as_ref());

        let screen = term.screen();
        assert!(screen.contains("[properties]"));
        assert!(screen.contains("Lake House [For Rent]"));
        assert!(screen.contains("Contact: Login to View Contact"));
        assert!(screen.contains("< Prev 1 [2] 3 Next >"));
    }

    #[test]
    fn later_render_replaces_section() {
        let mut term = TerminalPresenter::new();
        term.activate_page(&Page::Home, &nav(&Page::Home));
        term.render_section(
            Section::Featured,
            &SectionContent::Placeholder("No featured properties available.".to_string()),
        );
        term.render_section(
            Section::Featured,
            &SectionContent::Cards(vec![card(ContactView::Visible("555-1".to_string()))]),
        );

        let screen = term.screen();
        assert!(!screen.contains("No featured properties available."));
        assert!(screen.contains("Contact: 555-1"));
    }

    #[test]
    fn failed_load_shows_banner_and_notices() {
        let mut term = TerminalPresenter::new();
        term.set_load_state(&LoadState::Failed {
            message: "Failed to load properties. Please try again later.".to_string(),
        });
        term.show_notice(&Notice::new("Login Required", "Please log in."));

        let screen = term.screen();
        assert!(screen.contains("!! Failed to load properties."));
        assert!(screen.contains("[Login Required] Please log in."));
    }

    #[test]
    fn header_shows_signed_in_user() {
        let mut term = TerminalPresenter::new();
        term.render_auth(Some(&Session::from_email("ann@x.com")));
        assert!(term.screen().contains("| Ann (logout)"));
        term.render_auth(None);
        assert!(term.screen().contains("| login  signup"));
    }
}
