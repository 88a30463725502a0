//! A [`Presenter`] that records every call, for tests and headless runs.

use dreamprops_auth::Session;
use dreamprops_core::Notice;
use dreamprops_listings::{LoadState, PaginationView};
use dreamprops_router::{NavLink, Page};

use crate::presenter::{Presenter, Section, SectionContent};

/// One recorded presenter call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PresenterEvent {
    /// [`Presenter::activate_page`].
    Activated(Page),
    /// [`Presenter::render_section`].
    Section(Section, SectionContent),
    /// [`Presenter::render_pagination`].
    Pagination(Option<PaginationView>),
    /// [`Presenter::set_load_state`].
    Load(LoadState),
    /// [`Presenter::show_notice`].
    Notice(Notice),
    /// [`Presenter::dismiss_notice`].
    Dismissed,
    /// [`Presenter::render_auth`].
    Auth(Option<Session>),
}

/// Records presenter calls in order.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    /// Calls in the order they were made.
    pub events: Vec<PresenterEvent>,
}

impl RecordingPresenter {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Pages activated, in order.
    pub fn activations(&self) -> Vec<&Page> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PresenterEvent::Activated(page) => Some(page),
                _ => None,
            })
            .collect()
    }

    /// Most recent content rendered into `section`.
    pub fn last_section(&self, section: Section) -> Option<&SectionContent> {
        self.events.iter().rev().find_map(|e| match e {
            PresenterEvent::Section(s, content) if *s == section => Some(content),
            _ => None,
        })
    }

    /// Notices shown, in order.
    pub fn notices(&self) -> Vec<&Notice> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PresenterEvent::Notice(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    /// Load states reported, in order.
    pub fn load_states(&self) -> Vec<&LoadState> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PresenterEvent::Load(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    /// Most recent pagination bar.
    pub fn last_pagination(&self) -> Option<&Option<PaginationView>> {
        self.events.iter().rev().find_map(|e| match e {
            PresenterEvent::Pagination(p) => Some(p),
            _ => None,
        })
    }
}

impl Presenter for RecordingPresenter {
    fn activate_page(&mut self, page: &Page, _nav: &[NavLink]) {
        self.events.push(PresenterEvent::Activated(page.clone()));
    }

    fn render_section(&mut self, section: Section, content: &SectionContent) {
        self.events
            .push(PresenterEvent::Section(section, content.clone()));
    }

    fn render_pagination(&mut self, pagination: Option<&PaginationView>) {
        self.events
            .push(PresenterEvent::Pagination(pagination.cloned()));
    }

    fn set_load_state(&mut self, state: &LoadState) {
        self.events.push(PresenterEvent::Load(state.clone()));
    }

    fn show_notice(&mut self, notice: &Notice) {
        self.events.push(PresenterEvent::Notice(notice.clone()));
    }

    fn dismiss_notice(&mut self) {
        self.events.push(PresenterEvent::Dismissed);
    }

    fn render_auth(&mut self, session: Option<&Session>) {
        self.events.push(PresenterEvent::Auth(session.cloned()));
    }
}
