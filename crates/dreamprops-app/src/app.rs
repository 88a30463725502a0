//! Application state object and user commands.
//!
//! Every command takes `&mut self`. Store and session updates are applied in
//! one step after the awaited operation completes.

use std::sync::Arc;
use std::time::Duration;

use dreamprops_auth::{FileStorage, LocalStorage, Session, SessionManager, SignUpForm};
use dreamprops_core::{AppError, ListingType, Notice, TypeHint};
use dreamprops_listings::{DataLoader, HttpClient, LoadState, PropertyStore, ReqwestHttpClient};
use dreamprops_router::{Page, Router, Transition};
use dreamprops_settings::DreamPropsSettings;
use tracing::{debug, info};

use crate::cards::PropertyCard;
use crate::presenter::{Presenter, Section, SectionContent};

/// Owns every component and the presentation hooks.
pub struct App<P> {
    settings: DreamPropsSettings,
    store: PropertyStore,
    loader: DataLoader,
    router: Router,
    sessions: SessionManager,
    presenter: P,
    tab: ListingType,
}

impl<P: Presenter> App<P> {
    /// Wire an application from explicit collaborators.
    pub fn new(
        settings: DreamPropsSettings,
        http: Arc<dyn HttpClient>,
        storage: Arc<dyn LocalStorage>,
        presenter: P,
    ) -> Self {
        let store = PropertyStore::new(settings.listing.page_size);
        let loader = DataLoader::new(http, settings.api.endpoint.clone());
        let router = Router::new(&settings.routing.extra_pages);
        let sessions = SessionManager::new(
            storage,
            settings.auth.storage_key.clone(),
            Duration::from_millis(settings.auth.simulated_delay_ms),
        );

        Self {
            settings,
            store,
            loader,
            router,
            sessions,
            presenter,
            tab: ListingType::Sale,
        }
    }

    /// Wire an application with the `reqwest` client and file storage.
    pub fn from_settings(settings: DreamPropsSettings, presenter: P) -> Self {
        let timeout = settings.api.request_timeout_ms.map(Duration::from_millis);
        let http: Arc<dyn HttpClient> =
            Arc::new(ReqwestHttpClient::new(&settings.api.user_agent, timeout));
        let storage: Arc<dyn LocalStorage> =
            Arc::new(FileStorage::in_dir(&settings.storage.data_dir));
        Self::new(settings, http, storage, presenter)
    }

    // ── Startup ─────────────────────────────────────────────────────

    /// Restore the session, fetch the listings, then route to `location`.
    ///
    /// A failed fetch is reported through the banner and returned, but the
    /// initial page is still activated so the app stays usable.
    pub async fn start(&mut self, location: Option<&str>) -> Result<usize, AppError> {
        let _ = self.restore_session();

        debug!(endpoint = self.loader.endpoint(), "fetching listings");
        let presenter = &mut self.presenter;
        let loaded = self
            .loader
            .fetch_all(&mut self.store, |state| presenter.set_load_state(state))
            .await
            .map_err(AppError::from);

        if loaded.is_ok() {
            self.render_home();
        }

        let transition = self.router.start(location);
        self.apply_transition(&transition);
        loaded
    }

    /// Rehydrate the persisted session and render the header.
    pub fn restore_session(&mut self) -> Option<&Session> {
        let _ = self.sessions.restore();
        self.presenter.render_auth(self.sessions.current_session());
        self.sessions.current_session()
    }

    // ── Navigation ──────────────────────────────────────────────────

    /// Handle a fragment change.
    pub fn navigate(&mut self, location: &str) -> Transition {
        let transition = self.router.navigate(location);
        if transition.redirected {
            let _ = self.report(AppError::NavigationMiss(location.to_string()));
        }
        self.apply_transition(&transition);
        transition
    }

    fn apply_transition(&mut self, transition: &Transition) {
        let nav = self.router.nav_links();
        self.presenter.activate_page(&transition.page, &nav);
        if transition.render_listing {
            self.render_listing();
        }
    }

    // ── Listing commands ────────────────────────────────────────────

    /// Search from the home page: open the listing with the filter applied.
    pub fn hero_search(&mut self, term: &str, hint: TypeHint) {
        let _ = self.navigate(Page::Properties.id());
        self.apply_filter(term, hint);
    }

    /// Apply a search/type filter to the full listing.
    pub fn apply_filter(&mut self, term: &str, hint: TypeHint) {
        self.store.apply_filter(term, hint);
        self.render_listing();
    }

    /// Remove the filter from the full listing.
    pub fn clear_filter(&mut self) {
        self.store.clear_filter();
        self.render_listing();
    }

    /// Jump to page `n`. Returns whether the page changed.
    pub fn change_page(&mut self, n: usize) -> bool {
        let changed = self.store.go_to_page(n);
        if changed {
            self.render_listing();
        }
        changed
    }

    /// Switch the home page's sale/rent tab.
    pub fn show_tab(&mut self, tab: ListingType) {
        self.tab = tab;
        self.render_by_type();
    }

    // ── Session commands ────────────────────────────────────────────

    /// Simulated sign-in; on success returns to the home page.
    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<(), AppError> {
        let signed_in = self.sessions.sign_in(email, password).await.map(|_| ());
        if let Err(err) = signed_in {
            return Err(self.report(err.into()));
        }

        self.presenter.render_auth(self.sessions.current_session());
        self.refresh_cards();
        self.presenter
            .show_notice(&Notice::success("Login successful! Welcome back."));
        let _ = self.navigate(Page::Home.id());
        self.presenter.dismiss_notice();
        Ok(())
    }

    /// Simulated registration; on success sends the user to sign in.
    pub async fn sign_up(&mut self, form: &SignUpForm) -> Result<(), AppError> {
        if let Err(err) = self.sessions.sign_up(form).await {
            return Err(self.report(err.into()));
        }

        self.presenter.show_notice(&Notice::success(
            "Account created successfully! Please log in to continue.",
        ));
        let _ = self.navigate(Page::Login.id());
        self.presenter.dismiss_notice();
        Ok(())
    }

    /// Sign out and return to the home page.
    pub fn sign_out(&mut self) -> Result<(), AppError> {
        if let Err(err) = self.sessions.sign_out() {
            return Err(self.report(err.into()));
        }

        self.presenter.render_auth(None);
        self.refresh_cards();
        self.presenter
            .show_notice(&Notice::success("You have been logged out successfully."));
        let _ = self.navigate(Page::Home.id());
        self.presenter.dismiss_notice();
        Ok(())
    }

    /// "Login to View Contact" was pressed on a card.
    pub fn request_contact(&mut self) {
        self.presenter.show_notice(&Notice::new(
            "Login Required",
            "Please log in to view property contact information.",
        ));
        let _ = self.navigate(Page::Login.id());
        self.presenter.dismiss_notice();
    }

    /// Simulated newsletter subscription.
    pub async fn subscribe_newsletter(&mut self, email: &str) -> Result<(), AppError> {
        if let Err(err) = self.sessions.subscribe_newsletter(email).await {
            return Err(self.report(err.into()));
        }

        self.presenter
            .show_notice(&Notice::success("Thank you for subscribing to our newsletter!"));
        self.presenter.dismiss_notice();
        Ok(())
    }

    /// Close the notification dialog.
    pub fn dismiss_notice(&mut self) {
        self.presenter.dismiss_notice();
    }

    // ── Rendering ───────────────────────────────────────────────────

    fn signed_in(&self) -> bool {
        self.sessions.is_signed_in()
    }

    fn render_home(&mut self) {
        self.render_featured();
        self.render_by_type();
    }

    fn render_featured(&mut self) {
        let signed_in = self.signed_in();
        let cards = self
            .store
            .featured(self.settings.listing.featured_count)
            .iter()
            .map(|record| PropertyCard::featured(record, signed_in))
            .collect();
        let content = SectionContent::for_section(Section::Featured, cards);
        self.presenter.render_section(Section::Featured, &content);
    }

    fn render_by_type(&mut self) {
        let signed_in = self.signed_in();
        let cards = self
            .store
            .by_type(self.tab.into(), self.settings.listing.by_type_count)
            .into_iter()
            .map(|record| PropertyCard::typed(record, signed_in))
            .collect();
        let section = Section::ByType(self.tab);
        let content = SectionContent::for_section(section, cards);
        self.presenter.render_section(section, &content);
    }

    fn render_listing(&mut self) {
        let signed_in = self.signed_in();
        let cards = self
            .store
            .page()
            .into_iter()
            .map(|record| PropertyCard::typed(record, signed_in))
            .collect();
        let content = SectionContent::for_section(Section::Listing, cards);
        self.presenter.render_section(Section::Listing, &content);
        self.presenter
            .render_pagination(self.store.pagination().as_ref());
    }

    /// Re-render every visible card after the contact visibility changed.
    fn refresh_cards(&mut self) {
        if self.store.is_empty() {
            return;
        }
        self.render_home();
        if self.router.current_page() == Page::Properties {
            self.render_listing();
        }
    }

    fn report(&mut self, err: AppError) -> AppError {
        if !err.is_user_facing() {
            debug!(error = %err, "suppressed error");
            return err;
        }
        info!(error = %err, "reporting error to user");
        if let Some(notice) = err.notice() {
            self.presenter.show_notice(&notice);
        }
        err
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// Loaded settings.
    pub fn settings(&self) -> &DreamPropsSettings {
        &self.settings
    }

    /// Property store.
    pub fn store(&self) -> &PropertyStore {
        &self.store
    }

    /// Router.
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Signed-in session, if any.
    pub fn session(&self) -> Option<&Session> {
        self.sessions.current_session()
    }

    /// Startup fetch progress.
    pub fn load_state(&self) -> &LoadState {
        self.loader.state()
    }

    /// Active home tab.
    pub fn tab(&self) -> ListingType {
        self.tab
    }

    /// Presentation hooks.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Presentation hooks, mutably.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
