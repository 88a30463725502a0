//! Fragment-driven page state machine.

use serde::Serialize;
use tracing::debug;

use crate::page::Page;

/// Fragment that every unknown or empty location resolves to.
pub const HOME_FRAGMENT: &str = "home";

/// Extract the fragment from a location string.
///
/// Accepts a bare identifier (`properties`), a fragment (`#properties`), or a
/// full location (`https://host/index.html#properties`). Returns an empty
/// string when a location has nothing after its `#`. Whitespace is kept, so
/// `#properties ` names no declared page.
pub fn fragment_of(location: &str) -> &str {
    match location.split_once('#') {
        Some((_, after)) => after,
        None => location,
    }
}

/// Outcome of a fragment change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    /// The single page that is now active.
    pub page: Page,
    /// The requested fragment named no declared page and was rewritten.
    pub redirected: bool,
    /// The page shows the full listing and must be re-rendered.
    pub render_listing: bool,
}

/// Navigation link with its highlight state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Target page.
    pub page: Page,
    /// Whether the link points at the current page.
    pub active: bool,
}

/// Maps the location fragment to exactly one active page.
#[derive(Clone, Debug)]
pub struct Router {
    declared: Vec<Page>,
    fragment: String,
}

impl Router {
    /// Router declaring the built-in pages plus `extra_pages`.
    pub fn new<I, S>(extra_pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut declared: Vec<Page> = Page::BUILT_IN.to_vec();
        for id in extra_pages {
            let id = fragment_of(id.as_ref());
            if id.is_empty() {
                continue;
            }
            let page = Page::from_id(id);
            if !declared.contains(&page) {
                declared.push(page);
            }
        }
        Self {
            declared,
            fragment: HOME_FRAGMENT.to_string(),
        }
    }

    /// Resolve the startup location. Absent or empty means `home`.
    pub fn start(&mut self, location: Option<&str>) -> Transition {
        self.navigate(location.unwrap_or(HOME_FRAGMENT))
    }

    /// Handle a fragment change (user or programmatic).
    pub fn navigate(&mut self, location: &str) -> Transition {
        let requested = match fragment_of(location) {
            "" => HOME_FRAGMENT,
            id => id,
        };

        if self.is_declared(requested) {
            let page = Page::from_id(requested);
            self.fragment = requested.to_string();
            debug!(page = %page, "activated page");
            return Transition {
                render_listing: page == Page::Properties,
                page,
                redirected: false,
            };
        }

        // The rewrite to `home` is applied directly; it does not re-enter
        // `navigate`.
        debug!(fragment = requested, "unknown route, redirecting home");
        self.fragment = HOME_FRAGMENT.to_string();
        Transition {
            page: Page::Home,
            redirected: true,
            render_listing: false,
        }
    }

    /// Current fragment.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Current page, derived from the fragment.
    pub fn current_page(&self) -> Page {
        Page::from_id(&self.fragment)
    }

    /// Whether `id` names a declared page.
    pub fn is_declared(&self, id: &str) -> bool {
        self.declared.contains(&Page::from_id(id))
    }

    /// Declared pages, built-ins first.
    pub fn pages(&self) -> &[Page] {
        &self.declared
    }

    /// Navigation links with the current page highlighted.
    pub fn nav_links(&self) -> Vec<NavLink> {
        let current = self.current_page();
        self.pages()
            .iter()
            .map(|page| NavLink {
                active: *page == current,
                page: page.clone(),
            })
            .collect()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(std::iter::empty::<&str>())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fragment_extraction() {
        assert_eq!(fragment_of("#properties"), "properties");
        assert_eq!(fragment_of("properties"), "properties");
        assert_eq!(fragment_of("https://x.test/index.html#login"), "login");
        assert_eq!(fragment_of("https://x.test/#"), "");
        assert_eq!(fragment_of(""), "");
    }

    #[test]
    fn start_defaults_to_home() {
        let mut router = Router::default();
        let t = router.start(None);
        assert_eq!(t.page, Page::Home);
        assert!(!t.redirected);
        assert_eq!(router.fragment(), "home");
    }

    #[test]
    fn empty_fragment_is_home_without_redirect() {
        let mut router = Router::default();
        let t = router.start(Some("#"));
        assert_eq!(t.page, Page::Home);
        assert!(!t.redirected);
    }

    #[test]
    fn properties_requests_listing_render() {
        let mut router = Router::default();
        let t = router.navigate("#properties");
        assert_eq!(t.page, Page::Properties);
        assert!(t.render_listing);
        assert_eq!(router.current_page(), Page::Properties);
    }

    #[test]
    fn other_pages_do_not_render_listing() {
        let mut router = Router::default();
        assert!(!router.navigate("login").render_listing);
        assert!(!router.navigate("signup").render_listing);
    }

    #[test]
    fn unknown_fragment_redirects_home_once() {
        let mut router = Router::default();
        let _ = router.navigate("properties");
        let t = router.navigate("#nonexistent");
        assert_eq!(
            t,
            Transition {
                page: Page::Home,
                redirected: true,
                render_listing: false,
            }
        );
        assert_eq!(router.fragment(), "home");
        assert_eq!(router.current_page(), Page::Home);
    }

    #[test]
    fn extra_pages_are_routable() {
        let mut router = Router::new(["about", "#contact", ""]);
        assert!(router.is_declared("about"));
        assert!(router.is_declared("contact"));
        let t = router.navigate("about");
        assert_eq!(t.page, Page::Other("about".to_string()));
        assert!(!t.redirected);
        assert_eq!(router.pages().len(), 6);
    }

    #[test]
    fn duplicate_extra_pages_are_ignored() {
        let router = Router::new(["home", "about", "about"]);
        assert_eq!(router.pages().len(), 5);
    }

    #[test]
    fn nav_links_highlight_current() {
        let mut router = Router::default();
        let _ = router.navigate("login");
        let active: Vec<_> = router
            .nav_links()
            .into_iter()
            .filter(|l| l.active)
            .map(|l| l.page)
            .collect();
        assert_eq!(active, vec![Page::Login]);
    }

    #[test]
    fn surrounding_whitespace_is_not_stripped() {
        let mut router = Router::default();
        let t = router.navigate("#properties ");
        assert!(t.redirected);
        assert_eq!(t.page, Page::Home);
        assert_eq!(fragment_of("# login"), " login");
    }

    #[test]
    fn fragments_are_case_sensitive() {
        let mut router = Router::default();
        assert!(router.navigate("Properties").redirected);
    }

    proptest! {
        #[test]
        fn fragment_always_names_a_declared_page(
            steps in proptest::collection::vec("[a-z#]{0,12}", 0..20)
        ) {
            let mut router = Router::new(["about"]);
            for step in &steps {
                let t = router.navigate(step);
                prop_assert!(router.is_declared(router.fragment()));
                prop_assert_eq!(router.current_page(), t.page);
            }
        }
    }
}
