//! Page identifiers.

use std::fmt;

use serde::Serialize;

/// A routable page.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Page {
    /// Landing page with featured and by-type strips.
    Home,
    /// Full paginated listing.
    Properties,
    /// Sign-in form.
    Login,
    /// Registration form.
    Signup,
    /// Any additionally declared page.
    Other(String),
}

impl Page {
    /// Pages every router declares.
    pub const BUILT_IN: [Page; 4] = [Page::Home, Page::Properties, Page::Login, Page::Signup];

    /// Map a fragment identifier to a page (declared or not).
    pub fn from_id(id: &str) -> Self {
        match id {
            "home" => Self::Home,
            "properties" => Self::Properties,
            "login" => Self::Login,
            "signup" => Self::Signup,
            other => Self::Other(other.to_string()),
        }
    }

    /// Fragment identifier of this page.
    pub fn id(&self) -> &str {
        match self {
            Self::Home => "home",
            Self::Properties => "properties",
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Other(id) => id,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl From<Page> for String {
    fn from(page: Page) -> Self {
        page.id().to_string()
    }
}
