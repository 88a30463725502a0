//! # dreamprops-router
//!
//! Maps the location fragment to exactly one active page.
//!
//! The router's only state is the fragment itself; the current page is always
//! re-derived from it, so back/forward navigation needs no extra bookkeeping.
//! Unknown fragments are rewritten to `home` without re-entering the
//! transition.

#![deny(unsafe_code)]

pub mod page;
pub mod router;

pub use page::Page;
pub use router::{NavLink, Router, Transition, fragment_of};
