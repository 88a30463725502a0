//! # dreamprops-app
//!
//! The explicitly owned application state.
//!
//! [`App`] holds one Property Store, Data Loader, Router, and Session Manager
//! together with a [`Presenter`] (the rendering hooks). User interactions are
//! plain command methods on [`App`]; each mutates one component and
//! re-renders what changed.

#![deny(unsafe_code)]

pub mod app;
pub mod cards;
pub mod presenter;
pub mod testing;

pub use app::App;
pub use cards::{ContactView, PropertyCard};
pub use presenter::{Presenter, Section, SectionContent};
