//! # dreamprops-core
//!
//! Foundation types, errors, and logging setup shared by every DreamProps crate.
//!
//! - **Property records**: [`PropertyRecord`] as delivered by the listing endpoint
//! - **Identifiers**: [`PropertyId`], accepting string or numeric wire forms
//! - **Listing types**: [`ListingType`] / [`TypeHint`] with a deterministic
//!   sale/rent classification derived from the record identifier
//! - **Errors**: [`AppError`] taxonomy and the user-facing [`Notice`]
//! - **Logging**: [`logging::init_subscriber`]

#![deny(unsafe_code)]

pub mod errors;
pub mod ids;
pub mod logging;
pub mod property;

pub use errors::{AppError, Notice};
pub use ids::PropertyId;
pub use property::{ListingType, PropertyRecord, TypeHint};
