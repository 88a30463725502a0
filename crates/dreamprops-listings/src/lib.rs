//! # dreamprops-listings
//!
//! The client-side listing pipeline: fetch → filter → paginate.
//!
//! - [`store::PropertyStore`]: the full result set plus the filtered,
//!   paginated view over it
//! - [`pagination::PaginationView`]: page-button model for the listing page
//! - [`loader::DataLoader`]: one-shot fetch of the property collection
//! - [`http::HttpClient`]: transport seam, backed by `reqwest` in production

#![deny(unsafe_code)]

pub mod errors;
pub mod http;
pub mod loader;
pub mod pagination;
pub mod store;

pub use errors::LoadError;
pub use http::{HttpClient, HttpResponse, ReqwestHttpClient};
pub use loader::{DataLoader, LoadState};
pub use pagination::PaginationView;
pub use store::{ActiveFilter, PropertyStore};
