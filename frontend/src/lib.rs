//! Personal finance tracker running in the browser.
//!
//! Categories and income/expense transactions are kept in a remote JSON store and cached
//! in two reducer-backed slices that every page reads from.

pub mod api;
mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod forms;
pub mod ledger;
pub mod model;
mod pages;
pub mod store;

pub use app::App;
pub use error::{ApiError, FormError};
