//! Pure helper functions used across the application.
//!
//! - [`slug`] - Slug derivation and protocol stripping
//! - [`markup`] - `<li>` list handling for the appeal field
//! - [`caption`] - Social caption template and length cap
//! - [`cancel`] - Cancellation-aware awaiting

pub mod cancel;
pub mod caption;
pub mod markup;
pub mod slug;
