//! Pagination module
//!
//! Cursor-driven walks over paginated collections.
//!
//! # Overview
//!
//! A collection is described by a [`PagedResource`]: how to build the request
//! for one page given a cursor token, how to map the page body, and which
//! cursor a fresh walk starts from. [`Paginator::paginate`] runs the same
//! loop for every resource:
//!
//! ```text
//! cursor = start
//! while cursor.has_next && pages < max_pages:
//!     page   = map(send(build(selector, cursor.token)))
//!     items += page.items
//!     cursor = page.cursor
//! ```
//!
//! The returned [`PageObject`] carries the last cursor, so a walk stopped by
//! its page budget can be resumed exactly where it ended.

mod engine;
mod types;

pub use engine::{PagedResource, Paginator};
pub use types::{Cursor, PageObject, PageResult};
