//! Response mapper module
//!
//! Turns raw page bodies into domain values.
//!
//! # Overview
//!
//! The [`Mapper`] trait has one adapter per item type. Single-shot lookups
//! produce a value; collection pages produce a
//! [`PageResult`](crate::pagination::PageResult) with the cursor read from
//! the page's `page_info { has_next_page, end_cursor }` block.
//!
//! Absent optional fields fall back to defaults. A body missing the
//! container that holds the cursor or the item list is a mapping error.

mod mapper;
mod wire;

pub use mapper::{JsonMapper, Mapper};

#[cfg(test)]
mod tests;

#[cfg(test)]
pub(crate) mod fixtures;
