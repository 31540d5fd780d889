//! Pagination types
//!
//! Cursor and page containers shared by the engine and the mappers.

use serde::{Deserialize, Serialize};

/// Position within a paginated collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    /// Whether another page can be requested
    pub has_next: bool,
    /// Opaque continuation token, meaning depends on the resource
    pub token: String,
}

impl Cursor {
    /// Create a cursor
    pub fn new(has_next: bool, token: impl Into<String>) -> Self {
        Self {
            has_next,
            token: token.into(),
        }
    }

    /// Start of a collection addressed by an empty token
    pub fn first_page() -> Self {
        Self::new(true, "")
    }

    /// Start of a collection addressed by a numeric offset
    pub fn offset_start() -> Self {
        Self::new(true, "0")
    }

    /// Terminal cursor
    pub fn end() -> Self {
        Self::new(false, "")
    }

    /// Check if this is the terminal cursor
    pub fn is_end(&self) -> bool {
        !self.has_next
    }
}

/// One page as produced by a mapper
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    /// Items in server order, possibly empty
    pub items: Vec<T>,
    /// Cursor for the following page
    pub cursor: Cursor,
    /// Collection size reported by the server, if any
    pub count: Option<u64>,
}

impl<T> PageResult<T> {
    /// Create a page
    pub fn new(items: Vec<T>, cursor: Cursor) -> Self {
        Self {
            items,
            cursor,
            count: None,
        }
    }

    /// Set the reported collection size
    #[must_use]
    pub fn with_count(mut self, count: Option<u64>) -> Self {
        self.count = count;
        self
    }
}

/// Items accumulated across one walk, plus the cursor it stopped at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageObject<T> {
    /// Items of every fetched page, in fetch order
    pub items: Vec<T>,
    /// Last observed cursor
    pub cursor: Cursor,
    /// Collection size reported by the most recent page that had one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

impl<T> PageObject<T> {
    /// Create an empty aggregate positioned at `cursor`
    pub fn new(cursor: Cursor) -> Self {
        Self {
            items: Vec::new(),
            cursor,
            count: None,
        }
    }

    /// Append one page, adopting its cursor
    pub fn push_page(&mut self, page: PageResult<T>) {
        self.items.extend(page.items);
        self.cursor = page.cursor;
        if page.count.is_some() {
            self.count = page.count;
        }
    }

    /// True when the walk stopped on its page budget rather than the end
    pub fn has_more(&self) -> bool {
        self.cursor.has_next
    }

    /// Number of items collected
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if no items were collected
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> From<PageResult<T>> for PageObject<T> {
    fn from(page: PageResult<T>) -> Self {
        Self {
            items: page.items,
            cursor: page.cursor,
            count: page.count,
        }
    }
}
