//! Pagination engine
//!
//! One walk loop shared by every paginated resource.

use super::types::{Cursor, PageObject, PageResult};
use crate::error::Result;
use crate::http::{HttpRequest, Transport};
use tracing::{debug, warn};

/// A paginated collection addressed by a selector
pub trait PagedResource: Send + Sync {
    /// Value scoping the walk to one target (user id, tag name, ...)
    type Selector: Sync + ?Sized;
    /// Item type of each page
    type Item: Send;

    /// Short name used in logs
    fn name(&self) -> &str;

    /// Cursor a walk from the beginning starts at
    fn start_cursor(&self) -> Cursor {
        Cursor::first_page()
    }

    /// Build the request for the page addressed by `token`
    fn build_request(&self, selector: &Self::Selector, token: &str) -> Result<HttpRequest>;

    /// Map one page body
    fn map_page(&self, body: &[u8]) -> Result<PageResult<Self::Item>>;
}

/// Drives page walks over a transport
pub struct Paginator<'a, T: ?Sized> {
    transport: &'a T,
}

impl<'a, T: Transport + ?Sized> Paginator<'a, T> {
    /// Create a paginator sending through `transport`
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Walk from the resource's start cursor
    pub async fn paginate_from_start<R: PagedResource>(
        &self,
        resource: &R,
        selector: &R::Selector,
        max_pages: usize,
    ) -> Result<PageObject<R::Item>> {
        self.paginate(resource, selector, max_pages, resource.start_cursor())
            .await
    }

    /// Fetch at most `max_pages` pages starting at `start`.
    ///
    /// Pages are fetched one after another. The first failing request or
    /// unmappable page aborts the walk and the items gathered so far are
    /// dropped. A terminal `start` cursor or a zero budget sends nothing.
    pub async fn paginate<R: PagedResource>(
        &self,
        resource: &R,
        selector: &R::Selector,
        max_pages: usize,
        start: Cursor,
    ) -> Result<PageObject<R::Item>> {
        let mut aggregated = PageObject::new(start);
        let mut pages_fetched = 0;

        while aggregated.cursor.has_next && pages_fetched < max_pages {
            let page = match self
                .fetch_page(resource, selector, &aggregated.cursor.token)
                .await
            {
                Ok(page) => page,
                Err(e) => {
                    warn!(
                        "{}: walk aborted on page {}, dropping {} items: {e}",
                        resource.name(),
                        pages_fetched + 1,
                        aggregated.len()
                    );
                    return Err(e);
                }
            };

            pages_fetched += 1;
            debug!(
                "{}: page {pages_fetched} returned {} items, has_next={}",
                resource.name(),
                page.items.len(),
                page.cursor.has_next
            );

            aggregated.push_page(page);
        }

        debug!(
            "{}: walk finished after {pages_fetched} pages with {} items (more: {})",
            resource.name(),
            aggregated.len(),
            aggregated.has_more()
        );

        Ok(aggregated)
    }

    async fn fetch_page<R: PagedResource>(
        &self,
        resource: &R,
        selector: &R::Selector,
        token: &str,
    ) -> Result<PageResult<R::Item>> {
        let request = resource.build_request(selector, token)?;
        let body = self.transport.send(&request).await?;
        resource.map_page(&body)
    }
}
