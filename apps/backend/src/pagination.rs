//! Fixed-size page slicing for list endpoints.

use thiserror::Error;

pub const ITEMS_PER_PAGE: usize = 10;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationError {
    /// No items fall on the requested page. An empty collection has no
    /// pages at all, so every page of it is out of range.
    #[error("page {page} is out of range (last page {last_page})")]
    OutOfRange { page: u64, last_page: u64 },
}

/// One page cut from a larger ordered collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

/// Cut page `page` (1-based) of `page_size` items out of `items`.
pub fn paginate<T>(items: Vec<T>, page: u64, page_size: usize) -> Result<Page<T>, PaginationError> {
    let total = items.len();
    let last_page = total.div_ceil(page_size.max(1)) as u64;

    if page == 0 || page > last_page {
        return Err(PaginationError::OutOfRange { page, last_page });
    }

    // page <= last_page, so start < total and the cast cannot truncate.
    let start = (page as usize - 1) * page_size;
    let end = (start + page_size).min(total);

    let items = items.into_iter().skip(start).take(end - start).collect();
    Ok(Page { items, total })
}
