//! Result ordering and pagination.

use std::cmp::Ordering;

use musika_core::Listing;

use crate::filter::SortKey;

/// One page sliced out of a sorted result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Listings on this page
    pub items: Vec<Listing>,
    /// Matches before pagination
    pub total: usize,
    /// 1-based page number actually served
    pub page: usize,
    /// Total pages at this limit
    pub total_pages: usize,
}

/// Re-sort listings in place for the explicit sort keys.
///
/// `Relevance` keeps the scorer's descending order (or catalog order when
/// no query ran). `Distance` is reserved and also keeps the incoming
/// order. All sorts are stable, so equal keys preserve the prior order.
pub fn sort_listings(listings: &mut [Listing], sort_by: SortKey) {
    match sort_by {
        SortKey::Relevance | SortKey::Distance => {}
        SortKey::PriceAsc => listings.sort_by(|a, b| {
            a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal)
        }),
        SortKey::PriceDesc => listings.sort_by(|a, b| {
            b.price.partial_cmp(&a.price).unwrap_or(Ordering::Equal)
        }),
        SortKey::Newest => listings.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Rating => listings.sort_by(|a, b| {
            b.seller_rating
                .partial_cmp(&a.seller_rating)
                .unwrap_or(Ordering::Equal)
        }),
    }
}

/// Slice out one 1-based page.
///
/// `page == 0` is served as page 1 and `limit == 0` as 1. A page past the
/// end yields an empty slice with `total` and `total_pages` still
/// reflecting the full match count.
#[must_use]
pub fn paginate(listings: Vec<Listing>, page: usize, limit: usize) -> Page {
    let page = page.max(1);
    let limit = limit.max(1);

    let total = listings.len();
    let total_pages = total.div_ceil(limit);
    let start = (page - 1).saturating_mul(limit);

    let items: Vec<Listing> = listings.into_iter().skip(start).take(limit).collect();

    Page {
        items,
        total,
        page,
        total_pages,
    }
}
