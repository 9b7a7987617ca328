//! Marketplace view over the catalog: category filter, price sort, and
//! fixed-size pagination.

use crate::generate::Catalog;
use crate::model::{Category, Product};
use log::debug;
use std::sync::Arc;

/// Category selection applied to the record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Pass every record through unchanged.
    #[default]
    All,
    /// Exact match on the category field.
    Category(Category),
}

impl CategoryFilter {
    fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => product.category == *category,
        }
    }
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Keep insertion order; no reordering.
    #[default]
    InsertionOrder,
    /// Price ascending, ties keep insertion order.
    PriceAscending,
    /// Price descending, ties keep insertion order.
    PriceDescending,
}

/// Paged, filtered, sorted view over a shared catalog.
///
/// Pages are 1-based. Changing the filter or sort resets the view to page 1;
/// page requests outside the valid range leave the state unchanged. An empty
/// filtered result is a valid zero-page state, not an error.
#[derive(Debug, Clone)]
pub struct CatalogView {
    catalog: Arc<Catalog>,
    page_size: usize,
    filter: CategoryFilter,
    sort: SortMode,
    page: usize,
}

impl CatalogView {
    /// Create a view showing page 1 of the unfiltered catalog.
    pub fn new(catalog: Arc<Catalog>, page_size: usize) -> Self {
        Self {
            catalog,
            page_size: page_size.max(1),
            filter: CategoryFilter::All,
            sort: SortMode::InsertionOrder,
            page: 1,
        }
    }

    /// Current category filter.
    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// Current sort mode.
    pub fn sort(&self) -> SortMode {
        self.sort
    }

    /// Current 1-based page index.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Select a category filter and reset to page 1.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        debug!("set filter (filter={:?})", filter);
        self.filter = filter;
        self.page = 1;
    }

    /// Select a sort mode and reset to page 1.
    pub fn set_sort(&mut self, sort: SortMode) {
        debug!("set sort (sort={:?})", sort);
        self.sort = sort;
        self.page = 1;
    }

    /// The ordered subsequence of records matching the current filter and
    /// sort. Sorting parses display prices numerically and is stable.
    pub fn filtered(&self) -> Vec<&Product> {
        let mut result: Vec<&Product> = self
            .catalog
            .products()
            .iter()
            .filter(|product| self.filter.matches(product))
            .collect();
        match self.sort {
            SortMode::InsertionOrder => {}
            SortMode::PriceAscending => {
                result.sort_by(|a, b| a.price_value().total_cmp(&b.price_value()));
            }
            SortMode::PriceDescending => {
                result.sort_by(|a, b| b.price_value().total_cmp(&a.price_value()));
            }
        }
        result
    }

    /// Number of records matching the current filter.
    pub fn result_count(&self) -> usize {
        self.catalog
            .products()
            .iter()
            .filter(|product| self.filter.matches(product))
            .count()
    }

    /// Total page count for the current filter: `ceil(count / page_size)`.
    pub fn page_count(&self) -> usize {
        self.result_count().div_ceil(self.page_size)
    }

    /// Records on the current page, in display order.
    pub fn page_items(&self) -> Vec<&Product> {
        let filtered = self.filtered();
        let start = (self.page - 1) * self.page_size;
        filtered
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect()
    }

    /// Jump to a page; out-of-range requests are no-ops.
    pub fn set_page(&mut self, page: usize) -> bool {
        if page == 0 || page > self.page_count() {
            debug!("ignoring out-of-range page request (page={})", page);
            return false;
        }
        self.page = page;
        true
    }

    /// Advance one page if a next page exists.
    pub fn next_page(&mut self) -> bool {
        self.set_page(self.page + 1)
    }

    /// Go back one page if a previous page exists.
    pub fn prev_page(&mut self) -> bool {
        if self.page == 1 {
            return false;
        }
        self.set_page(self.page - 1)
    }
}
