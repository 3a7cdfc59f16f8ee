//! Query parameters, filtering and pagination
//!
//! `GET /properties` accepts:
//!
//! ```text
//! GET /properties?location=bogota&price=100000&sizeProperty=80&page=0&size=20&sort=price,desc
//! ```
//!
//! - `location`: case-insensitive substring of the address
//! - `price`: minimum price (inclusive)
//! - `sizeProperty`: minimum size (inclusive)
//! - `page`: zero-based page index
//! - `size`: page size
//! - `sort`: `field`, `field,asc|desc` or `field:asc|desc`
//!
//! Every sort is tie-broken by id ascending so pages are stable.

use crate::config::PaginationConfig;
use crate::core::entity::Property;
use crate::core::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Raw query string of the list endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyQuery {
    pub location: Option<String>,
    pub price: Option<f64>,
    pub size_property: Option<f64>,
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort: Option<String>,
}

impl PropertyQuery {
    pub fn filter(&self) -> PropertyFilter {
        PropertyFilter {
            location: self
                .location
                .clone()
                .filter(|s| !s.trim().is_empty()),
            min_price: self.price,
            min_size: self.size_property,
        }
    }

    pub fn pageable(&self, config: &PaginationConfig) -> AppResult<Pageable> {
        let sort = self.sort.as_deref().map(Sort::parse).transpose()?;
        Ok(Pageable::normalized(self.page, self.size, sort, config))
    }
}

// =============================================================================
// Filter
// =============================================================================

/// Conjunctive, independently optional property filter
///
/// An absent criterion places no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    /// Case-insensitive substring of the address
    pub location: Option<String>,
    /// Inclusive lower bound on price
    pub min_price: Option<f64>,
    /// Inclusive lower bound on size
    pub min_size: Option<f64>,
}

impl PropertyFilter {
    pub fn matches(&self, property: &Property) -> bool {
        self.location
            .as_deref()
            .is_none_or(|needle| property.address_contains(needle))
            && self.min_price.is_none_or(|min| property.price >= min)
            && self.min_size.is_none_or(|min| property.size >= min)
    }
}

// =============================================================================
// Sort
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Address,
    Price,
    Size,
    Description,
}

impl SortField {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "id" => Some(SortField::Id),
            "address" => Some(SortField::Address),
            "price" => Some(SortField::Price),
            "size" => Some(SortField::Size),
            "description" => Some(SortField::Description),
            _ => None,
        }
    }

    /// Column backing this field in SQL stores
    pub fn column(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Address => "address",
            SortField::Price => "price",
            SortField::Size => "size",
            SortField::Description => "description",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for Sort {
    fn default() -> Self {
        Self {
            field: SortField::Id,
            direction: SortDirection::Asc,
        }
    }
}

impl Sort {
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }

    /// Parse `field`, `field,dir` or `field:dir`
    pub fn parse(expr: &str) -> AppResult<Self> {
        let mut parts = expr.splitn(2, [',', ':']);
        let name = parts.next().unwrap_or_default().trim();
        let field = SortField::parse(name)
            .ok_or_else(|| AppError::bad_request(format!("Unknown sort property '{}'", name)))?;

        let direction = match parts.next().map(|d| d.trim().to_ascii_lowercase()) {
            None => SortDirection::Asc,
            Some(d) if d.is_empty() || d == "asc" => SortDirection::Asc,
            Some(d) if d == "desc" => SortDirection::Desc,
            Some(d) => {
                return Err(AppError::bad_request(format!(
                    "Unknown sort direction '{}'",
                    d
                )));
            }
        };

        Ok(Self { field, direction })
    }

    /// Total order on properties: the sort key, then id ascending
    pub fn compare(&self, a: &Property, b: &Property) -> Ordering {
        let primary = match self.field {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Address => a.address.cmp(&b.address),
            SortField::Price => a.price.total_cmp(&b.price),
            SortField::Size => a.size.total_cmp(&b.size),
            SortField::Description => a.description.cmp(&b.description),
        };
        let primary = match self.direction {
            SortDirection::Asc => primary,
            SortDirection::Desc => primary.reverse(),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

// =============================================================================
// Pagination
// =============================================================================

/// A normalized page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pageable {
    /// Zero-based page index
    pub page: usize,
    /// Page size, at least 1
    pub size: usize,
    pub sort: Sort,
}

impl Pageable {
    pub fn new(page: usize, size: usize, sort: Sort) -> Self {
        Self {
            page,
            size: size.max(1),
            sort,
        }
    }

    /// Apply the list endpoint's defaults and bounds
    ///
    /// Negative pages start at 0, sizes below 1 fall back to the default and
    /// sizes above the maximum are capped.
    pub fn normalized(
        page: Option<i64>,
        size: Option<i64>,
        sort: Option<Sort>,
        config: &PaginationConfig,
    ) -> Self {
        let page = page.unwrap_or(0).max(0) as usize;
        let size = match size {
            Some(s) if s >= 1 => (s as usize).min(config.max_size),
            _ => config.default_size,
        };
        Self::new(page, size, sort.unwrap_or_default())
    }

    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }
}

impl Default for Pageable {
    fn default() -> Self {
        Self::new(0, PaginationConfig::default().default_size, Sort::default())
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    /// Number of items matching the query across all pages
    pub total_elements: usize,
    pub total_pages: usize,
    /// Zero-based index of this page
    pub number: usize,
    /// Requested page size
    pub size: usize,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, pageable: &Pageable, total_elements: usize) -> Self {
        let size = pageable.size.max(1);
        let total_pages = total_elements.div_ceil(size);
        let number_of_elements = content.len();

        Self {
            total_elements,
            total_pages,
            number: pageable.page,
            size,
            number_of_elements,
            first: pageable.page == 0,
            last: pageable.page + 1 >= total_pages,
            empty: number_of_elements == 0,
            content,
        }
    }
}

impl Page<Property> {
    /// Sort, then slice an already-filtered collection
    pub fn from_unpaged(mut items: Vec<Property>, pageable: &Pageable) -> Self {
        items.sort_by(|a, b| pageable.sort.compare(a, b));
        let total = items.len();
        let content = items
            .into_iter()
            .skip(pageable.offset())
            .take(pageable.size)
            .collect();
        Self::new(content, pageable, total)
    }
}
