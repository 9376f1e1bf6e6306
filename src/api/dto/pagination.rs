//! Pagination query parameters and paginated response envelope.

use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::{DisplayFromStr, serde_as};

use crate::error::AppError;

const DEFAULT_PAGE_SIZE: u32 = 25;
const MAX_PAGE_SIZE: u32 = 100;

/// `?page=&page_size=` query parameters.
///
/// Pages are 1-based. `page_size` defaults to 25 and is capped at 100.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl PaginationParams {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Converts the parameters to an SQL `(offset, limit)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `page` is 0 or `page_size` is
    /// outside `1..=100`.
    pub fn to_offset_limit(&self) -> Result<(i64, i64), AppError> {
        let (page, page_size) = (self.page(), self.page_size());

        if page == 0 {
            return Err(AppError::bad_request(
                "Page must be greater than 0",
                json!({ "page": page }),
            ));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(AppError::bad_request(
                format!("Page size must be between 1 and {MAX_PAGE_SIZE}"),
                json!({ "page_size": page_size }),
            ));
        }

        let limit = i64::from(page_size);
        Ok(((i64::from(page) - 1) * limit, limit))
    }
}

/// A page of items with paging metadata.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub page: u32,
    pub page_size: u32,
    pub total: i64,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(params: &PaginationParams, total: i64, items: Vec<T>) -> Self {
        Self {
            page: params.page(),
            page_size: params.page_size(),
            total,
            items,
        }
    }
}
