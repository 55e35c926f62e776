use crate::model::api::PageParams;

pub const DEFAULT_PAGE_SIZE: u64 = 6;
pub const MAX_PAGE_SIZE: u64 = 100;
/// Largest offset the database accepts as a signed 64-bit bind value
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Resolved page selection with defaults and bounds applied
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    pub page: u64,
    pub limit: u64,
}

impl Page {
    /// Rows to skip before this page, saturating for page numbers past any real table
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.limit)
            .min(MAX_OFFSET)
    }
}

impl From<PageParams> for Page {
    fn from(params: PageParams) -> Self {
        Self {
            page: params.page.unwrap_or(1).max(1),
            limit: params
                .limit
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
        }
    }
}
