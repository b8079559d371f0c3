use serde::{Deserialize, Serialize};

pub mod content;
pub mod dashboard;
pub mod reference;
pub mod settings;
pub mod user;

pub use content::*;
pub use dashboard::*;
pub use reference::*;
pub use settings::*;
pub use user::*;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_LIMIT: u32 = 20;
pub const MAX_PAGE_LIMIT: u32 = 1000;

/// 1-based page selection shared by every paginated listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl Pagination {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    /// Row offset for `LIMIT ? OFFSET ?`; page 0 is treated as page 1
    pub fn offset(&self) -> i64 {
        i64::from(self.page.saturating_sub(1)) * i64::from(self.limit)
    }

    pub fn total_pages(&self, total: i64) -> u32 {
        if self.limit == 0 || total <= 0 {
            return 0;
        }
        ((total + i64::from(self.limit) - 1) / i64::from(self.limit)) as u32
    }
}
