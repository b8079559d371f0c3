use serde::{Deserialize, Serialize};

use super::Content;

/// Number of rows in each of the dashboard's top lists
pub const DASHBOARD_LIST_SIZE: i64 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub totals: DashboardTotals,
    pub recent_content: Vec<Content>,
    pub top_rated: Vec<Content>,
    pub most_viewed: Vec<Content>,
    pub system_health: SystemHealth,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardTotals {
    pub content: i64,
    pub movies: i64,
    pub series: i64,
    pub episodes: i64,
    pub users: i64,
    pub active_users: i64,
    pub categories: i64,
    pub views: i64,
    pub downloads: i64,
    pub average_rating: f64,
}

/// Placeholder health reading; nothing here is measured
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemHealth {
    pub status: String,
    pub uptime_percent: f64,
    pub storage_used_percent: f64,
}

impl SystemHealth {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            uptime_percent: 99.9,
            storage_used_percent: 0.0,
        }
    }
}
