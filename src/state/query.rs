//! Task-List Query State
//!
//! The filter/sort/page state driving the task list. The URL is the source
//! of truth: controls navigate to a new query string and the list re-fetches
//! when the parsed query changes, so list views stay shareable and
//! bookmarkable and survive reloads.

use leptos_router::ParamsMap;

use crate::api::TaskStatus;

/// Fixed page size for the task list.
pub const PAGE_SIZE: u64 = 4;

/// Sortable task-list columns, as sent in the `orderBy` parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Name,
    Priority,
    Status,
    Due,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Priority => "priority",
            SortField::Status => "status",
            SortField::Due => "due",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "name" => Some(SortField::Name),
            "priority" => Some(SortField::Priority),
            "status" => Some(SortField::Status),
            "due" => Some(SortField::Due),
            _ => None,
        }
    }
}

/// Parsed `status`/`orderBy`/`page` query parameters for the task list.
///
/// Sorting is single-column, last-clicked-wins; the list only ever marks
/// the active column with a static ascending indicator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskListQuery {
    pub status: Option<TaskStatus>,
    pub order_by: Option<SortField>,
    /// 1-based page number.
    pub page: u64,
}

impl Default for TaskListQuery {
    fn default() -> Self {
        Self {
            status: None,
            order_by: None,
            page: 1,
        }
    }
}

impl TaskListQuery {
    /// Parse from the URL query parameters. Unknown or malformed values
    /// fall back to the defaults rather than failing the whole view.
    pub fn from_params(params: &ParamsMap) -> Self {
        Self {
            status: params
                .get("status")
                .and_then(|v| TaskStatus::from_param(v)),
            order_by: params
                .get("orderBy")
                .and_then(|v| SortField::from_param(v)),
            page: params
                .get("page")
                .and_then(|v| v.parse().ok())
                .filter(|&p| p >= 1)
                .unwrap_or(1),
        }
    }

    /// Render back to a query string, empty or starting with `?`.
    /// Page 1 is the default and stays out of the URL.
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(format!("status={}", status.as_str()));
        }
        if let Some(order_by) = self.order_by {
            pairs.push(format!("orderBy={}", order_by.as_str()));
        }
        if self.page > 1 {
            pairs.push(format!("page={}", self.page));
        }
        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }

    pub fn with_status(&self, status: Option<TaskStatus>) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    pub fn with_order_by(&self, field: SortField) -> Self {
        Self {
            order_by: Some(field),
            ..self.clone()
        }
    }

    pub fn with_page(&self, page: u64) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}

/// Number of pages needed for `item_count` items.
pub fn page_count(item_count: u64, page_size: u64) -> u64 {
    item_count.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> ParamsMap {
        let mut map = ParamsMap::new();
        for (key, value) in pairs {
            map.insert(key.to_string(), value.to_string());
        }
        map
    }

    #[test]
    fn test_empty_params_give_defaults() {
        let query = TaskListQuery::from_params(&ParamsMap::new());
        assert_eq!(query, TaskListQuery::default());
        assert_eq!(query.page, 1);
        assert_eq!(query.to_query_string(), "");
    }

    #[test]
    fn test_full_query_round_trips() {
        let query = TaskListQuery::from_params(&params(&[
            ("status", "open"),
            ("orderBy", "due"),
            ("page", "3"),
        ]));
        assert_eq!(query.status, Some(TaskStatus::Open));
        assert_eq!(query.order_by, Some(SortField::Due));
        assert_eq!(query.page, 3);
        assert_eq!(query.to_query_string(), "?status=open&orderBy=due&page=3");
    }

    #[test]
    fn test_page_one_is_omitted_from_url() {
        let query = TaskListQuery::default().with_page(1);
        assert_eq!(query.to_query_string(), "");
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let query = TaskListQuery::from_params(&params(&[
            ("status", "archived"),
            ("orderBy", "color"),
            ("page", "zero"),
        ]));
        assert_eq!(query, TaskListQuery::default());
    }

    #[test]
    fn test_clearing_status_keeps_other_params() {
        let query = TaskListQuery::from_params(&params(&[
            ("status", "done"),
            ("orderBy", "name"),
            ("page", "2"),
        ]));
        let cleared = query.with_status(None);
        assert_eq!(cleared.to_query_string(), "?orderBy=name&page=2");
    }

    #[test]
    fn test_setting_status_keeps_sort_and_page() {
        let query = TaskListQuery::from_params(&params(&[("orderBy", "priority"), ("page", "2")]));
        let filtered = query.with_status(Some(TaskStatus::Open));
        assert_eq!(
            filtered.to_query_string(),
            "?status=open&orderBy=priority&page=2"
        );
    }

    #[test]
    fn test_order_by_is_last_clicked_wins() {
        let query = TaskListQuery::default()
            .with_order_by(SortField::Name)
            .with_order_by(SortField::Status);
        assert_eq!(query.order_by, Some(SortField::Status));
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, PAGE_SIZE), 0);
        assert_eq!(page_count(4, PAGE_SIZE), 1);
        assert_eq!(page_count(5, PAGE_SIZE), 2);
        assert_eq!(page_count(9, PAGE_SIZE), 3);
    }
}
