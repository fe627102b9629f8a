use crate::domain::responses::{OrderResponse, TransactionResponse};

/// Fields a free-text query is matched against. Matching is
/// case-insensitive substring containment.
pub trait SearchText {
    fn matches(&self, needle: &str) -> bool;
}

impl SearchText for OrderResponse {
    fn matches(&self, needle: &str) -> bool {
        self.order_id.to_lowercase().contains(needle)
            || self.customer_name.to_lowercase().contains(needle)
            || self
                .items
                .iter()
                .any(|item| item.name.to_lowercase().contains(needle))
    }
}

impl SearchText for TransactionResponse {
    fn matches(&self, needle: &str) -> bool {
        self.id.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
            || self
                .reference
                .as_deref()
                .is_some_and(|r| r.to_lowercase().contains(needle))
    }
}

/// Narrows an already-fetched page by free text. Status and source filters
/// run on the provider because they must apply before pagination; the
/// provider offers no text-search parameter, so this filter runs after the
/// fetch and only ever sees the current page. Matches on unfetched pages
/// are out of reach by design.
pub fn refine<T: SearchText + Clone>(page: &[T], query: &str) -> Vec<T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return page.to_vec();
    }

    page.iter()
        .filter(|item| item.matches(&needle))
        .cloned()
        .collect()
}
