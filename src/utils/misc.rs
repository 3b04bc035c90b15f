use std::collections::HashMap;

/// One active filter with the ids it currently matches.
#[derive(Debug, Clone)]
pub struct ActiveFilter {
    pub name: String,
    pub ids: Vec<i64>,
}

/// Updates a per-filter-type count map from the list of active filters.
/// Counts tracked in the map whose filter is no longer active are reset to
/// zero instead of being removed, so bound UI widgets keep their entries.
pub fn set_filter_counts(filters: &[ActiveFilter], counts: &mut HashMap<String, usize>) {
    let mut stale: Vec<String> = counts.keys().cloned().collect();
    for filter in filters {
        counts.insert(filter.name.clone(), filter.ids.len());
        stale.retain(|name| name != &filter.name);
    }
    for name in stale {
        counts.insert(name, 0);
    }
}
