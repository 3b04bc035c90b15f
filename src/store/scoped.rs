use crate::domain::model::{FilterOption, StatEntry};

/// One dimension filter scoped to the active workset: the values available
/// for selection plus an optional current selection.
///
/// Options are replaced wholesale by a fetch; a failed fetch must leave both
/// fields untouched. Selection is only ever cleared by explicit user action.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopedFilter<V> {
    pub available: Vec<FilterOption<V>>,
    pub selected: Option<V>,
}

impl<V> Default for ScopedFilter<V> {
    fn default() -> Self {
        Self {
            available: Vec::new(),
            selected: None,
        }
    }
}

impl<V: PartialEq> ScopedFilter<V> {
    pub fn replace_options(&mut self, options: Vec<FilterOption<V>>) {
        self.available = options;
    }

    pub fn select(&mut self, value: Option<V>) {
        self.selected = value;
    }

    pub fn selected_option(&self) -> Option<&FilterOption<V>> {
        let selected = self.selected.as_ref()?;
        self.available.iter().find(|opt| &opt.value == selected)
    }
}

fn label_for(name: &str, uppercase: bool) -> String {
    let label = if uppercase {
        name.to_uppercase()
    } else {
        name.to_string()
    };
    if label.is_empty() {
        "-".to_string()
    } else {
        label
    }
}

/// Language options: the raw code is the value, the uppercased code the
/// label ("-" for empty names).
pub fn language_options(stats: &[StatEntry]) -> Vec<FilterOption<String>> {
    stats
        .iter()
        .filter_map(|entry| {
            entry.name.as_ref().map(|name| FilterOption {
                label: label_for(name, true),
                value: name.clone(),
            })
        })
        .collect()
}

/// Options keyed by primary key (owner institutions and work types).
pub fn pk_options(stats: &[StatEntry], uppercase: bool) -> Vec<FilterOption<i64>> {
    stats
        .iter()
        .filter_map(|entry| {
            entry.pk.map(|pk| FilterOption {
                value: pk,
                label: label_for(entry.name.as_deref().unwrap_or(""), uppercase),
            })
        })
        .collect()
}
