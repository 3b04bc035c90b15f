use crate::domain::model::FieldUpdate;

/// Year-of-publication range. Start and end are independent; no ordering is
/// enforced between them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YopState {
    pub start: Option<u16>,
    pub end: Option<u16>,
}

/// Partial update of the range. Fields left at `Keep` are not touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YopUpdate {
    pub start: FieldUpdate<u16>,
    pub end: FieldUpdate<u16>,
}

impl YopState {
    pub fn apply(&mut self, update: YopUpdate) {
        update.start.apply_to(&mut self.start);
        update.end.apply_to(&mut self.end);
    }

    /// Lower bound for the query; year zero counts as unset.
    pub fn from_year(&self) -> Option<u16> {
        self.start.filter(|year| *year != 0)
    }

    /// Upper bound for the query; year zero counts as unset.
    pub fn to_year(&self) -> Option<u16> {
        self.end.filter(|year| *year != 0)
    }

    /// Human readable form of the range: "2010-2015", ">2010", "<2015",
    /// or nothing when no bound is set.
    pub fn display(&self) -> Option<String> {
        match (self.from_year(), self.to_year()) {
            (Some(start), Some(end)) => Some(format!("{}-{}", start, end)),
            (Some(start), None) => Some(format!(">{}", start)),
            (None, Some(end)) => Some(format!("<{}", end)),
            (None, None) => None,
        }
    }
}
