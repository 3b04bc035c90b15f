pub mod date_range;
pub mod root;
pub mod scoped;
pub mod session;
pub mod yop;

pub use date_range::{DateRangePreset, DateRangeState};
pub use root::{compose_query, Store};
pub use scoped::ScopedFilter;
pub use session::SessionState;
pub use yop::{YopState, YopUpdate};
