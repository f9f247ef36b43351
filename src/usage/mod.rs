//! Usage records and the derivations the dashboard renders from them

pub mod aggregate;
pub mod format;
pub mod record;
pub mod sort;
pub mod view;

pub use aggregate::ChartData;
pub use record::{MessageId, UsageRecord, UsageResponse};
pub use sort::{SortDirection, SortField};
pub use view::{SortState, UsageView};
