//! Dashboard summary.
//!
//! Headline KPIs, an expense breakdown and a monthly revenue/expense trend,
//! derived from the reports.

pub mod summary;
pub mod types;

pub use summary::{MAX_EXPENSE_SLICES, OTHER_EXPENSES, expense_breakdown, monthly_trend};
pub use types::*;
