//! Dashboard data types.

use bookkeeper_shared::types::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpis {
    /// Total revenue.
    pub total_revenue: Money,
    /// Total operating expenses.
    pub total_expenses: Money,
    /// Net profit; negative for a loss.
    pub net_profit: Money,
    /// Sum of bank asset balances.
    pub cash_balance: Money,
}

/// One slice of the expense breakdown chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseSlice {
    /// Expense account, or the folded remainder.
    pub name: String,
    /// Amount.
    pub amount: Decimal,
}

/// Revenue and expenses for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTrendPoint {
    /// Month as `YYYY-MM`.
    pub month: String,
    /// Revenue booked in the month.
    pub revenue: Decimal,
    /// Operating expenses booked in the month.
    pub expenses: Decimal,
}

/// Dashboard summary derived from the reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Headline figures.
    pub kpis: Kpis,
    /// Largest expenses first.
    pub expense_breakdown: Vec<ExpenseSlice>,
    /// Monthly revenue and expenses, oldest first.
    pub monthly_trend: Vec<MonthlyTrendPoint>,
}
