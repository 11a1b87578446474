//! Builds the dashboard summary.

use std::collections::BTreeMap;

use bookkeeper_shared::types::{Currency, Money};
use chrono::Datelike;
use rust_decimal::Decimal;

use super::types::{DashboardSummary, ExpenseSlice, Kpis, MonthlyTrendPoint};
use crate::ledger::{Category, Transaction};
use crate::reports::{BalanceSheet, ProfitAndLoss, ReportLine};

/// Number of expense slices shown before the rest are folded together.
pub const MAX_EXPENSE_SLICES: usize = 6;

/// Name of the folded expense slice.
pub const OTHER_EXPENSES: &str = "Other Expenses";

impl DashboardSummary {
    /// Builds the summary from a snapshot and the reports derived from it.
    #[must_use]
    pub fn build(
        transactions: &[Transaction],
        profit_and_loss: &ProfitAndLoss,
        balance_sheet: &BalanceSheet,
        currency: Currency,
    ) -> Self {
        let cash_balance: Decimal = balance_sheet
            .assets
            .iter()
            .filter(|line| line.account.to_lowercase().contains("bank"))
            .map(|line| line.amount)
            .sum();

        Self {
            kpis: Kpis {
                total_revenue: Money::new(profit_and_loss.total_revenue, currency),
                total_expenses: Money::new(profit_and_loss.total_expenses, currency),
                net_profit: Money::new(profit_and_loss.net_profit, currency),
                cash_balance: Money::new(cash_balance, currency),
            },
            expense_breakdown: expense_breakdown(&profit_and_loss.expenses),
            monthly_trend: monthly_trend(transactions),
        }
    }
}

/// Expense slices by amount descending, folding everything past
/// [`MAX_EXPENSE_SLICES`] into [`OTHER_EXPENSES`].
#[must_use]
pub fn expense_breakdown(expenses: &[ReportLine]) -> Vec<ExpenseSlice> {
    let mut sorted: Vec<&ReportLine> = expenses.iter().collect();
    sorted.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.account.cmp(&b.account)));

    let mut slices: Vec<ExpenseSlice> = sorted
        .iter()
        .take(MAX_EXPENSE_SLICES)
        .map(|line| ExpenseSlice {
            name: line.account.clone(),
            amount: line.amount,
        })
        .collect();

    if sorted.len() > MAX_EXPENSE_SLICES {
        let rest: Decimal = sorted[MAX_EXPENSE_SLICES..]
            .iter()
            .map(|line| line.amount)
            .sum();
        slices.push(ExpenseSlice {
            name: OTHER_EXPENSES.to_string(),
            amount: rest,
        });
    }

    slices
}

/// Revenue and operating expenses per calendar month, oldest first.
///
/// Every month with a transaction gets a point, even if it only holds
/// financing or personal activity.
#[must_use]
pub fn monthly_trend(transactions: &[Transaction]) -> Vec<MonthlyTrendPoint> {
    let mut months: BTreeMap<(i32, u32), (Decimal, Decimal)> = BTreeMap::new();

    for tx in transactions {
        let (revenue, expenses) = months
            .entry((tx.date.year(), tx.date.month()))
            .or_default();
        match tx.category {
            Category::Revenue => *revenue += tx.amount,
            Category::OperatingExpense => *expenses += tx.amount,
            _ => {}
        }
    }

    months
        .into_iter()
        .map(|((year, month), (revenue, expenses))| MonthlyTrendPoint {
            month: format!("{year:04}-{month:02}"),
            revenue,
            expenses,
        })
        .collect()
}
