//! Report data types.

use bookkeeper_shared::types::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::diagnostics::Diagnostics;
use super::error::ReportError;
use crate::classify::AccountClass;

/// Equity line carrying the period's net profit or loss.
pub const RETAINED_EARNINGS: &str = "Retained Earnings (Profit/Loss)";

/// One `{account, amount}` row of a report bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    /// Account name.
    pub account: String,
    /// Amount attributed to the account.
    pub amount: Decimal,
}

impl ReportLine {
    /// Creates a report line.
    #[must_use]
    pub fn new(account: impl Into<String>, amount: Decimal) -> Self {
        Self {
            account: account.into(),
            amount,
        }
    }
}

/// Sums the amounts of a bucket.
#[must_use]
pub fn total(lines: &[ReportLine]) -> Decimal {
    lines.iter().map(|line| line.amount).sum()
}

/// Looks up a bucket amount by exact account name.
#[must_use]
pub fn amount_of(lines: &[ReportLine], account: &str) -> Option<Decimal> {
    lines
        .iter()
        .find(|line| line.account == account)
        .map(|line| line.amount)
}

/// One account of the trial balance.
///
/// At most one of `debit` and `credit` is non-zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceLine {
    /// Account name.
    pub account: String,
    /// Classification of the account.
    pub class: AccountClass,
    /// Debit column.
    pub debit: Decimal,
    /// Credit column.
    pub credit: Decimal,
}

impl TrialBalanceLine {
    /// Net balance, `debit - credit`.
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.debit - self.credit
    }
}

/// Trial balance totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceTotals {
    /// Total debit column.
    pub debit: Decimal,
    /// Total credit column.
    pub credit: Decimal,
}

/// Trial balance report, ordered by account name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalance {
    /// Account lines.
    pub lines: Vec<TrialBalanceLine>,
    /// Column totals.
    pub totals: TrialBalanceTotals,
}

impl TrialBalance {
    /// Whether debits equal credits.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.totals.debit == self.totals.credit
    }

    /// Finds a line by case-insensitive account name.
    #[must_use]
    pub fn line(&self, account: &str) -> Option<&TrialBalanceLine> {
        self.lines
            .iter()
            .find(|line| line.account.eq_ignore_ascii_case(account))
    }

    /// Net balance (`debit - credit`) of an account, by case-insensitive name.
    #[must_use]
    pub fn net_balance(&self, account: &str) -> Option<Decimal> {
        self.line(account).map(TrialBalanceLine::net)
    }
}

/// Profit and loss statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitAndLoss {
    /// Revenue by credited account.
    pub revenues: Vec<ReportLine>,
    /// Operating expenses by debited account.
    pub expenses: Vec<ReportLine>,
    /// Sum of revenues.
    pub total_revenue: Decimal,
    /// Sum of expenses.
    pub total_expenses: Decimal,
    /// Revenue minus expenses; negative for a loss.
    pub net_profit: Decimal,
}

/// Balance sheet totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetTotals {
    /// Total assets.
    pub assets: Decimal,
    /// Liabilities plus equity.
    pub liabilities_and_equity: Decimal,
}

/// Balance sheet report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Asset lines.
    pub assets: Vec<ReportLine>,
    /// Liability lines, as positive magnitudes.
    pub liabilities: Vec<ReportLine>,
    /// Equity lines; the first is always retained earnings.
    pub equity: Vec<ReportLine>,
    /// Section totals.
    pub totals: BalanceSheetTotals,
}

impl BalanceSheet {
    /// Sum of liabilities.
    #[must_use]
    pub fn total_liabilities(&self) -> Decimal {
        total(&self.liabilities)
    }

    /// Sum of equity, retained earnings included.
    #[must_use]
    pub fn total_equity(&self) -> Decimal {
        total(&self.equity)
    }

    /// Whether Assets = Liabilities + Equity.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.totals.assets == self.totals.liabilities_and_equity
    }
}

/// Cash flow bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CashFlowActivity {
    /// Trading: revenue and operating expenses.
    Operating,
    /// Long-lived assets.
    Investing,
    /// Owner and lender funding.
    Financing,
}

/// Cash flow statement.
///
/// Amounts are signed: inflows positive, outflows negative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowStatement {
    /// Operating activities by counter-account.
    pub operating: Vec<ReportLine>,
    /// Investing activities by counter-account.
    pub investing: Vec<ReportLine>,
    /// Financing activities by counter-account.
    pub financing: Vec<ReportLine>,
    /// Net operating cash flow.
    pub total_operating: Decimal,
    /// Net investing cash flow.
    pub total_investing: Decimal,
    /// Net financing cash flow.
    pub total_financing: Decimal,
    /// Sum of the three totals.
    pub net_cash_flow: Decimal,
    /// Derived opening balance, `ending - net`.
    pub starting_bank_balance: Decimal,
    /// Bank balance from the trial balance.
    pub ending_bank_balance: Decimal,
}

impl CashFlowStatement {
    /// Lines of one bucket.
    #[must_use]
    pub fn activity(&self, activity: CashFlowActivity) -> &[ReportLine] {
        match activity {
            CashFlowActivity::Operating => &self.operating,
            CashFlowActivity::Investing => &self.investing,
            CashFlowActivity::Financing => &self.financing,
        }
    }

    /// Whether `starting + net == ending`.
    #[must_use]
    pub fn is_reconciled(&self) -> bool {
        self.starting_bank_balance + self.net_cash_flow == self.ending_bank_balance
    }
}

/// All four reports derived from one transaction snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialReports {
    /// Presentation currency.
    pub currency: Currency,
    /// Trial balance.
    pub trial_balance: TrialBalance,
    /// Profit and loss statement.
    pub profit_and_loss: ProfitAndLoss,
    /// Balance sheet.
    pub balance_sheet: BalanceSheet,
    /// Cash flow statement.
    pub cash_flow: CashFlowStatement,
    /// Gaps found while deriving the reports.
    pub diagnostics: Diagnostics,
}

impl FinancialReports {
    /// Checks the derived reports.
    ///
    /// # Errors
    ///
    /// Returns an error if the trial balance does not balance, or, when
    /// `strict` is set, if any diagnostic was raised.
    pub fn ensure_clean(&self, strict: bool) -> Result<(), ReportError> {
        if !self.trial_balance.is_balanced() {
            return Err(ReportError::UnbalancedTrialBalance {
                debit: self.trial_balance.totals.debit,
                credit: self.trial_balance.totals.credit,
            });
        }

        if strict {
            if let Some(first) = self.diagnostics.iter().next() {
                return Err(ReportError::Diagnostics {
                    count: self.diagnostics.len(),
                    first: first.to_string(),
                });
            }
        }

        Ok(())
    }
}
