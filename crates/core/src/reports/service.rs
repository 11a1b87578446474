//! Report generation service.

use std::collections::BTreeMap;

use bookkeeper_shared::{AppConfig, types::Currency};
use rust_decimal::Decimal;
use tracing::debug;

use super::diagnostics::{CashFlowExclusion, Diagnostic, Diagnostics};
use super::types::{
    BalanceSheet, BalanceSheetTotals, CashFlowActivity, CashFlowStatement, FinancialReports,
    ProfitAndLoss, RETAINED_EARNINGS, ReportLine, TrialBalance, TrialBalanceLine,
    TrialBalanceTotals, total,
};
use crate::classify::{
    AccountClass, AccountClassifier, ClassifierError, KeywordClassifier, NormalBalance,
};
use crate::ledger::{AccountLedger, Category, Transaction};

/// Default name of the account mirroring the bank statement.
pub const DEFAULT_BANK_ACCOUNT: &str = "Bank";

/// Service for deriving financial reports from a transaction snapshot.
///
/// Every report consults the same classifier.
#[derive(Debug, Clone)]
pub struct ReportService<C = KeywordClassifier> {
    classifier: C,
    bank_account: String,
    currency: Currency,
}

impl Default for ReportService<KeywordClassifier> {
    fn default() -> Self {
        Self::new(KeywordClassifier::default())
    }
}

impl ReportService<KeywordClassifier> {
    /// Builds a service from application configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured classifier table is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, ClassifierError> {
        let classifier = KeywordClassifier::from_config(&config.classifier)?;
        Ok(Self::new(classifier)
            .with_bank_account(config.reporting.bank_account.clone())
            .with_currency(config.reporting.currency))
    }
}

impl<C: AccountClassifier> ReportService<C> {
    /// Creates a service using `classifier`, the `Bank` account and the default currency.
    #[must_use]
    pub fn new(classifier: C) -> Self {
        Self {
            classifier,
            bank_account: DEFAULT_BANK_ACCOUNT.to_string(),
            currency: Currency::default(),
        }
    }

    /// Sets the name of the bank account.
    #[must_use]
    pub fn with_bank_account(mut self, bank_account: impl Into<String>) -> Self {
        self.bank_account = bank_account.into();
        self
    }

    /// Sets the presentation currency.
    #[must_use]
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// The classifier every report consults.
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Name of the bank account.
    pub fn bank_account(&self) -> &str {
        &self.bank_account
    }

    /// Presentation currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Generates the trial balance and logs any diagnostics.
    ///
    /// Debits always equal credits: each transaction posts the same amount
    /// to both sides, and netting per account only moves amounts between
    /// columns.
    #[must_use]
    pub fn trial_balance(&self, transactions: &[Transaction]) -> TrialBalance {
        let mut diagnostics = Diagnostics::new();
        let trial_balance = self.trial_balance_into(transactions, &mut diagnostics);
        diagnostics.log();
        trial_balance
    }

    /// Generates the profit and loss statement and logs any diagnostics.
    ///
    /// Only `Revenue` (by credited account) and `Operating Expense` (by
    /// debited account) transactions count.
    #[must_use]
    pub fn profit_and_loss(&self, transactions: &[Transaction]) -> ProfitAndLoss {
        let mut diagnostics = Diagnostics::new();
        let profit_and_loss = self.profit_and_loss_into(transactions, &mut diagnostics);
        diagnostics.log();
        profit_and_loss
    }

    /// Generates the balance sheet, recomputing the trial balance, and logs
    /// any diagnostics.
    ///
    /// Equity always opens with retained earnings equal to `net_profit`.
    #[must_use]
    pub fn balance_sheet(&self, transactions: &[Transaction], net_profit: Decimal) -> BalanceSheet {
        let mut diagnostics = Diagnostics::new();
        let trial_balance = self.trial_balance_into(transactions, &mut diagnostics);
        let balance_sheet = self.balance_sheet_into(&trial_balance, net_profit, &mut diagnostics);
        diagnostics.log();
        balance_sheet
    }

    /// Generates the cash flow statement and logs any diagnostics.
    ///
    /// The ending bank balance comes from `trial_balance`; the starting
    /// balance is derived so that `starting + net == ending`.
    #[must_use]
    pub fn cash_flow(
        &self,
        transactions: &[Transaction],
        trial_balance: &TrialBalance,
    ) -> CashFlowStatement {
        let mut diagnostics = Diagnostics::new();
        let cash_flow = self.cash_flow_into(transactions, trial_balance, &mut diagnostics);
        diagnostics.log();
        cash_flow
    }

    /// Derives all four reports from one snapshot and logs any diagnostics.
    #[must_use]
    pub fn generate(&self, transactions: &[Transaction]) -> FinancialReports {
        let mut diagnostics = Diagnostics::new();

        let trial_balance = self.trial_balance_into(transactions, &mut diagnostics);
        let profit_and_loss = self.profit_and_loss_into(transactions, &mut diagnostics);
        let balance_sheet =
            self.balance_sheet_into(&trial_balance, profit_and_loss.net_profit, &mut diagnostics);
        let cash_flow = self.cash_flow_into(transactions, &trial_balance, &mut diagnostics);

        debug!(
            transactions = transactions.len(),
            accounts = trial_balance.lines.len(),
            diagnostics = diagnostics.len(),
            "derived financial reports"
        );
        diagnostics.log();

        FinancialReports {
            currency: self.currency,
            trial_balance,
            profit_and_loss,
            balance_sheet,
            cash_flow,
            diagnostics,
        }
    }

    /// Generates the trial balance, recording findings in `diagnostics`.
    pub fn trial_balance_into(
        &self,
        transactions: &[Transaction],
        diagnostics: &mut Diagnostics,
    ) -> TrialBalance {
        let ledger = AccountLedger::from_transactions(transactions);
        let mut lines = Vec::with_capacity(ledger.len());
        let mut totals = TrialBalanceTotals::default();

        for (account, account_totals) in ledger.iter() {
            let classification = self.classifier.classify(account);
            let (debit, credit) = account_totals.columns();

            if classification.is_unclassified() {
                diagnostics.push(Diagnostic::UnclassifiedAccount {
                    account: account.to_string(),
                });
            }

            let abnormal = match classification.normal_balance {
                Some(NormalBalance::Debit) => credit > Decimal::ZERO,
                Some(NormalBalance::Credit) => debit > Decimal::ZERO,
                None => false,
            };
            if abnormal {
                diagnostics.push(Diagnostic::AbnormalBalance {
                    account: account.to_string(),
                    class: classification.class,
                    debit,
                    credit,
                });
            }

            totals.debit += debit;
            totals.credit += credit;
            lines.push(TrialBalanceLine {
                account: account.to_string(),
                class: classification.class,
                debit,
                credit,
            });
        }

        if totals.debit != totals.credit {
            diagnostics.push(Diagnostic::UnbalancedTrialBalance {
                debit: totals.debit,
                credit: totals.credit,
            });
        }

        TrialBalance { lines, totals }
    }

    /// Generates the profit and loss statement, recording findings in
    /// `diagnostics`.
    #[allow(clippy::unused_self)]
    pub fn profit_and_loss_into(
        &self,
        transactions: &[Transaction],
        diagnostics: &mut Diagnostics,
    ) -> ProfitAndLoss {
        let mut revenues = Bucket::default();
        let mut expenses = Bucket::default();

        for tx in transactions {
            match &tx.category {
                Category::Revenue => revenues.add(&tx.credit_account, tx.amount),
                Category::OperatingExpense => expenses.add(&tx.debit_account, tx.amount),
                Category::Financing | Category::Investing | Category::Personal => {}
                Category::Other(label) => diagnostics.push(Diagnostic::UnrecognizedCategory {
                    transaction: tx.id,
                    category: label.clone(),
                }),
            }
        }

        let revenues = revenues.into_lines();
        let expenses = expenses.into_lines();
        let total_revenue = total(&revenues);
        let total_expenses = total(&expenses);

        ProfitAndLoss {
            revenues,
            expenses,
            total_revenue,
            total_expenses,
            net_profit: total_revenue - total_expenses,
        }
    }

    /// Generates the balance sheet from an existing trial balance, recording
    /// findings in `diagnostics`.
    #[allow(clippy::unused_self)]
    pub fn balance_sheet_into(
        &self,
        trial_balance: &TrialBalance,
        net_profit: Decimal,
        diagnostics: &mut Diagnostics,
    ) -> BalanceSheet {
        let mut assets = Bucket::default();
        let mut liabilities = Bucket::default();
        let mut equity = Bucket::default();

        for line in &trial_balance.lines {
            let net = line.net();
            match line.class {
                AccountClass::Asset => assets.add(&line.account, net),
                AccountClass::Liability => liabilities.add(&line.account, -net),
                // Capital and drawings alike: credit balances raise equity,
                // debit balances (drawings) reduce it.
                AccountClass::Equity => equity.add(&line.account, -net),
                AccountClass::Revenue | AccountClass::Expense => {}
                AccountClass::Unclassified => {
                    diagnostics.push(Diagnostic::ExcludedFromBalanceSheet {
                        account: line.account.clone(),
                        amount: net,
                    });
                }
            }
        }

        let assets = assets.into_lines();
        let liabilities = liabilities.into_lines();
        let mut equity_lines = Vec::with_capacity(equity.len() + 1);
        equity_lines.push(ReportLine::new(RETAINED_EARNINGS, net_profit));
        equity_lines.extend(equity.into_lines());

        let totals = BalanceSheetTotals {
            assets: total(&assets),
            liabilities_and_equity: total(&liabilities) + total(&equity_lines),
        };

        if totals.assets != totals.liabilities_and_equity {
            diagnostics.push(Diagnostic::UnbalancedBalanceSheet {
                assets: totals.assets,
                liabilities_and_equity: totals.liabilities_and_equity,
            });
        }

        BalanceSheet {
            assets,
            liabilities,
            equity: equity_lines,
            totals,
        }
    }

    /// Generates the cash flow statement, recording findings in
    /// `diagnostics`.
    pub fn cash_flow_into(
        &self,
        transactions: &[Transaction],
        trial_balance: &TrialBalance,
        diagnostics: &mut Diagnostics,
    ) -> CashFlowStatement {
        let mut operating = Bucket::default();
        let mut investing = Bucket::default();
        let mut financing = Bucket::default();

        for tx in transactions {
            let debit_is_bank = self.is_bank(&tx.debit_account);
            let credit_is_bank = self.is_bank(&tx.credit_account);

            let (other_account, cash_amount) = match (debit_is_bank, credit_is_bank) {
                (true, false) => (&tx.credit_account, tx.amount),
                (false, true) => (&tx.debit_account, -tx.amount),
                _ => {
                    diagnostics.push(Diagnostic::NonCashTransaction { transaction: tx.id });
                    continue;
                }
            };

            match self.cash_flow_activity(&tx.category, other_account) {
                Ok(CashFlowActivity::Operating) => operating.add(other_account, cash_amount),
                Ok(CashFlowActivity::Investing) => investing.add(other_account, cash_amount),
                Ok(CashFlowActivity::Financing) => financing.add(other_account, cash_amount),
                Err(reason) => diagnostics.push(Diagnostic::ExcludedFromCashFlow {
                    transaction: tx.id,
                    reason,
                }),
            }
        }

        let operating = operating.into_lines();
        let investing = investing.into_lines();
        let financing = financing.into_lines();
        let total_operating = total(&operating);
        let total_investing = total(&investing);
        let total_financing = total(&financing);
        let net_cash_flow = total_operating + total_investing + total_financing;

        let ending_bank_balance = trial_balance
            .net_balance(&self.bank_account)
            .unwrap_or_else(|| {
                diagnostics.push(Diagnostic::MissingBankAccount {
                    account: self.bank_account.clone(),
                });
                Decimal::ZERO
            });

        CashFlowStatement {
            operating,
            investing,
            financing,
            total_operating,
            total_investing,
            total_financing,
            net_cash_flow,
            starting_bank_balance: ending_bank_balance - net_cash_flow,
            ending_bank_balance,
        }
    }

    /// Picks the cash flow bucket for a transaction's non-bank side.
    fn cash_flow_activity(
        &self,
        category: &Category,
        other_account: &str,
    ) -> Result<CashFlowActivity, CashFlowExclusion> {
        match category {
            Category::Revenue | Category::OperatingExpense => Ok(CashFlowActivity::Operating),
            Category::Investing => Ok(CashFlowActivity::Investing),
            Category::Financing => Ok(CashFlowActivity::Financing),
            Category::Personal => Err(CashFlowExclusion::PersonalCategory),
            Category::Other(_) => {
                if self.classifier.classify(other_account).class == AccountClass::Equity {
                    Ok(CashFlowActivity::Financing)
                } else {
                    Err(CashFlowExclusion::UnmatchedCategory)
                }
            }
        }
    }

    fn is_bank(&self, account: &str) -> bool {
        account.eq_ignore_ascii_case(&self.bank_account)
    }
}

/// Per-account amounts for one report bucket, ordered by account name.
#[derive(Debug, Default)]
struct Bucket(BTreeMap<String, Decimal>);

impl Bucket {
    fn add(&mut self, account: &str, amount: Decimal) {
        *self.0.entry(account.to_string()).or_default() += amount;
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn into_lines(self) -> Vec<ReportLine> {
        self.0
            .into_iter()
            .map(|(account, amount)| ReportLine { account, amount })
            .collect()
    }
}

/// Trial balance with the default classifier.
#[must_use]
pub fn build_trial_balance(transactions: &[Transaction]) -> TrialBalance {
    ReportService::default().trial_balance(transactions)
}

/// Profit and loss statement with the default classifier.
#[must_use]
pub fn build_profit_and_loss(transactions: &[Transaction]) -> ProfitAndLoss {
    ReportService::default().profit_and_loss(transactions)
}

/// Balance sheet with the default classifier.
#[must_use]
pub fn build_balance_sheet(transactions: &[Transaction], net_profit: Decimal) -> BalanceSheet {
    ReportService::default().balance_sheet(transactions, net_profit)
}

/// Cash flow statement with the default classifier and the `Bank` account.
#[must_use]
pub fn build_cash_flow(
    transactions: &[Transaction],
    trial_balance: &TrialBalance,
) -> CashFlowStatement {
    ReportService::default().cash_flow(transactions, trial_balance)
}
