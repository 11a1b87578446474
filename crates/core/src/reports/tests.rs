//! Property-based tests for the reports module.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::diagnostics::{CashFlowExclusion, Diagnostic};
use super::service::ReportService;
use super::types::{CashFlowActivity, RETAINED_EARNINGS, ReportLine, amount_of, total};
use crate::ledger::{BankEffect, Category, Transaction};

const ACCOUNTS: &[&str] = &[
    "Bank",
    "Sales Revenue",
    "Interest Income",
    "Rent Expense",
    "Bank Charges Expense",
    "Owner Capital",
    "Drawings",
    "Vehicle Loan",
    "Fixed Assets",
    "Suspense",
];

fn amount_strategy() -> impl Strategy<Value = Decimal> {
    // 0.01 to 100,000.00
    (1i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn category_strategy() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Revenue),
        Just(Category::OperatingExpense),
        Just(Category::Financing),
        Just(Category::Investing),
        Just(Category::Personal),
        Just(Category::Other("Uncategorized".to_string())),
    ]
}

fn account_pair() -> impl Strategy<Value = (String, String)> {
    (0..ACCOUNTS.len(), 1..ACCOUNTS.len()).prop_map(|(debit, offset)| {
        let credit = (debit + offset) % ACCOUNTS.len();
        (ACCOUNTS[debit].to_string(), ACCOUNTS[credit].to_string())
    })
}

fn transaction_strategy() -> impl Strategy<Value = Transaction> {
    (amount_strategy(), account_pair(), category_strategy(), 1u32..=28).prop_map(
        |(amount, (debit, credit), category, day)| {
            let effect = if debit == "Bank" {
                BankEffect::Credit
            } else {
                BankEffect::Debit
            };
            Transaction::new(
                NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
                "generated",
                amount,
                effect,
                debit,
                credit,
                category,
            )
        },
    )
}

fn transactions_strategy() -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(transaction_strategy(), 0..40)
}

fn category_total(transactions: &[Transaction], category: &Category) -> Decimal {
    transactions
        .iter()
        .filter(|tx| &tx.category == category)
        .map(|tx| tx.amount)
        .sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Trial balance debits equal credits for any transaction list.
    #[test]
    fn prop_trial_balance_always_balances(txs in transactions_strategy()) {
        let tb = ReportService::default().trial_balance(&txs);

        prop_assert_eq!(tb.totals.debit, tb.totals.credit);
        prop_assert!(tb.is_balanced());
        for line in &tb.lines {
            prop_assert!(line.debit.is_zero() || line.credit.is_zero());
            prop_assert!(line.debit >= Decimal::ZERO && line.credit >= Decimal::ZERO);
        }
    }

    /// Trial balance lines are ordered by account name.
    #[test]
    fn prop_trial_balance_sorted(txs in transactions_strategy()) {
        let tb = ReportService::default().trial_balance(&txs);
        let names: Vec<&str> = tb.lines.iter().map(|l| l.account.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        prop_assert_eq!(names, sorted);
    }

    /// Deriving twice from the same snapshot gives equal output.
    #[test]
    fn prop_generation_is_idempotent(txs in transactions_strategy()) {
        let service = ReportService::default();
        prop_assert_eq!(service.generate(&txs), service.generate(&txs));
    }

    /// Net profit is revenue minus operating expense, in any order.
    #[test]
    fn prop_net_profit_partition(txs in transactions_strategy()) {
        let service = ReportService::default();
        let expected = category_total(&txs, &Category::Revenue)
            - category_total(&txs, &Category::OperatingExpense);

        let forward = service.profit_and_loss(&txs);
        let mut reversed = txs.clone();
        reversed.reverse();
        let backward = service.profit_and_loss(&reversed);

        prop_assert_eq!(forward.net_profit, expected);
        prop_assert_eq!(forward.total_revenue - forward.total_expenses, forward.net_profit);
        prop_assert_eq!(forward, backward);
    }

    /// Starting balance plus net cash flow equals the ending balance.
    #[test]
    fn prop_cash_flow_reconciles(txs in transactions_strategy()) {
        let reports = ReportService::default().generate(&txs);
        let cf = &reports.cash_flow;

        prop_assert!(cf.is_reconciled());
        prop_assert_eq!(
            cf.net_cash_flow,
            cf.total_operating + cf.total_investing + cf.total_financing
        );
        prop_assert_eq!(total(cf.activity(CashFlowActivity::Operating)), cf.total_operating);
        prop_assert_eq!(total(cf.activity(CashFlowActivity::Investing)), cf.total_investing);
        prop_assert_eq!(total(cf.activity(CashFlowActivity::Financing)), cf.total_financing);
    }

    /// Personal transactions never reach the P&L or the cash flow statement.
    #[test]
    fn prop_personal_spending_excluded(
        txs in transactions_strategy(),
        amount in amount_strategy(),
    ) {
        let service = ReportService::default();
        let mut with_personal = txs.clone();
        with_personal.push(Transaction::new(
            NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(),
            "Groceries",
            amount,
            BankEffect::Debit,
            "Sales Revenue",
            "Bank",
            Category::Personal,
        ));

        let base = service.generate(&txs);
        let extended = service.generate(&with_personal);

        prop_assert_eq!(&base.profit_and_loss, &extended.profit_and_loss);
        prop_assert_eq!(base.cash_flow.net_cash_flow, extended.cash_flow.net_cash_flow);
    }

    /// Retained earnings always opens the equity section.
    #[test]
    fn prop_retained_earnings_first(txs in transactions_strategy()) {
        let reports = ReportService::default().generate(&txs);
        let first = &reports.balance_sheet.equity[0];

        prop_assert_eq!(first.account.as_str(), RETAINED_EARNINGS);
        prop_assert_eq!(first.amount, reports.profit_and_loss.net_profit);
    }
}

#[test]
fn test_empty_snapshot_yields_zero_reports() {
    let reports = ReportService::default().generate(&[]);

    assert!(reports.trial_balance.lines.is_empty());
    assert_eq!(reports.trial_balance.totals.debit, Decimal::ZERO);
    assert_eq!(reports.trial_balance.totals.credit, Decimal::ZERO);

    assert!(reports.profit_and_loss.revenues.is_empty());
    assert!(reports.profit_and_loss.expenses.is_empty());
    assert_eq!(reports.profit_and_loss.net_profit, Decimal::ZERO);

    assert!(reports.balance_sheet.assets.is_empty());
    assert!(reports.balance_sheet.liabilities.is_empty());
    assert_eq!(
        reports.balance_sheet.equity,
        vec![ReportLine::new(RETAINED_EARNINGS, Decimal::ZERO)]
    );
    assert!(reports.balance_sheet.is_balanced());

    assert!(reports.cash_flow.operating.is_empty());
    assert!(reports.cash_flow.investing.is_empty());
    assert!(reports.cash_flow.financing.is_empty());
    assert_eq!(reports.cash_flow.net_cash_flow, Decimal::ZERO);
    assert_eq!(reports.cash_flow.starting_bank_balance, Decimal::ZERO);
    assert_eq!(reports.cash_flow.ending_bank_balance, Decimal::ZERO);
}

#[test]
fn test_single_sale() {
    let txs = vec![Transaction::new(
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        "Invoice 001",
        dec!(1000),
        BankEffect::Credit,
        "Bank",
        "Sales Revenue",
        Category::Revenue,
    )];

    let reports = ReportService::default().generate(&txs);

    let tb = &reports.trial_balance;
    assert_eq!(tb.line("Bank").unwrap().debit, dec!(1000));
    assert_eq!(tb.line("Sales Revenue").unwrap().credit, dec!(1000));
    assert_eq!(tb.totals.debit, dec!(1000));
    assert_eq!(tb.totals.credit, dec!(1000));

    assert_eq!(reports.profit_and_loss.total_revenue, dec!(1000));
    assert_eq!(reports.profit_and_loss.net_profit, dec!(1000));

    let cf = &reports.cash_flow;
    assert_eq!(amount_of(&cf.operating, "Sales Revenue"), Some(dec!(1000)));
    assert_eq!(cf.ending_bank_balance, dec!(1000));
    assert_eq!(cf.starting_bank_balance, Decimal::ZERO);

    assert!(reports.balance_sheet.is_balanced());
    assert!(reports.diagnostics.is_empty());
}

#[test]
fn test_rent_and_sale() {
    let txs = vec![
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "Rent January",
            dec!(500),
            BankEffect::Debit,
            "Rent Expense",
            "Bank",
            Category::OperatingExpense,
        ),
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            "Invoice 002",
            dec!(1000),
            BankEffect::Credit,
            "Bank",
            "Sales Revenue",
            Category::Revenue,
        ),
    ];

    let reports = ReportService::default().generate(&txs);

    assert_eq!(reports.profit_and_loss.net_profit, dec!(500));
    assert_eq!(reports.trial_balance.net_balance("Bank"), Some(dec!(500)));
    assert_eq!(reports.cash_flow.ending_bank_balance, dec!(500));
    assert_eq!(reports.cash_flow.net_cash_flow, dec!(500));
    assert_eq!(
        amount_of(&reports.cash_flow.operating, "Rent Expense"),
        Some(dec!(-500))
    );
    assert!(reports.balance_sheet.is_balanced());
    assert!(reports.diagnostics.is_empty());
}

#[test]
fn test_personal_spending_is_reported_as_excluded() {
    let txs = vec![Transaction::new(
        NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
        "Woolworths",
        dec!(250),
        BankEffect::Debit,
        "Drawings",
        "Bank",
        Category::Personal,
    )];

    let reports = ReportService::default().generate(&txs);

    assert_eq!(reports.profit_and_loss.net_profit, Decimal::ZERO);
    assert!(reports.profit_and_loss.expenses.is_empty());
    assert_eq!(reports.cash_flow.net_cash_flow, Decimal::ZERO);
    assert_eq!(reports.cash_flow.ending_bank_balance, dec!(-250));
    assert_eq!(reports.cash_flow.starting_bank_balance, dec!(-250));
    assert!(reports.diagnostics.iter().any(|d| matches!(
        d,
        Diagnostic::ExcludedFromCashFlow {
            reason: CashFlowExclusion::PersonalCategory,
            ..
        }
    )));
}

fn posting(
    day: u32,
    debit: &str,
    credit: &str,
    amount: Decimal,
    category: Category,
) -> Transaction {
    let effect = if debit == "Bank" {
        BankEffect::Credit
    } else {
        BankEffect::Debit
    };
    Transaction::new(
        NaiveDate::from_ymd_opt(2024, 2, day).unwrap(),
        "posting",
        amount,
        effect,
        debit,
        credit,
        category,
    )
}

#[test]
fn test_well_formed_books_have_no_unclassified_accounts() {
    let txs = vec![
        posting(1, "Bank", "Owner Capital", dec!(20000), Category::Financing),
        posting(2, "Bank", "Vehicle Loan", dec!(15000), Category::Financing),
        posting(3, "Fixed Assets", "Bank", dec!(12000), Category::Investing),
        posting(5, "Bank", "Consulting Revenue", dec!(8000), Category::Revenue),
        posting(6, "Bank", "Bank Interest Income", dec!(35), Category::Revenue),
        posting(7, "Bank Charges Expense", "Bank", dec!(120), Category::OperatingExpense),
        posting(9, "Rent Expense", "Bank", dec!(4500), Category::OperatingExpense),
        posting(12, "Drawings", "Bank", dec!(2000), Category::Financing),
    ];

    let reports = ReportService::default().generate(&txs);

    assert!(reports.diagnostics.unclassified_accounts().is_empty());
    assert!(reports.diagnostics.is_empty(), "{:?}", reports.diagnostics);
    assert!(reports.balance_sheet.is_balanced());
    assert!(reports.cash_flow.is_reconciled());
    assert_eq!(reports.profit_and_loss.net_profit, dec!(3415));
    assert_eq!(reports.cash_flow.ending_bank_balance, dec!(24415));
    assert_eq!(reports.cash_flow.total_investing, dec!(-12000));
    assert_eq!(reports.cash_flow.total_financing, dec!(33000));
    assert!(reports.ensure_clean(true).is_ok());
}

#[test]
fn test_large_statement_keeps_one_diagnostic_per_transaction() {
    let txs: Vec<Transaction> = (0..40_000u32)
        .map(|i| posting(i % 28 + 1, "Drawings", "Bank", dec!(25), Category::Personal))
        .collect();

    let reports = ReportService::default().generate(&txs);

    // One cash flow exclusion per transaction plus the overdrawn bank.
    assert_eq!(reports.diagnostics.len(), 40_001);
    assert_eq!(reports.cash_flow.net_cash_flow, Decimal::ZERO);
    assert_eq!(reports.cash_flow.ending_bank_balance, dec!(-1000000));
}
