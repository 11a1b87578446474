//! Property-based tests for the transaction contract checks.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::LedgerError;
use super::transaction::{BankEffect, Category, Transaction};
use super::validation::validate_transaction;

/// Strategy to generate a valid positive amount (> 0).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    // 0.01 to 1,000,000.00
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a zero or negative amount.
fn non_positive_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(-cents, 2))
}

fn bank_effect_strategy() -> impl Strategy<Value = BankEffect> {
    prop_oneof![Just(BankEffect::Debit), Just(BankEffect::Credit)]
}

fn account_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,20}".prop_map(|s| s.trim_end().to_string())
}

fn make_tx(amount: Decimal, effect: BankEffect, debit: String, credit: String) -> Transaction {
    Transaction::new(
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        "generated",
        amount,
        effect,
        debit,
        credit,
        Category::OperatingExpense,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Non-positive amounts are always rejected, whatever the accounts.
    #[test]
    fn prop_non_positive_amount_rejected(
        amount in non_positive_amount(),
        effect in bank_effect_strategy(),
        debit in account_name(),
    ) {
        let tx = make_tx(amount, effect, debit, "Bank".to_string());
        let result = validate_transaction(&tx);
        prop_assert!(
            matches!(result, Err(LedgerError::NonPositiveAmount { .. })),
            "non-positive amount should be rejected, got: {:?}",
            result
        );
    }

    /// Positive amounts between two distinct named accounts are accepted.
    #[test]
    fn prop_distinct_accounts_accepted(
        amount in positive_amount(),
        effect in bank_effect_strategy(),
        debit in account_name(),
        credit in account_name(),
    ) {
        prop_assume!(!debit.eq_ignore_ascii_case(&credit));
        let tx = make_tx(amount, effect, debit, credit);
        prop_assert!(validate_transaction(&tx).is_ok());
    }

    /// The same account on both sides is rejected regardless of case.
    #[test]
    fn prop_same_account_rejected(
        amount in positive_amount(),
        account in account_name(),
    ) {
        let tx = make_tx(amount, BankEffect::Debit, account.clone(), account.to_uppercase());
        prop_assert!(
            matches!(validate_transaction(&tx), Err(LedgerError::SameAccount { .. })),
            "same account should be rejected"
        );
    }
}
