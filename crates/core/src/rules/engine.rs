//! Applies categorization rules to ingested transactions.

use tracing::debug;

use super::types::CategorizationRule;
use crate::ledger::{BankEffect, Transaction};

/// Rewrites transactions with the first matching rule, in rule order.
///
/// A matched transaction gets the rule's category, and its accounts become
/// `rule.account` against `bank_account`: money out (`Debit`) debits the rule
/// account, money in (`Credit`) credits it. Unmatched transactions are
/// returned unchanged. The input is never mutated.
#[must_use]
pub fn apply_rules(
    transactions: &[Transaction],
    rules: &[CategorizationRule],
    bank_account: &str,
) -> Vec<Transaction> {
    if rules.is_empty() {
        return transactions.to_vec();
    }

    transactions
        .iter()
        .map(|tx| match rules.iter().find(|rule| rule.matches(&tx.description)) {
            Some(rule) => {
                debug!(
                    transaction = %tx.id,
                    rule = %rule.id,
                    keyword = %rule.keyword,
                    "categorization rule matched"
                );
                rewrite(tx, rule, bank_account)
            }
            None => tx.clone(),
        })
        .collect()
}

fn rewrite(tx: &Transaction, rule: &CategorizationRule, bank_account: &str) -> Transaction {
    let mut updated = tx.clone();
    updated.category = rule.category.clone();
    match tx.bank_effect {
        BankEffect::Debit => {
            updated.debit_account = rule.account.clone();
            updated.credit_account = bank_account.to_string();
        }
        BankEffect::Credit => {
            updated.credit_account = rule.account.clone();
            updated.debit_account = bank_account.to_string();
        }
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Category;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn statement_line(description: &str, effect: BankEffect) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
            description,
            dec!(320.00),
            effect,
            "Suspense",
            "Suspense Clearing",
            Category::Other("Uncategorized".into()),
        )
    }

    fn rule(keyword: &str, account: &str, category: Category) -> CategorizationRule {
        CategorizationRule::new(keyword, account, category).unwrap()
    }

    #[test]
    fn test_no_rules_returns_input_unchanged() {
        let txs = vec![statement_line("Eskom prepaid", BankEffect::Debit)];
        assert_eq!(apply_rules(&txs, &[], "Bank"), txs);
    }

    #[test]
    fn test_money_out_debits_rule_account() {
        let txs = vec![statement_line("ESKOM PREPAID 0412", BankEffect::Debit)];
        let rules = vec![rule("eskom", "Electricity Expense", Category::OperatingExpense)];

        let out = apply_rules(&txs, &rules, "Bank");
        assert_eq!(out[0].debit_account, "Electricity Expense");
        assert_eq!(out[0].credit_account, "Bank");
        assert_eq!(out[0].category, Category::OperatingExpense);
        assert_eq!(out[0].id, txs[0].id);
        assert_eq!(out[0].amount, txs[0].amount);
    }

    #[test]
    fn test_money_in_credits_rule_account() {
        let txs = vec![statement_line("EFT Acme invoice 17", BankEffect::Credit)];
        let rules = vec![rule("acme", "Consulting Revenue", Category::Revenue)];

        let out = apply_rules(&txs, &rules, "Cheque Account");
        assert_eq!(out[0].debit_account, "Cheque Account");
        assert_eq!(out[0].credit_account, "Consulting Revenue");
        assert_eq!(out[0].category, Category::Revenue);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let txs = vec![statement_line("Shoprite Checkers", BankEffect::Debit)];
        let rules = vec![
            rule("checkers", "Staff Refreshments Expense", Category::OperatingExpense),
            rule("shoprite", "Drawings", Category::Personal),
        ];

        let out = apply_rules(&txs, &rules, "Bank");
        assert_eq!(out[0].debit_account, "Staff Refreshments Expense");
    }

    #[test]
    fn test_unmatched_transactions_are_untouched() {
        let txs = vec![
            statement_line("Eskom", BankEffect::Debit),
            statement_line("Takealot order", BankEffect::Debit),
        ];
        let rules = vec![rule("eskom", "Electricity Expense", Category::OperatingExpense)];

        let out = apply_rules(&txs, &rules, "Bank");
        assert_eq!(out.len(), 2);
        assert_eq!(out[1], txs[1]);
    }
}
