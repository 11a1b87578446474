//! Core business logic for Bookkeeper.
//!
//! This crate contains pure accounting logic with no I/O. It takes a snapshot
//! of double-entry transactions and derives the standard financial reports.
//!
//! # Modules
//!
//! - `ledger` - Transactions, account totals and contract checks
//! - `classify` - Account classification by name
//! - `rules` - Keyword categorization rules for ingested transactions
//! - `reports` - Trial balance, P&L, balance sheet and cash flow
//! - `dashboard` - KPIs and chart series derived from the reports

pub mod classify;
pub mod dashboard;
pub mod ledger;
pub mod reports;
pub mod rules;
