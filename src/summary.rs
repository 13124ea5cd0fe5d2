//! Aggregates a list of transactions into totals and a per-category expense
//! breakdown for charting.
//!
//! Everything here is a pure function of its input and is recomputed from the
//! full transaction list on each call.

use serde::{Serialize, Serializer};

use crate::transaction::{Transaction, TransactionType};

/// Totals derived from a list of transactions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    /// The sum of all income amounts.
    pub total_income: f64,
    /// The sum of all expense amounts.
    pub total_expenses: f64,
    /// Total income minus total expenses.
    pub balance: f64,
    /// The summed expense amount for each category.
    pub category_breakdown: CategoryBreakdown,
}

/// Expense totals per category, in the order each category first appears.
///
/// Serializes as a JSON object mapping category names to totals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBreakdown(Vec<(String, f64)>);

impl CategoryBreakdown {
    /// Get the expense total for `category`, if it has any expenses.
    pub fn get(&self, category: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, total)| *total)
    }

    /// Iterate over `(category, total)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, total)| (name.as_str(), *total))
    }

    /// The number of categories with expenses.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no expenses at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn add(&mut self, category: &str, amount: f64) {
        match self.0.iter_mut().find(|(name, _)| name == category) {
            Some((_, total)) => *total += amount,
            None => self.0.push((category.to_owned(), amount)),
        }
    }
}

impl Serialize for CategoryBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Calculate the income and expense totals, balance and expense breakdown for
/// `transactions`.
///
/// An empty list produces zero totals and an empty breakdown.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut summary = Summary::default();

    for transaction in transactions {
        match transaction.transaction_type {
            TransactionType::Income => summary.total_income += transaction.amount,
            TransactionType::Expense => {
                summary.total_expenses += transaction.amount;
                summary
                    .category_breakdown
                    .add(&transaction.category, transaction.amount);
            }
        }
    }

    summary.balance = summary.total_income - summary.total_expenses;

    summary
}
