//! The fixed category vocabulary offered to users for each transaction type.
//!
//! The vocabulary is a suggestion for input forms. The transaction store
//! accepts any category name.

use crate::transaction::TransactionType;

/// Categories offered for expense transactions.
pub const EXPENSE_CATEGORIES: [&str; 8] = [
    "Alimentação",
    "Transporte",
    "Moradia",
    "Lazer",
    "Saúde",
    "Educação",
    "Compras",
    "Outros",
];

/// Categories offered for income transactions.
pub const INCOME_CATEGORIES: [&str; 5] = [
    "Salário",
    "Investimentos",
    "Freelance",
    "Presente",
    "Outros",
];

/// Get the categories offered for `transaction_type`.
pub fn categories_for(transaction_type: TransactionType) -> &'static [&'static str] {
    match transaction_type {
        TransactionType::Income => &INCOME_CATEGORIES,
        TransactionType::Expense => &EXPENSE_CATEGORIES,
    }
}

/// Whether `name` is one of the categories offered for `transaction_type`.
///
/// Comparison is exact, including case and accents.
pub fn is_known_category(transaction_type: TransactionType, name: &str) -> bool {
    categories_for(transaction_type).contains(&name)
}
