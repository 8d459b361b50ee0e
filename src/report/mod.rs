//! Pure derivations over the current transaction list. Recomputed on every
//! render rather than incrementally maintained: O(transactions x categories)
//! per call, which is nothing at personal-tracker scale, and it can never go
//! stale.

use rust_decimal::Decimal;

use crate::models::{BudgetTable, Category, Transaction};

pub(crate) struct CategoryTotal {
    pub(crate) category: Category,
    pub(crate) total: Decimal,
}

pub(crate) struct BudgetRow {
    pub(crate) category: Category,
    pub(crate) limit: Decimal,
    pub(crate) actual: Decimal,
}

pub(crate) fn total_expenses(transactions: &[Transaction]) -> Decimal {
    transactions.iter().map(|t| t.amount).sum()
}

/// One entry per category in enumeration order. Categories with no
/// transactions are present with a zero total, never omitted: every chart
/// shows the full category set.
pub(crate) fn category_expenses(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    Category::all()
        .iter()
        .map(|&category| CategoryTotal {
            category,
            total: category_sum(transactions, category),
        })
        .collect()
}

/// Budget limit paired with actual spend, one row per category in
/// enumeration order.
pub(crate) fn budget_vs_actual(
    transactions: &[Transaction],
    budgets: &BudgetTable,
) -> Vec<BudgetRow> {
    Category::all()
        .iter()
        .map(|&category| BudgetRow {
            category,
            limit: budgets.limit(category),
            actual: category_sum(transactions, category),
        })
        .collect()
}

fn category_sum(transactions: &[Transaction], category: Category) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.category == category)
        .map(|t| t.amount)
        .sum()
}
