use rust_decimal::Decimal;

use super::Category;

/// Per-category spending limits. Fixed configuration in this version: there
/// is no UI to edit it and it is not persisted, though the model allows
/// arbitrary limits.
#[derive(Debug, Clone)]
pub(crate) struct BudgetTable {
    limits: Vec<(Category, Decimal)>,
}

impl BudgetTable {
    pub(crate) fn new(limits: Vec<(Category, Decimal)>) -> Self {
        Self { limits }
    }

    pub(crate) fn limit(&self, category: Category) -> Decimal {
        self.limits
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, l)| *l)
            .unwrap_or(Decimal::ZERO)
    }
}

impl Default for BudgetTable {
    fn default() -> Self {
        Self::new(vec![
            (Category::Food, Decimal::from(500)),
            (Category::Transport, Decimal::from(300)),
            (Category::Shopping, Decimal::from(200)),
            (Category::Bills, Decimal::from(400)),
            (Category::Others, Decimal::from(100)),
        ])
    }
}
