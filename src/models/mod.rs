mod budget;
mod category;
mod draft;
mod transaction;

pub(crate) use budget::BudgetTable;
pub(crate) use category::Category;
pub(crate) use draft::Draft;
pub(crate) use transaction::Transaction;
