use super::Transaction;

/// The form's working record: the four inputs exactly as typed. Validation
/// and parsing happen in the store at create/update time, so the form can
/// hold anything while the user is still editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Draft {
    pub(crate) amount: String,
    pub(crate) date: String,
    pub(crate) description: String,
    pub(crate) category: String,
}

impl Draft {
    pub(crate) fn from_transaction(txn: &Transaction) -> Self {
        Self {
            amount: txn.amount.to_string(),
            date: txn.date.clone(),
            description: txn.description.clone(),
            category: txn.category.as_str().to_string(),
        }
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
