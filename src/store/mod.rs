use std::str::FromStr;

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{Category, Draft, Transaction};
use crate::persist::KvStore;

/// Snapshot key in the persistence adapter.
const TRANSACTIONS_KEY: &str = "transactions";

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("{0}")]
    Validation(String),
    #[error("No transaction with id {0}")]
    NotFound(i64),
    #[error(transparent)]
    Persist(#[from] anyhow::Error),
}

/// Authoritative owner of the transaction list and the edit marker; the only
/// component that mutates either. Every successful mutation writes the full
/// serialized list back through the persistence adapter, so the snapshot is
/// never more than one operation stale.
pub(crate) struct TransactionStore {
    adapter: Box<dyn KvStore>,
    transactions: Vec<Transaction>,
    editing: Option<i64>,
    next_id: i64,
}

impl TransactionStore {
    pub(crate) fn new(adapter: Box<dyn KvStore>) -> Self {
        Self {
            adapter,
            transactions: Vec::new(),
            editing: None,
            next_id: 1,
        }
    }

    /// Replace the in-memory list with the persisted snapshot, if any, and
    /// reseed the id counter past the highest stored id. A missing snapshot
    /// leaves the list empty; a malformed one is discarded wholesale (a lost
    /// local cache is not user-actionable). Returns the number of records
    /// loaded.
    pub(crate) fn load(&mut self) -> Result<usize> {
        let Some(raw) = self.adapter.get(TRANSACTIONS_KEY)? else {
            return Ok(0);
        };
        match serde_json::from_str::<Vec<Transaction>>(&raw) {
            Ok(list) => {
                self.next_id = list.iter().map(|t| t.id).max().unwrap_or(0) + 1;
                self.transactions = list;
                Ok(self.transactions.len())
            }
            Err(_) => {
                self.transactions.clear();
                self.next_id = 1;
                Ok(0)
            }
        }
    }

    /// Validate the draft and append it as a new transaction. Ids come from
    /// a monotonically increasing counter, never from the list length, so a
    /// delete followed by a create cannot collide with a surviving id.
    pub(crate) fn create(&mut self, draft: &Draft) -> Result<i64, StoreError> {
        let (amount, date, description, category) = validate(draft)?;
        let id = self.next_id;
        self.next_id += 1;
        self.transactions.push(Transaction {
            id,
            amount,
            date,
            description,
            category,
        });
        self.persist()?;
        Ok(id)
    }

    /// Merge the draft's fields into the transaction with the given id,
    /// preserving the id, then clear the edit marker.
    pub(crate) fn update(&mut self, id: i64, draft: &Draft) -> Result<(), StoreError> {
        let (amount, date, description, category) = validate(draft)?;
        let txn = self
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        txn.amount = amount;
        txn.date = date;
        txn.description = description;
        txn.category = category;
        self.persist()?;
        self.editing = None;
        Ok(())
    }

    /// Remove the transaction with the given id. Deleting an absent id is a
    /// no-op, not an error. Returns whether anything was removed.
    pub(crate) fn delete(&mut self, id: i64) -> Result<bool, StoreError> {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        if self.transactions.len() == before {
            return Ok(false);
        }
        if self.editing == Some(id) {
            self.editing = None;
        }
        self.persist()?;
        Ok(true)
    }

    /// Mark the transaction as being edited and return a draft prefilled
    /// from its fields for the form to display.
    pub(crate) fn begin_edit(&mut self, id: i64) -> Result<Draft, StoreError> {
        let txn = self
            .transactions
            .iter()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let draft = Draft::from_transaction(txn);
        self.editing = Some(id);
        Ok(draft)
    }

    pub(crate) fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn editing(&self) -> Option<i64> {
        self.editing
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.transactions)
            .map_err(|e| StoreError::Persist(e.into()))?;
        self.adapter.set(TRANSACTIONS_KEY, &json)?;
        Ok(())
    }
}

/// All four fields are required; amount must parse as a non-negative
/// decimal, date as an ISO calendar date, and category must belong to the
/// fixed set. Rejecting bad input here keeps aggregation total: it never
/// has to parse anything downstream.
fn validate(draft: &Draft) -> Result<(Decimal, String, String, Category), StoreError> {
    let fields = [
        ("amount", &draft.amount),
        ("date", &draft.date),
        ("description", &draft.description),
        ("category", &draft.category),
    ];
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();
    if !missing.is_empty() {
        return Err(StoreError::Validation(format!(
            "All fields are required (empty: {})",
            missing.join(", ")
        )));
    }

    let amount = Decimal::from_str(draft.amount.trim()).map_err(|_| {
        StoreError::Validation(format!("Invalid amount: {}", draft.amount.trim()))
    })?;
    if amount < Decimal::ZERO {
        return Err(StoreError::Validation(format!(
            "Amount must not be negative: {amount}"
        )));
    }

    let date = draft.date.trim();
    if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err(StoreError::Validation(format!(
            "Invalid date (use YYYY-MM-DD): {date}"
        )));
    }

    let category = Category::parse(&draft.category).ok_or_else(|| {
        StoreError::Validation(format!("Unknown category: {}", draft.category.trim()))
    })?;

    Ok((
        amount,
        date.to_string(),
        draft.description.trim().to_string(),
        category,
    ))
}

#[cfg(test)]
mod tests;
