pub(crate) mod budget;
pub(crate) mod overview;
pub(crate) mod transactions;
