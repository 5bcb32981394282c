mod catalog;
mod ledger;

pub use catalog::CatalogStore;
pub use ledger::OrderLedger;
