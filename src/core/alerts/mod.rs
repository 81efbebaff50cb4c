// Alert data: record types and the read-only store.
//
// Architecture:
// - model.rs: Alert record, severity and category enumerations
// - store.rs: Validated, immutable alert collection (sample data included)

pub mod model;
pub mod store;
