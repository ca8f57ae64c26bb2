pub mod field;
pub mod flag;
pub mod nav;
pub mod payload;
pub mod phase;
pub mod priority;
pub mod snapshot;
