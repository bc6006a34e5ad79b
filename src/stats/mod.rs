pub mod aggregator;
pub mod branch;
pub mod counters;
pub mod regs;

pub use aggregator::{aggregate, aggregate_raw, Aggregator};
pub use branch::BranchKind;
pub use counters::{RegCounter, Stats, NUM_REGS};
