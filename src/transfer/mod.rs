pub mod executor;
pub mod progress;

pub use executor::{transfer, TransferOutcome, TransferResult};
