//! Types shared across feature modules.

pub mod amount;
mod common;

pub use amount::AmountValue;
pub use common::*;
