//! One handle per Paystack resource. Each method maps to a single endpoint.

pub mod misc;
pub mod plan;
pub mod subscription;
pub mod transaction;
pub mod transfer;
pub mod transfer_recipient;
pub mod verification;

pub use misc::Misc;
pub use plan::Plan;
pub use subscription::Subscription;
pub use transaction::Transaction;
pub use transfer::Transfer;
pub use transfer_recipient::TransferRecipient;
pub use verification::Verification;
