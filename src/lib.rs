//! A typed async client for the [Paystack](https://paystack.com/docs/api) REST API.
//!
//! ```rust,no_run
//! use paystack_kit::{Paystack, features::transaction::InitializeBody};
//!
//! # async fn example() -> paystack_kit::Result<()> {
//! let paystack = Paystack::new("sk_test_xxx")?;
//! let res = paystack
//!     .transaction
//!     .initialize(
//!         &InitializeBody::builder()
//!             .amount(paystack_kit::convert_to_sub_unit(200.0)?)
//!             .email("customer@email.com")
//!             .build(),
//!     )
//!     .await?;
//! println!("{}", res.data.authorization_url);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod errors;
pub mod features;
pub mod paths;
pub mod query;
pub mod response;
pub mod types;

pub use client::ApiClient;
pub use config::{ClientConfig, Secret};
pub use errors::{Error, Result};
pub use query::{Query, QueryValue};
pub use types::amount::{convert_to_main_unit, convert_to_sub_unit};

use features::{Misc, Plan, Subscription, Transaction, Transfer, TransferRecipient, Verification};

/// Entry point bundling every feature handle over one shared [`ApiClient`].
#[derive(Debug, Clone)]
pub struct Paystack {
    client: ApiClient,
    pub transaction: Transaction,
    pub transfer_recipient: TransferRecipient,
    pub transfer: Transfer,
    pub plan: Plan,
    pub subscription: Subscription,
    pub verification: Verification,
    pub misc: Misc,
}

impl Paystack {
    pub fn new(secret: impl Into<Secret>) -> Result<Self> {
        ApiClient::new(secret).map(Self::from_client)
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        ApiClient::from_config(config).map(Self::from_client)
    }

    pub fn from_client(client: ApiClient) -> Self {
        Paystack {
            transaction: Transaction::new(client.clone()),
            transfer_recipient: TransferRecipient::new(client.clone()),
            transfer: Transfer::new(client.clone()),
            plan: Plan::new(client.clone()),
            subscription: Subscription::new(client.clone()),
            verification: Verification::new(client.clone()),
            misc: Misc::new(client.clone()),
            client,
        }
    }

    /// The shared transport, for endpoints without a dedicated method.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}
