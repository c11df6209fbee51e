//! [Transfers API](https://paystack.com/docs/api/transfer): send money to recipients.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    client::ApiClient,
    errors::Result,
    paths::{
        TRANSFER_FINALIZE_PATH, TRANSFER_INITIATE_BULK_PATH, TRANSFER_PATH, TRANSFER_VERIFY_PATH,
    },
    query::Query,
    response::{Paginated, ResponseData, expand},
    types::{AmountValue, AnyJson, Currency, Domain},
};

use super::transfer_recipient::RecipientData;

/// Where a transfer is funded from. Only the integration balance is supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferSource {
    #[default]
    Balance,
}

/// `otp` when an OTP must be submitted through [`Transfer::finalize`], `pending` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferStatus {
    Otp,
    Pending,
    Success,
    Failed,
    Reversed,
    Received,
    #[serde(other)]
    Unknown,
}

#[derive(Builder, Debug, Clone, Serialize)]
pub struct InitiateBody {
    #[builder(default)]
    pub source: TransferSource,
    #[builder(into)]
    pub amount: AmountValue,
    /// Recipient code returned when the transfer recipient was created.
    #[builder(into)]
    pub recipient: String,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Lowercase unique identifier; only `-`, `_` and alphanumerics are allowed.
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

#[derive(Builder, Debug, Clone, Serialize)]
pub struct FinalizeBody {
    #[builder(into)]
    pub transfer_code: String,
    #[builder(into)]
    pub otp: String,
}

#[derive(Builder, Debug, Clone, Serialize)]
pub struct BulkTransfer {
    #[builder(into)]
    pub amount: AmountValue,
    #[builder(into)]
    pub recipient: String,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Builder, Debug, Clone, Serialize)]
pub struct InitiateBulkBody {
    #[builder(default)]
    pub source: TransferSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    pub transfers: Vec<BulkTransfer>,
}

#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct ListQuery {
    #[serde(rename = "perPage")]
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    #[builder(into)]
    pub from: Option<String>,
    #[builder(into)]
    pub to: Option<String>,
    #[builder(into)]
    pub customer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferData {
    pub id: Option<u64>,
    pub integration: Option<u64>,
    pub domain: Option<Domain>,
    pub amount: AmountValue,
    pub currency: Option<Currency>,
    pub source: Option<TransferSource>,
    pub reason: Option<String>,
    /// Recipient id on initiate, full recipient on list and fetch.
    pub recipient: Option<AnyJson>,
    pub status: TransferStatus,
    pub transfer_code: String,
    pub reference: Option<String>,
    pub failures: Option<AnyJson>,
    pub transferred_at: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}

impl TransferData {
    /// The expanded recipient, when the endpoint returned one.
    pub fn recipient_data(&self) -> Option<Result<RecipientData>> {
        expand(self.recipient.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkTransferData {
    pub reference: Option<String>,
    pub recipient: String,
    pub amount: AmountValue,
    pub transfer_code: String,
    pub currency: Option<Currency>,
    pub status: TransferStatus,
}

/// Handle to the transfer endpoints.
#[derive(Debug, Clone)]
pub struct Transfer {
    client: ApiClient,
}

impl Transfer {
    pub fn new(client: ApiClient) -> Self {
        Transfer { client }
    }

    pub async fn initiate(&self, body: &InitiateBody) -> Result<ResponseData<TransferData>> {
        self.client.post(TRANSFER_PATH, body).await
    }

    /// Completes a transfer that is waiting on an OTP.
    pub async fn finalize(&self, body: &FinalizeBody) -> Result<ResponseData<TransferData>> {
        self.client.post(TRANSFER_FINALIZE_PATH, body).await
    }

    pub async fn initiate_bulk(
        &self,
        body: &InitiateBulkBody,
    ) -> Result<ResponseData<Vec<BulkTransferData>>> {
        self.client.post(TRANSFER_INITIATE_BULK_PATH, body).await
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Paginated<TransferData>> {
        let query = Query::from_serialize(query)?;
        self.client.get(TRANSFER_PATH, Some(&query)).await
    }

    pub async fn fetch(&self, id_or_code: &str) -> Result<ResponseData<TransferData>> {
        self.client
            .get(&format!("{TRANSFER_PATH}/{id_or_code}"), None)
            .await
    }

    pub async fn verify(&self, reference: &str) -> Result<ResponseData<TransferData>> {
        self.client
            .get(&format!("{TRANSFER_VERIFY_PATH}{reference}"), None)
            .await
    }
}
