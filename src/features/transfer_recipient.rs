//! [Transfer Recipients API](https://paystack.com/docs/api/transfer-recipient): beneficiaries
//! to send money to.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    client::ApiClient,
    errors::Result,
    paths::{TRANSFER_RECIPIENT_BULK_CREATE_PATH, TRANSFER_RECIPIENT_PATH},
    query::Query,
    response::{Paginated, ResponseData, StatusMessage},
    types::{AnyJson, Currency, Domain, MetaData, RecipientType},
};

/// A recipient to create.
///
/// `bank_code` and `account_number` are required for `nuban`, `basa` and `ghipss` recipients;
/// `mobile_money` recipients carry them in the mobile money details instead.
#[derive(Builder, Debug, Clone, Serialize)]
pub struct CreateBody {
    #[serde(rename = "type")]
    pub recipient_type: RecipientType,
    #[builder(into)]
    pub name: String,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Authorization code of a previous transaction, for `authorization` recipients.
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetaData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BulkCreateBody {
    pub batch: Vec<CreateBody>,
}

#[derive(Builder, Debug, Clone, Serialize)]
pub struct UpdateBody {
    #[builder(into)]
    pub name: String,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
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
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipientDetails {
    pub authorization_code: Option<String>,
    pub account_number: Option<String>,
    pub account_name: Option<String>,
    pub bank_code: Option<String>,
    pub bank_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipientData {
    pub id: u64,
    pub integration: Option<u64>,
    pub name: String,
    pub recipient_code: String,
    #[serde(rename = "type")]
    pub recipient_type: RecipientType,
    pub active: Option<bool>,
    pub currency: Option<Currency>,
    pub domain: Option<Domain>,
    pub email: Option<String>,
    pub is_deleted: Option<bool>,
    pub details: Option<RecipientDetails>,
    pub description: Option<String>,
    pub metadata: Option<MetaData>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkCreateData {
    pub success: Vec<RecipientData>,
    #[serde(default)]
    pub errors: Vec<AnyJson>,
}

/// Handle to the transfer recipient endpoints.
#[derive(Debug, Clone)]
pub struct TransferRecipient {
    client: ApiClient,
}

impl TransferRecipient {
    pub fn new(client: ApiClient) -> Self {
        TransferRecipient { client }
    }

    pub async fn create(&self, body: &CreateBody) -> Result<ResponseData<RecipientData>> {
        self.client.post(TRANSFER_RECIPIENT_PATH, body).await
    }

    /// Creates several recipients in one call. Failed entries are reported in `errors`.
    pub async fn bulk_create(&self, body: &BulkCreateBody) -> Result<ResponseData<BulkCreateData>> {
        self.client
            .post(TRANSFER_RECIPIENT_BULK_CREATE_PATH, body)
            .await
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Paginated<RecipientData>> {
        let query = Query::from_serialize(query)?;
        self.client.get(TRANSFER_RECIPIENT_PATH, Some(&query)).await
    }

    pub async fn fetch(&self, id_or_code: &str) -> Result<ResponseData<RecipientData>> {
        self.client
            .get(&format!("{TRANSFER_RECIPIENT_PATH}/{id_or_code}"), None)
            .await
    }

    pub async fn update(
        &self,
        id_or_code: &str,
        body: &UpdateBody,
    ) -> Result<ResponseData<RecipientData>> {
        self.client
            .put(&format!("{TRANSFER_RECIPIENT_PATH}/{id_or_code}"), body)
            .await
    }

    pub async fn delete(&self, id_or_code: &str) -> Result<StatusMessage> {
        self.client
            .delete(&format!("{TRANSFER_RECIPIENT_PATH}/{id_or_code}"))
            .await
    }
}
