//! [Transactions API](https://paystack.com/docs/api/transaction): create and manage payments.
//!
//! All amounts are in sub units; see [`crate::types::amount`] for conversions.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    client::ApiClient,
    errors::Result,
    paths::{
        TRANSACTION_CHARGE_AUTHORIZATION_PATH, TRANSACTION_EXPORT_PATH,
        TRANSACTION_INITIALIZE_PATH, TRANSACTION_LIST_PATH, TRANSACTION_PARTIAL_DEBIT_PATH,
        TRANSACTION_TIMELINE_PATH, TRANSACTION_TOTALS_PATH, TRANSACTION_VERIFY_PATH,
    },
    query::Query,
    response::{Paginated, ResponseData},
    types::{
        AmountValue, AnyJson, Authorization, Currency, Customer, Domain, MetaData, PaymentChannel,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Success,
    Failed,
    Abandoned,
    Ongoing,
    Pending,
    Reversed,
    #[serde(other)]
    Unknown,
}

/// Who bears the Paystack fees of a split payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bearer {
    Account,
    Subaccount,
}

#[derive(Builder, Debug, Clone, Serialize)]
pub struct InitializeBody {
    #[builder(into)]
    pub amount: AmountValue,
    #[builder(into)]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Unique alphanumeric reference; generated by Paystack when omitted.
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Overrides the callback URL set on the dashboard.
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    /// Plan code; turns the transaction into a subscription and overrides `amount`.
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetaData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<PaymentChannel>>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_code: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaccount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_charge: Option<AmountValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer: Option<Bearer>,
}

#[derive(Builder, Debug, Clone, Serialize)]
pub struct ChargeAuthorizationBody {
    #[builder(into)]
    pub amount: AmountValue,
    #[builder(into)]
    pub email: String,
    #[builder(into)]
    pub authorization_code: String,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetaData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<PaymentChannel>>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaccount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_charge: Option<AmountValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer: Option<Bearer>,
    /// Queue the charge; recommended for scheduled bulk charges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue: Option<bool>,
}

#[derive(Builder, Debug, Clone, Serialize)]
pub struct PartialDebitBody {
    #[builder(into)]
    pub authorization_code: String,
    pub currency: Currency,
    #[builder(into)]
    pub amount: AmountValue,
    #[builder(into)]
    pub email: String,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Minimum amount to charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at_least: Option<AmountValue>,
}

/// Filters for [`Transaction::list`]. `from` and `to` take ISO dates, e.g. `2023-04-24`.
#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct ListQuery {
    #[serde(rename = "perPage")]
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    #[builder(into)]
    pub from: Option<String>,
    #[builder(into)]
    pub to: Option<String>,
    pub customer: Option<u64>,
    #[builder(into)]
    pub terminalid: Option<String>,
    pub status: Option<TransactionStatus>,
    pub amount: Option<AmountValue>,
}

#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct TotalsQuery {
    #[serde(rename = "perPage")]
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    #[builder(into)]
    pub from: Option<String>,
    #[builder(into)]
    pub to: Option<String>,
}

#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct ExportQuery {
    #[serde(rename = "perPage")]
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    #[builder(into)]
    pub from: Option<String>,
    #[builder(into)]
    pub to: Option<String>,
    pub customer: Option<u64>,
    pub status: Option<TransactionStatus>,
    pub currency: Option<Currency>,
    pub amount: Option<AmountValue>,
    /// `true` for settled transactions only, `false` for pending ones.
    pub settled: Option<bool>,
    pub settlement: Option<u64>,
    pub payment_page: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitializeData {
    pub authorization_url: String,
    pub access_code: String,
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub time: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionLog {
    pub start_time: Option<u64>,
    pub time_spent: Option<u64>,
    pub attempts: Option<u32>,
    pub errors: Option<u32>,
    pub success: Option<bool>,
    pub mobile: Option<bool>,
    pub channel: Option<PaymentChannel>,
    #[serde(default)]
    pub input: Vec<AnyJson>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionData {
    pub id: Option<u64>,
    pub domain: Option<Domain>,
    pub status: Option<TransactionStatus>,
    pub reference: Option<String>,
    pub amount: Option<AmountValue>,
    pub message: Option<String>,
    pub gateway_response: Option<String>,
    pub paid_at: Option<String>,
    pub created_at: Option<String>,
    pub channel: Option<PaymentChannel>,
    pub currency: Option<Currency>,
    pub ip_address: Option<String>,
    pub metadata: Option<MetaData>,
    pub log: Option<TransactionLog>,
    pub fees: Option<AmountValue>,
    pub authorization: Option<Authorization>,
    pub customer: Option<Customer>,
    pub plan: Option<AnyJson>,
    pub split: Option<AnyJson>,
    pub requested_amount: Option<AmountValue>,
    pub transaction_date: Option<String>,
    pub subaccount: Option<AnyJson>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyVolume {
    pub currency: Currency,
    pub amount: AmountValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalsData {
    pub total_transactions: u64,
    pub unique_customers: Option<u64>,
    pub total_volume: AmountValue,
    #[serde(default)]
    pub total_volume_by_currency: Vec<CurrencyVolume>,
    pub pending_transfers: AmountValue,
    #[serde(default)]
    pub pending_transfers_by_currency: Vec<CurrencyVolume>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportData {
    /// Download link of the generated CSV file.
    pub path: String,
}

/// Handle to the transactions endpoints.
#[derive(Debug, Clone)]
pub struct Transaction {
    client: ApiClient,
}

impl Transaction {
    pub fn new(client: ApiClient) -> Self {
        Transaction { client }
    }

    /// Starts a payment and returns the `authorization_url` the customer completes it on.
    ///
    /// Never verify the returned reference from a frontend: it requires the secret key.
    pub async fn initialize(&self, body: &InitializeBody) -> Result<ResponseData<InitializeData>> {
        self.client.post(TRANSACTION_INITIALIZE_PATH, body).await
    }

    /// Confirms the status of a transaction by its reference.
    pub async fn verify(&self, reference: &str) -> Result<ResponseData<TransactionData>> {
        self.client
            .get(&format!("{TRANSACTION_VERIFY_PATH}{reference}"), None)
            .await
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Paginated<TransactionData>> {
        let query = Query::from_serialize(query)?;
        self.client.get(TRANSACTION_LIST_PATH, Some(&query)).await
    }

    pub async fn fetch(&self, id: u64) -> Result<ResponseData<TransactionData>> {
        self.client
            .get(&format!("{TRANSACTION_LIST_PATH}/{id}"), None)
            .await
    }

    /// Charges a reusable authorization without the customer re-entering details.
    pub async fn charge_authorization(
        &self,
        body: &ChargeAuthorizationBody,
    ) -> Result<ResponseData<TransactionData>> {
        self.client
            .post(TRANSACTION_CHARGE_AUTHORIZATION_PATH, body)
            .await
    }

    pub async fn timeline(&self, id_or_reference: &str) -> Result<ResponseData<TransactionLog>> {
        self.client
            .get(&format!("{TRANSACTION_TIMELINE_PATH}{id_or_reference}"), None)
            .await
    }

    /// Total amount received on the integration.
    pub async fn totals(&self, query: &TotalsQuery) -> Result<ResponseData<TotalsData>> {
        let query = Query::from_serialize(query)?;
        self.client.get(TRANSACTION_TOTALS_PATH, Some(&query)).await
    }

    pub async fn export(&self, query: &ExportQuery) -> Result<ResponseData<ExportData>> {
        let query = Query::from_serialize(query)?;
        self.client.get(TRANSACTION_EXPORT_PATH, Some(&query)).await
    }

    pub async fn partial_debit(
        &self,
        body: &PartialDebitBody,
    ) -> Result<ResponseData<TransactionData>> {
        self.client.post(TRANSACTION_PARTIAL_DEBIT_PATH, body).await
    }
}
