//! [Plans API](https://paystack.com/docs/api/plan): installment payment options.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    client::ApiClient,
    errors::Result,
    paths::PLAN_PATH,
    query::Query,
    response::{Paginated, ResponseData, StatusMessage},
    types::{AmountValue, AnyJson, Currency, Domain, Interval},
};

#[derive(Builder, Debug, Clone, Serialize)]
pub struct PlanBody {
    #[builder(into)]
    pub name: String,
    #[builder(into)]
    pub amount: AmountValue,
    pub interval: Interval,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Set to `false` to stop invoices being emailed to customers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_invoices: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_sms: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Number of invoices to raise; a subscription's own `invoice_limit` overrides it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_limit: Option<u32>,
}

#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct ListQuery {
    #[serde(rename = "perPage")]
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    #[builder(into)]
    pub status: Option<String>,
    pub interval: Option<Interval>,
    pub amount: Option<AmountValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanData {
    pub id: u64,
    pub name: String,
    pub plan_code: String,
    pub amount: AmountValue,
    pub interval: Interval,
    pub description: Option<String>,
    pub integration: Option<u64>,
    pub domain: Option<Domain>,
    pub currency: Option<Currency>,
    pub send_invoices: Option<bool>,
    pub send_sms: Option<bool>,
    pub hosted_page: Option<bool>,
    pub hosted_page_url: Option<String>,
    pub hosted_page_summary: Option<String>,
    pub invoice_limit: Option<u32>,
    #[serde(default)]
    pub subscriptions: Vec<AnyJson>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}

/// Handle to the plan endpoints.
#[derive(Debug, Clone)]
pub struct Plan {
    client: ApiClient,
}

impl Plan {
    pub fn new(client: ApiClient) -> Self {
        Plan { client }
    }

    pub async fn create(&self, body: &PlanBody) -> Result<ResponseData<PlanData>> {
        self.client.post(PLAN_PATH, body).await
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Paginated<PlanData>> {
        let query = Query::from_serialize(query)?;
        self.client.get(PLAN_PATH, Some(&query)).await
    }

    pub async fn fetch(&self, id_or_code: &str) -> Result<ResponseData<PlanData>> {
        self.client
            .get(&format!("{PLAN_PATH}/{id_or_code}"), None)
            .await
    }

    pub async fn update(&self, id_or_code: &str, body: &PlanBody) -> Result<StatusMessage> {
        self.client
            .put(&format!("{PLAN_PATH}/{id_or_code}"), body)
            .await
    }
}
