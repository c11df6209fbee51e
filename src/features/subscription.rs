//! [Subscriptions API](https://paystack.com/docs/api/subscription): recurring charges on a plan.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    client::ApiClient,
    errors::Result,
    paths::{SUBSCRIPTION_DISABLE_PATH, SUBSCRIPTION_ENABLE_PATH, SUBSCRIPTION_PATH},
    query::Query,
    response::{Paginated, ResponseData, StatusMessage, expand},
    types::{AmountValue, AnyJson, Authorization, Customer, Domain},
};

use super::plan::PlanData;

#[derive(Builder, Debug, Clone, Serialize)]
pub struct CreateBody {
    /// Customer email or code.
    #[builder(into)]
    pub customer: String,
    #[builder(into)]
    pub plan: String,
    /// Authorization to charge; defaults to the customer's most recent one.
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,
    /// ISO 8601 date of the first debit, e.g. `2017-05-16T00:30:13+01:00`.
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

#[derive(Builder, Debug, Clone, Serialize)]
pub struct EnableDisableBody {
    /// Subscription code.
    #[builder(into)]
    pub code: String,
    /// Email token sent to the customer.
    #[builder(into)]
    pub token: String,
}

#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct ListQuery {
    #[serde(rename = "perPage")]
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    /// Customer id.
    #[builder(into)]
    pub customer: Option<String>,
    /// Plan id.
    #[builder(into)]
    pub plan: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionData {
    pub id: u64,
    pub subscription_code: String,
    pub status: String,
    pub amount: Option<AmountValue>,
    pub quantity: Option<u32>,
    pub domain: Option<Domain>,
    pub integration: Option<u64>,
    pub start: Option<u64>,
    pub email_token: Option<String>,
    pub cron_expression: Option<String>,
    pub next_payment_date: Option<String>,
    pub open_invoice: Option<AnyJson>,
    pub authorization: Option<AnyJson>,
    pub customer: Option<AnyJson>,
    pub plan: Option<AnyJson>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}

impl SubscriptionData {
    /// The expanded customer, when the endpoint returned one rather than an id.
    pub fn customer_data(&self) -> Option<Result<Customer>> {
        expand(self.customer.as_ref())
    }

    pub fn plan_data(&self) -> Option<Result<PlanData>> {
        expand(self.plan.as_ref())
    }

    pub fn authorization_data(&self) -> Option<Result<Authorization>> {
        expand(self.authorization.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateLinkData {
    pub link: String,
}

/// Handle to the subscription endpoints.
#[derive(Debug, Clone)]
pub struct Subscription {
    client: ApiClient,
}

impl Subscription {
    pub fn new(client: ApiClient) -> Self {
        Subscription { client }
    }

    pub async fn create(&self, body: &CreateBody) -> Result<ResponseData<SubscriptionData>> {
        self.client.post(SUBSCRIPTION_PATH, body).await
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Paginated<SubscriptionData>> {
        let query = Query::from_serialize(query)?;
        self.client.get(SUBSCRIPTION_PATH, Some(&query)).await
    }

    pub async fn fetch(&self, id_or_code: &str) -> Result<ResponseData<SubscriptionData>> {
        let query = Query::new().path(format!("/{id_or_code}"));
        self.client.get(SUBSCRIPTION_PATH, Some(&query)).await
    }

    pub async fn enable(&self, body: &EnableDisableBody) -> Result<StatusMessage> {
        self.client.post(SUBSCRIPTION_ENABLE_PATH, body).await
    }

    pub async fn disable(&self, body: &EnableDisableBody) -> Result<StatusMessage> {
        self.client.post(SUBSCRIPTION_DISABLE_PATH, body).await
    }

    /// Generates a link the customer can use to update the card on a subscription.
    pub async fn generate_update_link(&self, code: &str) -> Result<ResponseData<UpdateLinkData>> {
        self.client
            .get(&format!("{SUBSCRIPTION_PATH}/{code}/manage/link"), None)
            .await
    }

    /// Emails the customer a link to update the card on a subscription.
    pub async fn send_update_link(&self, code: &str) -> Result<StatusMessage> {
        self.client
            .get(&format!("{SUBSCRIPTION_PATH}/{code}/manage/email"), None)
            .await
    }
}
