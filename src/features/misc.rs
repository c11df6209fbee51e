//! [Miscellaneous API](https://paystack.com/docs/api/miscellaneous): banks, countries and states.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    client::ApiClient,
    errors::Result,
    paths::{MISC_BANKS_PATH, MISC_COUNTRIES_PATH, MISC_STATES_PATH},
    query::Query,
    response::Paginated,
    types::{AnyJson, Country, Currency},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gateway {
    Emandate,
    Digitalbankmandate,
}

#[derive(Builder, Debug, Clone, Default, Serialize)]
pub struct ListBanksQuery {
    pub country: Option<Country>,
    /// Enables cursor pagination through `next` and `previous`.
    pub use_cursor: Option<bool>,
    #[serde(rename = "perPage")]
    pub per_page: Option<u32>,
    /// Only banks a customer can transfer to when paying.
    pub pay_with_bank_transfer: Option<bool>,
    /// Only banks a customer can pay directly from.
    pub pay_with_bank: Option<bool>,
    /// Only South African banks supported for account verification.
    pub enable_for_verification: Option<bool>,
    #[builder(into)]
    pub next: Option<String>,
    #[builder(into)]
    pub previous: Option<String>,
    pub gateway: Option<Gateway>,
    /// `mobile_money` or `ghipps` for Ghanaian channels.
    #[builder(into)]
    #[serde(rename = "type")]
    pub channel_type: Option<String>,
    pub currency: Option<Currency>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub code: String,
    pub longcode: Option<String>,
    pub gateway: Option<String>,
    pub pay_with_bank: Option<bool>,
    pub active: Option<bool>,
    pub is_deleted: Option<bool>,
    pub country: Option<String>,
    pub currency: Option<Currency>,
    #[serde(rename = "type")]
    pub bank_type: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryData {
    pub id: u64,
    pub name: String,
    pub iso_code: String,
    pub default_currency_code: Option<Currency>,
    pub integration_defaults: Option<AnyJson>,
    pub relationships: Option<AnyJson>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub name: String,
    pub slug: String,
    pub abbreviation: String,
}

/// Handle to the lookup endpoints.
#[derive(Debug, Clone)]
pub struct Misc {
    client: ApiClient,
}

impl Misc {
    pub fn new(client: ApiClient) -> Self {
        Misc { client }
    }

    pub async fn list_banks(&self, query: &ListBanksQuery) -> Result<Paginated<Bank>> {
        let query = Query::from_serialize(query)?;
        self.client.get(MISC_BANKS_PATH, Some(&query)).await
    }

    /// Countries Paystack currently supports.
    pub async fn list_countries(&self) -> Result<Paginated<CountryData>> {
        self.client.get(MISC_COUNTRIES_PATH, None).await
    }

    /// States of a country, for address verification. `country` is a two-letter code, e.g. `CA`.
    pub async fn list_states(&self, country: &str) -> Result<Paginated<State>> {
        let query = Query::new().param("country", country);
        self.client.get(MISC_STATES_PATH, Some(&query)).await
    }
}
