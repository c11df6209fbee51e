//! [Verification API](https://paystack.com/docs/api/verification): account and card checks.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    client::ApiClient,
    errors::Result,
    paths::{VERIFICATION_CARD_BIN_PATH, VERIFICATION_RESOLVE_PATH, VERIFICATION_VALIDATE_PATH},
    query::Query,
    response::ResponseData,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Personal,
    Business,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentType {
    IdentityNumber,
    PassportNumber,
    BusinessRegistrationNumber,
}

#[derive(Builder, Debug, Clone, Serialize)]
pub struct ResolveAccountQuery {
    #[builder(into)]
    pub account_number: String,
    /// Bank code from [`super::misc::Misc::list_banks`].
    #[builder(into)]
    pub bank_code: String,
}

#[derive(Builder, Debug, Clone, Serialize, Deserialize)]
pub struct ValidateAccountBody {
    /// First and last name as registered with the bank.
    #[builder(into)]
    pub account_name: String,
    #[builder(into)]
    pub account_number: String,
    pub account_type: AccountType,
    #[builder(into)]
    pub bank_code: String,
    /// Two-letter ISO country code of the bank.
    #[builder(into)]
    pub country_code: String,
    pub document_type: DocumentType,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedAccount {
    pub account_number: String,
    pub account_name: String,
    pub bank_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountValidation {
    pub verified: bool,
    #[serde(rename = "verificationMessage")]
    pub verification_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardBin {
    pub bin: String,
    pub brand: Option<String>,
    pub sub_brand: Option<String>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
    pub card_type: Option<String>,
    pub bank: Option<String>,
    pub linked_bank_id: Option<u64>,
}

/// Handle to the verification endpoints.
#[derive(Debug, Clone)]
pub struct Verification {
    client: ApiClient,
}

impl Verification {
    pub fn new(client: ApiClient) -> Self {
        Verification { client }
    }

    /// Confirms an account number belongs to the named bank and returns the account name.
    pub async fn resolve_account(
        &self,
        query: &ResolveAccountQuery,
    ) -> Result<ResponseData<ResolvedAccount>> {
        let query = Query::from_serialize(query)?;
        self.client.get(VERIFICATION_RESOLVE_PATH, Some(&query)).await
    }

    /// Validates a South African account against the holder's identity document.
    pub async fn validate_account(
        &self,
        body: &ValidateAccountBody,
    ) -> Result<ResponseData<AccountValidation>> {
        self.client.post(VERIFICATION_VALIDATE_PATH, body).await
    }

    /// Looks up a card by its first six digits.
    pub async fn resolve_card_bin(&self, bin: &str) -> Result<ResponseData<CardBin>> {
        self.client
            .get(&format!("{VERIFICATION_CARD_BIN_PATH}/{bin}"), None)
            .await
    }
}
