use serde::{Deserialize, Serialize};

pub type AnyJson = serde_json::Value;

/// Free-form metadata attached to customers, recipients and transactions.
pub type MetaData = AnyJson;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "NGN")]
    Ngn,
    #[serde(rename = "GHS")]
    Ghs,
    #[serde(rename = "ZAR")]
    Zar,
    #[serde(rename = "KES")]
    Kes,
    #[serde(rename = "USD")]
    Usd,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    Nigeria,
    Ghana,
    Kenya,
    #[serde(rename = "south africa")]
    SouthAfrica,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentChannel {
    Card,
    Bank,
    Ussd,
    Qr,
    MobileMoney,
    BankTransfer,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Test,
    Live,
    #[serde(other)]
    Unknown,
}

/// Billing interval of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    /// Every six months.
    Biannually,
    Annually,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipientType {
    /// Nigerian bank account.
    Nuban,
    /// South African bank account.
    Basa,
    /// Ghanaian bank account.
    Ghipss,
    MobileMoney,
    Authorization,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskAction {
    Default,
    Allow,
    Deny,
    #[serde(other)]
    Unknown,
}

/// A reusable card or bank authorization returned after a successful charge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Authorization {
    pub authorization_code: Option<String>,
    pub bin: Option<String>,
    pub last4: Option<String>,
    pub exp_month: Option<String>,
    pub exp_year: Option<String>,
    pub channel: Option<PaymentChannel>,
    pub card_type: Option<String>,
    pub bank: Option<String>,
    pub account_name: Option<String>,
    pub country_code: Option<String>,
    pub brand: Option<String>,
    pub reusable: Option<bool>,
    pub signature: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Option<u64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub customer_code: Option<String>,
    pub phone: Option<String>,
    pub metadata: Option<MetaData>,
    pub risk_action: Option<RiskAction>,
    pub international_format_phone: Option<String>,
}
