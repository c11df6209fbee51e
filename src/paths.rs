//! Endpoint paths, relative to [`PAYSTACK_BASE_URL`].

pub const PAYSTACK_BASE_URL: &str = "https://api.paystack.co";

pub const TRANSACTION_INITIALIZE_PATH: &str = "/transaction/initialize";
pub const TRANSACTION_VERIFY_PATH: &str = "/transaction/verify/";
pub const TRANSACTION_LIST_PATH: &str = "/transaction";
pub const TRANSACTION_CHARGE_AUTHORIZATION_PATH: &str = "/transaction/charge_authorization";
pub const TRANSACTION_TIMELINE_PATH: &str = "/transaction/timeline/";
pub const TRANSACTION_TOTALS_PATH: &str = "/transaction/totals";
pub const TRANSACTION_EXPORT_PATH: &str = "/transaction/export";
pub const TRANSACTION_PARTIAL_DEBIT_PATH: &str = "/transaction/partial_debit";

pub const TRANSFER_RECIPIENT_PATH: &str = "/transferrecipient";
pub const TRANSFER_RECIPIENT_BULK_CREATE_PATH: &str = "/transferrecipient/bulk";

pub const TRANSFER_PATH: &str = "/transfer";
pub const TRANSFER_FINALIZE_PATH: &str = "/transfer/finalize_transfer";
pub const TRANSFER_INITIATE_BULK_PATH: &str = "/transfer/bulk";
pub const TRANSFER_VERIFY_PATH: &str = "/transfer/verify/";

pub const PLAN_PATH: &str = "/plan";

pub const SUBSCRIPTION_PATH: &str = "/subscription";
pub const SUBSCRIPTION_ENABLE_PATH: &str = "/subscription/enable";
pub const SUBSCRIPTION_DISABLE_PATH: &str = "/subscription/disable";

pub const VERIFICATION_RESOLVE_PATH: &str = "/bank/resolve";
pub const VERIFICATION_VALIDATE_PATH: &str = "/bank/validate";
pub const VERIFICATION_CARD_BIN_PATH: &str = "/decision/bin";

pub const MISC_BANKS_PATH: &str = "/bank";
pub const MISC_COUNTRIES_PATH: &str = "/country";
pub const MISC_STATES_PATH: &str = "/address_verification/states";
