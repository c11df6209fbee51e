mod common;

use axum::http::Method;
use common::MockApi;
use paystack_kit::{
    Paystack,
    features::{
        misc::ListBanksQuery,
        plan::PlanBody,
        subscription::EnableDisableBody,
        transaction::{InitializeBody, ListQuery, TransactionStatus},
        transfer::{BulkTransfer, InitiateBulkBody, TransferStatus},
        transfer_recipient::UpdateBody,
    },
    types::{Country, Interval},
};
use serde_json::json;

#[tokio::test]
async fn test_transaction_initialize() {
    let api = MockApi::builder()
        .route(
            Method::POST,
            "/transaction/initialize",
            json!({
                "status": true,
                "message": "Authorization URL created",
                "data": {
                    "authorization_url": "https://checkout.paystack.com/0peioxfhpn",
                    "access_code": "0peioxfhpn",
                    "reference": "7PVGX8MEk85tgeEpVDtD"
                }
            }),
        )
        .start()
        .await;
    let paystack = Paystack::from_client(api.client());

    let res = paystack
        .transaction
        .initialize(
            &InitializeBody::builder()
                .amount(20000_u64)
                .email("customer@email.com")
                .build(),
        )
        .await
        .unwrap();

    assert_eq!(res.data.access_code, "0peioxfhpn");
    assert_eq!(
        api.last_request().json(),
        json!({ "amount": 20000, "email": "customer@email.com" })
    );
}

#[tokio::test]
async fn test_transaction_list_and_verify_paths() {
    let api = MockApi::builder()
        .route(
            Method::GET,
            "/transaction",
            json!({
                "status": true,
                "message": "Transactions retrieved",
                "data": [{ "id": 1, "status": "success", "amount": 500 }],
                "meta": { "total": 1, "skipped": 0, "perPage": 10, "page": 1, "pageCount": 1 }
            }),
        )
        .route(
            Method::GET,
            "/transaction/verify/re4lyvq3s3",
            json!({ "status": true, "message": "Verification successful", "data": { "id": 1 } }),
        )
        .start()
        .await;
    let paystack = Paystack::from_client(api.client());

    let list = paystack
        .transaction
        .list(
            &ListQuery::builder()
                .per_page(10)
                .status(TransactionStatus::Success)
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(list.data[0].status, Some(TransactionStatus::Success));
    assert_eq!(list.meta.unwrap().total, Some(1));
    assert_eq!(
        api.last_request().query.as_deref(),
        Some("perPage=10&status=success")
    );

    let verified = paystack.transaction.verify("re4lyvq3s3").await.unwrap();
    assert_eq!(verified.data.id, Some(1));
}

#[tokio::test]
async fn test_transfer_bulk() {
    let api = MockApi::builder()
        .route(
            Method::POST,
            "/transfer/bulk",
            json!({
                "status": true,
                "message": "2 transfers queued.",
                "data": [
                    {
                        "reference": "acv_1",
                        "recipient": "RCP_1",
                        "amount": 20000,
                        "transfer_code": "TRF_1",
                        "currency": "NGN",
                        "status": "success"
                    },
                    {
                        "reference": "acv_2",
                        "recipient": "RCP_2",
                        "amount": 35000,
                        "transfer_code": "TRF_2",
                        "currency": "NGN",
                        "status": "pending"
                    }
                ]
            }),
        )
        .start()
        .await;
    let paystack = Paystack::from_client(api.client());

    let body = InitiateBulkBody::builder()
        .transfers(vec![
            BulkTransfer::builder().amount(20000_u64).recipient("RCP_1").reference("acv_1").build(),
            BulkTransfer::builder().amount(35000_u64).recipient("RCP_2").reference("acv_2").build(),
        ])
        .build();
    let res = paystack.transfer.initiate_bulk(&body).await.unwrap();

    assert_eq!(res.data.len(), 2);
    assert_eq!(res.data[1].status, TransferStatus::Pending);
    assert_eq!(api.last_request().json()["source"], "balance");
}

#[tokio::test]
async fn test_transfer_recipient_update_and_delete() {
    let api = MockApi::builder()
        .route(
            Method::PUT,
            "/transferrecipient/RCP_1",
            json!({
                "status": true,
                "message": "Recipient updated",
                "data": {
                    "id": 1,
                    "name": "Rick Sanchez",
                    "recipient_code": "RCP_1",
                    "type": "nuban"
                }
            }),
        )
        .route(
            Method::DELETE,
            "/transferrecipient/RCP_1",
            json!({ "status": true, "message": "Transfer recipient set as inactive" }),
        )
        .start()
        .await;
    let paystack = Paystack::from_client(api.client());

    let updated = paystack
        .transfer_recipient
        .update("RCP_1", &UpdateBody::builder().name("Rick Sanchez").build())
        .await
        .unwrap();
    assert_eq!(updated.data.name, "Rick Sanchez");
    assert_eq!(api.last_request().method, Method::PUT);

    let deleted = paystack.transfer_recipient.delete("RCP_1").await.unwrap();
    assert!(deleted.status);
    let request = api.last_request();
    assert_eq!(request.method, Method::DELETE);
    assert!(request.body.is_empty());
}

#[tokio::test]
async fn test_plan_create_unauthorized() {
    let api = MockApi::builder()
        .route(Method::POST, "/plan", json!({}))
        .start()
        .await;
    let paystack = Paystack::from_client(api.client_with_secret("c-krit_secret"));

    let body = PlanBody::builder()
        .name("Test Plan")
        .amount(1000_u64)
        .interval(Interval::Monthly)
        .build();
    let err = paystack.plan.create(&body).await.unwrap_err();

    assert_eq!(err.to_string(), "401: Unauthorized");
    let request = api.last_request();
    assert_eq!(request.path, "/plan");
    assert_eq!(
        request.json(),
        json!({ "name": "Test Plan", "amount": 1000, "interval": "monthly" })
    );
}

#[tokio::test]
async fn test_subscription_fetch_uses_path_suffix() {
    let api = MockApi::builder()
        .route(
            Method::GET,
            "/subscription/SUB_vsyqdmlzble3uii",
            json!({
                "status": true,
                "message": "Subscription retrieved successfully",
                "data": { "id": 1, "subscription_code": "SUB_vsyqdmlzble3uii", "status": "active" }
            }),
        )
        .route(
            Method::POST,
            "/subscription/disable",
            json!({ "status": true, "message": "Subscription disabled successfully" }),
        )
        .start()
        .await;
    let paystack = Paystack::from_client(api.client());

    let res = paystack
        .subscription
        .fetch("SUB_vsyqdmlzble3uii")
        .await
        .unwrap();
    assert_eq!(res.data.status, "active");
    assert_eq!(api.last_request().query, None);

    let disabled = paystack
        .subscription
        .disable(
            &EnableDisableBody::builder()
                .code("SUB_vsyqdmlzble3uii")
                .token("d7gofp6yppn3qz7")
                .build(),
        )
        .await
        .unwrap();
    assert!(disabled.status);
}

#[tokio::test]
async fn test_misc_lookups_send_query() {
    let api = MockApi::builder()
        .route(
            Method::GET,
            "/bank",
            json!({
                "status": true,
                "message": "Banks retrieved",
                "data": [{
                    "id": 302,
                    "name": "9mobile 9Payment Service Bank",
                    "slug": "9mobile-9payment-service-bank-ng",
                    "code": "120001"
                }],
                "meta": { "next": "YmFuazozMDI=", "previous": null, "perPage": 1 }
            }),
        )
        .route(
            Method::GET,
            "/address_verification/states",
            json!({
                "status": true,
                "message": "States retrieved",
                "data": [{ "name": "Alberta", "slug": "alberta", "abbreviation": "AB" }]
            }),
        )
        .start()
        .await;
    let paystack = Paystack::from_client(api.client());

    let banks = paystack
        .misc
        .list_banks(
            &ListBanksQuery::builder()
                .country(Country::Nigeria)
                .use_cursor(true)
                .per_page(1)
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(banks.data[0].code, "120001");
    assert_eq!(
        api.last_request().query.as_deref(),
        Some("country=nigeria&use_cursor=true&perPage=1")
    );

    let states = paystack.misc.list_states("CA").await.unwrap();
    assert_eq!(states.data[0].abbreviation, "AB");
    assert_eq!(api.last_request().query.as_deref(), Some("country=CA"));
}
