//! HTTP tests for bill generation.

use axum::http::StatusCode;
use giri_mart_integration_tests::TestClient;

const MISSING_DETAILS: &str =
    "Please enter customer details and add items to the cart before generating a bill.";

#[tokio::test]
async fn test_bill_requires_customer() {
    let mut client = TestClient::new();
    client.post_form("/add_item", "item=Mouse&quantity=2").await;

    let page = client.get_and_follow("/bill").await;
    assert!(page.body.contains(MISSING_DETAILS));
}

#[tokio::test]
async fn test_bill_requires_items() {
    let mut client = TestClient::new();
    client
        .post_form("/", "customer_id=C-1&customer_name=Kavya&customer_phone=555")
        .await;

    let page = client.get_and_follow("/bill").await;
    assert!(page.body.contains(MISSING_DETAILS));
}

#[tokio::test]
async fn test_bill_requires_non_blank_name() {
    let mut client = TestClient::new();
    client
        .post_form("/", "customer_id=C-1&customer_name=&customer_phone=555")
        .await;
    client.post_form("/add_item", "item=Mouse&quantity=2").await;

    let page = client.get_and_follow("/bill").await;
    assert!(page.body.contains(MISSING_DETAILS));
}

#[tokio::test]
async fn test_bill_with_discount() {
    let mut client = TestClient::new();
    client
        .post_form("/", "customer_id=C-42&customer_name=Kavya&customer_phone=98400")
        .await;
    client.post_form("/add_item", "item=Laptop&quantity=1").await;
    client.post_form("/add_item", "item=Mouse&quantity=10").await;

    let response = client.get("/bill").await;
    assert_eq!(response.status, StatusCode::OK);

    let body = &response.body;
    assert!(body.contains("INV-"));
    assert!(body.contains("Kavya"));
    assert!(body.contains("C-42"));
    assert!(body.contains("Discount (10%)"));
    assert!(body.contains("Tax (5%)"));
    assert!(body.contains("₹50,000.00"));
    assert!(body.contains("₹5,000.00"));
    assert!(body.contains("₹2,250.00"));
    assert!(body.contains("₹47,250.00"));
}

#[tokio::test]
async fn test_bill_without_discount() {
    let mut client = TestClient::new();
    client
        .post_form("/", "customer_id=&customer_name=Kavya&customer_phone=")
        .await;
    client.post_form("/add_item", "item=Mouse&quantity=2").await;

    let response = client.get("/bill").await;
    assert_eq!(response.status, StatusCode::OK);

    let body = &response.body;
    assert!(!body.contains("Discount ("));
    assert!(body.contains("₹1,000.00"));
    assert!(body.contains("₹50.00"));
    assert!(body.contains("₹1,050.00"));
}

#[tokio::test]
async fn test_bill_does_not_change_cart() {
    let mut client = TestClient::new();
    client
        .post_form("/", "customer_id=C-1&customer_name=Kavya&customer_phone=1")
        .await;
    client.post_form("/add_item", "item=Notebook&quantity=3").await;

    let first = client.get("/bill").await;
    let second = client.get("/bill").await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::OK);

    let page = client.get("/").await;
    assert!(page.body.contains("Cart (3 items)"));
}
