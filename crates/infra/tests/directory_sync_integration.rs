//! Clients directory and hardware inventory over the wire.

mod support;

use serde_json::json;
use shoptrack_domain::{Resource, ShopTrackError};
use support::{request_bodies, test_api};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn keyed_attribute_payloads_come_back_sorted_by_name() {
    let api = test_api().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/clients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "clients": {
                "zenith": {"name": "Zenith"},
                "acme": {"name": "Acme Corp", "tier": "gold"},
                "burton": {}
            },
            "attribute_keys": ["tier"]
        })))
        .expect(1)
        .mount(&api.server)
        .await;

    let directory = api.clients.list().await.expect("directory");
    let names: Vec<&str> = directory.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Acme Corp", "burton", "Zenith"]);
    assert_eq!(directory.attribute_keys, vec!["tier"]);
}

#[tokio::test]
async fn unrecognized_clients_payloads_never_yield_an_empty_list() {
    let api = test_api().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/clients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(42)))
        .mount(&api.server)
        .await;

    let err = api.clients.list().await.unwrap_err();
    assert_eq!(err, ShopTrackError::Decode { resource: Resource::Clients });
}

#[tokio::test]
async fn hardware_listing_paginates_and_defaults_total() {
    let api = test_api().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/hardware"))
        .and(query_param("limit", "100"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [
            {"id": 1, "barcode": "0001", "description": "SSD", "sales_price": "119.90"},
            {"id": 2, "barcode": "0002", "description": "RAM"},
        ]})))
        .expect(1)
        .mount(&api.server)
        .await;

    let page = api.hardware.list_first_page().await.expect("page");
    assert_eq!(page.total, 2);
    assert_eq!(page.items[0].sales_price.as_deref(), Some("119.90"));
}

#[tokio::test]
async fn stock_receipts_post_the_adjustment_body() {
    let api = test_api().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/hardware/receive"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1, "barcode": "0001", "description": "SSD"
        })))
        .expect(1)
        .mount(&api.server)
        .await;

    api.hardware.receive("0001", 5, Some("restock".into())).await.expect("adjusted");

    let bodies = request_bodies(&api.server, "POST").await;
    assert_eq!(bodies[0], json!({"barcode": "0001", "quantity": 5, "note": "restock"}));
}

#[tokio::test]
async fn invalid_adjustments_never_reach_the_server() {
    let api = test_api().await;
    // No mock mounted: any request would fail the test via the 404 path.
    let err = api.hardware.consume("0001", 0, None).await.unwrap_err();
    assert!(matches!(err, ShopTrackError::Validation(_)));
    assert!(api.server.received_requests().await.expect("recording").is_empty());
}

#[tokio::test]
async fn client_updates_patch_the_keyed_endpoint() {
    let api = test_api().await;
    Mock::given(method("PATCH"))
        .and(path("/api/v1/clients/acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "client_key": "acme", "name": "Acme Corporation"
        })))
        .expect(1)
        .mount(&api.server)
        .await;

    let update = shoptrack_domain::ClientUpdate {
        name: Some("Acme Corporation".into()),
        attributes: None,
    };
    let record = api.clients.update("acme", update).await.expect("updated");
    assert_eq!(record.name, "Acme Corporation");

    let bodies = request_bodies(&api.server, "PATCH").await;
    assert_eq!(bodies[0], json!({"name": "Acme Corporation"}));
}
