//! The mock referral directories behind the provider traits.

mod common;

use axum::http::StatusCode;
use common::app;

#[tokio::test]
#[ignore = "requires database"]
async fn veterinarians_filter_by_species() {
    let app = app().await;

    let resp = app.get("/directory/veterinarians?species=otter").await;
    assert_eq!(resp.status, StatusCode::OK);
    let body = resp.json();
    let vets = body.as_array().unwrap();
    assert!(!vets.is_empty());
    for vet in vets {
        let treats: Vec<&str> = vet["treats"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s.as_str().unwrap())
            .collect();
        assert!(treats.contains(&"otter"));
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn veterinarians_without_filter_list_everything() {
    let app = app().await;

    let all = app.get("/directory/veterinarians").await;
    assert_eq!(all.status, StatusCode::OK);
    let body = all.json();
    assert!(body.as_array().unwrap().len() >= 5);
}

#[tokio::test]
#[ignore = "requires database"]
async fn endangered_species_search_matches_names() {
    let app = app().await;

    let resp = app.get("/directory/endangered-species?q=murrelet").await;
    assert_eq!(resp.status, StatusCode::OK);
    let body = resp.json();
    let hits = body.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["common_name"], "Marbled Murrelet");
    assert_eq!(hits[0]["status"], "Endangered");
}
