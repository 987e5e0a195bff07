use fintrack_client::categories::{Category, CategoryKind, CategoryUpdate, NewCategory};
use fintrack_client::FinTrack;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn groceries_json() -> serde_json::Value {
    json!({
        "_id": "c1",
        "name": "Groceries",
        "description": "Weekly shopping",
        "type": "expense",
        "color": "#2e7d32",
        "icon": "restaurant",
        "budgetLimit": 400.0,
        "isActive": true,
        "isDefault": false,
        "usageCount": 0,
        "userId": "u1"
    })
}

#[tokio::test]
async fn created_category_appears_in_the_list_with_identical_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/categories"))
        .and(body_json(json!({
            "name": "Groceries",
            "description": "Weekly shopping",
            "type": "expense",
            "color": "#2e7d32",
            "icon": "restaurant",
            "budgetLimit": 400.0
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Category created successfully",
            "category": groceries_json()
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([groceries_json()])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FinTrack::new(&mock_server.uri(), &mock_server.uri()).unwrap();
    let payload = NewCategory::new("Groceries", CategoryKind::Expense)
        .with_description("Weekly shopping")
        .with_color("#2e7d32")
        .with_icon("restaurant")
        .with_budget_limit(400.0);

    let created = client.categories().create(&payload).await.unwrap();
    let listed = client.categories().list(None).await.unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], created);
    assert_eq!(listed[0].name, "Groceries");
    assert_eq!(listed[0].budget_limit, 400.0);
}

#[tokio::test]
async fn list_can_filter_by_kind() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categories"))
        .and(query_param("type", "expense"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([groceries_json()])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FinTrack::new(&mock_server.uri(), &mock_server.uri()).unwrap();
    let categories = client
        .categories()
        .list(Some(CategoryKind::Expense))
        .await
        .unwrap();
    assert!(categories.iter().all(|c| c.kind == CategoryKind::Expense));
}

#[tokio::test]
async fn get_unwraps_the_data_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categories/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": groceries_json()
        })))
        .mount(&mock_server)
        .await;

    let client = FinTrack::new(&mock_server.uri(), &mock_server.uri()).unwrap();
    let category: Category = client.categories().get("c1").await.unwrap();
    assert_eq!(category.id, "c1");
    assert!(category.is_active);
}

#[tokio::test]
async fn update_archive_restore_and_delete_hit_their_endpoints() {
    let mock_server = MockServer::start().await;
    let ok = ResponseTemplate::new(200)
        .set_body_json(json!({"success": true, "message": "Category updated"}));

    Mock::given(method("PUT"))
        .and(path("/categories/c1"))
        .and(body_json(json!({"budgetLimit": 500.0})))
        .respond_with(ok.clone())
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/categories/c1/archive"))
        .respond_with(ok.clone())
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/categories/c1/restore"))
        .respond_with(ok.clone())
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/categories/c1"))
        .respond_with(ok.clone())
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FinTrack::new(&mock_server.uri(), &mock_server.uri()).unwrap();
    let categories = client.categories();

    let update = CategoryUpdate {
        budget_limit: Some(500.0),
        ..Default::default()
    };
    categories.update("c1", &update).await.unwrap();
    categories.archive("c1").await.unwrap();
    categories.restore("c1").await.unwrap();
    categories.delete("c1").await.unwrap();
}

#[tokio::test]
async fn bulk_delete_sends_the_id_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/categories/bulk"))
        .and(body_json(json!({"categoryIds": ["c1", "c2"]})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "message": "2 categories deleted"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FinTrack::new(&mock_server.uri(), &mock_server.uri()).unwrap();
    client
        .categories()
        .bulk_delete(&["c1", "c2"])
        .await
        .unwrap();
}

#[tokio::test]
async fn stats_forwards_the_date_range() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categories/stats"))
        .and(query_param("startDate", "2024-01-01"))
        .and(query_param("endDate", "2024-01-31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"Groceries": {"total": 120.5, "count": 4}}
        })))
        .mount(&mock_server)
        .await;

    let client = FinTrack::new(&mock_server.uri(), &mock_server.uri()).unwrap();
    let stats = client
        .categories()
        .stats(
            Some("2024-01-01".parse().unwrap()),
            Some("2024-01-31".parse().unwrap()),
        )
        .await
        .unwrap();
    assert_eq!(stats["data"]["Groceries"]["count"], 4);
}

#[tokio::test]
async fn defaults_and_init_defaults() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categories/defaults"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "d1", "name": "Food", "type": "expense", "isDefault": true},
            {"_id": "d2", "name": "Salary", "type": "income", "isDefault": true}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/categories/init-defaults"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"success": true, "message": "Defaults created"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FinTrack::new(&mock_server.uri(), &mock_server.uri()).unwrap();
    let defaults = client.categories().defaults().await.unwrap();
    assert_eq!(defaults.len(), 2);
    assert!(defaults.iter().all(|c| c.is_default));

    client.categories().init_defaults().await.unwrap();
}
