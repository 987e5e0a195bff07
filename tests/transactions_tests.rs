use fintrack_client::transactions::{
    NewTransaction, SortOrder, TransactionKind, TransactionQuery, TransactionUpdate,
};
use fintrack_client::FinTrack;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn page_with(transactions: serde_json::Value, total: u64) -> serde_json::Value {
    json!({
        "success": true,
        "message": "Transactions retrieved successfully",
        "data": {
            "transactions": transactions,
            "pagination": {"page": 1, "limit": 10, "totalPages": 1, "totalItems": total}
        }
    })
}

#[tokio::test]
async fn list_sends_the_backend_filter_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/transactions"))
        .and(query_param("type", "expense"))
        .and(query_param("startDate", "2024-01-01"))
        .and(query_param("endDate", "2024-01-31"))
        .and(query_param("search", "coffee"))
        .and(query_param("page", "2"))
        .and(query_param("sortOrder", "asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_with(json!([]), 0)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FinTrack::new(&mock_server.uri(), &mock_server.uri()).unwrap();
    let query = TransactionQuery::new()
        .kind(TransactionKind::Expense)
        .date_range(
            "2024-01-01".parse().unwrap(),
            "2024-01-31".parse().unwrap(),
        )
        .search("coffee")
        .page(2)
        .sort_order(SortOrder::Asc);

    let page = client.transactions().list(&query).await.unwrap();
    assert_eq!(page.pagination.total_items, 0);
}

#[tokio::test]
async fn list_parses_transactions_with_datetime_dates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_with(
            json!([{
                "_id": "t1",
                "type": "expense",
                "amount": 4.5,
                "category": "Food",
                "date": "2024-01-05T00:00:00",
                "description": "Coffee",
                "paymentMethod": "Card",
                "tags": ["morning"]
            }]),
            1,
        )))
        .mount(&mock_server)
        .await;

    let client = FinTrack::new(&mock_server.uri(), &mock_server.uri()).unwrap();
    let page = client
        .transactions()
        .list(&TransactionQuery::new())
        .await
        .unwrap();

    let transaction = &page.transactions[0];
    assert_eq!(transaction.id.as_deref(), Some("t1"));
    assert_eq!(transaction.kind, TransactionKind::Expense);
    assert_eq!(transaction.date, "2024-01-05".parse().unwrap());
    assert_eq!(transaction.tags, vec!["morning".to_string()]);
}

#[tokio::test]
async fn create_posts_the_wire_payload_and_returns_the_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/newTransactions"))
        .and(body_json(json!({
            "type": "expense",
            "amount": 4.5,
            "category": "Food",
            "date": "2024-01-05",
            "description": "Coffee",
            "paymentMethod": "Card",
            "tags": []
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "message": "Transaction created successfully",
            "data": {
                "_id": "t1",
                "type": "expense",
                "amount": 4.5,
                "category": "Food",
                "date": "2024-01-05T00:00:00",
                "description": "Coffee",
                "paymentMethod": "Card",
                "tags": []
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FinTrack::new(&mock_server.uri(), &mock_server.uri()).unwrap();
    let payload = NewTransaction::new(
        TransactionKind::Expense,
        4.5,
        "Food",
        "2024-01-05".parse().unwrap(),
    )
    .with_description("Coffee")
    .with_payment_method("Card");

    let created = client.transactions().create(&payload).await.unwrap();
    assert_eq!(created.id.as_deref(), Some("t1"));
    assert_eq!(created.amount, 4.5);
}

#[tokio::test]
async fn update_sends_only_the_set_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/transactions/t1"))
        .and(body_json(json!({"amount": 6.0})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Transaction updated successfully",
            "data": {"transaction": {
                "_id": "t1",
                "type": "expense",
                "amount": 6.0,
                "category": "Food",
                "date": "2024-01-05"
            }}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FinTrack::new(&mock_server.uri(), &mock_server.uri()).unwrap();
    let update = TransactionUpdate {
        amount: Some(6.0),
        ..Default::default()
    };

    let updated = client.transactions().update("t1", &update).await.unwrap();
    assert_eq!(updated.amount, 6.0);
}

#[tokio::test]
async fn delete_and_bulk_delete() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/transactions/t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Transaction deleted successfully"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/transactions/bulk"))
        .and(body_json(json!({"transactionIds": ["t2", "t3"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "2 transactions deleted successfully",
            "data": {"deletedCount": 2}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FinTrack::new(&mock_server.uri(), &mock_server.uri()).unwrap();
    client.transactions().delete("t1").await.unwrap();
    let deleted = client
        .transactions()
        .bulk_delete(&["t2", "t3"])
        .await
        .unwrap();
    assert_eq!(deleted, 2);
}

#[tokio::test]
async fn stats_returns_the_backend_payload_untouched() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/transactions/stats"))
        .and(query_param("period", "month"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Transaction statistics retrieved successfully",
            "data": {"stats": {"totalIncome": 2000.0, "totalExpenses": 100.0}}
        })))
        .mount(&mock_server)
        .await;

    let client = FinTrack::new(&mock_server.uri(), &mock_server.uri()).unwrap();
    let stats = client
        .transactions()
        .stats(None, None, Some("month"))
        .await
        .unwrap();
    assert_eq!(stats["totalIncome"], 2000.0);
}
