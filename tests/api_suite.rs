mod common;

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    extract::{Path, Query},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use finman_client::{
    api::{AccountsApi, ReportsApi, TransactionsApi},
    domain::{CategorySpending, MonthlyTrend, Summary, TransactionType},
};
use serde_json::json;
use uuid::Uuid;

use common::{client, sample_account, sample_transaction};

#[tokio::test]
async fn account_lookup_by_id_hits_the_templated_path() {
    let account = sample_account("Checking");
    let body = account.clone();
    let routes = Router::new().route(
        "/accounts/:id",
        get(move |Path(id): Path<Uuid>| {
            let mut body = body.clone();
            async move {
                body.id = id;
                Json(body)
            }
        }),
    );
    let client = client(routes).await;

    let api = AccountsApi::new(client.http.clone());
    let fetched = api.get_by_id(account.id).await.expect("fetch account");

    assert_eq!(fetched.id, account.id);
    assert_eq!(fetched.name, "Checking");
}

#[tokio::test]
async fn transaction_lookup_by_id_round_trips() {
    let txn = sample_transaction(Uuid::new_v4(), Uuid::new_v4(), 15.0);
    let body = txn.clone();
    let routes = Router::new().route(
        "/transactions/:id",
        get(move |Path(_id): Path<Uuid>| async move { Json(body) }),
    );
    let client = client(routes).await;

    let api = TransactionsApi::new(client.http.clone());
    let fetched = api.get_by_id(txn.id).await.expect("fetch transaction");

    assert_eq!(fetched, txn);
}

#[tokio::test]
async fn summary_sends_month_and_year() {
    let seen = Arc::new(Mutex::new(HashMap::new()));
    let capture = seen.clone();
    let routes = Router::new().route(
        "/reports/summary",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let capture = capture.clone();
            async move {
                *capture.lock().expect("lock capture") = params;
                Json(json!({
                    "totalIncome": 5000.0,
                    "totalExpense": 3200.0,
                    "netSavings": 1800.0,
                    "month": 3,
                    "year": 2024
                }))
            }
        }),
    );
    let client = client(routes).await;

    let api = ReportsApi::new(client.http.clone());
    let summary: Summary = api.summary(3, 2024).await.expect("fetch summary");

    assert_eq!(summary.net_savings, 1800.0);
    let params = seen.lock().expect("lock seen").clone();
    assert_eq!(params.get("month"), Some(&"3".to_string()));
    assert_eq!(params.get("year"), Some(&"2024".to_string()));
}

#[tokio::test]
async fn category_spending_sends_range_and_kind() {
    let seen = Arc::new(Mutex::new(HashMap::new()));
    let capture = seen.clone();
    let category_id = Uuid::new_v4();
    let routes = Router::new().route(
        "/reports/by-category",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let capture = capture.clone();
            async move {
                *capture.lock().expect("lock capture") = params;
                Json(json!([{
                    "categoryId": category_id,
                    "categoryName": "Groceries",
                    "categoryIcon": "cart",
                    "categoryColor": "#00aa55",
                    "amount": 820.0,
                    "transactionCount": 14,
                    "percentage": 25.6
                }]))
            }
        }),
    );
    let client = client(routes).await;

    let api = ReportsApi::new(client.http.clone());
    let spending: Vec<CategorySpending> = api
        .by_category(
            NaiveDate::from_ymd_opt(2024, 3, 1).expect("start date"),
            NaiveDate::from_ymd_opt(2024, 3, 31).expect("end date"),
            TransactionType::Expense,
        )
        .await
        .expect("fetch spending");

    assert_eq!(spending.len(), 1);
    assert_eq!(spending[0].category_id, category_id);
    let params = seen.lock().expect("lock seen").clone();
    assert_eq!(params.get("startDate"), Some(&"2024-03-01".to_string()));
    assert_eq!(params.get("endDate"), Some(&"2024-03-31".to_string()));
    assert_eq!(params.get("type"), Some(&"EXPENSE".to_string()));
}

#[tokio::test]
async fn trends_omit_the_window_unless_requested() {
    let seen = Arc::new(Mutex::new(HashMap::new()));
    let capture = seen.clone();
    let routes = Router::new().route(
        "/reports/trends",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let capture = capture.clone();
            async move {
                *capture.lock().expect("lock capture") = params;
                Json(json!([{ "month": 3, "year": 2024, "income": 5000.0, "expense": 3200.0 }]))
            }
        }),
    );
    let base_url = common::serve(routes).await;
    let client = common::client_at(&base_url);
    let api = ReportsApi::new(client.http.clone());

    let trends: Vec<MonthlyTrend> = api.trends(None).await.expect("default window");
    assert_eq!(trends[0].income, 5000.0);
    assert!(seen.lock().expect("lock seen").is_empty());

    let _: Vec<MonthlyTrend> = api.trends(Some(12)).await.expect("explicit window");
    assert_eq!(
        seen.lock().expect("lock seen").get("months"),
        Some(&"12".to_string())
    );
}
