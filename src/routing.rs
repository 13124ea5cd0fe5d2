//! Application router configuration.

use std::path::Path;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{any, delete, get},
};
use serde_json::json;
use tower_http::services::{ServeDir, ServeFile};

use crate::{
    AppState, endpoints,
    transaction::{
        TransactionStore, create_transaction_endpoint, delete_transaction_endpoint,
        get_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// If `static_dir` is given, any path that is not an API route is served from
/// that directory, with `index.html` as the fallback so that client-side
/// routing works.
pub fn build_router<S>(state: AppState<S>, static_dir: Option<&Path>) -> Router
where
    S: TransactionStore + Clone + Send + Sync + 'static,
{
    let api_routes = Router::new()
        .route(
            endpoints::TRANSACTIONS_API,
            get(get_transactions_endpoint::<S>).post(create_transaction_endpoint::<S>),
        )
        .route(
            endpoints::TRANSACTION,
            delete(delete_transaction_endpoint::<S>),
        )
        .route(
            &format!("{}/{{*path}}", endpoints::API_PREFIX),
            any(get_404_not_found),
        );

    let router = match static_dir {
        Some(static_dir) => {
            let index = ServeFile::new(static_dir.join("index.html"));
            api_routes.fallback_service(ServeDir::new(static_dir).fallback(index))
        }
        None => api_routes.fallback(get_404_not_found),
    };

    router.with_state(state)
}

/// The JSON response for a route that does not exist.
async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "the requested resource could not be found" })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use std::{
        fs,
        path::PathBuf,
        sync::atomic::{AtomicUsize, Ordering},
    };

    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};

    use crate::{
        build_router, create_app_state,
        endpoints::{self, format_endpoint},
        summarize,
        transaction::{CreatedTransaction, NewTransaction, Transaction},
    };

    fn get_test_server() -> TestServer {
        let conn = Connection::open_in_memory().expect("Could not open database in memory.");
        let state = create_app_state(conn).expect("Could not create app state.");

        TestServer::try_new(build_router(state, None)).expect("Could not create test server.")
    }

    async fn create(server: &TestServer, transaction: &NewTransaction) -> i64 {
        let response = server.post(endpoints::TRANSACTIONS_API).json(transaction).await;
        response.assert_status_ok();

        response.json::<CreatedTransaction>().id
    }

    async fn list(server: &TestServer) -> Vec<Transaction> {
        let response = server.get(endpoints::TRANSACTIONS_API).await;
        response.assert_status_ok();

        response.json::<Vec<Transaction>>()
    }

    #[tokio::test]
    async fn list_is_empty_initially() {
        let server = get_test_server();

        let transactions = list(&server).await;

        assert!(transactions.is_empty());
    }

    #[tokio::test]
    async fn income_and_expense_scenario() {
        let server = get_test_server();
        let income_id = create(
            &server,
            &NewTransaction::income("Salário", 1000.0, "2024-01-01"),
        )
        .await;
        let expense_id = create(
            &server,
            &NewTransaction::expense("Alimentação", 200.0, "2024-01-02"),
        )
        .await;

        let transactions = list(&server).await;

        let ids: Vec<_> = transactions.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![expense_id, income_id]);

        let summary = summarize(&transactions);
        assert_eq!(summary.total_income, 1000.0);
        assert_eq!(summary.total_expenses, 200.0);
        assert_eq!(summary.balance, 800.0);
        assert_eq!(summary.category_breakdown.len(), 1);
        assert_eq!(summary.category_breakdown.get("Alimentação"), Some(200.0));
    }

    #[tokio::test]
    async fn create_then_delete_leaves_empty_list() {
        let server = get_test_server();
        let id = create(
            &server,
            &NewTransaction::expense("Lazer", 50.0, "2024-06-01"),
        )
        .await;

        let response = server
            .delete(&format_endpoint(endpoints::TRANSACTION, id))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({ "success": true }));
        assert!(list(&server).await.is_empty());
    }

    #[tokio::test]
    async fn delete_missing_transaction_reports_success() {
        let server = get_test_server();
        create(
            &server,
            &NewTransaction::expense("Lazer", 50.0, "2024-06-01"),
        )
        .await;
        let before = list(&server).await;

        let response = server
            .delete(&format_endpoint(endpoints::TRANSACTION, 999))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({ "success": true }));
        assert_eq!(list(&server).await, before);
    }

    #[tokio::test]
    async fn same_category_expenses_are_summed() {
        let server = get_test_server();
        create(
            &server,
            &NewTransaction::expense("Transporte", 50.0, "2024-02-01"),
        )
        .await;
        create(
            &server,
            &NewTransaction::expense("Transporte", 30.0, "2024-02-03"),
        )
        .await;

        let summary = summarize(&list(&server).await);

        assert_eq!(summary.category_breakdown.get("Transporte"), Some(80.0));
    }

    #[tokio::test]
    async fn create_accepts_raw_json_body() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({
                "type": "expense",
                "category": "Saúde",
                "amount": 75.25,
                "date": "2024-04-10",
                "description": "Farmácia",
            }))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({ "id": 1 }));

        let transactions = list(&server).await;
        assert_eq!(transactions[0].description.as_deref(), Some("Farmácia"));
    }

    #[tokio::test]
    async fn list_uses_type_field_in_json() {
        let server = get_test_server();
        create(
            &server,
            &NewTransaction::income("Freelance", 10.0, "2024-04-10"),
        )
        .await;

        let body = server.get(endpoints::TRANSACTIONS_API).await.json::<Value>();

        assert_eq!(body[0]["type"], "income");
        assert_eq!(body[0]["category"], "Freelance");
        assert_eq!(body[0]["date"], "2024-04-10");
    }

    #[tokio::test]
    async fn create_rejects_unknown_type() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({
                "type": "transfer",
                "category": "Outros",
                "amount": 1,
                "date": "2024-04-10",
            }))
            .expect_failure()
            .await;

        response.assert_status_unprocessable_entity();
        assert!(list(&server).await.is_empty());
    }

    #[tokio::test]
    async fn delete_non_numeric_id_reports_success() {
        let server = get_test_server();
        create(
            &server,
            &NewTransaction::expense("Compras", 19.9, "2024-06-01"),
        )
        .await;

        let response = server.delete("/api/transactions/abc").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "success": true }));
        assert_eq!(list(&server).await.len(), 1);
    }

    #[tokio::test]
    async fn create_rejects_missing_amount() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({
                "type": "expense",
                "category": "Alimentação",
                "date": "2024-04-10",
            }))
            .expect_failure()
            .await;

        response.assert_status_unprocessable_entity();
        assert!(list(&server).await.is_empty());
    }

    #[tokio::test]
    async fn create_accepts_null_description() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({
                "type": "income",
                "category": "Presente",
                "amount": 100,
                "date": "2024-04-10",
                "description": null,
            }))
            .await;

        response.assert_status_ok();
        let transactions = list(&server).await;
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].description, None);
    }

    #[tokio::test]
    async fn unknown_api_route_is_not_found() {
        let server = get_test_server();

        let response = server.get("/api/budgets").expect_failure().await;

        response.assert_status_not_found();
    }

    static TEST_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

    /// A temporary directory of static files, removed when dropped.
    struct StaticDir(PathBuf);

    impl StaticDir {
        fn new() -> Self {
            let dir = std::env::temp_dir().join(format!(
                "finance_tracker_static_{}_{}",
                std::process::id(),
                TEST_DIR_COUNTER.fetch_add(1, Ordering::SeqCst)
            ));
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("index.html"), "<html>finance</html>").unwrap();
            fs::write(dir.join("app.js"), "console.log('hi');").unwrap();
            Self(dir)
        }
    }

    impl Drop for StaticDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[tokio::test]
    async fn serves_static_files_with_index_fallback() {
        let static_dir = StaticDir::new();
        let conn = Connection::open_in_memory().unwrap();
        let state = create_app_state(conn).unwrap();
        let server = TestServer::try_new(build_router(state, Some(&static_dir.0))).unwrap();

        let response = server.get("/app.js").await;
        response.assert_status_ok();
        response.assert_text("console.log('hi');");

        let response = server.get("/some/client/route").await;
        response.assert_text("<html>finance</html>");

        let response = server.get("/api/unknown").expect_failure().await;
        response.assert_status_not_found();

        server.get(endpoints::TRANSACTIONS_API).await.assert_status_ok();
    }
}
