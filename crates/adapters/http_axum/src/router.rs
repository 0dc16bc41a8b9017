//! Axum router assembly.

use axum::Router;
use tower_http::trace::TraceLayer;

use rfid_gateway_app::ports::{MovementProcedure, OccupancyRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Only the API routes under `/api` exist; anything else falls through to
/// axum's default `404`. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<OR, MP>(state: AppState<OR, MP>) -> Router
where
    OR: OccupancyRepository + Send + Sync + 'static,
    MP: MovementProcedure + Send + Sync + 'static,
{
    Router::new()
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use rfid_gateway_app::services::movement_service::MovementService;
    use rfid_gateway_app::services::occupancy_service::OccupancyService;
    use rfid_gateway_domain::error::GatewayError;
    use rfid_gateway_domain::occupancy::OccupancyRow;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    #[derive(Debug)]
    struct Refused;

    impl std::fmt::Display for Refused {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("connection refused (os error 111)")
        }
    }

    impl std::error::Error for Refused {}

    /// Log sink shared between the test and the subscriber's writer.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct StubOccupancyRepo(Vec<OccupancyRow>);
    struct FailingOccupancyRepo;

    #[derive(Default)]
    struct StubProcedure {
        calls: Arc<AtomicUsize>,
    }
    struct FailingProcedure;

    impl OccupancyRepository for StubOccupancyRepo {
        fn get_all(&self) -> impl Future<Output = Result<Vec<OccupancyRow>, GatewayError>> + Send {
            let rows = self.0.clone();
            async { Ok(rows) }
        }
    }

    impl OccupancyRepository for FailingOccupancyRepo {
        fn get_all(&self) -> impl Future<Output = Result<Vec<OccupancyRow>, GatewayError>> + Send {
            async { Err(GatewayError::database(Refused)) }
        }
    }

    impl MovementProcedure for StubProcedure {
        fn refresh_and_load(&self) -> impl Future<Output = Result<(), GatewayError>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            async { Ok(()) }
        }
    }

    impl MovementProcedure for FailingProcedure {
        fn refresh_and_load(&self) -> impl Future<Output = Result<(), GatewayError>> + Send {
            async { Err(GatewayError::database(Refused)) }
        }
    }

    fn app<OR, MP>(repo: OR, procedure: MP) -> Router
    where
        OR: OccupancyRepository + Send + Sync + 'static,
        MP: MovementProcedure + Send + Sync + 'static,
    {
        build(AppState::new(
            OccupancyService::new(repo),
            MovementService::new(procedure),
        ))
    }

    fn rows(value: Value) -> Vec<OccupancyRow> {
        serde_json::from_value(value).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    // -----------------------------------------------------------------------
    // GET /api/zone-occupancy
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn should_return_empty_data_when_view_has_no_rows() {
        let app = app(StubOccupancyRepo(vec![]), StubProcedure::default());

        let (status, body) = send(app, get("/api/zone-occupancy")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "data": []}));
    }

    #[tokio::test]
    async fn should_return_rows_verbatim() {
        let data = json!([{"zone": "A", "count": 3}, {"zone": "B", "count": 0}]);
        let app = app(StubOccupancyRepo(rows(data.clone())), StubProcedure::default());

        let (status, body) = send(app, get("/api/zone-occupancy")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "data": data}));
    }

    #[tokio::test]
    async fn should_keep_column_order_in_serialized_rows() {
        let repo = StubOccupancyRepo(rows(json!([{"zone": "A", "count": 3, "active": true}])));
        let response = app(repo, StubProcedure::default())
            .oneshot(get("/api/zone-occupancy"))
            .await
            .unwrap();

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(
            std::str::from_utf8(&bytes).unwrap(),
            r#"{"success":true,"data":[{"zone":"A","count":3,"active":true}]}"#
        );
    }

    #[tokio::test]
    async fn should_return_identical_data_on_repeated_reads() {
        let app = app(
            StubOccupancyRepo(rows(json!([{"zone": "A", "count": 1}]))),
            StubProcedure::default(),
        );

        let (_, first) = send(app.clone(), get("/api/zone-occupancy")).await;
        let (_, second) = send(app, get("/api/zone-occupancy")).await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn should_ignore_query_string() {
        let app = app(
            StubOccupancyRepo(rows(json!([{"zone": "A", "count": 1}]))),
            StubProcedure::default(),
        );

        let (status, body) = send(app, get("/api/zone-occupancy?zone=B&limit=0")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!([{"zone": "A", "count": 1}]));
    }

    #[tokio::test]
    async fn should_hide_database_error_when_occupancy_read_fails() {
        let app = app(FailingOccupancyRepo, StubProcedure::default());

        let (status, body) = send(app, get("/api/zone-occupancy")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"success": false, "message": "Database error"}));
    }

    #[tokio::test]
    async fn should_log_cause_of_failed_occupancy_read() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let app = app(FailingOccupancyRepo, StubProcedure::default());
        let (status, body) = send(app, get("/api/zone-occupancy")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.to_string().contains("connection refused"));

        let output = logs.contents();
        let line = output
            .lines()
            .find(|line| line.contains("error fetching occupancy"))
            .expect("no log line for the failed read");
        assert!(line.contains("ERROR"), "{line}");
        assert!(line.contains("connection refused"), "{line}");
    }

    // -----------------------------------------------------------------------
    // POST /api/derive-movements
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn should_confirm_derivation_when_procedure_succeeds() {
        let app = app(StubOccupancyRepo(vec![]), StubProcedure::default());

        let (status, body) = send(app, post("/api/derive-movements")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"success": true, "message": "Movements derived successfully"})
        );
    }

    #[tokio::test]
    async fn should_run_procedure_for_every_request() {
        let procedure = StubProcedure::default();
        let calls = Arc::clone(&procedure.calls);
        let app = app(StubOccupancyRepo(vec![]), procedure);

        send(app.clone(), post("/api/derive-movements")).await;
        send(app, post("/api/derive-movements")).await;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn should_ignore_request_body() {
        let app = app(StubOccupancyRepo(vec![]), StubProcedure::default());
        let request = Request::builder()
            .method("POST")
            .uri("/api/derive-movements")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"force":true}"#))
            .unwrap();

        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
    }

    #[tokio::test]
    async fn should_hide_database_error_when_procedure_fails() {
        let app = app(StubOccupancyRepo(vec![]), FailingProcedure);

        let (status, body) = send(app, post("/api/derive-movements")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"success": false, "message": "Database error"}));
    }

    // -----------------------------------------------------------------------
    // Everything else
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn should_return_not_found_for_unknown_path() {
        let app = app(StubOccupancyRepo(vec![]), StubProcedure::default());

        let response = app.oneshot(get("/api/zones")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_not_expose_health_route() {
        let app = app(StubOccupancyRepo(vec![]), StubProcedure::default());

        let response = app.oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_wrong_method() {
        let app = app(StubOccupancyRepo(vec![]), StubProcedure::default());

        let response = app.clone().oneshot(get("/api/derive-movements")).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let response = app.oneshot(post("/api/zone-occupancy")).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
