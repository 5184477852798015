//! Client Module Tests
//!
//! Runs the full submission flow against a throwaway axum server standing in
//! for the indexing/search service.
//!
//! ## Test Scopes
//! - **Index Path**: Validation gate, payload on the wire, sink output and form reset.
//! - **Search Path**: Query string on the wire and sink output.
//! - **Failures**: Connection errors and non-JSON bodies.

#[cfg(test)]
mod tests {
    use crate::client::service::{render_json, SearchServiceClient};
    use crate::client::sink::{OutputSink, SharedOutput};
    use crate::client::types::{IndexOutcome, SearchOutcome, SubmissionState};
    use crate::form::port::{FormPort, MemoryForm};
    use crate::form::types::Field;
    use crate::validation::types::CONTENT_REQUIRED;

    use axum::extract::{RawQuery, State};
    use axum::http::header::CONTENT_TYPE;
    use axum::http::{HeaderMap, StatusCode};
    use axum::response::{IntoResponse, Response};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Copy)]
    enum Mode {
        Json,
        PlainText,
        ServerError,
    }

    #[derive(Clone)]
    struct FakeService {
        mode: Mode,
        index_calls: Arc<Mutex<Vec<(Option<String>, Value)>>>,
        search_calls: Arc<Mutex<Vec<String>>>,
    }

    async fn fake_index(
        State(service): State<FakeService>,
        headers: HeaderMap,
        body: String,
    ) -> Response {
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let value: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
        service.index_calls.lock().unwrap().push((content_type, value));

        match service.mode {
            Mode::Json => Json(json!({"status": "success", "message": "Indexed successfully"}))
                .into_response(),
            Mode::PlainText => (StatusCode::OK, "indexed").into_response(),
            Mode::ServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"status": "error", "message": "Storage unavailable"})),
            )
                .into_response(),
        }
    }

    async fn fake_search(
        State(service): State<FakeService>,
        RawQuery(query): RawQuery,
    ) -> Response {
        service
            .search_calls
            .lock()
            .unwrap()
            .push(query.unwrap_or_default());

        match service.mode {
            Mode::Json => Json(json!({
                "status": "success",
                "data": [{"id": "id:1:1", "score": 1.5, "data": "hello"}]
            }))
            .into_response(),
            Mode::PlainText => (StatusCode::OK, "<html>nope</html>").into_response(),
            Mode::ServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"status": "error", "message": "Query parameter 'query' is required"})),
            )
                .into_response(),
        }
    }

    async fn spawn_service(mode: Mode) -> (String, FakeService) {
        let service = FakeService {
            mode,
            index_calls: Arc::new(Mutex::new(Vec::new())),
            search_calls: Arc::new(Mutex::new(Vec::new())),
        };

        let app = Router::new()
            .route("/index", post(fake_index))
            .route("/search", get(fake_search))
            .with_state(service.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", addr), service)
    }

    async fn unreachable_url() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }

    fn filled_form(string: &str, object: &str, indexes: &str, stop_words: &str) -> MemoryForm {
        let form = MemoryForm::new();
        form.write(Field::ContentString, string);
        form.write(Field::ContentObject, object);
        form.write(Field::ObjectIndexes, indexes);
        form.write(Field::StopWords, stop_words);
        form
    }

    // ============================================================
    // INDEX PATH
    // ============================================================

    #[tokio::test]
    async fn test_index_string_only_document() {
        // ARRANGE
        let (url, service) = spawn_service(Mode::Json).await;
        let client = SearchServiceClient::new(&url);
        let form = filled_form("hello", "", "", "");
        let output = SharedOutput::new();

        // ACT
        let outcome = client.submit_index(&form, &output).await;

        // ASSERT: one call with the expected body
        assert_eq!(outcome.state(), SubmissionState::Succeeded);
        let calls = service.index_calls.lock().unwrap().clone();
        assert_eq!(calls.len(), 1);

        let (content_type, body) = &calls[0];
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert!(body["id"].as_str().unwrap().starts_with("id:"));
        assert_eq!(body["content"]["string"], "hello");
        assert_eq!(body["content"]["object"], Value::Null);
        assert_eq!(body["content"]["object_indexes"], json!([""]));
        assert_eq!(body["stop_words"], json!([""]));

        // ASSERT: pretty JSON in the sink, form closed
        assert_eq!(
            output.latest().unwrap(),
            "{\n  \"status\": \"success\",\n  \"message\": \"Indexed successfully\"\n}"
        );
        assert!(form.is_empty());
    }

    #[tokio::test]
    async fn test_index_object_document() {
        let (url, service) = spawn_service(Mode::Json).await;
        let client = SearchServiceClient::new(&url);
        let form = filled_form("", r#"{"a":1}"#, "a", "the, a");
        let output = SharedOutput::new();

        let outcome = client.submit_index(&form, &output).await;

        assert!(matches!(outcome, IndexOutcome::Succeeded(_)));
        let calls = service.index_calls.lock().unwrap().clone();
        let (_, body) = &calls[0];
        assert_eq!(body["content"]["string"], "");
        assert_eq!(body["content"]["object"], json!({"a": 1}));
        assert_eq!(body["content"]["object_indexes"], json!(["a"]));
        assert_eq!(body["stop_words"], json!(["the", "a"]));
    }

    #[tokio::test]
    async fn test_index_object_reaches_service_in_input_order() {
        let (url, service) = spawn_service(Mode::Json).await;
        let client = SearchServiceClient::new(&url);
        let form = filled_form("", r#"{"title":"x","author":"y","meta":{"z":1,"a":2}}"#, "title", "");
        let output = SharedOutput::new();

        client.submit_index(&form, &output).await;

        let calls = service.index_calls.lock().unwrap().clone();
        let (_, body) = &calls[0];
        assert_eq!(
            body["content"]["object"].to_string(),
            r#"{"title":"x","author":"y","meta":{"z":1,"a":2}}"#
        );
    }

    #[tokio::test]
    async fn test_invalid_index_makes_no_call() {
        let (url, service) = spawn_service(Mode::Json).await;
        let client = SearchServiceClient::new(&url);
        let form = filled_form("", "", "", "");
        let output = SharedOutput::new();

        let outcome = client.submit_index(&form, &output).await;

        match outcome {
            IndexOutcome::Invalid(result) => {
                assert!(!result.is_valid);
                assert_eq!(result.error(Field::ContentString), Some(CONTENT_REQUIRED));
            }
            other => panic!("expected invalid outcome, got {:?}", other),
        }
        assert!(service.index_calls.lock().unwrap().is_empty());
        assert!(output.latest().is_none());
        // Errors stay visible, nothing is reset
        assert_eq!(form.error(Field::ContentObject).as_deref(), Some(CONTENT_REQUIRED));
    }

    #[tokio::test]
    async fn test_invalid_then_valid_clears_errors() {
        let (url, _service) = spawn_service(Mode::Json).await;
        let client = SearchServiceClient::new(&url);
        let form = filled_form("", "not json", "", "");
        let output = SharedOutput::new();

        let first = client.submit_index(&form, &output).await;
        assert_eq!(first.state(), SubmissionState::Invalid);
        assert_eq!(form.errors().len(), 2);

        form.write(Field::ContentObject, r#"{"title":"x"}"#);
        form.write(Field::ObjectIndexes, "title");
        let second = client.submit_index(&form, &output).await;

        assert_eq!(second.state(), SubmissionState::Succeeded);
        assert!(form.errors().is_empty());
    }

    #[tokio::test]
    async fn test_index_server_error_json_is_rendered() {
        // Status codes are not distinguished: a JSON error body is a result
        let (url, _service) = spawn_service(Mode::ServerError).await;
        let client = SearchServiceClient::new(&url);
        let form = filled_form("hello", "", "", "");
        let output = SharedOutput::new();

        let outcome = client.submit_index(&form, &output).await;

        let expected = json!({"status": "error", "message": "Storage unavailable"});
        assert_eq!(outcome, IndexOutcome::Succeeded(expected.clone()));
        assert_eq!(output.latest().unwrap(), render_json(&expected));
    }

    #[tokio::test]
    async fn test_index_non_json_response_fails_and_resets() {
        let (url, service) = spawn_service(Mode::PlainText).await;
        let client = SearchServiceClient::new(&url);
        let form = filled_form("hello", "", "", "");
        let output = SharedOutput::new();

        let outcome = client.submit_index(&form, &output).await;

        assert_eq!(outcome.state(), SubmissionState::Failed);
        assert_eq!(service.index_calls.lock().unwrap().len(), 1);
        assert!(output.latest().unwrap().starts_with("Error: "));
        assert!(form.is_empty());
    }

    #[tokio::test]
    async fn test_index_connection_failure_fails_and_resets() {
        let client = SearchServiceClient::new(&unreachable_url().await);
        let form = filled_form("hello", "", "", "");
        let output = SharedOutput::new();

        let outcome = client.submit_index(&form, &output).await;

        match outcome {
            IndexOutcome::Failed(text) => {
                assert!(text.starts_with("Error: "));
                assert_eq!(output.latest(), Some(text));
            }
            other => panic!("expected failure, got {:?}", other),
        }
        assert!(form.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_index_submissions_share_sink() {
        let (url, service) = spawn_service(Mode::Json).await;
        let client = SearchServiceClient::new(&url);
        let first_form = filled_form("one", "", "", "");
        let second_form = filled_form("two", "", "", "");
        let output = SharedOutput::new();

        let (a, b) = tokio::join!(
            client.submit_index(&first_form, &output),
            client.submit_index(&second_form, &output)
        );

        assert_eq!(a.state(), SubmissionState::Succeeded);
        assert_eq!(b.state(), SubmissionState::Succeeded);
        assert_eq!(service.index_calls.lock().unwrap().len(), 2);
        assert!(output.latest().is_some());
    }

    // ============================================================
    // SEARCH PATH
    // ============================================================

    #[tokio::test]
    async fn test_search_sends_repeated_query_params() {
        let (url, service) = spawn_service(Mode::Json).await;
        let client = SearchServiceClient::new(&url);
        let output = SharedOutput::new();

        let outcome = client.submit_search("foo, bar", &output).await;

        assert_eq!(outcome.state(), SubmissionState::Succeeded);
        let calls = service.search_calls.lock().unwrap().clone();
        assert_eq!(calls, vec!["query=foo&query=bar".to_string()]);

        let rendered = output.latest().unwrap();
        assert!(rendered.contains("\"status\": \"success\""));
        assert!(rendered.contains("\n  \"data\": ["));
    }

    #[tokio::test]
    async fn test_search_blank_input_sends_single_empty_term() {
        let (url, service) = spawn_service(Mode::Json).await;
        let client = SearchServiceClient::new(&url);
        let output = SharedOutput::new();

        client.submit_search("", &output).await;

        let calls = service.search_calls.lock().unwrap().clone();
        assert_eq!(calls, vec!["query=".to_string()]);
    }

    #[tokio::test]
    async fn test_search_non_json_response_fails() {
        let (url, _service) = spawn_service(Mode::PlainText).await;
        let client = SearchServiceClient::new(&url);
        let output = SharedOutput::new();

        let outcome = client.submit_search("foo", &output).await;

        assert!(matches!(outcome, SearchOutcome::Failed(_)));
        assert!(output.latest().unwrap().starts_with("Error: "));
    }

    #[tokio::test]
    async fn test_search_connection_failure() {
        let client = SearchServiceClient::new(&unreachable_url().await);
        let output = SharedOutput::new();

        let outcome = client.submit_search("foo", &output).await;

        assert_eq!(outcome.state(), SubmissionState::Failed);
        assert!(output.latest().unwrap().starts_with("Error: "));
    }

    // ============================================================
    // SINK & CLIENT SETUP
    // ============================================================

    #[test]
    fn test_shared_output_overwrites() {
        let output = SharedOutput::new();
        let clone = output.clone();

        output.write("first".to_string());
        clone.write("second".to_string());

        assert_eq!(output.latest().as_deref(), Some("second"));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = SearchServiceClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
