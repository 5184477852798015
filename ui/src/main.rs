use axum::extract::{Query, State};
use axum::response::Html;
use axum::{routing::get, routing::post, Json, Router};
use search_console::client::service::SearchServiceClient;
use search_console::client::sink::SharedOutput;
use search_console::client::types::SubmissionState;
use search_console::config::{resolve_service_url, ConsoleConfig};
use search_console::form::port::MemoryForm;
use search_console::form::types::{Field, RawIndexInput};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;


#[derive(Clone)]
struct AppState {
    service_url: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct ServiceParams {
    service: Option<String>,
}

#[derive(Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
    service: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IndexReply {
    state: SubmissionState,
    field_errors: BTreeMap<Field, String>,
    output: Option<String>,
}

#[derive(Serialize)]
struct SearchReply {
    state: SubmissionState,
    output: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = ConsoleConfig::from_env()?;

    let state = AppState {
        service_url: config.service_url.clone(),
        client: reqwest::Client::new(),
    };

    let app = console_router(state);

    tracing::info!("Console listening on {}", config.bind_addr);
    tracing::info!("Forwarding to search service at {}", config.service_url);
    axum::serve(tokio::net::TcpListener::bind(config.bind_addr).await?, app).await?;

    Ok(())
}

fn console_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui))
        .route("/api/index", post(api_index))
        .route("/api/search", get(api_search))
        .with_state(state)
}

async fn ui() -> Html<&'static str> {
    Html(include_str!("ui.html"))
}

/// Runs one index submission against a fresh form built from the page fields.
async fn api_index(
    State(state): State<AppState>,
    Query(params): Query<ServiceParams>,
    Json(input): Json<RawIndexInput>,
) -> Json<IndexReply> {
    let client = service_client(&state, params.service.as_deref());
    let form = MemoryForm::new();
    input.fill(&form);
    let output = SharedOutput::new();

    let outcome = client.submit_index(&form, &output).await;

    Json(IndexReply {
        state: outcome.state(),
        field_errors: form.errors(),
        output: output.latest(),
    })
}

async fn api_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchReply> {
    let client = service_client(&state, params.service.as_deref());
    let output = SharedOutput::new();

    let outcome = client.submit_search(&params.q, &output).await;

    Json(SearchReply {
        state: outcome.state(),
        output: output.latest(),
    })
}

fn service_client(state: &AppState, override_url: Option<&str>) -> SearchServiceClient {
    let url = resolve_service_url(&state.service_url, override_url);
    SearchServiceClient::with_client(&url, state.client.clone())
}
