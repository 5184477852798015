use super::sink::OutputSink;
use super::types::{IndexOutcome, SearchOutcome, SubmissionState};
use crate::form::port::FormPort;
use crate::form::types::RawIndexInput;
use crate::request::builder::build_index_request;
use crate::request::id::generate_id;
use crate::request::types::{IndexRequest, SearchQuery, ENDPOINT_INDEX, ENDPOINT_SEARCH};
use crate::validation::validator::validate_form;

use anyhow::Result;

/// HTTP client for the indexing/search service.
///
/// Requests are fire-and-forget: no retries, no caching, no deduplication.
/// Concurrent submissions are not serialized; whichever answers last owns the
/// output sink.
#[derive(Clone)]
pub struct SearchServiceClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl SearchServiceClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: &str, http_client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Validates the form and, if it passes, indexes the document.
    ///
    /// Invalid input leaves the form open with its errors shown. Any other
    /// outcome writes to `sink` and then resets the form, failures included.
    pub async fn submit_index(&self, form: &dyn FormPort, sink: &dyn OutputSink) -> IndexOutcome {
        tracing::debug!("Index submission: {:?}", SubmissionState::Validating);
        let input = RawIndexInput::read_from(form);

        let validation = validate_form(form, &input);
        if !validation.is_valid {
            return IndexOutcome::Invalid(validation);
        }

        let id = generate_id();
        tracing::info!("Submitting document {}", id);

        let outcome = match self.send_index(id.clone(), &input).await {
            Ok(body) => {
                sink.write(render_json(&body));
                IndexOutcome::Succeeded(body)
            }
            Err(err) => {
                tracing::error!("Index request {} failed: {:#}", id, err);
                let text = render_error(&err);
                sink.write(text.clone());
                IndexOutcome::Failed(text)
            }
        };

        form.reset();
        outcome
    }

    /// Runs a multi-term search. Input is not validated.
    pub async fn submit_search(&self, query_strings: &str, sink: &dyn OutputSink) -> SearchOutcome {
        let query = SearchQuery::from_text(query_strings);
        tracing::info!("Searching for {} term(s)", query.queries.len());

        match self.send_search(&query).await {
            Ok(body) => {
                sink.write(render_json(&body));
                SearchOutcome::Succeeded(body)
            }
            Err(err) => {
                tracing::error!("Search request failed: {:#}", err);
                let text = render_error(&err);
                sink.write(text.clone());
                SearchOutcome::Failed(text)
            }
        }
    }

    async fn send_index(&self, id: String, input: &RawIndexInput) -> Result<serde_json::Value> {
        let request: IndexRequest = build_index_request(id, input)?;
        tracing::debug!(
            "Index payload: {} object index(es), {} stop word(s)",
            request.content.object_indexes.len(),
            request.stop_words.len()
        );

        let response = self
            .http_client
            .post(format!("{}{}", self.base_url, ENDPOINT_INDEX))
            .json(&request)
            .send()
            .await?;

        tracing::debug!("Index response status {}", response.status());
        Ok(response.json::<serde_json::Value>().await?)
    }

    async fn send_search(&self, query: &SearchQuery) -> Result<serde_json::Value> {
        let url = format!("{}{}?{}", self.base_url, ENDPOINT_SEARCH, query.query_string());

        let response = self.http_client.get(url).send().await?;

        tracing::debug!("Search response status {}", response.status());
        Ok(response.json::<serde_json::Value>().await?)
    }
}

/// Pretty-prints a response body with two-space indentation.
pub fn render_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Text shown to the operator for a failed request.
pub fn render_error(err: &anyhow::Error) -> String {
    format!("Error: {:#}", err)
}
