//! REST data-access layer with mock fallback.
//!
//! Thin wrappers around the browser `fetch` API. Every `…_or_mock` function
//! degrades to the built-in sample data on any failure, so the UI never
//! depends on the backend being up.

use log::warn;
use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::mock;
use crate::types::{ChatMessage, ChatRequest, Dependency, Issue, Milestone, Risk, Workstream};

const API_URL: &str = "http://localhost:8000";

/// Failure modes of a REST request.
#[derive(Debug, Error)]
pub enum ApiError {
	/// The request never produced a response (offline, CORS, no window).
	#[error("network request failed: {0}")]
	Network(String),
	/// The server answered with a non-2xx status.
	#[error("server returned status {0}")]
	Status(u16),
	/// The response body was not the expected JSON.
	#[error("invalid response body: {0}")]
	Decode(String),
}

fn js_err(value: JsValue) -> ApiError {
	ApiError::Network(format!("{value:?}"))
}

async fn request_json<T: DeserializeOwned>(
	method: &str,
	endpoint: &str,
	body: Option<String>,
) -> Result<T, ApiError> {
	let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;

	let opts = RequestInit::new();
	opts.set_method(method);
	if let Some(body) = body {
		opts.set_body(&JsValue::from_str(&body));
	}

	let request = Request::new_with_str_and_init(&format!("{API_URL}{endpoint}"), &opts)
		.map_err(js_err)?;
	request
		.headers()
		.set("Content-Type", "application/json")
		.map_err(js_err)?;
	request
		.headers()
		.set("Accept", "application/json")
		.map_err(js_err)?;

	let response = JsFuture::from(window.fetch_with_request(&request))
		.await
		.map_err(js_err)?;
	let response: Response = response
		.dyn_into()
		.map_err(|_| ApiError::Network("fetch did not yield a Response".into()))?;

	if !response.ok() {
		return Err(ApiError::Status(response.status()));
	}

	let text = JsFuture::from(response.text().map_err(js_err)?)
		.await
		.map_err(js_err)?;
	let text = text
		.as_string()
		.ok_or_else(|| ApiError::Decode("body is not text".into()))?;
	serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET /workstreams`
pub async fn fetch_workstreams() -> Result<Vec<Workstream>, ApiError> {
	request_json("GET", "/workstreams", None).await
}

/// `GET /milestones`
pub async fn fetch_milestones() -> Result<Vec<Milestone>, ApiError> {
	request_json("GET", "/milestones", None).await
}

/// `GET /risks`
pub async fn fetch_risks() -> Result<Vec<Risk>, ApiError> {
	request_json("GET", "/risks", None).await
}

/// `GET /issues`
pub async fn fetch_issues() -> Result<Vec<Issue>, ApiError> {
	request_json("GET", "/issues", None).await
}

/// `GET /dependencies`
pub async fn fetch_dependencies() -> Result<Vec<Dependency>, ApiError> {
	request_json("GET", "/dependencies", None).await
}

/// `POST /chat`
pub async fn send_chat_message(message: &str) -> Result<ChatMessage, ApiError> {
	let body = serde_json::to_string(&ChatRequest {
		message: message.into(),
	})
	.map_err(|e| ApiError::Decode(e.to_string()))?;
	request_json("POST", "/chat", Some(body)).await
}

/// Workstreams from the API, or the mock set if the API is unreachable.
pub async fn workstreams_or_mock() -> Vec<Workstream> {
	match fetch_workstreams().await {
		Ok(data) => data,
		Err(e) => {
			warn!("falling back to mock workstreams: {e}");
			mock::workstreams()
		}
	}
}

/// Milestones from the API, or the mock set.
pub async fn milestones_or_mock() -> Vec<Milestone> {
	match fetch_milestones().await {
		Ok(data) => data,
		Err(e) => {
			warn!("falling back to mock milestones: {e}");
			mock::milestones()
		}
	}
}

/// Risks from the API, or the mock set.
pub async fn risks_or_mock() -> Vec<Risk> {
	match fetch_risks().await {
		Ok(data) => data,
		Err(e) => {
			warn!("falling back to mock risks: {e}");
			mock::risks()
		}
	}
}

/// Issues from the API, or the mock set.
pub async fn issues_or_mock() -> Vec<Issue> {
	match fetch_issues().await {
		Ok(data) => data,
		Err(e) => {
			warn!("falling back to mock issues: {e}");
			mock::issues()
		}
	}
}

/// Dependencies from the API, or the mock set.
pub async fn dependencies_or_mock() -> Vec<Dependency> {
	match fetch_dependencies().await {
		Ok(data) => data,
		Err(e) => {
			warn!("falling back to mock dependencies: {e}");
			mock::dependencies()
		}
	}
}
