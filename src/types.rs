//! Entity types for the project-management REST API.
//!
//! Field names serialize in camelCase to match the backend's JSON. Status
//! fields are carried as plain strings: the backend owns the vocabulary and
//! unrecognized values are valid data that simply style as neutral in the UI.

use serde::{Deserialize, Serialize};

/// A project workstream with a red/amber/green health status.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workstream {
	pub id: String,
	pub name: String,
	pub description: String,
	pub status: String,
	pub lead: String,
	pub last_updated: String,
}

/// A dated milestone belonging to a workstream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
	pub id: String,
	pub workstream_id: String,
	pub title: String,
	pub description: String,
	pub due_date: String,
	pub status: String,
}

/// A tracked risk with impact/likelihood ratings and a mitigation plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
	pub id: String,
	pub workstream_id: String,
	pub title: String,
	pub description: String,
	pub impact: String,
	pub likelihood: String,
	pub mitigation_plan: String,
	pub status: String,
}

/// An open issue assigned to a team member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
	pub id: String,
	pub workstream_id: String,
	pub title: String,
	pub description: String,
	pub severity: String,
	pub status: String,
	pub assigned_to: String,
}

/// A directed dependency between two workstreams.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
	pub id: String,
	pub source_workstream_id: String,
	pub target_workstream_id: String,
	pub description: String,
	pub status: String,
}

/// A dated sentiment reading for a workstream, scored -1.0 to 1.0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkstreamSentiment {
	pub id: String,
	pub workstream_id: String,
	pub date: String,
	pub score: f64,
	pub keywords: Vec<String>,
	pub summary: String,
}

/// A single message in the assistant chat panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
	pub id: String,
	pub role: String,
	pub content: String,
	pub timestamp: String,
}

/// Request body for `POST /chat`.
#[derive(Clone, Debug, Serialize)]
pub struct ChatRequest {
	pub message: String,
}

/// Resolve a workstream id to its display name, `"Unknown"` if absent.
pub fn workstream_name<'a>(workstreams: &'a [Workstream], id: &str) -> &'a str {
	workstreams
		.iter()
		.find(|ws| ws.id == id)
		.map(|ws| ws.name.as_str())
		.unwrap_or("Unknown")
}
