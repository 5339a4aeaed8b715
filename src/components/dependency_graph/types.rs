use crate::types::{Dependency, Workstream};

/// A workstream projected into the graph view model.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub name: String,
	pub status: String,
}

/// A directed dependency between two nodes, referenced by node id.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphEdge {
	pub id: String,
	pub source: String,
	pub target: String,
	pub status: String,
}

/// Everything the graph engine consumes for one render pass.
///
/// Node order is preserved from the source sequence; the circular layout is
/// a function of that order, not of node identity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub edges: Vec<GraphEdge>,
}

impl GraphData {
	/// Project REST entities into the view model, keeping input order.
	pub fn from_entities(workstreams: &[Workstream], dependencies: &[Dependency]) -> Self {
		let nodes = workstreams
			.iter()
			.map(|ws| GraphNode {
				id: ws.id.clone(),
				name: ws.name.clone(),
				status: ws.status.clone(),
			})
			.collect();
		let edges = dependencies
			.iter()
			.map(|dep| GraphEdge {
				id: dep.id.clone(),
				source: dep.source_workstream_id.clone(),
				target: dep.target_workstream_id.clone(),
				status: dep.status.clone(),
			})
			.collect();
		Self { nodes, edges }
	}
}
