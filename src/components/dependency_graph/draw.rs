//! Draw-command generation for the dependency graph.
//!
//! The engine never touches a real surface: one render pass is a pure
//! function from `(GraphData, width, height)` to a command list, which the
//! canvas adapter replays. That keeps the geometry and styling testable
//! without a browser.

use std::collections::HashMap;

use super::layout::{self, NODE_RADIUS, Point};
use super::types::GraphData;

/// Neutral style applied to any status outside the known vocabulary.
pub const NEUTRAL_COLOR: &str = "#8a898c";

const LABEL_FONT: &str = "12px Arial";
const LABEL_COLOR: &str = "#ffffff";
const LABEL_MAX_CHARS: usize = 10;
// fill_text baseline tweak to optically center 12px text in the node
const LABEL_BASELINE_OFFSET: f64 = 5.0;

/// One immediate-mode drawing instruction.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
	/// Erase the whole surface.
	Clear { width: f64, height: f64 },
	/// Filled circle.
	Circle {
		center: Point,
		radius: f64,
		fill: &'static str,
	},
	/// Horizontally centered text.
	Text {
		content: String,
		position: Point,
		fill: &'static str,
		font: &'static str,
	},
	/// Stroked line segment.
	Line {
		from: Point,
		to: Point,
		stroke: &'static str,
		width: f64,
	},
	/// Filled triangle (arrowhead).
	Polygon {
		points: [Point; 3],
		fill: &'static str,
	},
}

/// Fill color for a workstream node by status.
pub fn node_color(status: &str) -> &'static str {
	match status {
		"red" => "#ea384c",
		"amber" => "#f59e0b",
		"green" => "#10b981",
		_ => NEUTRAL_COLOR,
	}
}

/// Stroke style for a dependency edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeStyle {
	pub color: &'static str,
	pub width: f64,
}

/// Stroke style for a dependency edge by status.
pub fn edge_style(status: &str) -> EdgeStyle {
	match status {
		"at_risk" => EdgeStyle {
			color: "#ea384c",
			width: 2.0,
		},
		"pending" => EdgeStyle {
			color: "#f59e0b",
			width: 1.5,
		},
		"met" => EdgeStyle {
			color: "#10b981",
			width: 1.0,
		},
		_ => EdgeStyle {
			color: NEUTRAL_COLOR,
			width: 1.0,
		},
	}
}

fn truncate_label(name: &str) -> String {
	name.chars().take(LABEL_MAX_CHARS).collect()
}

/// Build the full command list for one render pass.
///
/// Always starts with a `Clear`. An empty node set or empty edge set yields
/// the cleared frame and nothing else. Nodes are emitted before edges, so
/// edge lines and arrowheads overdraw node fills and run to node centers;
/// this matches the shipped visual exactly. Edges whose endpoints are not
/// in the node set are skipped entirely.
pub fn build_draw_commands(data: &GraphData, width: f64, height: f64) -> Vec<DrawCommand> {
	let mut commands = vec![DrawCommand::Clear { width, height }];

	if data.nodes.is_empty() || data.edges.is_empty() {
		return commands;
	}

	let positions = layout::circular_layout(data.nodes.len(), width, height);
	let mut by_id: HashMap<&str, Point> = HashMap::with_capacity(data.nodes.len());

	for (node, &position) in data.nodes.iter().zip(&positions) {
		by_id.insert(node.id.as_str(), position);

		commands.push(DrawCommand::Circle {
			center: position,
			radius: NODE_RADIUS,
			fill: node_color(&node.status),
		});
		commands.push(DrawCommand::Text {
			content: truncate_label(&node.name),
			position: Point {
				x: position.x,
				y: position.y + LABEL_BASELINE_OFFSET,
			},
			fill: LABEL_COLOR,
			font: LABEL_FONT,
		});
	}

	for edge in &data.edges {
		let (Some(&source), Some(&target)) =
			(by_id.get(edge.source.as_str()), by_id.get(edge.target.as_str()))
		else {
			continue;
		};

		let style = edge_style(&edge.status);
		commands.push(DrawCommand::Line {
			from: source,
			to: target,
			stroke: style.color,
			width: style.width,
		});
		commands.push(DrawCommand::Polygon {
			points: layout::arrowhead(source, target),
			fill: style.color,
		});
	}

	commands
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::dependency_graph::{GraphEdge, GraphNode};
	use pretty_assertions::assert_eq;

	fn node(id: &str, name: &str, status: &str) -> GraphNode {
		GraphNode {
			id: id.into(),
			name: name.into(),
			status: status.into(),
		}
	}

	fn edge(id: &str, source: &str, target: &str, status: &str) -> GraphEdge {
		GraphEdge {
			id: id.into(),
			source: source.into(),
			target: target.into(),
			status: status.into(),
		}
	}

	fn sample() -> GraphData {
		GraphData {
			nodes: vec![
				node("ws-1", "Core Banking Platform Migration", "amber"),
				node("ws-2", "Client Onboarding Redesign", "green"),
				node("ws-3", "Regulatory Compliance Framework", "red"),
			],
			edges: vec![
				edge("dep-1", "ws-1", "ws-2", "pending"),
				edge("dep-2", "ws-3", "ws-2", "at_risk"),
			],
		}
	}

	#[test]
	fn node_color_known_and_fallback() {
		assert_eq!(node_color("red"), "#ea384c");
		assert_eq!(node_color("amber"), "#f59e0b");
		assert_eq!(node_color("green"), "#10b981");
		assert_eq!(node_color("blue"), NEUTRAL_COLOR);
		assert_eq!(node_color(""), NEUTRAL_COLOR);
	}

	#[test]
	fn edge_style_known_and_fallback() {
		assert_eq!(edge_style("at_risk"), EdgeStyle { color: "#ea384c", width: 2.0 });
		assert_eq!(edge_style("pending"), EdgeStyle { color: "#f59e0b", width: 1.5 });
		assert_eq!(edge_style("met"), EdgeStyle { color: "#10b981", width: 1.0 });
		assert_eq!(
			edge_style("unheard_of"),
			EdgeStyle { color: NEUTRAL_COLOR, width: 1.0 }
		);
	}

	#[test]
	fn empty_nodes_yield_clear_only() {
		let data = GraphData {
			nodes: vec![],
			edges: vec![edge("dep-1", "a", "b", "met")],
		};
		let commands = build_draw_commands(&data, 800.0, 400.0);
		assert_eq!(
			commands,
			vec![DrawCommand::Clear {
				width: 800.0,
				height: 400.0
			}]
		);
	}

	#[test]
	fn empty_edges_yield_clear_only() {
		let data = GraphData {
			nodes: vec![node("ws-1", "Solo", "green")],
			edges: vec![],
		};
		let commands = build_draw_commands(&data, 800.0, 400.0);
		assert_eq!(commands.len(), 1);
	}

	#[test]
	fn nodes_are_drawn_before_edges() {
		let commands = build_draw_commands(&sample(), 800.0, 400.0);
		// Clear, then circle+text per node, then line+polygon per edge.
		assert_eq!(commands.len(), 1 + 3 * 2 + 2 * 2);
		assert!(matches!(commands[0], DrawCommand::Clear { .. }));
		for chunk in commands[1..7].chunks(2) {
			assert!(matches!(chunk[0], DrawCommand::Circle { .. }));
			assert!(matches!(chunk[1], DrawCommand::Text { .. }));
		}
		for chunk in commands[7..].chunks(2) {
			assert!(matches!(chunk[0], DrawCommand::Line { .. }));
			assert!(matches!(chunk[1], DrawCommand::Polygon { .. }));
		}
	}

	#[test]
	fn labels_hard_truncate_to_ten_chars() {
		let commands = build_draw_commands(&sample(), 800.0, 400.0);
		let DrawCommand::Text { content, fill, font, .. } = &commands[2] else {
			panic!("expected node label");
		};
		assert_eq!(content, "Core Banki");
		assert_eq!(*fill, "#ffffff");
		assert_eq!(*font, "12px Arial");
	}

	#[test]
	fn truncation_respects_char_boundaries() {
		let data = GraphData {
			nodes: vec![
				node("ws-1", "Übergangsarchitektur", "green"),
				node("ws-2", "B", "green"),
			],
			edges: vec![edge("dep-1", "ws-1", "ws-2", "met")],
		};
		let commands = build_draw_commands(&data, 400.0, 400.0);
		let DrawCommand::Text { content, .. } = &commands[2] else {
			panic!("expected node label");
		};
		assert_eq!(content, "Übergangsa");
	}

	#[test]
	fn dangling_edges_are_skipped_silently() {
		let mut data = sample();
		data.edges.push(edge("dep-x", "ws-1", "ws-404", "met"));
		data.edges.push(edge("dep-y", "ws-404", "ws-1", "met"));
		let commands = build_draw_commands(&data, 800.0, 400.0);
		let edge_commands = commands
			.iter()
			.filter(|c| matches!(c, DrawCommand::Line { .. }))
			.count();
		assert_eq!(edge_commands, 2);
	}

	#[test]
	fn single_node_circle_sits_right_of_center() {
		let data = GraphData {
			nodes: vec![node("ws-1", "Solo", "red")],
			edges: vec![edge("dep-1", "ws-1", "ws-1", "met")],
		};
		let commands = build_draw_commands(&data, 400.0, 400.0);
		let DrawCommand::Circle { center, radius, fill } = &commands[1] else {
			panic!("expected node circle");
		};
		assert_eq!(*radius, NODE_RADIUS);
		assert_eq!(*fill, "#ea384c");
		assert!((center.x - (200.0 + 140.0)).abs() < 1e-9);
		assert!((center.y - 200.0).abs() < 1e-9);
	}

	#[test]
	fn edge_stroke_matches_arrowhead_fill() {
		let commands = build_draw_commands(&sample(), 800.0, 400.0);
		let pairs: Vec<_> = commands
			.iter()
			.filter(|c| matches!(c, DrawCommand::Line { .. } | DrawCommand::Polygon { .. }))
			.collect();
		for pair in pairs.chunks(2) {
			let DrawCommand::Line { stroke, .. } = pair[0] else {
				panic!("expected line first");
			};
			let DrawCommand::Polygon { fill, .. } = pair[1] else {
				panic!("expected polygon after line");
			};
			assert_eq!(stroke, fill);
		}
	}

	#[test]
	fn edge_endpoints_are_node_centers() {
		let commands = build_draw_commands(&sample(), 800.0, 400.0);
		let centers: Vec<Point> = commands
			.iter()
			.filter_map(|c| match c {
				DrawCommand::Circle { center, .. } => Some(*center),
				_ => None,
			})
			.collect();
		// dep-1 runs ws-1 -> ws-2, which are layout indices 0 and 1.
		let DrawCommand::Line { from, to, .. } = &commands[7] else {
			panic!("expected first edge line");
		};
		assert_eq!(*from, centers[0]);
		assert_eq!(*to, centers[1]);
	}
}
