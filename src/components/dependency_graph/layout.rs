//! Pure geometry: circular node placement and arrowhead construction.

use std::f64::consts::PI;

/// Visible radius of a node circle, in surface units.
pub const NODE_RADIUS: f64 = 20.0;
/// Distance from arrowhead tip to its back corners.
pub const ARROW_LENGTH: f64 = 10.0;
/// Half-angle of the arrowhead opening.
pub const ARROW_HALF_ANGLE: f64 = PI / 6.0;

/// A point on the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

/// Place `count` nodes evenly on a circle around the surface center.
///
/// Position `i` sits at angle `2π·i/count` on a circle of radius
/// `0.35 · min(width, height)`. Deterministic for a fixed count and surface
/// size; callers index the result by node input order.
pub fn circular_layout(count: usize, width: f64, height: f64) -> Vec<Point> {
	let radius = 0.35 * width.min(height);
	let center_x = width / 2.0;
	let center_y = height / 2.0;

	(0..count)
		.map(|i| {
			let angle = 2.0 * PI * i as f64 / count as f64;
			Point {
				x: center_x + radius * angle.cos(),
				y: center_y + radius * angle.sin(),
			}
		})
		.collect()
}

/// Corner points of a filled arrowhead whose tip sits on `target`.
///
/// The triangle points along the source→target direction; the two back
/// corners sit [`ARROW_LENGTH`] behind the tip, [`ARROW_HALF_ANGLE`] off
/// the line axis on either side.
pub fn arrowhead(source: Point, target: Point) -> [Point; 3] {
	let angle = (target.y - source.y).atan2(target.x - source.x);
	let left = Point {
		x: target.x - ARROW_LENGTH * (angle - ARROW_HALF_ANGLE).cos(),
		y: target.y - ARROW_LENGTH * (angle - ARROW_HALF_ANGLE).sin(),
	};
	let right = Point {
		x: target.x - ARROW_LENGTH * (angle + ARROW_HALF_ANGLE).cos(),
		y: target.y - ARROW_LENGTH * (angle + ARROW_HALF_ANGLE).sin(),
	};
	[target, left, right]
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPS: f64 = 1e-9;

	fn close(a: f64, b: f64) -> bool {
		(a - b).abs() < EPS
	}

	#[test]
	fn single_node_sits_at_angle_zero() {
		let points = circular_layout(1, 800.0, 400.0);
		assert_eq!(points.len(), 1);
		// radius = 0.35 * 400, center = (400, 200)
		assert!(close(points[0].x, 400.0 + 140.0));
		assert!(close(points[0].y, 200.0));
	}

	#[test]
	fn all_positions_lie_on_the_layout_circle() {
		for n in 1..=24 {
			let (w, h) = (640.0, 480.0);
			let radius = 0.35 * h;
			for p in circular_layout(n, w, h) {
				let dist = ((p.x - w / 2.0).powi(2) + (p.y - h / 2.0).powi(2)).sqrt();
				assert!(close(dist, radius), "n={n} dist={dist}");
				assert!(dist <= radius + NODE_RADIUS);
			}
		}
	}

	#[test]
	fn positions_are_pairwise_distinct() {
		let points = circular_layout(12, 500.0, 500.0);
		for i in 0..points.len() {
			for j in (i + 1)..points.len() {
				let (dx, dy) = (points[i].x - points[j].x, points[i].y - points[j].y);
				assert!(dx.abs() > EPS || dy.abs() > EPS, "{i} and {j} collide");
			}
		}
	}

	#[test]
	fn quarter_turns_for_four_nodes() {
		let points = circular_layout(4, 200.0, 200.0);
		// radius = 70, center (100, 100); angles 0, 90, 180, 270 degrees.
		assert!(close(points[0].x, 170.0) && close(points[0].y, 100.0));
		assert!(close(points[1].x, 100.0) && close(points[1].y, 170.0));
		assert!(close(points[2].x, 30.0) && close(points[2].y, 100.0));
		assert!(close(points[3].x, 100.0) && close(points[3].y, 30.0));
	}

	#[test]
	fn arrowhead_for_horizontal_edge() {
		let [tip, left, right] = arrowhead(Point { x: 0.0, y: 0.0 }, Point { x: 100.0, y: 0.0 });
		assert_eq!(tip, Point { x: 100.0, y: 0.0 });
		// Back corners: 10·cos(30°) behind the tip, ±10·sin(30°) = ±5 off axis.
		let back_x = 100.0 - ARROW_LENGTH * ARROW_HALF_ANGLE.cos();
		assert!(close(left.x, back_x));
		assert!(close(right.x, back_x));
		assert!(close(left.y, 5.0));
		assert!(close(right.y, -5.0));
	}

	#[test]
	fn arrowhead_is_symmetric_about_the_edge_axis() {
		let source = Point { x: 10.0, y: 20.0 };
		let target = Point { x: 70.0, y: 90.0 };
		let [tip, left, right] = arrowhead(source, target);
		let mid = Point {
			x: (left.x + right.x) / 2.0,
			y: (left.y + right.y) / 2.0,
		};
		// Midpoint of the back edge lies on the source→target line.
		let cross = (target.x - source.x) * (mid.y - source.y)
			- (target.y - source.y) * (mid.x - source.x);
		assert!(cross.abs() < 1e-6);
		// Corners are ARROW_LENGTH from the tip.
		for corner in [left, right] {
			let d = ((corner.x - tip.x).powi(2) + (corner.y - tip.y).powi(2)).sqrt();
			assert!(close(d, ARROW_LENGTH));
		}
	}
}
