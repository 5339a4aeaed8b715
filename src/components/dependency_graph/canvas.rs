//! Replay of draw commands onto a 2D canvas context.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::draw::DrawCommand;

/// Paint a command list onto the context, in order.
pub fn paint(ctx: &CanvasRenderingContext2d, commands: &[DrawCommand]) {
	for command in commands {
		match command {
			DrawCommand::Clear { width, height } => {
				ctx.clear_rect(0.0, 0.0, *width, *height);
			}
			DrawCommand::Circle {
				center,
				radius,
				fill,
			} => {
				ctx.begin_path();
				let _ = ctx.arc(center.x, center.y, *radius, 0.0, 2.0 * PI);
				ctx.set_fill_style_str(fill);
				ctx.fill();
			}
			DrawCommand::Text {
				content,
				position,
				fill,
				font,
			} => {
				ctx.set_font(font);
				ctx.set_fill_style_str(fill);
				ctx.set_text_align("center");
				let _ = ctx.fill_text(content, position.x, position.y);
			}
			DrawCommand::Line {
				from,
				to,
				stroke,
				width,
			} => {
				ctx.begin_path();
				ctx.move_to(from.x, from.y);
				ctx.line_to(to.x, to.y);
				ctx.set_stroke_style_str(stroke);
				ctx.set_line_width(*width);
				ctx.stroke();
			}
			DrawCommand::Polygon { points, fill } => {
				ctx.begin_path();
				ctx.move_to(points[0].x, points[0].y);
				for point in &points[1..] {
					ctx.line_to(point.x, point.y);
				}
				ctx.close_path();
				ctx.set_fill_style_str(fill);
				ctx.fill();
			}
		}
	}
}
