use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::canvas;
use super::draw;
use super::types::GraphData;

/// Canvas panel that redraws the dependency graph whenever `data` changes.
///
/// Each pass is self-contained: it reads the surface size, rebuilds the
/// command list from scratch and repaints. A canvas that is not mounted yet
/// (or a missing 2d context) skips the pass; the effect re-runs on the next
/// data change.
#[component]
pub fn DependencyGraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	Effect::new(move |_| {
		let data = data.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		let w = width.unwrap_or_else(|| {
			canvas
				.parent_element()
				.map(|p| p.client_width() as f64)
				.unwrap_or(800.0)
		});
		let h = height.unwrap_or_else(|| {
			canvas
				.parent_element()
				.map(|p| p.client_height() as f64)
				.unwrap_or(400.0)
		});
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Ok(Some(ctx)) = canvas.get_context("2d") else {
			return;
		};
		let Ok(ctx) = ctx.dyn_into::<CanvasRenderingContext2d>() else {
			return;
		};

		let commands = draw::build_draw_commands(&data, w, h);
		canvas::paint(&ctx, &commands);
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="dependency-graph-canvas"
			style="display: block; width: 100%; height: 100%;"
		/>
	}
}
