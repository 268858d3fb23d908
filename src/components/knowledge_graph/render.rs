use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::highlight::ElementStyle;
use super::state::{GraphViewState, NODE_RADIUS};

const BACKGROUND: &str = "#fafafa";
const EDGE_COLOR: &str = "#999999";
const HIGHLIGHT_COLOR: &str = "#FFC107";
const LABEL_COLOR: &str = "#000000";
const DIMMED_ALPHA: f64 = 0.3;

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

/// Opacity for an element, easing from fully opaque toward its target.
fn alpha_for(style: ElementStyle, t: f64) -> f64 {
	match style {
		ElementStyle::Dimmed => 1.0 - (1.0 - DIMMED_ALPHA) * t,
		ElementStyle::Normal | ElementStyle::Highlighted => 1.0,
	}
}

pub fn render(state: &GraphViewState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.viewport.width, state.viewport.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn highlight_progress(state: &GraphViewState) -> f64 {
	if state.has_active_highlight() {
		ease_out_cubic(state.highlight_t)
	} else {
		0.0
	}
}

fn draw_edges(state: &GraphViewState, ctx: &CanvasRenderingContext2d) {
	let t = highlight_progress(state);
	let positions = state.positions();
	let arrow_size = 8.0;
	ctx.set_font("10px sans-serif");
	ctx.set_text_align("center");
	ctx.set_text_baseline("bottom");

	for edge in &state.elements.edges {
		let (Some(&from), Some(&to)) = (positions.get(&edge.source), positions.get(&edge.target))
		else {
			continue;
		};
		let (dx, dy) = (to.x - from.x, to.y - from.y);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < NODE_RADIUS * 2.0 {
			continue;
		}

		let style = state.edge_style(&edge.id);
		let (color, width) = match style {
			ElementStyle::Highlighted => (HIGHLIGHT_COLOR, 2.0 + t),
			_ => (EDGE_COLOR, 2.0),
		};
		ctx.set_global_alpha(alpha_for(style, t));
		ctx.set_stroke_style_str(color);
		ctx.set_fill_style_str(color);
		ctx.set_line_width(width);

		let (ux, uy) = (dx / dist, dy / dist);
		let (tip_x, tip_y) = (to.x - ux * NODE_RADIUS, to.y - uy * NODE_RADIUS);
		ctx.begin_path();
		ctx.move_to(from.x + ux * NODE_RADIUS, from.y + uy * NODE_RADIUS);
		ctx.line_to(tip_x - ux * arrow_size, tip_y - uy * arrow_size);
		ctx.stroke();

		let (back_x, back_y) = (tip_x - ux * arrow_size, tip_y - uy * arrow_size);
		let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();

		// Relation label at the midpoint, nudged off the line.
		ctx.set_fill_style_str(LABEL_COLOR);
		let _ = ctx.fill_text(&edge.label, (from.x + to.x) / 2.0, (from.y + to.y) / 2.0 - 4.0);
	}
	ctx.set_global_alpha(1.0);
}

fn draw_nodes(state: &GraphViewState, ctx: &CanvasRenderingContext2d) {
	let t = highlight_progress(state);
	let selected = state.selection().selected_id();
	ctx.set_font("12px sans-serif");
	ctx.set_text_align("center");
	ctx.set_text_baseline("top");

	for node in &state.elements.nodes {
		let Some(p) = node.position else {
			continue;
		};
		let style = state.node_style(&node.id);
		ctx.set_global_alpha(alpha_for(style, t));

		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node.color);
		ctx.fill();
		let (border, border_width) = match style {
			ElementStyle::Highlighted => (HIGHLIGHT_COLOR, 2.0 + 2.0 * t),
			_ => ("#ffffff", 2.0),
		};
		ctx.set_stroke_style_str(border);
		ctx.set_line_width(border_width);
		ctx.stroke();

		if selected == Some(node.id.as_str()) && t > 0.01 {
			let dash = js_sys::Array::of2(&JsValue::from_f64(4.0), &JsValue::from_f64(3.0));
			let _ = ctx.set_line_dash(&dash);
			ctx.begin_path();
			let _ = ctx.arc(p.x, p.y, NODE_RADIUS + 4.0 + 2.0 * t, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(HIGHLIGHT_COLOR);
			ctx.set_line_width(1.5);
			ctx.stroke();
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		}

		ctx.set_fill_style_str(LABEL_COLOR);
		let _ = ctx.fill_text(&node.label, p.x, p.y + NODE_RADIUS + 3.0);
	}
	ctx.set_global_alpha(1.0);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dimmed_elements_fade_to_target_opacity() {
		assert_eq!(alpha_for(ElementStyle::Dimmed, 0.0), 1.0);
		assert!((alpha_for(ElementStyle::Dimmed, 1.0) - DIMMED_ALPHA).abs() < 1e-12);
		assert_eq!(alpha_for(ElementStyle::Highlighted, 1.0), 1.0);
		assert_eq!(alpha_for(ElementStyle::Normal, 0.5), 1.0);
	}

	#[test]
	fn easing_hits_endpoints() {
		assert_eq!(ease_out_cubic(0.0), 0.0);
		assert_eq!(ease_out_cubic(1.0), 1.0);
		assert!(ease_out_cubic(0.5) > 0.5);
	}
}
