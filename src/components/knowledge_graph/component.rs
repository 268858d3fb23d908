use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::error;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, WheelEvent, Window,
};

use super::error::SurfaceError;
use super::highlight::SelectionEvent;
use super::layout::LayoutConfig;
use super::render;
use super::state::GraphViewState;
use super::transform::EdgeIdStrategy;
use super::types::{Graph, Viewport};

type SharedState = Rc<RefCell<Option<GraphViewState>>>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Interactive node-link view of a knowledge graph.
///
/// Every new `data` value replaces the graph, clears the selection and lays it
/// out again. Tapping a node highlights its neighborhood and fires `on_node_tap`
/// with the entity name; tapping empty space or pressing Escape deselects.
#[component]
pub fn KnowledgeGraphCanvas(
	#[prop(into)] data: Signal<Graph>,
	#[prop(optional, into)] on_node_tap: Option<Callback<String>>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
	#[prop(optional)] layout: LayoutConfig,
	#[prop(optional)] edge_ids: EdgeIdStrategy,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let resize_cb: FrameCallback = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let graph = data.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if let Some(ref mut s) = *state_init.borrow_mut() {
			s.load_graph(&graph);
			return;
		}

		let surface = Surface {
			canvas: canvas.into(),
			fullscreen,
			width,
			height,
		};
		let mounted = surface.mount(
			&graph,
			layout.clone(),
			edge_ids,
			&state_init,
			&animate_init,
			&resize_cb_init,
		);
		if let Err(err) = mounted {
			error!("knowledge graph canvas failed to mount: {err}");
		}
	});

	let local_point = move |ev: &MouseEvent| -> Option<(f64, f64)> {
		let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
		let rect = canvas.get_bounding_client_rect();
		Some((
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		))
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(&ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.pointer_down(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(&ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.pointer_move(x, y);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(&ev) else {
			return;
		};
		// Release the borrow before handing the id to the application.
		let tapped = state_mu
			.borrow_mut()
			.as_mut()
			.and_then(|s| s.pointer_up(x, y));
		if let (Some(id), Some(cb)) = (tapped, on_node_tap) {
			cb.run(id);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.pointer_cancel();
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = local_point(&ev) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.zoom(x, y, ev.delta_y());
		}
	};

	let state_kd = state.clone();
	let on_keydown = move |ev: KeyboardEvent| {
		if ev.key() != "Escape" {
			return;
		}
		if let Some(ref mut s) = *state_kd.borrow_mut() {
			if !s.partition().is_empty() {
				s.apply(SelectionEvent::Deselect);
			}
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="knowledge-graph-canvas"
			tabindex="0"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			on:keydown=on_keydown
			style="display: block; cursor: pointer; outline: none;"
		/>
	}
}

#[derive(Clone)]
struct Surface {
	canvas: HtmlCanvasElement,
	fullscreen: bool,
	width: Option<f64>,
	height: Option<f64>,
}

impl Surface {
	fn mount(
		&self,
		graph: &Graph,
		layout: LayoutConfig,
		edge_ids: EdgeIdStrategy,
		state: &SharedState,
		animate: &FrameCallback,
		resize_cb: &FrameCallback,
	) -> Result<(), SurfaceError> {
		let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
		let viewport = self.size(&window)?;
		self.set_size(viewport);

		let ctx: CanvasRenderingContext2d = self
			.canvas
			.get_context("2d")?
			.ok_or(SurfaceError::NoContext)?
			.dyn_into()
			.map_err(|_| SurfaceError::NoContext)?;
		*state.borrow_mut() = Some(GraphViewState::new(graph, layout, edge_ids, viewport));

		// Fixed width and height never change, anything else follows the window
		// or the parent element.
		if self.fullscreen || self.width.is_none() || self.height.is_none() {
			let (state_resize, surface) = (state.clone(), self.clone());
			*resize_cb.borrow_mut() = Some(Closure::new(move || {
				let Some(win) = web_sys::window() else {
					return;
				};
				let Ok(viewport) = surface.size(&win) else {
					return;
				};
				surface.set_size(viewport);
				if let Some(ref mut s) = *state_resize.borrow_mut() {
					s.resize(viewport.width, viewport.height);
				}
			}));
			if let Some(ref cb) = *resize_cb.borrow() {
				window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())?;
			}
		}

		let (state_anim, animate_inner) = (state.clone(), animate.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &ctx);
			}
			if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			window.request_animation_frame(cb.as_ref().unchecked_ref())?;
		}
		Ok(())
	}

	fn set_size(&self, viewport: Viewport) {
		self.canvas.set_width(viewport.width as u32);
		self.canvas.set_height(viewport.height as u32);
	}

	/// Window size when fullscreen, otherwise explicit props first and the
	/// parent element's client box second.
	fn size(&self, window: &Window) -> Result<Viewport, SurfaceError> {
		if self.fullscreen {
			return window_size(window);
		}
		let fallback = Viewport::default();
		let parent = self.canvas.parent_element();
		let width = extent(
			self.width,
			parent.as_ref().map(|p| p.client_width() as f64),
			fallback.width,
		);
		let height = extent(
			self.height,
			parent.as_ref().map(|p| p.client_height() as f64),
			fallback.height,
		);
		Ok(Viewport::new(width, height))
	}
}

/// An explicit size wins; a measured size counts only when positive.
fn extent(explicit: Option<f64>, measured: Option<f64>, fallback: f64) -> f64 {
	explicit.unwrap_or_else(|| measured.filter(|v| *v > 0.0).unwrap_or(fallback))
}

fn window_size(window: &Window) -> Result<Viewport, SurfaceError> {
	let fallback = Viewport::default();
	Ok(Viewport::new(
		window.inner_width()?.as_f64().unwrap_or(fallback.width),
		window.inner_height()?.as_f64().unwrap_or(fallback.height),
	))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn explicit_size_beats_the_container() {
		assert_eq!(extent(Some(320.0), Some(1000.0), 800.0), 320.0);
	}

	#[test]
	fn container_size_follows_the_parent() {
		assert_eq!(extent(None, Some(640.0), 800.0), 640.0);
		assert_eq!(extent(None, Some(1024.0), 800.0), 1024.0);
	}

	#[test]
	fn unmeasured_container_falls_back() {
		assert_eq!(extent(None, Some(0.0), 800.0), 800.0);
		assert_eq!(extent(None, None, 600.0), 600.0);
	}
}
