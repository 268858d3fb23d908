use log::{debug, info};

use super::highlight::{self, ElementStyle, HighlightPartition, SelectionEvent, SelectionState};
use super::layout::{CancelToken, LayoutConfig, LayoutEngine, LayoutRun};
use super::transform::{self, EdgeIdStrategy};
use super::types::{Elements, Graph, Point, Positions, Viewport};

pub const NODE_RADIUS: f64 = 16.0;
pub const HIT_RADIUS: f64 = 20.0;
/// Pointer travel, in screen pixels, below which a press-release counts as a tap.
pub const TAP_SLOP: f64 = 4.0;

#[derive(Clone, Debug)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self { x: 0.0, y: 0.0, k: 1.0 }
	}
}

#[derive(Clone, Debug, Default)]
pub struct PointerState {
	pub active: bool,
	pub moved: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Handle for one layout pass; only the newest ticket may publish.
#[derive(Clone, Debug)]
pub struct LayoutTicket {
	pub generation: u64,
	pub cancel: CancelToken,
}

pub struct GraphViewState {
	pub elements: Elements,
	pub transform: ViewTransform,
	pub pointer: PointerState,
	pub viewport: Viewport,
	/// Eases toward 1 while a selection is active, toward 0 otherwise.
	pub highlight_t: f64,
	selection: SelectionState,
	partition: HighlightPartition,
	/// Last non-empty partition, kept while the highlight fades out.
	fading: HighlightPartition,
	engine: LayoutEngine,
	edge_ids: EdgeIdStrategy,
	raw_positions: Positions,
	positions: Positions,
	generation: u64,
	in_flight: Option<CancelToken>,
}

impl GraphViewState {
	pub fn new(
		graph: &Graph,
		config: LayoutConfig,
		edge_ids: EdgeIdStrategy,
		viewport: Viewport,
	) -> Self {
		let mut state = Self {
			elements: Elements::default(),
			transform: ViewTransform::default(),
			pointer: PointerState::default(),
			viewport,
			highlight_t: 0.0,
			selection: SelectionState::Unselected,
			partition: HighlightPartition::default(),
			fading: HighlightPartition::default(),
			engine: LayoutEngine::new(config),
			edge_ids,
			raw_positions: Positions::new(),
			positions: Positions::new(),
			generation: 0,
			in_flight: None,
		};
		state.load_graph(graph);
		state
	}

	/// Replace the whole graph: clears the selection and lays out from scratch.
	pub fn load_graph(&mut self, graph: &Graph) {
		self.apply(SelectionEvent::GraphReplaced);
		self.fading = HighlightPartition::default();
		self.highlight_t = 0.0;
		self.elements = transform::transform_with(graph, self.edge_ids);
		self.raw_positions.clear();
		self.positions.clear();
		info!(
			"loaded graph: {} nodes, {} edges",
			self.elements.nodes.len(),
			self.elements.edges.len()
		);

		let ticket = self.begin_layout();
		let run = self.engine.simulate(
			&self.elements.nodes,
			&self.elements.edges,
			None,
			self.viewport,
			&ticket.cancel,
		);
		if let Some(run) = run {
			self.publish(&ticket, run);
		}
	}

	/// Start a layout pass, cancelling whichever pass was still running.
	pub fn begin_layout(&mut self) -> LayoutTicket {
		if let Some(previous) = self.in_flight.take() {
			previous.cancel();
		}
		self.generation += 1;
		let cancel = CancelToken::new();
		self.in_flight = Some(cancel.clone());
		LayoutTicket {
			generation: self.generation,
			cancel,
		}
	}

	/// Publish a finished layout. Stale or cancelled tickets are ignored.
	pub fn publish(&mut self, ticket: &LayoutTicket, run: LayoutRun) -> bool {
		if ticket.generation != self.generation || ticket.cancel.is_cancelled() {
			debug!("discarding stale layout (generation {})", ticket.generation);
			return false;
		}
		self.in_flight = None;
		self.raw_positions = run.positions;
		self.refit();
		true
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.viewport = Viewport::new(width, height);
		self.refit();
	}

	fn refit(&mut self) {
		self.positions = self.engine.fit(&self.raw_positions, self.viewport);
		for node in &mut self.elements.nodes {
			node.position = self.positions.get(&node.id).copied();
		}
	}

	pub fn apply(&mut self, event: SelectionEvent) {
		self.selection = highlight::transition(&self.selection, event);
		let partition = highlight::highlight(
			self.selection.selected_id(),
			&self.elements.nodes,
			&self.elements.edges,
		);
		let previous = std::mem::replace(&mut self.partition, partition);
		if self.partition.is_empty() && !previous.is_empty() {
			self.fading = previous;
		} else {
			self.fading = HighlightPartition::default();
		}
	}

	pub fn selection(&self) -> &SelectionState {
		&self.selection
	}

	pub fn partition(&self) -> &HighlightPartition {
		&self.partition
	}

	pub fn positions(&self) -> &Positions {
		&self.positions
	}

	/// Partition to draw: the live one, or the fading one after a deselect.
	pub fn visible_partition(&self) -> &HighlightPartition {
		if self.partition.is_empty() { &self.fading } else { &self.partition }
	}

	pub fn node_style(&self, id: &str) -> ElementStyle {
		self.visible_partition().node_style(id)
	}

	pub fn edge_style(&self, id: &str) -> ElementStyle {
		self.visible_partition().edge_style(id)
	}

	pub fn has_active_highlight(&self) -> bool {
		!self.partition.is_empty() || self.highlight_t > 0.0
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Closest node within [`HIT_RADIUS`] of the screen point.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<&str> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let target = Point::new(gx, gy);
		self.elements
			.nodes
			.iter()
			.filter_map(|node| Some((node.id.as_str(), node.position?.distance(&target))))
			.filter(|&(_, dist)| dist < HIT_RADIUS)
			.min_by(|a, b| a.1.total_cmp(&b.1))
			.map(|(id, _)| id)
	}

	/// Tap at a screen point; returns the id of the node hit, if any.
	pub fn tap(&mut self, sx: f64, sy: f64) -> Option<String> {
		let hit = self.node_at_position(sx, sy).map(str::to_string);
		match &hit {
			Some(id) => self.apply(SelectionEvent::NodeTapped(id.clone())),
			None => self.apply(SelectionEvent::CanvasTapped),
		}
		hit
	}

	pub fn pointer_down(&mut self, x: f64, y: f64) {
		self.pointer = PointerState {
			active: true,
			moved: false,
			start_x: x,
			start_y: y,
			transform_start_x: self.transform.x,
			transform_start_y: self.transform.y,
		};
	}

	/// Pans once the pointer leaves the tap slop.
	pub fn pointer_move(&mut self, x: f64, y: f64) {
		if !self.pointer.active {
			return;
		}
		let (dx, dy) = (x - self.pointer.start_x, y - self.pointer.start_y);
		if !self.pointer.moved && (dx * dx + dy * dy).sqrt() < TAP_SLOP {
			return;
		}
		self.pointer.moved = true;
		self.transform.x = self.pointer.transform_start_x + dx;
		self.transform.y = self.pointer.transform_start_y + dy;
	}

	/// Ends a press. A press that never panned is a tap; returns the tapped node id.
	pub fn pointer_up(&mut self, x: f64, y: f64) -> Option<String> {
		let was_tap = self.pointer.active && !self.pointer.moved;
		self.pointer = PointerState::default();
		if was_tap { self.tap(x, y) } else { None }
	}

	pub fn pointer_cancel(&mut self) {
		self.pointer = PointerState::default();
	}

	/// Zoom around the screen point `(x, y)`.
	pub fn zoom(&mut self, x: f64, y: f64, delta_y: f64) {
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		let new_k = (self.transform.k * factor).clamp(0.1, 10.0);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn tick(&mut self, dt: f64) {
		let (target, speed) = if self.partition.is_empty() {
			(0.0, 6.0)
		} else {
			(1.0, 9.0)
		};
		self.highlight_t += (target - self.highlight_t) * (speed * dt).min(1.0);
		if target == 0.0 && self.highlight_t < 0.01 {
			self.highlight_t = 0.0;
			self.fading = HighlightPartition::default();
		}
	}
}
