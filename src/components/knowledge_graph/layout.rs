//! Force-directed layout (Fruchterman-Reingold) over an arena of bodies.

use std::cell::Cell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use log::debug;
use serde::{Deserialize, Serialize};

use super::types::{Point, Positions, Viewport, VisualEdge, VisualNode};

const MIN_DISTANCE: f64 = 0.01;
/// Angle between consecutive seeds on the sunflower spiral, π(3 - √5).
const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;
/// Seed spiral radius step, as a fraction of the ideal edge length.
const SEED_SPACING: f64 = 0.5;
const SEPARATION_ROUNDS: usize = 50;
const MIN_FIT_SCALE: f64 = 1e-3;

/// Tuning for the simulation and the viewport fit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
	/// Distance at which attraction and repulsion balance for a single edge.
	pub ideal_edge_length: f64,
	/// Iteration budget. The last positions are used if it runs out.
	pub max_iterations: usize,
	/// Stop once the largest net force on any body drops below this.
	pub convergence_threshold: f64,
	/// Temperature multiplier applied after each iteration.
	pub cooling: f64,
	/// Starting temperature as a fraction of the seeded layout's radius.
	pub initial_temperature_ratio: f64,
	/// Pull toward the centroid per unit of distance. Keeps disconnected
	/// components from drifting apart forever.
	pub gravity: f64,
	/// Smallest center distance left between two bodies after simulating.
	pub node_separation: f64,
	/// Margin kept free around the fitted layout, in pixels.
	pub padding: f64,
	/// Upper bound on the fit scale; 1.0 never enlarges the layout.
	pub max_fit_scale: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			ideal_edge_length: 100.0,
			max_iterations: 500,
			convergence_threshold: 0.5,
			cooling: 0.97,
			initial_temperature_ratio: 0.5,
			gravity: 0.5,
			node_separation: 40.0,
			padding: 30.0,
			max_fit_scale: 1.0,
		}
	}
}

/// Lets a newer graph abandon a layout that is still running.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
	/// Fresh, uncancelled token.
	pub fn new() -> Self {
		Self::default()
	}

	/// Mark every clone of this token cancelled.
	pub fn cancel(&self) {
		self.0.set(true);
	}

	/// Whether [`cancel`](Self::cancel) was called on any clone.
	pub fn is_cancelled(&self) -> bool {
		self.0.get()
	}
}

/// Result of one simulation, before fitting.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutRun {
	/// Unfitted positions keyed by node id.
	pub positions: Positions,
	/// Iterations actually performed.
	pub iterations: usize,
	/// False when the iteration budget ran out before the forces balanced.
	pub converged: bool,
}

#[derive(Clone, Copy, Debug, Default)]
struct Body {
	x: f64,
	y: f64,
	dx: f64,
	dy: f64,
}

/// Unit vector for a pair of bodies too close to have a direction.
fn nudge(i: usize, j: usize) -> (f64, f64) {
	let angle = (i * 31 + j * 17) as f64;
	(angle.cos(), angle.sin())
}

fn centroid(bodies: &[Body]) -> (f64, f64) {
	let n = bodies.len().max(1) as f64;
	let (sx, sy) = bodies
		.iter()
		.fold((0.0, 0.0), |(sx, sy), b| (sx + b.x, sy + b.y));
	(sx / n, sy / n)
}

/// Computes node positions for an element set.
#[derive(Clone, Debug, Default)]
pub struct LayoutEngine {
	config: LayoutConfig,
}

impl LayoutEngine {
	/// Engine with the given tuning.
	pub fn new(config: LayoutConfig) -> Self {
		Self { config }
	}

	/// Current tuning.
	pub fn config(&self) -> &LayoutConfig {
		&self.config
	}

	/// Simulate and fit into `viewport` in one go.
	pub fn layout(
		&self,
		nodes: &[VisualNode],
		edges: &[VisualEdge],
		previous: Option<&Positions>,
		viewport: Viewport,
	) -> Positions {
		self.simulate(nodes, edges, previous, viewport, &CancelToken::new())
			.map(|run| self.fit(&run.positions, viewport))
			.unwrap_or_default()
	}

	/// Run the simulation. Returns `None` if `cancel` fires before it finishes.
	///
	/// Bodies start at their `previous` position when one exists, otherwise on a
	/// spiral around the viewport center in breadth-first order, so neighbors
	/// start close and identical input gives identical output.
	pub fn simulate(
		&self,
		nodes: &[VisualNode],
		edges: &[VisualEdge],
		previous: Option<&Positions>,
		viewport: Viewport,
		cancel: &CancelToken,
	) -> Option<LayoutRun> {
		if nodes.is_empty() {
			return Some(LayoutRun {
				positions: Positions::new(),
				iterations: 0,
				converged: true,
			});
		}

		let index: HashMap<&str, usize> = nodes
			.iter()
			.enumerate()
			.map(|(i, node)| (node.id.as_str(), i))
			.collect();
		let links: Vec<(usize, usize)> = edges
			.iter()
			.filter_map(|edge| {
				Some((
					*index.get(edge.source.as_str())?,
					*index.get(edge.target.as_str())?,
				))
			})
			.filter(|(s, t)| s != t)
			.collect();

		let mut bodies = self.seed(nodes, &links, previous, viewport);
		let k = self.config.ideal_edge_length.max(MIN_DISTANCE);
		let k_squared = k * k;
		let mut temperature = self.extent(&bodies) * self.config.initial_temperature_ratio;

		let mut iterations = 0;
		let mut converged = false;
		while iterations < self.config.max_iterations {
			if cancel.is_cancelled() {
				debug!("layout cancelled after {iterations} iterations");
				return None;
			}
			iterations += 1;

			// Gravity toward the centroid: g * d
			let (cx, cy) = centroid(&bodies);
			for body in &mut bodies {
				body.dx = (cx - body.x) * self.config.gravity;
				body.dy = (cy - body.y) * self.config.gravity;
			}

			// Repulsion between all pairs: k² / d
			for i in 0..bodies.len() {
				for j in (i + 1)..bodies.len() {
					let (mut ddx, mut ddy) =
						(bodies[i].x - bodies[j].x, bodies[i].y - bodies[j].y);
					let mut dist = (ddx * ddx + ddy * ddy).sqrt();
					if dist < MIN_DISTANCE {
						let (ux, uy) = nudge(i, j);
						(ddx, ddy, dist) = (ux * MIN_DISTANCE, uy * MIN_DISTANCE, MIN_DISTANCE);
					}
					let force = k_squared / dist;
					let (fx, fy) = (ddx / dist * force, ddy / dist * force);
					bodies[i].dx += fx;
					bodies[i].dy += fy;
					bodies[j].dx -= fx;
					bodies[j].dy -= fy;
				}
			}

			// Attraction along edges: d² / k
			for &(s, t) in &links {
				let (ddx, ddy) = (bodies[t].x - bodies[s].x, bodies[t].y - bodies[s].y);
				let dist = (ddx * ddx + ddy * ddy).sqrt().max(MIN_DISTANCE);
				let force = dist * dist / k;
				let (fx, fy) = (ddx / dist * force, ddy / dist * force);
				bodies[s].dx += fx;
				bodies[s].dy += fy;
				bodies[t].dx -= fx;
				bodies[t].dy -= fy;
			}

			// Converged is judged on the net force, not on the capped step.
			let max_force = bodies
				.iter()
				.map(|b| (b.dx * b.dx + b.dy * b.dy).sqrt())
				.fold(0.0, f64::max);
			if max_force < self.config.convergence_threshold {
				converged = true;
				break;
			}

			for body in &mut bodies {
				let magnitude = (body.dx * body.dx + body.dy * body.dy).sqrt();
				if magnitude < f64::EPSILON {
					continue;
				}
				let step = magnitude.min(temperature);
				body.x += body.dx / magnitude * step;
				body.y += body.dy / magnitude * step;
			}
			temperature *= self.config.cooling;
		}

		separate(&mut bodies, self.config.node_separation);
		debug!(
			"layout of {} nodes: {iterations} iterations, converged={converged}",
			nodes.len()
		);
		let positions = nodes
			.iter()
			.zip(&bodies)
			.map(|(node, body)| (node.id.clone(), Point::new(body.x, body.y)))
			.collect();
		Some(LayoutRun {
			positions,
			iterations,
			converged,
		})
	}

	/// Scale and translate `raw` so its bounding box sits centered in `viewport`
	/// with the configured padding on every side.
	pub fn fit(&self, raw: &Positions, viewport: Viewport) -> Positions {
		fit_to_viewport(raw, viewport, self.config.padding, self.config.max_fit_scale)
	}

	/// Radius of the seeded layout around its centroid, never below one edge.
	fn extent(&self, bodies: &[Body]) -> f64 {
		let (cx, cy) = centroid(bodies);
		bodies
			.iter()
			.map(|b| ((b.x - cx).powi(2) + (b.y - cy).powi(2)).sqrt())
			.fold(self.config.ideal_edge_length, f64::max)
	}

	fn seed(
		&self,
		nodes: &[VisualNode],
		links: &[(usize, usize)],
		previous: Option<&Positions>,
		viewport: Viewport,
	) -> Vec<Body> {
		let center = viewport.center();
		let spacing = self.config.ideal_edge_length * SEED_SPACING;
		let mut bodies = vec![Body::default(); nodes.len()];

		for (slot, i) in breadth_first_order(nodes.len(), links).into_iter().enumerate() {
			let seeded = previous.and_then(|p| p.get(&nodes[i].id)).copied();
			let point = seeded.unwrap_or_else(|| {
				let radius = spacing * (slot as f64 + 0.5).sqrt();
				let angle = slot as f64 * GOLDEN_ANGLE;
				Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
			});
			bodies[i].x = point.x;
			bodies[i].y = point.y;
		}
		bodies
	}
}

/// Body indices component by component, each in breadth-first order from its
/// first node.
fn breadth_first_order(n: usize, links: &[(usize, usize)]) -> Vec<usize> {
	let mut adjacency = vec![Vec::new(); n];
	for &(s, t) in links {
		adjacency[s].push(t);
		adjacency[t].push(s);
	}

	let mut seen = vec![false; n];
	let mut order = Vec::with_capacity(n);
	let mut queue = VecDeque::new();
	for root in 0..n {
		if seen[root] {
			continue;
		}
		seen[root] = true;
		queue.push_back(root);
		while let Some(i) = queue.pop_front() {
			order.push(i);
			for &j in &adjacency[i] {
				if !seen[j] {
					seen[j] = true;
					queue.push_back(j);
				}
			}
		}
	}
	order
}

/// Push apart any pair closer than `gap`, a few rounds at most.
fn separate(bodies: &mut [Body], gap: f64) {
	if gap <= 0.0 {
		return;
	}
	for _ in 0..SEPARATION_ROUNDS {
		let mut moved = false;
		for i in 0..bodies.len() {
			for j in (i + 1)..bodies.len() {
				let (ddx, ddy) = (bodies[i].x - bodies[j].x, bodies[i].y - bodies[j].y);
				let dist = (ddx * ddx + ddy * ddy).sqrt();
				if dist >= gap {
					continue;
				}
				let (ux, uy) = if dist < MIN_DISTANCE {
					nudge(i, j)
				} else {
					(ddx / dist, ddy / dist)
				};
				let push = (gap - dist) / 2.0;
				bodies[i].x += ux * push;
				bodies[i].y += uy * push;
				bodies[j].x -= ux * push;
				bodies[j].y -= uy * push;
				moved = true;
			}
		}
		if !moved {
			break;
		}
	}
}

/// Fit positions into a viewport. A single point, or any degenerate box, lands
/// on the viewport center.
///
/// Padding shrinks to a quarter of the smaller side when the viewport is too
/// small for it, and the scale never reaches zero, so distinct points stay
/// distinct.
pub fn fit_to_viewport(
	raw: &Positions,
	viewport: Viewport,
	padding: f64,
	max_scale: f64,
) -> Positions {
	if raw.is_empty() {
		return Positions::new();
	}

	let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
	let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
	for p in raw.values() {
		min_x = min_x.min(p.x);
		min_y = min_y.min(p.y);
		max_x = max_x.max(p.x);
		max_y = max_y.max(p.y);
	}

	let (box_w, box_h) = (max_x - min_x, max_y - min_y);
	let padding = padding.min(viewport.width.min(viewport.height) / 4.0).max(0.0);
	let available_w = (viewport.width - 2.0 * padding).max(0.0);
	let available_h = (viewport.height - 2.0 * padding).max(0.0);

	let mut scale = max_scale;
	if box_w > MIN_DISTANCE {
		scale = scale.min(available_w / box_w);
	}
	if box_h > MIN_DISTANCE {
		scale = scale.min(available_h / box_h);
	}
	let scale = scale.max(MIN_FIT_SCALE);

	let box_center = Point::new((min_x + max_x) / 2.0, (min_y + max_y) / 2.0);
	let target = viewport.center();
	raw.iter()
		.map(|(id, p)| {
			let fitted = Point::new(
				target.x + (p.x - box_center.x) * scale,
				target.y + (p.y - box_center.y) * scale,
			);
			(id.clone(), fitted)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::knowledge_graph::state::NODE_RADIUS;
	use crate::components::knowledge_graph::transform::transform;
	use crate::components::knowledge_graph::types::{Elements, Entity, Graph, Relation};

	const TOLERANCE: f64 = 1e-9;

	fn elements(names: &[&str], links: &[(&str, &str)]) -> Elements {
		transform(&Graph::new(
			names.iter().map(|n| Entity::new(*n, "concept")).collect(),
			links.iter().map(|(a, b)| Relation::new(*a, *b, "rel")).collect(),
		))
	}

	fn rand_simple(seed: usize) -> f64 {
		let x = ((seed + 1) * 9301 + 49297) % 233280;
		(x as f64) / 233280.0
	}

	/// Tree where node `i` hangs off a pseudo-random earlier node.
	fn random_tree(n: usize) -> Elements {
		let names: Vec<String> = (0..n).map(|i| format!("n{i}")).collect();
		transform(&Graph::new(
			names.iter().map(|n| Entity::new(n, "concept")).collect(),
			(1..n)
				.map(|i| {
					let parent = (rand_simple(i) * i as f64) as usize;
					Relation::new(&names[i], &names[parent], "rel")
				})
				.collect(),
		))
	}

	fn min_pairwise_distance(positions: &Positions) -> f64 {
		let points: Vec<Point> = positions.values().copied().collect();
		let mut min = f64::INFINITY;
		for (i, a) in points.iter().enumerate() {
			for b in &points[i + 1..] {
				min = min.min(a.distance(b));
			}
		}
		min
	}

	fn centroid(positions: &Positions, ids: &[&str]) -> Point {
		let (sx, sy) = ids
			.iter()
			.map(|id| positions[*id])
			.fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
		Point::new(sx / ids.len() as f64, sy / ids.len() as f64)
	}

	#[test]
	fn empty_input_gives_empty_map_without_iterating() {
		let engine = LayoutEngine::default();
		let run = engine
			.simulate(&[], &[], None, Viewport::default(), &CancelToken::new())
			.unwrap();
		assert!(run.positions.is_empty());
		assert_eq!(run.iterations, 0);
	}

	#[test]
	fn single_node_lands_on_center() {
		let els = elements(&["solo"], &[]);
		let viewport = Viewport::new(1000.0, 400.0);
		let positions = LayoutEngine::default().layout(&els.nodes, &els.edges, None, viewport);

		assert!(positions["solo"].distance(&Point::new(500.0, 200.0)) < TOLERANCE);
	}

	#[test]
	fn layout_is_deterministic() {
		let els = elements(
			&["a", "b", "c", "d", "e"],
			&[("a", "b"), ("b", "c"), ("c", "a"), ("d", "e")],
		);
		let engine = LayoutEngine::default();
		let first = engine.layout(&els.nodes, &els.edges, None, Viewport::default());
		let second = engine.layout(&els.nodes, &els.edges, None, Viewport::default());

		assert_eq!(first.len(), 5);
		for (id, p) in &first {
			assert!(p.distance(&second[id]) < TOLERANCE, "{id} moved between runs");
		}
	}

	#[test]
	fn disconnected_components_stay_apart() {
		let els = elements(&["a", "b", "c", "d"], &[("a", "b"), ("c", "d")]);
		let engine = LayoutEngine::default();
		let positions = engine.layout(&els.nodes, &els.edges, None, Viewport::default());

		let left = centroid(&positions, &["a", "b"]);
		let right = centroid(&positions, &["c", "d"]);
		assert!(left.distance(&right) > engine.config().ideal_edge_length / 2.0);
	}

	#[test]
	fn isolated_nodes_do_not_overlap() {
		let els = elements(&["a", "b", "c"], &[]);
		let positions =
			LayoutEngine::default().layout(&els.nodes, &els.edges, None, Viewport::default());
		assert!(min_pairwise_distance(&positions) > 40.0);
	}

	#[test]
	fn star_is_readable_and_fits_the_viewport() {
		let els = elements(
			&["hub", "s1", "s2", "s3", "s4", "s5", "s6"],
			&[
				("hub", "s1"),
				("hub", "s2"),
				("hub", "s3"),
				("s4", "hub"),
				("s5", "hub"),
				("s6", "hub"),
			],
		);
		let engine = LayoutEngine::default();
		let viewport = Viewport::default();
		let positions = engine.layout(&els.nodes, &els.edges, None, viewport);
		let padding = engine.config().padding;

		for p in positions.values() {
			assert!(p.x >= padding - TOLERANCE && p.x <= viewport.width - padding + TOLERANCE);
			assert!(p.y >= padding - TOLERANCE && p.y <= viewport.height - padding + TOLERANCE);
		}
		assert!(min_pairwise_distance(&positions) > 20.0);
	}

	#[test]
	fn hundred_node_tree_does_not_overlap() {
		let els = random_tree(100);
		let engine = LayoutEngine::default();
		let run = engine
			.simulate(&els.nodes, &els.edges, None, Viewport::default(), &CancelToken::new())
			.unwrap();

		assert_eq!(run.positions.len(), 100);
		assert!(min_pairwise_distance(&run.positions) > 2.0 * NODE_RADIUS);

		// Neighbors end up near each other rather than scattered.
		let k = engine.config().ideal_edge_length;
		let total: f64 = els
			.edges
			.iter()
			.map(|e| run.positions[&e.source].distance(&run.positions[&e.target]))
			.sum();
		assert!(total / (els.edges.len() as f64) < 4.0 * k);
	}

	#[test]
	fn mid_size_graph_fits_the_viewport_with_every_node() {
		let els = random_tree(40);
		let engine = LayoutEngine::default();
		let viewport = Viewport::new(1024.0, 768.0);
		let positions = engine.layout(&els.nodes, &els.edges, None, viewport);
		let padding = engine.config().padding;

		assert_eq!(positions.len(), 40);
		for p in positions.values() {
			assert!(p.x >= padding - TOLERANCE && p.x <= viewport.width - padding + TOLERANCE);
			assert!(p.y >= padding - TOLERANCE && p.y <= viewport.height - padding + TOLERANCE);
		}
		assert!(min_pairwise_distance(&positions) > 1.0);
	}

	#[test]
	fn fitted_bounding_box_is_centered() {
		let els = elements(&["a", "b", "c"], &[("a", "b")]);
		let viewport = Viewport::new(640.0, 480.0);
		let positions = LayoutEngine::default().layout(&els.nodes, &els.edges, None, viewport);

		let xs = positions.values().map(|p| p.x);
		let ys = positions.values().map(|p| p.y);
		let (min_x, max_x) = xs.fold((f64::MAX, f64::MIN), |(lo, hi), x| (lo.min(x), hi.max(x)));
		let (min_y, max_y) = ys.fold((f64::MAX, f64::MIN), |(lo, hi), y| (lo.min(y), hi.max(y)));
		assert!(((min_x + max_x) / 2.0 - 320.0).abs() < 1e-6);
		assert!(((min_y + max_y) / 2.0 - 240.0).abs() < 1e-6);
	}

	#[test]
	fn fit_shrinks_oversized_layouts() {
		let raw: Positions = [
			("a".to_string(), Point::new(-1000.0, 0.0)),
			("b".to_string(), Point::new(1000.0, 10.0)),
		]
		.into_iter()
		.collect();
		let fitted = fit_to_viewport(&raw, Viewport::new(200.0, 100.0), 10.0, 1.0);

		assert!((fitted["a"].x - 10.0).abs() < TOLERANCE);
		assert!((fitted["b"].x - 190.0).abs() < TOLERANCE);
		assert!((fitted["a"].y + fitted["b"].y - 100.0).abs() < TOLERANCE);
	}

	#[test]
	fn viewport_smaller_than_padding_keeps_nodes_apart() {
		let els = elements(&["a", "b"], &[]);
		let viewport = Viewport::new(60.0, 60.0);
		let positions = LayoutEngine::default().layout(&els.nodes, &els.edges, None, viewport);

		assert!(positions["a"].distance(&positions["b"]) > 1.0);
		for p in positions.values() {
			assert!(p.x >= 0.0 && p.x <= 60.0 && p.y >= 0.0 && p.y <= 60.0);
		}
	}

	#[test]
	fn zero_sized_viewport_does_not_collapse_points() {
		let raw: Positions = [
			("a".to_string(), Point::new(0.0, 0.0)),
			("b".to_string(), Point::new(500.0, 0.0)),
		]
		.into_iter()
		.collect();
		let fitted = fit_to_viewport(&raw, Viewport::new(0.0, 0.0), 30.0, 1.0);

		assert!(fitted["a"].distance(&fitted["b"]) > 0.0);
	}

	#[test]
	fn small_graph_converges_within_default_budget() {
		let els = elements(&["a", "b"], &[("a", "b")]);
		let engine = LayoutEngine::default();
		let run = engine
			.simulate(&els.nodes, &els.edges, None, Viewport::default(), &CancelToken::new())
			.unwrap();

		assert!(run.converged);
		assert!(run.iterations < engine.config().max_iterations);
	}

	#[test]
	fn tight_budget_reports_not_converged() {
		let els = random_tree(30);
		let engine = LayoutEngine::new(LayoutConfig {
			max_iterations: 5,
			..LayoutConfig::default()
		});
		let run = engine
			.simulate(&els.nodes, &els.edges, None, Viewport::default(), &CancelToken::new())
			.unwrap();

		assert_eq!(run.iterations, 5);
		assert!(!run.converged);
		assert_eq!(run.positions.len(), 30);
	}

	#[test]
	fn exhausted_budget_still_returns_every_position() {
		let els = elements(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
		let engine = LayoutEngine::new(LayoutConfig {
			max_iterations: 1,
			..LayoutConfig::default()
		});
		let run = engine
			.simulate(&els.nodes, &els.edges, None, Viewport::default(), &CancelToken::new())
			.unwrap();

		assert_eq!(run.iterations, 1);
		assert!(!run.converged);
		assert_eq!(run.positions.len(), 3);
	}

	#[test]
	fn cancelled_layout_publishes_nothing() {
		let els = elements(&["a", "b"], &[("a", "b")]);
		let cancel = CancelToken::new();
		cancel.clone().cancel();

		let run = LayoutEngine::default().simulate(
			&els.nodes,
			&els.edges,
			None,
			Viewport::default(),
			&cancel,
		);
		assert!(run.is_none());
	}

	#[test]
	fn previous_positions_seed_the_simulation() {
		let els = elements(&["a", "b"], &[]);
		let previous: Positions = [
			("a".to_string(), Point::new(100.0, 300.0)),
			("b".to_string(), Point::new(100.0, 300.0)),
		]
		.into_iter()
		.collect();
		let engine = LayoutEngine::default();
		let viewport = Viewport::default();
		let first = engine.layout(&els.nodes, &els.edges, Some(&previous), viewport);
		let second = engine.layout(&els.nodes, &els.edges, Some(&previous), viewport);

		assert!(first["a"].distance(&first["b"]) > 40.0);
		assert!(first["a"].distance(&second["a"]) < TOLERANCE);
	}

	#[test]
	fn breadth_first_order_keeps_components_together() {
		let order = breadth_first_order(5, &[(0, 3), (3, 4), (1, 2)]);
		assert_eq!(order, vec![0, 3, 4, 1, 2]);
	}

	#[test]
	fn config_fills_missing_fields_with_defaults() {
		let config: LayoutConfig =
			serde_json::from_str(r#"{"ideal_edge_length": 150.0, "padding": 10.0}"#).unwrap();

		assert_eq!(config.ideal_edge_length, 150.0);
		assert_eq!(config.padding, 10.0);
		assert_eq!(config.max_iterations, LayoutConfig::default().max_iterations);
		assert_eq!(config.gravity, LayoutConfig::default().gravity);
	}
}
