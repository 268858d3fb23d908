use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A named, typed node of the knowledge graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity {
	/// Unique name, used as the node id.
	pub name: String,
	/// Free-form type, e.g. `user` or `project`.
	#[serde(rename = "entityType")]
	pub entity_type: String,
	/// Free-text facts recorded about the entity.
	#[serde(default)]
	pub observations: Vec<String>,
}

impl Entity {
	/// Entity with no observations.
	pub fn new(name: impl Into<String>, entity_type: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			entity_type: entity_type.into(),
			observations: Vec::new(),
		}
	}

	/// Builder-style observation list.
	pub fn with_observations<I, S>(mut self, observations: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.observations = observations.into_iter().map(Into::into).collect();
		self
	}
}

/// A directed, typed edge between two entity names.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation {
	/// Source entity name.
	pub from: String,
	/// Target entity name.
	pub to: String,
	/// Relation label, e.g. `owns`.
	#[serde(rename = "relationType")]
	pub relation_type: String,
}

impl Relation {
	/// Relation `from -> to` labelled `relation_type`.
	pub fn new(
		from: impl Into<String>,
		to: impl Into<String>,
		relation_type: impl Into<String>,
	) -> Self {
		Self {
			from: from.into(),
			to: to.into(),
			relation_type: relation_type.into(),
		}
	}
}

/// One snapshot of the knowledge graph. Always replaced wholesale.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
	/// Entities in display order.
	#[serde(default)]
	pub entities: Vec<Entity>,
	/// Relations in display order.
	#[serde(default)]
	pub relations: Vec<Relation>,
}

impl Graph {
	/// Graph from its parts.
	pub fn new(entities: Vec<Entity>, relations: Vec<Relation>) -> Self {
		Self { entities, relations }
	}

	/// Parse the `{"entities": [...], "relations": [...]}` document served by the backend.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	/// True when there is nothing to draw.
	pub fn is_empty(&self) -> bool {
		self.entities.is_empty()
	}

	/// Look up an entity by name. The last entity wins when names repeat.
	pub fn entity(&self, name: &str) -> Option<&Entity> {
		self.entities.iter().rev().find(|e| e.name == name)
	}

	/// Entity and relation counts plus distinct (lowercased) types, for legends.
	pub fn summary(&self) -> GraphSummary {
		let mut types: Vec<String> = self
			.entities
			.iter()
			.map(|e| e.entity_type.to_lowercase())
			.collect();
		types.sort();
		types.dedup();
		GraphSummary {
			entity_count: self.entities.len(),
			relation_count: self.relations.len(),
			entity_types: types,
		}
	}
}

/// Counts describing a [`Graph`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphSummary {
	/// Number of entities, duplicates included.
	pub entity_count: usize,
	/// Number of relations, dangling ones included.
	pub relation_count: usize,
	/// Sorted, deduplicated lowercase entity types.
	pub entity_types: Vec<String>,
}

/// A 2D point in layout space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

impl Point {
	/// Point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean distance to `other`.
	pub fn distance(&self, other: &Point) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Node positions keyed by node id.
pub type Positions = HashMap<String, Point>;

/// Render-ready node derived from an [`Entity`].
#[derive(Clone, Debug, PartialEq)]
pub struct VisualNode {
	/// Entity name.
	pub id: String,
	/// Text drawn next to the node.
	pub label: String,
	/// Original entity type, kept for tooltips and legends.
	pub entity_type: String,
	/// CSS color resolved from the entity type.
	pub color: &'static str,
	/// Assigned by the layout engine.
	pub position: Option<Point>,
}

/// Render-ready edge derived from a [`Relation`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisualEdge {
	/// Synthesized id, see [`EdgeIdStrategy`](super::EdgeIdStrategy).
	pub id: String,
	/// Source node id.
	pub source: String,
	/// Target node id.
	pub target: String,
	/// Relation type.
	pub label: String,
}

/// The element set produced by the transformer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Elements {
	/// Nodes in entity order.
	pub nodes: Vec<VisualNode>,
	/// Edges in relation order.
	pub edges: Vec<VisualEdge>,
}

impl Elements {
	/// True when there are no nodes.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}

/// Size of the drawing area in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
	/// Width in pixels.
	pub width: f64,
	/// Height in pixels.
	pub height: f64,
}

impl Viewport {
	/// Viewport of the given size.
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Center of the viewport.
	pub fn center(&self) -> Point {
		Point::new(self.width / 2.0, self.height / 2.0)
	}
}

impl Default for Viewport {
	fn default() -> Self {
		Self::new(800.0, 600.0)
	}
}
