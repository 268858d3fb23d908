//! Graph model to render-ready elements.

use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::types::{Elements, Entity, Graph, Relation, VisualEdge, VisualNode};

const PALETTE: &[(&str, &str)] = &[
	("user", "#4CAF50"),
	("environment", "#2196F3"),
	("project", "#FF9800"),
	("tool", "#9C27B0"),
	("concept", "#F44336"),
];

/// Color used for any entity type missing from the palette.
pub const DEFAULT_COLOR: &str = "#607D8B";

/// How edge ids are synthesized, since relations carry no id of their own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeIdStrategy {
	/// `edge-<index>` by position in `Graph::relations`.
	#[default]
	Positional,
	/// `edge-<hash>` of `(from, to, relationType, occurrence)`, stable under reordering.
	ContentHash,
}

/// Palette color for an entity type. Case-insensitive and total.
pub fn color_for_type(entity_type: &str) -> &'static str {
	let key = entity_type.to_lowercase();
	PALETTE
		.iter()
		.find(|(name, _)| *name == key)
		.map(|&(_, color)| color)
		.unwrap_or(DEFAULT_COLOR)
}

/// Transform with positional edge ids.
pub fn transform(graph: &Graph) -> Elements {
	transform_with(graph, EdgeIdStrategy::Positional)
}

/// Map a graph snapshot to nodes and edges.
///
/// Duplicate entity names resolve last-write-wins, keeping the slot of the first
/// occurrence. Relations whose endpoints are not entities are dropped.
pub fn transform_with(graph: &Graph, strategy: EdgeIdStrategy) -> Elements {
	let entities = dedup_entities(&graph.entities);
	let known: HashSet<&str> = entities.iter().map(|e| e.name.as_str()).collect();

	let nodes = entities
		.iter()
		.map(|entity| VisualNode {
			id: entity.name.clone(),
			label: entity.name.clone(),
			entity_type: entity.entity_type.clone(),
			color: color_for_type(&entity.entity_type),
			position: None,
		})
		.collect();

	let mut occurrences: HashMap<&Relation, usize> = HashMap::new();
	let mut edges = Vec::with_capacity(graph.relations.len());
	for (index, relation) in graph.relations.iter().enumerate() {
		let occurrence = occurrences.entry(relation).or_insert(0);
		let id = match strategy {
			EdgeIdStrategy::Positional => format!("edge-{index}"),
			EdgeIdStrategy::ContentHash => content_edge_id(relation, *occurrence),
		};
		*occurrence += 1;

		if !known.contains(relation.from.as_str()) || !known.contains(relation.to.as_str()) {
			warn!(
				"dropping relation {} -[{}]-> {}: unknown endpoint",
				relation.from, relation.relation_type, relation.to
			);
			continue;
		}
		edges.push(VisualEdge {
			id,
			source: relation.from.clone(),
			target: relation.to.clone(),
			label: relation.relation_type.clone(),
		});
	}

	let elements = Elements { nodes, edges };
	debug!(
		"transformed graph into {} nodes, {} edges",
		elements.nodes.len(),
		elements.edges.len()
	);
	elements
}

fn dedup_entities(entities: &[Entity]) -> Vec<&Entity> {
	let mut slots: HashMap<&str, usize> = HashMap::new();
	let mut kept: Vec<&Entity> = Vec::with_capacity(entities.len());
	for entity in entities {
		match slots.get(entity.name.as_str()) {
			Some(&slot) => {
				warn!("duplicate entity {:?}, keeping the last definition", entity.name);
				kept[slot] = entity;
			}
			None => {
				slots.insert(entity.name.as_str(), kept.len());
				kept.push(entity);
			}
		}
	}
	kept
}

fn content_edge_id(relation: &Relation, occurrence: usize) -> String {
	let mut hasher = DefaultHasher::new();
	relation.from.hash(&mut hasher);
	relation.to.hash(&mut hasher);
	relation.relation_type.hash(&mut hasher);
	occurrence.hash(&mut hasher);
	format!("edge-{:016x}", hasher.finish())
}
