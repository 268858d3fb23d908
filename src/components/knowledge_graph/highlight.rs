//! Selection state machine and closed-neighborhood highlighting.

use std::collections::BTreeSet;

use super::types::{VisualEdge, VisualNode};

/// Which node, if any, the user has selected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SelectionState {
	/// Nothing selected; every element is drawn normally.
	#[default]
	Unselected,
	/// The node with this id is selected.
	Selected(String),
}

impl SelectionState {
	/// Selected node id, if any.
	pub fn selected_id(&self) -> Option<&str> {
		match self {
			SelectionState::Unselected => None,
			SelectionState::Selected(id) => Some(id.as_str()),
		}
	}
}

/// Inputs that move the selection state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
	/// Pointer tap that hit the node with this id.
	NodeTapped(String),
	/// Pointer tap that hit no node.
	CanvasTapped,
	/// Explicit deselect from the surrounding application.
	Deselect,
	/// A new graph snapshot replaced the current one.
	GraphReplaced,
}

/// Pure transition function of the selection state machine.
pub fn transition(_state: &SelectionState, event: SelectionEvent) -> SelectionState {
	match event {
		SelectionEvent::NodeTapped(id) => SelectionState::Selected(id),
		SelectionEvent::CanvasTapped | SelectionEvent::Deselect | SelectionEvent::GraphReplaced => {
			SelectionState::Unselected
		}
	}
}

/// How a single element should be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementStyle {
	/// No selection active.
	Normal,
	/// Part of the selected node's closed neighborhood.
	Highlighted,
	/// Outside the neighborhood while a selection is active.
	Dimmed,
}

/// Highlighted and dimmed element ids. Node and edge ids live in separate sets
/// since an entity may legitimately be named like a synthesized edge id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HighlightPartition {
	/// Selected node and its direct neighbors.
	pub highlighted_nodes: BTreeSet<String>,
	/// Edges incident to the selected node.
	pub highlighted_edges: BTreeSet<String>,
	/// Every other node.
	pub dimmed_nodes: BTreeSet<String>,
	/// Every other edge.
	pub dimmed_edges: BTreeSet<String>,
}

impl HighlightPartition {
	/// True when nothing is highlighted or dimmed.
	pub fn is_empty(&self) -> bool {
		self.highlighted_nodes.is_empty()
			&& self.highlighted_edges.is_empty()
			&& self.dimmed_nodes.is_empty()
			&& self.dimmed_edges.is_empty()
	}

	/// Style for the node `id`.
	pub fn node_style(&self, id: &str) -> ElementStyle {
		style_of(id, &self.highlighted_nodes, &self.dimmed_nodes)
	}

	/// Style for the edge `id`.
	pub fn edge_style(&self, id: &str) -> ElementStyle {
		style_of(id, &self.highlighted_edges, &self.dimmed_edges)
	}
}

fn style_of(id: &str, highlighted: &BTreeSet<String>, dimmed: &BTreeSet<String>) -> ElementStyle {
	if highlighted.contains(id) {
		ElementStyle::Highlighted
	} else if dimmed.contains(id) {
		ElementStyle::Dimmed
	} else {
		ElementStyle::Normal
	}
}

/// Partition the elements around `selected`.
///
/// Edge direction is ignored for neighborhood membership. A missing or stale id
/// yields an empty partition.
pub fn highlight(
	selected: Option<&str>,
	nodes: &[VisualNode],
	edges: &[VisualEdge],
) -> HighlightPartition {
	let Some(selected) = selected.filter(|id| nodes.iter().any(|n| n.id == *id)) else {
		return HighlightPartition::default();
	};

	let mut partition = HighlightPartition::default();
	partition.highlighted_nodes.insert(selected.to_string());
	for edge in edges {
		let neighbor = if edge.source == selected {
			&edge.target
		} else if edge.target == selected {
			&edge.source
		} else {
			partition.dimmed_edges.insert(edge.id.clone());
			continue;
		};
		partition.highlighted_edges.insert(edge.id.clone());
		partition.highlighted_nodes.insert(neighbor.clone());
	}
	for node in nodes {
		if !partition.highlighted_nodes.contains(&node.id) {
			partition.dimmed_nodes.insert(node.id.clone());
		}
	}
	partition
}
