//! Knowledge graph view: transform, layout, selection highlighting and the canvas that draws them.

mod component;
mod error;
mod highlight;
mod layout;
mod render;
mod state;
mod transform;
mod types;

pub use component::KnowledgeGraphCanvas;
pub use error::SurfaceError;
pub use highlight::{
	ElementStyle, HighlightPartition, SelectionEvent, SelectionState, highlight, transition,
};
pub use layout::{CancelToken, LayoutConfig, LayoutEngine, LayoutRun, fit_to_viewport};
pub use transform::{DEFAULT_COLOR, EdgeIdStrategy, color_for_type, transform, transform_with};
pub use types::{
	Elements, Entity, Graph, GraphSummary, Point, Positions, Relation, Viewport, VisualEdge,
	VisualNode,
};
