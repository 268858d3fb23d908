use leptos::prelude::*;
use log::error;

use crate::components::knowledge_graph::{Entity, Graph, KnowledgeGraphCanvas, color_for_type};

/// Sample memory graph in the shape the backend serves it.
const SAMPLE_GRAPH: &str = r#"{
	"entities": [
		{
			"name": "u1",
			"entityType": "user",
			"observations": ["prefers dark mode", "works remotely"]
		},
		{"name": "proj1", "entityType": "project", "observations": ["started"]},
		{"name": "proj2", "entityType": "Project", "observations": []},
		{"name": "laptop", "entityType": "environment", "observations": ["linux"]},
		{"name": "cargo", "entityType": "tool", "observations": ["build system"]},
		{"name": "ownership", "entityType": "concept", "observations": ["borrow checker"]},
		{"name": "notes", "entityType": "document", "observations": []}
	],
	"relations": [
		{"from": "u1", "to": "proj1", "relationType": "owns"},
		{"from": "u1", "to": "proj2", "relationType": "contributes_to"},
		{"from": "proj1", "to": "cargo", "relationType": "uses"},
		{"from": "proj2", "to": "cargo", "relationType": "uses"},
		{"from": "u1", "to": "laptop", "relationType": "works_on"},
		{"from": "proj1", "to": "ownership", "relationType": "relies_on"}
	]
}"#;

fn sample_graph() -> Graph {
	Graph::from_json(SAMPLE_GRAPH).unwrap_or_else(|err| {
		error!("sample graph is malformed: {err}");
		Graph::default()
	})
}

/// Details of the most recently tapped entity.
#[component]
fn EntityPanel(#[prop(into)] entity: Signal<Option<Entity>>) -> impl IntoView {
	move || match entity.get() {
		None => view! { <p class="hint">"Tap a node to see its details"</p> }.into_any(),
		Some(entity) => {
			let color = color_for_type(&entity.entity_type);
			let observations = if entity.observations.is_empty() {
				view! { <p class="hint">"No observations"</p> }.into_any()
			} else {
				view! {
					<ul>
						{entity
							.observations
							.into_iter()
							.map(|obs| view! { <li>{obs}</li> })
							.collect_view()}
					</ul>
				}
				.into_any()
			};
			view! {
				<h2>{entity.name}</h2>
				<span class="chip" style=format!("background-color: {color}")>
					{entity.entity_type}
				</span>
				<h3>"Observations"</h3>
				{observations}
			}
			.into_any()
		}
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let graph = RwSignal::new(sample_graph());
	let tapped = RwSignal::new(None::<String>);

	let selected_entity = Signal::derive(move || {
		let name = tapped.get()?;
		graph.with(|g| g.entity(&name).cloned())
	});
	let summary = move || {
		if graph.with(Graph::is_empty) {
			return "No entities".to_string();
		}
		let s = graph.with(Graph::summary);
		format!(
			"{} entities, {} relations, types: {}",
			s.entity_count,
			s.relation_count,
			s.entity_types.join(", ")
		)
	};
	let on_node_tap = Callback::new(move |name: String| tapped.set(Some(name)));
	let reload = move |_| {
		tapped.set(None);
		graph.set(sample_graph());
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="graph-page">
				<div class="graph-area">
					<KnowledgeGraphCanvas data=graph on_node_tap=on_node_tap />
					<div class="graph-overlay">
						<h1>"Knowledge Graph"</h1>
						<p class="subtitle">{summary}</p>
						<button on:click=reload>"Reload"</button>
					</div>
				</div>
				<aside class="entity-panel">
					<EntityPanel entity=selected_entity />
				</aside>
			</div>
		</ErrorBoundary>
	}
}
