use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::dashboard::StatusCard;
use crate::components::dependency_graph::{DependencyGraphCanvas, GraphData};
use crate::components::layout::MainLayout;
use crate::types::{Dependency, Workstream, workstream_name};

fn dependency_badge_class(status: &str) -> &'static str {
	match status {
		"met" => "badge badge-green",
		"pending" => "badge badge-amber",
		"at_risk" => "badge badge-red",
		_ => "badge badge-neutral",
	}
}

fn dependency_badge_label(status: &str) -> &'static str {
	match status {
		"met" => "Met",
		"pending" => "Pending",
		"at_risk" => "At Risk",
		_ => "Unknown",
	}
}

/// Dependency overview: summary cards, the graph, and a table with resolved
/// workstream names.
#[component]
pub fn DependenciesPage() -> impl IntoView {
	let (dependencies, set_dependencies) = signal(Vec::<Dependency>::new());
	let (workstreams, set_workstreams) = signal(Vec::<Workstream>::new());

	spawn_local(async move {
		set_workstreams.set(api::workstreams_or_mock().await);
		set_dependencies.set(api::dependencies_or_mock().await);
	});

	let count_by = move |status: &'static str| {
		Signal::derive(move || {
			dependencies
				.get()
				.iter()
				.filter(|dep| dep.status == status)
				.count()
		})
	};
	let total = Signal::derive(move || dependencies.get().len());
	let graph = Signal::derive(move || {
		GraphData::from_entities(&workstreams.get(), &dependencies.get())
	});

	view! {
		<MainLayout title="Dependencies" subtitle="Cross-Workstream Dependencies">
			<div class="card-grid">
				<StatusCard title="Total Dependencies" count=total />
				<StatusCard title="Met" count=count_by("met") status="green" />
				<StatusCard title="Pending" count=count_by("pending") status="amber" />
				<StatusCard title="At Risk" count=count_by("at_risk") status="red" />
			</div>

			<section>
				<h2>"Workstream Dependencies"</h2>
				<div class="panel graph-panel">
					<DependencyGraphCanvas data=graph />
				</div>
			</section>

			<section>
				<h2>"Dependency Details"</h2>
				<div class="panel">
					<table class="data-table">
						<thead>
							<tr>
								<th>"Source"</th>
								<th>"Target"</th>
								<th>"Description"</th>
								<th>"Status"</th>
							</tr>
						</thead>
						<tbody>
							{move || {
								let workstreams = workstreams.get();
								dependencies
									.get()
									.into_iter()
									.map(|dep| {
										let source = workstream_name(
												&workstreams,
												&dep.source_workstream_id,
											)
											.to_string();
										let target = workstream_name(
												&workstreams,
												&dep.target_workstream_id,
											)
											.to_string();
										view! {
											<tr>
												<td>{source}</td>
												<td>{target}</td>
												<td>{dep.description}</td>
												<td>
													<span class=dependency_badge_class(
														&dep.status,
													)>
														{dependency_badge_label(&dep.status)}
													</span>
												</td>
											</tr>
										}
									})
									.collect_view()
							}}
						</tbody>
					</table>
				</div>
			</section>
		</MainLayout>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dependency_badges_and_labels() {
		assert_eq!(dependency_badge_class("met"), "badge badge-green");
		assert_eq!(dependency_badge_class("pending"), "badge badge-amber");
		assert_eq!(dependency_badge_class("at_risk"), "badge badge-red");
		assert_eq!(dependency_badge_class("nope"), "badge badge-neutral");
		assert_eq!(dependency_badge_label("met"), "Met");
		assert_eq!(dependency_badge_label("at_risk"), "At Risk");
		assert_eq!(dependency_badge_label("nope"), "Unknown");
	}
}
