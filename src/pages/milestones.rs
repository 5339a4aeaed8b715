use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::layout::MainLayout;
use crate::types::{Milestone, Workstream, workstream_name};

fn milestone_badge_class(status: &str) -> &'static str {
	match status {
		"completed" => "badge badge-green",
		"pending" => "badge badge-amber",
		"at_risk" | "delayed" => "badge badge-red",
		_ => "badge badge-neutral",
	}
}

/// Milestone table across all workstreams.
#[component]
pub fn MilestonesPage() -> impl IntoView {
	let (milestones, set_milestones) = signal(Vec::<Milestone>::new());
	let (workstreams, set_workstreams) = signal(Vec::<Workstream>::new());

	spawn_local(async move {
		set_workstreams.set(api::workstreams_or_mock().await);
		set_milestones.set(api::milestones_or_mock().await);
	});

	view! {
		<MainLayout title="Milestones" subtitle="Key Deliverables Across Workstreams">
			<div class="panel">
				<table class="data-table">
					<thead>
						<tr>
							<th>"Milestone"</th>
							<th>"Workstream"</th>
							<th>"Due Date"</th>
							<th>"Status"</th>
						</tr>
					</thead>
					<tbody>
						{move || {
							let workstreams = workstreams.get();
							milestones
								.get()
								.into_iter()
								.map(|ms| {
									let ws_name =
										workstream_name(&workstreams, &ms.workstream_id)
											.to_string();
									view! {
										<tr>
											<td>
												<div class="cell-title">{ms.title}</div>
												<div class="cell-detail">{ms.description}</div>
											</td>
											<td>{ws_name}</td>
											<td>{ms.due_date}</td>
											<td>
												<span class=milestone_badge_class(&ms.status)>
													{ms.status.clone()}
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
		</MainLayout>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn badge_class_by_milestone_status() {
		assert_eq!(milestone_badge_class("completed"), "badge badge-green");
		assert_eq!(milestone_badge_class("pending"), "badge badge-amber");
		assert_eq!(milestone_badge_class("at_risk"), "badge badge-red");
		assert_eq!(milestone_badge_class("delayed"), "badge badge-red");
		assert_eq!(milestone_badge_class("someday"), "badge badge-neutral");
	}
}
