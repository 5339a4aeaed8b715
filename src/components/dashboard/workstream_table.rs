use leptos::prelude::*;

use crate::types::Workstream;

/// Badge class for a red/amber/green workstream status, neutral otherwise.
pub fn status_badge_class(status: &str) -> &'static str {
	match status {
		"red" => "badge badge-red",
		"amber" => "badge badge-amber",
		"green" => "badge badge-green",
		_ => "badge badge-neutral",
	}
}

/// Table of workstreams with status badges.
#[component]
pub fn WorkstreamStatusTable(#[prop(into)] workstreams: Signal<Vec<Workstream>>) -> impl IntoView {
	view! {
		<div class="panel">
			<table class="data-table">
				<thead>
					<tr>
						<th>"Name"</th>
						<th>"Lead"</th>
						<th>"Status"</th>
						<th>"Last Updated"</th>
					</tr>
				</thead>
				<tbody>
					{move || {
						workstreams
							.get()
							.into_iter()
							.map(|ws| {
								view! {
									<tr>
										<td>{ws.name}</td>
										<td>{ws.lead}</td>
										<td>
											<span class=status_badge_class(&ws.status)>
												{ws.status.clone()}
											</span>
										</td>
										<td>{ws.last_updated}</td>
									</tr>
								}
							})
							.collect_view()
					}}
				</tbody>
			</table>
		</div>
	}
}
