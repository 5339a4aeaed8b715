use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::layout::MainLayout;
use crate::types::{Issue, Risk, Workstream, workstream_name};

fn risk_badge_class(status: &str) -> &'static str {
	match status {
		"open" => "badge badge-red",
		"mitigated" => "badge badge-amber",
		"closed" => "badge badge-green",
		_ => "badge badge-neutral",
	}
}

fn issue_badge_class(status: &str) -> &'static str {
	match status {
		"open" => "badge badge-red",
		"in_progress" => "badge badge-amber",
		"resolved" => "badge badge-green",
		_ => "badge badge-neutral",
	}
}

fn severity_badge_class(level: &str) -> &'static str {
	match level {
		"high" => "badge badge-red",
		"medium" => "badge badge-amber",
		"low" => "badge badge-green",
		_ => "badge badge-neutral",
	}
}

/// Risks and issues side by side, each with status badges.
#[component]
pub fn RisksIssuesPage() -> impl IntoView {
	let (risks, set_risks) = signal(Vec::<Risk>::new());
	let (issues, set_issues) = signal(Vec::<Issue>::new());
	let (workstreams, set_workstreams) = signal(Vec::<Workstream>::new());

	spawn_local(async move {
		set_workstreams.set(api::workstreams_or_mock().await);
		set_risks.set(api::risks_or_mock().await);
		set_issues.set(api::issues_or_mock().await);
	});

	view! {
		<MainLayout title="Risks & Issues" subtitle="Active Risks and Open Issues">
			<section>
				<h2>"Risks"</h2>
				<div class="panel">
					<table class="data-table">
						<thead>
							<tr>
								<th>"Risk"</th>
								<th>"Workstream"</th>
								<th>"Impact"</th>
								<th>"Likelihood"</th>
								<th>"Mitigation"</th>
								<th>"Status"</th>
							</tr>
						</thead>
						<tbody>
							{move || {
								let workstreams = workstreams.get();
								risks
									.get()
									.into_iter()
									.map(|risk| {
										let ws_name =
											workstream_name(&workstreams, &risk.workstream_id)
												.to_string();
										view! {
											<tr>
												<td>
													<div class="cell-title">{risk.title}</div>
													<div class="cell-detail">
														{risk.description}
													</div>
												</td>
												<td>{ws_name}</td>
												<td>
													<span class=severity_badge_class(
														&risk.impact,
													)>{risk.impact.clone()}</span>
												</td>
												<td>
													<span class=severity_badge_class(
														&risk.likelihood,
													)>{risk.likelihood.clone()}</span>
												</td>
												<td>{risk.mitigation_plan}</td>
												<td>
													<span class=risk_badge_class(&risk.status)>
														{risk.status.clone()}
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

			<section>
				<h2>"Issues"</h2>
				<div class="panel">
					<table class="data-table">
						<thead>
							<tr>
								<th>"Issue"</th>
								<th>"Workstream"</th>
								<th>"Severity"</th>
								<th>"Assigned To"</th>
								<th>"Status"</th>
							</tr>
						</thead>
						<tbody>
							{move || {
								let workstreams = workstreams.get();
								issues
									.get()
									.into_iter()
									.map(|issue| {
										let ws_name =
											workstream_name(&workstreams, &issue.workstream_id)
												.to_string();
										view! {
											<tr>
												<td>
													<div class="cell-title">{issue.title}</div>
													<div class="cell-detail">
														{issue.description}
													</div>
												</td>
												<td>{ws_name}</td>
												<td>
													<span class=severity_badge_class(
														&issue.severity,
													)>{issue.severity.clone()}</span>
												</td>
												<td>{issue.assigned_to}</td>
												<td>
													<span class=issue_badge_class(&issue.status)>
														{issue.status.clone()}
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
	fn risk_badges() {
		assert_eq!(risk_badge_class("open"), "badge badge-red");
		assert_eq!(risk_badge_class("mitigated"), "badge badge-amber");
		assert_eq!(risk_badge_class("closed"), "badge badge-green");
		assert_eq!(risk_badge_class("?"), "badge badge-neutral");
	}

	#[test]
	fn issue_badges() {
		assert_eq!(issue_badge_class("open"), "badge badge-red");
		assert_eq!(issue_badge_class("in_progress"), "badge badge-amber");
		assert_eq!(issue_badge_class("resolved"), "badge badge-green");
	}

	#[test]
	fn severity_badges() {
		assert_eq!(severity_badge_class("high"), "badge badge-red");
		assert_eq!(severity_badge_class("medium"), "badge badge-amber");
		assert_eq!(severity_badge_class("low"), "badge badge-green");
	}
}
