use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::dashboard::{StatusCard, WorkstreamStatusTable};
use crate::components::layout::MainLayout;
use crate::types::Workstream;

/// All workstreams with status summary cards and the status table.
#[component]
pub fn WorkstreamsPage() -> impl IntoView {
	let (workstreams, set_workstreams) = signal(Vec::<Workstream>::new());

	spawn_local(async move {
		set_workstreams.set(api::workstreams_or_mock().await);
	});

	let count_by = move |status: &'static str| {
		Signal::derive(move || {
			workstreams
				.get()
				.iter()
				.filter(|ws| ws.status == status)
				.count()
		})
	};
	let total = Signal::derive(move || workstreams.get().len());

	view! {
		<MainLayout title="Workstreams" subtitle="All Active Project Workstreams">
			<div class="card-grid">
				<StatusCard title="Total Workstreams" count=total />
				<StatusCard title="Red Status" count=count_by("red") status="red" />
				<StatusCard title="Amber Status" count=count_by("amber") status="amber" />
				<StatusCard title="Green Status" count=count_by("green") status="green" />
			</div>

			<WorkstreamStatusTable workstreams=workstreams />
		</MainLayout>
	}
}
