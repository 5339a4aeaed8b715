use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::dashboard::{SentimentChart, StatusCard, WorkstreamStatusTable};
use crate::components::dependency_graph::{DependencyGraphCanvas, GraphData};
use crate::components::layout::MainLayout;
use crate::mock;
use crate::types::{Dependency, Workstream};

/// Dashboard overview: status cards, workstream table, dependency graph and
/// the sentiment trend.
#[component]
pub fn Dashboard() -> impl IntoView {
	let (workstreams, set_workstreams) = signal(Vec::<Workstream>::new());
	let (dependencies, set_dependencies) = signal(Vec::<Dependency>::new());

	spawn_local(async move {
		set_workstreams.set(api::workstreams_or_mock().await);
		set_dependencies.set(api::dependencies_or_mock().await);
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
	let graph = Signal::derive(move || {
		GraphData::from_entities(&workstreams.get(), &dependencies.get())
	});

	view! {
		<MainLayout title="Dashboard" subtitle="Project Management Overview">
			<div class="card-grid">
				<StatusCard title="Total Workstreams" count=total />
				<StatusCard title="Red Status" count=count_by("red") status="red" />
				<StatusCard title="Amber Status" count=count_by("amber") status="amber" />
				<StatusCard title="Green Status" count=count_by("green") status="green" />
			</div>

			<div class="two-column">
				<section>
					<h2>"Workstream Status"</h2>
					<WorkstreamStatusTable workstreams=workstreams />
				</section>
				<section>
					<h2>"Dependencies Visualization"</h2>
					<div class="panel graph-panel">
						<DependencyGraphCanvas data=graph />
					</div>
				</section>
			</div>

			<section>
				<h2>"Sentiment Analysis"</h2>
				// sentiment is served per workstream; the overview shows the
				// lead workstream's trend from the sample set
				<SentimentChart sentiment=mock::sentiment() />
			</section>
		</MainLayout>
	}
}
