use leptos::prelude::*;

fn card_class(status: &str) -> &'static str {
	match status {
		"red" => "status-card red",
		"amber" => "status-card amber",
		"green" => "status-card green",
		_ => "status-card",
	}
}

/// Summary card showing a count, tinted by status.
#[component]
pub fn StatusCard(
	#[prop(into)] title: String,
	#[prop(into)] count: Signal<usize>,
	#[prop(optional)] status: &'static str,
) -> impl IntoView {
	view! {
		<div class=card_class(status)>
			<div class="status-card-title">{title}</div>
			<p class="status-card-count">{move || count.get()}</p>
		</div>
	}
}
