use leptos::prelude::*;

/// Page header with a title and an optional subtitle.
#[component]
pub fn Header(
	#[prop(into)] title: String,
	#[prop(optional, into)] subtitle: String,
) -> impl IntoView {
	view! {
		<div class="page-header">
			<h1>{title}</h1>
			<Show when={
				let subtitle = subtitle.clone();
				move || !subtitle.is_empty()
			}>
				<p class="page-subtitle">{subtitle.clone()}</p>
			</Show>
		</div>
	}
}
