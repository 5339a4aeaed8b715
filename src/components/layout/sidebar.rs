use leptos::prelude::*;
use leptos_router::hooks::use_location;

const MENU_ITEMS: &[(&str, &str)] = &[
	("/", "Dashboard"),
	("/workstreams", "Workstreams"),
	("/milestones", "Milestones"),
	("/risks-issues", "Risks & Issues"),
	("/dependencies", "Dependencies"),
	("/chat", "AI Assistant"),
];

/// Collapsible navigation sidebar with active-route highlighting.
///
/// Plain anchors are enough here; the surrounding `Router` intercepts
/// same-origin clicks for client-side navigation.
#[component]
pub fn Sidebar(collapsed: RwSignal<bool>) -> impl IntoView {
	let pathname = use_location().pathname;

	view! {
		<div class=move || if collapsed.get() { "sidebar collapsed" } else { "sidebar" }>
			<div class="sidebar-brand">
				<span class="brand-mark">"PM"</span>
				<Show when=move || !collapsed.get()>
					<span class="brand-name">"Dashboard"</span>
				</Show>
			</div>

			<nav class="sidebar-nav">
				<ul>
					{MENU_ITEMS
						.iter()
						.map(|&(path, label)| {
							view! {
								<li>
									<a
										href=path
										class=move || {
											if pathname.get() == path {
												"nav-link active"
											} else {
												"nav-link"
											}
										}
									>
										{move || {
											if collapsed.get() {
												label.chars().take(1).collect::<String>()
											} else {
												label.to_string()
											}
										}}
									</a>
								</li>
							}
						})
						.collect_view()}
				</ul>
			</nav>

			<button class="sidebar-toggle" on:click=move |_| collapsed.update(|c| *c = !*c)>
				{move || if collapsed.get() { ">" } else { "< Collapse" }}
			</button>
		</div>
	}
}
