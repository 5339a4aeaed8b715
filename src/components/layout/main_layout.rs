use leptos::prelude::*;

use super::header::Header;
use super::sidebar::Sidebar;

/// Page shell: sidebar on the left, header and scrolling content on the right.
#[component]
pub fn MainLayout(
	#[prop(into)] title: String,
	#[prop(optional, into)] subtitle: String,
	children: Children,
) -> impl IntoView {
	let collapsed = RwSignal::new(false);

	view! {
		<div class="app-shell">
			<Sidebar collapsed=collapsed />
			<div class=move || if collapsed.get() { "app-main collapsed" } else { "app-main" }>
				<Header title=title subtitle=subtitle />
				<main class="app-content">{children()}</main>
			</div>
		</div>
	}
}
