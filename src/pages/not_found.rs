use leptos::prelude::*;
use leptos_router::components::A;

/// 404 fallback page.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h1>"404"</h1>
			<p>"Oops! Page not found"</p>
			<A href="/">"Return to Dashboard"</A>
		</div>
	}
}
