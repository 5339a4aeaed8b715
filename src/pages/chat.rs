use leptos::prelude::*;

use crate::components::chat::ChatInterface;
use crate::components::layout::MainLayout;

/// Assistant chat page.
#[component]
pub fn ChatPage() -> impl IntoView {
	view! {
		<MainLayout title="AI Assistant" subtitle="Ask About Your Project">
			<ChatInterface />
		</MainLayout>
	}
}
