//! Leptos client-side app wiring and routes for the project management dashboard.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
pub mod api;
mod components;
pub mod mock;
mod pages;
pub mod types;

// Top-Level pages
use crate::pages::chat::ChatPage;
use crate::pages::dependencies::DependenciesPage;
use crate::pages::home::Dashboard;
use crate::pages::milestones::MilestonesPage;
use crate::pages::not_found::NotFound;
use crate::pages::risks_issues::RisksIssuesPage;
use crate::pages::workstreams::WorkstreamsPage;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders every dashboard page and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="Project Management Dashboard" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Dashboard />
				<Route path=path!("/workstreams") view=WorkstreamsPage />
				<Route path=path!("/milestones") view=MilestonesPage />
				<Route path=path!("/risks-issues") view=RisksIssuesPage />
				<Route path=path!("/dependencies") view=DependenciesPage />
				<Route path=path!("/chat") view=ChatPage />
			</Routes>
		</Router>
	}
}
