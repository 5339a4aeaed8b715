//! CSR entry point: mounts the app onto the document body.

use pm_dashboard::App;

fn main() {
	pm_dashboard::init_logging();
	leptos::mount::mount_to_body(App);
}
