fn main() {
    console_error_panic_hook::set_once();
    leptos::logging::log!("starting node console");
    leptos::mount::mount_to_body(nodeconsole_dashboard_leptos::App);
}
