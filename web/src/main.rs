use leptos::prelude::*;
use noughts_web::app::App;

fn main() {
    // Initialize logging

    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    // Mount the Leptos app to the body
    mount_to_body(App);
}
