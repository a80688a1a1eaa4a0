#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(narthex::app::App);
}

// Native builds exist for `cargo test` only; there is nothing to run.
#[cfg(not(feature = "csr"))]
fn main() {}
