//! Trunk entry point. Builds for wasm32 only; the host target exists for
//! `cargo test` over the pure modules.

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(mybookspace::app::App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {}
