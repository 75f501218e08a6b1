pub mod components;
pub mod config;
pub mod guard;
pub mod pages;
pub mod router;
pub mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

/// Browser entry point: installs logging, resolves the router base and
/// mounts the application.
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("console logger already set: {}", err).into());
    }
    log::info!("Starting Agri Admin frontend (wasm)");

    leptos::spawn_local(async move {
        let base = config::init().await;
        log::info!("Runtime config initialized, router base {}", base);
        router::mount_app();
    });
}
