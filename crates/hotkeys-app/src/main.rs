//! Native entry point: prints the shortcut cheat sheet for a page context.

#[cfg(feature = "native")]
fn main() {
    env_logger::init();

    let context = match std::env::args().nth(1) {
        Some(path) => match hotkeys_app::load_context(&path) {
            Ok(context) => {
                log::info!("Loaded page context from {}", path);
                context
            }
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => hotkeys_core::Context::default(),
    };

    hotkeys_app::ShortcutRegistry::print_all(&context);
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
