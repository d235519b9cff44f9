mod app;

fn main() {
    // RUST_LOG controls verbosity, e.g. RUST_LOG=lumen_data=debug
    env_logger::init();
    log::info!("Starting Lumen");

    app::app_main();
}
