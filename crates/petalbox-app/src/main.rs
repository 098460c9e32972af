//! Main application entry point.

fn main() {
    env_logger::init();
    log::info!("Starting petalbox");

    if let Err(err) = petalbox_app::run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}
