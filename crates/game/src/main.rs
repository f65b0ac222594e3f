use tracing::error;

mod app;

fn main() {
    let app::AppWiring { config, scenes } = app::build_app();

    if let Err(err) = engine::run_app(config, scenes) {
        error!(error = %err, "startup_failed");
        std::process::exit(1);
    }
}
