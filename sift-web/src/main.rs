fn configure_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::prelude::*;

        // Default to info level if RUST_LOG not set
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_line_number(true)
            .with_target(false)
            .with_file(true);

        // dioxus may have installed its own subscriber already
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init();
    }
}

fn main() {
    configure_logging();
    dioxus::launch(sift_web::App);
}
