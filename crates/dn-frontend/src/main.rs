//! Day/Night Switch sample entry point

fn main() -> eframe::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "daynight=debug,dn_frontend=debug,dn_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Day/Night Switch sample");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 640.0])
            .with_min_inner_size([320.0, 400.0])
            .with_title("Day/Night Switch"),
        ..Default::default()
    };

    eframe::run_native(
        "daynight",
        native_options,
        Box::new(|cc| Ok(Box::new(dn_frontend::DayNightApp::new(cc)))),
    )
}
