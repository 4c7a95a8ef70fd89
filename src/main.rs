mod app;
mod config;
mod core;
mod theme;
mod ui;

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("DramaBox starting...");

    // Run the Iced application
    iced::application(app::App::new, app::App::update, app::App::view)
        .subscription(app::App::subscription)
        .theme(app::App::theme)
        .title(app::App::title)
        .window_size((1280.0, 800.0))
        .antialiasing(true)
        .run()
}
