use random_service::config::Config;
use random_service::startup::Application;
use std::time::Duration;

/// Spawn the application on a random port and return the port number.
pub async fn spawn_app() -> u16 {
    std::env::set_var("PORT", "0"); // Random port

    let config = Config::load().expect("Failed to load config");
    let app = Application::build(config)
        .await
        .expect("Failed to build application");

    let port = app.port();

    // Spawn the server in the background
    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    port
}
