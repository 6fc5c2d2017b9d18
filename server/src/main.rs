use std::env;
use std::sync::Arc;

use cookbook_core::Store;
use cookbook_server::{api, app, telemetry, AppState};

#[tokio::main]
async fn main() {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        let spec = api::openapi().to_pretty_json().unwrap();
        println!("{}", spec);
        return;
    }

    telemetry::init();

    // The store is process-local: every start begins from the seed dataset
    // and writes do not survive a restart.
    let store: AppState = Arc::new(Store::seeded());

    let app = app(store);

    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .unwrap();

    tracing::info!("Server listening on {}", listener.local_addr().unwrap());
    tracing::info!(
        "OpenAPI spec available at http://localhost:{}/api-docs/openapi.json",
        port
    );

    axum::serve(listener, app).await.unwrap();
}
