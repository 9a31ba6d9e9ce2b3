use catalog_info_api::config::AppConfig;
use catalog_info_api::server;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up CATALOG_INFO_BASE_URL etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        eprintln!("configuration error: {}", e);
        std::process::exit(1);
    });

    tracing::info!(
        "Proxying OpenShift API at {}",
        config.openshift.base_url
    );

    let app = server::app(&config);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 Catalog Info API listening on http://{}", bind_addr);

    server::serve(listener, app).await.expect("server");
}
