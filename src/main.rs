use dotenvy::dotenv;

use student_portal::config::server::ServerConfig;
use student_portal::logging::init_tracing;
use student_portal::router::init_router;
use student_portal::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let state = init_app_state().await;
    let app = init_router(state);

    let server_config = ServerConfig::from_env();
    let listener = tokio::net::TcpListener::bind(server_config.addr())
        .await
        .expect("Failed to bind listen address");
    println!("🚀 Server running on http://{}", server_config.addr());
    println!(
        "📚 Swagger UI available at http://{}/swagger-ui",
        server_config.addr()
    );
    axum::serve(listener, app).await.expect("Server failed");
}
