// Shared test helpers: a mock upstream and an API served on an ephemeral port.

use httptest::Server;
use tokio::net::TcpListener;

use snap_profile::{build_router, ApiState, Config};

/// Config whose URL templates point at the mock upstream.
pub fn config_for(upstream: &Server) -> Config {
    let base = format!("http://{}", upstream.addr());
    Config {
        owner: "@tester".to_string(),
        profile_url_template: format!("{}/add/{{username}}", base),
        story_url_template: format!("{}/@{{username}}", base),
        profile_timeout_secs: 2,
        story_timeout_secs: 2,
        check_timeout_secs: 2,
        ..Default::default()
    }
}

/// Serves the API for `config` on 127.0.0.1 and returns its base URL.
pub async fn spawn_api(config: Config) -> String {
    let state = ApiState::new(config).expect("API state should initialize");
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("listener has an address");
    tokio::spawn(async move {
        axum::serve(listener, build_router(state))
            .await
            .expect("API server failed");
    });
    format!("http://{}", addr)
}

/// GETs `path` from the API and decodes the JSON body.
pub async fn get_json(base: &str, path: &str) -> serde_json::Value {
    let body = reqwest::get(format!("{}{}", base, path))
        .await
        .expect("API request failed")
        .text()
        .await
        .expect("API response body unreadable");
    serde_json::from_str(&body).expect("API response is not JSON")
}
