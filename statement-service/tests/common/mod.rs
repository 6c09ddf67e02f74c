use statement_service::config::{ExtractorBackend, StatementConfig, TranscriberProvider};
use statement_service::startup::Application;

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// Spawns the app with the mock transcriber (canned statement) and the
    /// UTF-8 extractor, on a random port.
    pub async fn spawn() -> Self {
        Self::spawn_with_config(|_| {}).await
    }

    /// Spawns the app with the mock transcriber returning `response`.
    pub async fn spawn_with_mock_response(response: &str) -> Self {
        let response = response.to_string();
        Self::spawn_with_config(move |config| {
            config.transcriber.mock_response = Some(response);
        })
        .await
    }

    async fn spawn_with_config(customize: impl FnOnce(&mut StatementConfig)) -> Self {
        let mut config = StatementConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.transcriber.provider = TranscriberProvider::Mock;
        config.transcriber.mock_response = None;
        config.extractor.backend = ExtractorBackend::Utf8;
        customize(&mut config);

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint.
        let client = reqwest::Client::new();
        let health_url = format!("http://127.0.0.1:{}/health", port);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address }
    }
}
