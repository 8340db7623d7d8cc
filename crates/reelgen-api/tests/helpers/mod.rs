use axum_test::TestServer;
use reelgen_api::setup::initialize_app;
use reelgen_core::Config;
use tempfile::TempDir;

pub struct TestApp {
    pub server: TestServer,
    pub config: Config,
    staging_dir: TempDir,
}

impl TestApp {
    /// Number of files currently sitting in the staging directory.
    pub fn staging_entries(&self) -> usize {
        std::fs::read_dir(self.staging_dir.path())
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}

pub async fn setup_test_app() -> TestApp {
    let staging_dir = TempDir::new().expect("Failed to create temp staging dir");

    let config = Config {
        staging_dir: staging_dir.path().to_string_lossy().to_string(),
        ..Config::default()
    };

    let (_state, router) = initialize_app(config.clone())
        .await
        .expect("Failed to initialize app");

    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        config,
        staging_dir,
    }
}
