use jobtrail_api::Application;
use jobtrail_infra::{setup_context, Config, JobTrailContext};
use jobtrail_sdk::JobTrailSDK;

pub struct TestApp {
    pub config: Config,
    pub ctx: JobTrailContext,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, JobTrailSDK, String) {
    let mut ctx = setup_context();
    ctx.config.port = 0; // Random port

    let config = ctx.config.clone();
    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { config, ctx };
    let sdk = JobTrailSDK::new(address.clone());
    (app, sdk, address)
}
