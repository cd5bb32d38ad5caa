mod error;
mod event;
mod notification;
mod opportunity;
mod shared;
mod status;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use jobtrail_infra::JobTrailContext;
use notification::schedule_reminders::ScheduleRemindersUseCase;
use shared::usecase::execute;
use std::net::TcpListener;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

pub use error::JobTrailError;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    event::configure_routes(cfg);
    notification::configure_routes(cfg);
    opportunity::configure_routes(cfg);
    status::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
    context: JobTrailContext,
}

impl Application {
    pub async fn new(context: JobTrailContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.clone()).await?;
        Application::start_reminder_scheduler(&context).await;

        Ok(Self {
            server,
            port,
            context,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Arms the reminders of the events that are already stored
    async fn start_reminder_scheduler(context: &JobTrailContext) {
        match execute(ScheduleRemindersUseCase {}, context).await {
            Ok(armed) => info!("Reminder scheduler started with {} armed reminders", armed),
            Err(e) => warn!("Unable to arm reminders on startup: {:?}", e),
        }
    }

    async fn configure_server(
        context: JobTrailContext,
    ) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .service(web::scope("/api/v1").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        let res = self.server.await;
        let canceled = self.context.reminders.cancel_all();
        info!("Server stopped, canceled {} reminders", canceled);
        res
    }
}
