use crate::catalog::{CatalogRepository, StaticCatalog};
use crate::configuration::Settings;
use crate::mail_dispatch::MailDispatcher;
use crate::routes::*;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let dispatcher = MailDispatcher::from_settings(&configuration.email_client)?;
        if dispatcher.is_demo() {
            tracing::warn!("Mail relay credentials are not configured, running in demo mode");
        }
        let catalog: Arc<dyn CatalogRepository> = Arc::new(StaticCatalog::default());

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, dispatcher, catalog)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    dispatcher: MailDispatcher,
    catalog: Arc<dyn CatalogRepository>,
) -> Result<Server, std::io::Error> {
    let dispatcher = web::Data::new(dispatcher);
    let catalog: web::Data<dyn CatalogRepository> = web::Data::from(catalog);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(dispatcher.clone())
            .app_data(catalog.clone())
            .service(health_check)
            .service(submit_contact)
            .service(list_projects)
            .service(get_project)
            .service(list_skills)
            .service(get_skill_category)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
