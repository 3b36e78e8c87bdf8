mod config;
mod data;
mod services;
mod view_model;

use crate::config::Config;
use crate::data::{ClientDao, Database, LogDao, Repository};
use crate::view_model::view_model_factory;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{debug, info};
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::from_env();
    let url = config.url();

    let database = Database::open(&config.db_path).map_err(std::io::Error::other)?;
    let repository = Repository::new(ClientDao::new(database.clone()), LogDao::new(database));

    let new_view_model = view_model_factory(repository.clone());
    let view_model = web::Data::new(new_view_model());
    let repository = web::Data::new(repository);

    // Log every change of the client list.
    let mut clients = view_model.subscribe();
    tokio::spawn(async move {
        while clients.changed().await.is_ok() {
            debug!("client list now holds {} entries", clients.borrow().len());
        }
    });

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    info!(
        "Server running at {} (database: {})",
        url,
        config.db_path.display()
    );

    let server_view_model = view_model.clone();
    let result = HttpServer::new(move || {
        App::new()
            .app_data(server_view_model.clone())
            .app_data(repository.clone())
            .service(services::session::configure_routes())
            .service(services::clients::configure_routes())
            .service(services::logs::configure_routes())
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await;

    view_model.close();
    result
}
