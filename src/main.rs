use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use dotenv::dotenv;
use tracing::{error, info, warn};

use pledge_portal::{
    config::AppConfig,
    logging, routes,
    services::{
        card::CardRenderer,
        ledger::{Ledger, SheetsClient},
    },
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    logging::init();

    let config = AppConfig::load().context("failed to load configuration")?;

    let ledger = if config.sheets.spreadsheet_id.is_empty() {
        warn!("No spreadsheet configured; pledges will not be recorded");
        Ledger::disabled()
    } else {
        match SheetsClient::from_config(&config.sheets) {
            Ok(client) => {
                info!("Pledge ledger connected to spreadsheet {}", config.sheets.spreadsheet_id);
                Ledger::connected(client)
            }
            Err(e) => {
                error!("Failed to set up the pledge ledger: {}", e);
                Ledger::disabled()
            }
        }
    };

    let renderer = CardRenderer::new(config.assets.clone(), config.card.clone());
    let ledger = web::Data::new(ledger);
    let renderer = web::Data::new(renderer);

    let bind = (config.server.host.clone(), config.server.port);
    info!("Starting pledge portal on {}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(ledger.clone())
            .app_data(renderer.clone())
            .configure(routes::api::scoped_config)
    })
    .bind(bind)
    .context("failed to bind server address")?
    .run()
    .await
    .context("server error")
}
