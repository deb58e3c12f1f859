mod errors;
mod logging;
mod initialization;
mod handlers;
mod models;
mod daily_aggregator;
mod temperature;
mod render;
mod manager_forecast;
mod manager_geocode;
mod manager_nws;

use actix_web::{web, App, HttpServer};
use log::info;
use crate::errors::UnrecoverableError;
use crate::initialization::config;
use crate::manager_geocode::Geocoder;
use crate::manager_nws::NWS;

pub struct AppState {
    pub geocoder: Geocoder,
    pub nws: NWS,
    pub max_days: usize,
}

#[actix_web::main]
async fn main() -> Result<(), UnrecoverableError> {
    let config = config()?;

    let providers = &config.providers;
    let geocoder = Geocoder::new(&providers.geocode_url, &providers.user_agent, providers.timeout())?;
    let nws = NWS::new(&providers.nws_url, &providers.user_agent, providers.timeout())?;

    let state = web::Data::new(AppState {
        geocoder,
        nws,
        max_days: config.forecast.max_days,
    });

    info!("listening on {}:{}", config.web_server.bind_address, config.web_server.bind_port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(handlers::index)
            .service(handlers::forecast)
    })
        .bind((config.web_server.bind_address, config.web_server.bind_port))?
        .run()
        .await?;

    Ok(())
}
