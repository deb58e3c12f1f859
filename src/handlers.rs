use actix_web::http::header::ContentType;
use actix_web::{get, post, web, HttpResponse, Responder};
use log::{error, info};
use crate::AppState;
use crate::errors::ForecastError;
use crate::manager_forecast::{weekly_forecast, ForecastQuery};
use crate::render::page;

#[get("/")]
async fn index() -> impl Responder {
    html(page(&ForecastQuery::default(), None, None))
}

#[post("/")]
async fn forecast(form: web::Form<ForecastQuery>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", form);
    let query = form.into_inner();

    match weekly_forecast(&data.geocoder, &data.nws, &query, data.max_days).await {
        Ok(forecast) => html(page(&query, Some(&forecast), None)),
        Err(e) => {
            match &e {
                ForecastError::Upstream(_) => error!("failed to get forecast: {}", e),
                _ => info!("rejected forecast request: {}", e),
            }
            html(page(&query, None, Some(&e.user_message())))
        }
    }
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}
