use actix_web::{error::JsonPayloadError, middleware, web, App, HttpRequest, HttpResponse, HttpServer};
use actix_files::Files;
use serde::Serialize;
use tracing::{info, warn};
use crate::error::ApiError;
use crate::store::ConfigStore;
use crate::timetable::{Configuration, Day, RandomPicker, Timetable, TIME_SLOTS};

/// Shared server state; the store is the only resource requests share
pub struct AppState {
    pub store: ConfigStore,
}

#[derive(Serialize)]
pub struct GenerateResponse {
    success: bool,
    timetable: Timetable,
    days: [&'static str; 5],
    time_slots: [&'static str; 7],
}

// Generate a fresh timetable from the saved configuration
async fn generate(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let config = state.store.load()?;
    let timetable = config.generate(&mut RandomPicker::thread()).map_err(|e| {
        warn!("timetable generation rejected: {}", e);
        e
    })?;

    Ok(HttpResponse::Ok().json(GenerateResponse {
        success: true,
        timetable,
        days: Day::ALL.map(Day::name),
        time_slots: TIME_SLOTS,
    }))
}

async fn get_data(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let config = state.store.load()?;
    Ok(HttpResponse::Ok().json(config))
}

async fn update_data(
    body: web::Json<Configuration>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    state.store.save(&body)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({"success": true})))
}

async fn index() -> HttpResponse {
    let html = include_str!("../templates/index.html");
    HttpResponse::Ok().content_type("text/html; charset=utf-8").body(html)
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(err.to_string()).into()
}

/// Registers every route; shared by the server and the integration tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/", web::get().to(index))
        .route("/generate", web::post().to(generate))
        .service(
            web::resource("/data")
                .route(web::get().to(get_data))
                .route(web::post().to(update_data)),
        )
        .service(Files::new("/static", "static"));
}

pub async fn start_server(host: &str, port: u16, store: ConfigStore) -> std::io::Result<()> {
    info!(data_file = %store.path().display(), "serving on http://{}:{}", host, port);
    let app_state = web::Data::new(AppState { store });

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind((host, port))?
    .run()
    .await
}
