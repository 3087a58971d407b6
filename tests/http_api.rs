use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};
use tempfile::TempDir;

use class_timetable::web::{configure, AppState};
use class_timetable::{ConfigStore, Configuration};

fn state_in(dir: &TempDir) -> web::Data<AppState> {
    web::Data::new(AppState {
        store: ConfigStore::new(dir.path().join("data.json"), Configuration::default()),
    })
}

#[actix_web::test]
async fn get_data_returns_default_when_nothing_saved() {
    let dir = TempDir::new().unwrap();
    let app = test::init_service(App::new().app_data(state_in(&dir)).configure(configure)).await;

    let req = test::TestRequest::get().uri("/data").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["subjects"][0], "Mathematics");
    assert_eq!(body["teachers"].as_array().unwrap().len(), 5);
    assert_eq!(body["rooms"][4], "Lab 2");
}

#[actix_web::test]
async fn post_data_persists_and_round_trips() {
    let dir = TempDir::new().unwrap();
    let app = test::init_service(App::new().app_data(state_in(&dir)).configure(configure)).await;

    let config = json!({
        "subjects": ["Art", "Biology"],
        "teachers": ["Mr. Davis"],
        "rooms": ["Studio"]
    });
    let req = test::TestRequest::post().uri("/data").set_json(&config).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"success": true}));

    let req = test::TestRequest::get().uri("/data").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, config);
    assert!(dir.path().join("data.json").exists());
}

#[actix_web::test]
async fn post_data_rejects_wrong_shape() {
    let dir = TempDir::new().unwrap();
    let app = test::init_service(App::new().app_data(state_in(&dir)).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/data")
        .set_json(json!({"subjects": "Maths"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(!dir.path().join("data.json").exists());
}

#[actix_web::test]
async fn generate_returns_full_week() {
    let dir = TempDir::new().unwrap();
    let app = test::init_service(App::new().app_data(state_in(&dir)).configure(configure)).await;

    let req = test::TestRequest::post().uri("/generate").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    assert_eq!(
        body["days"],
        json!(["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"])
    );
    assert_eq!(body["time_slots"].as_array().unwrap().len(), 7);

    let timetable = body["timetable"].as_object().unwrap();
    assert_eq!(timetable.len(), 5);
    for entries in timetable.values() {
        let entries = entries.as_array().unwrap();
        assert_eq!(entries.len(), 7);
        assert_eq!(
            entries[3],
            json!({"time": "12:00 PM - 1:00 PM", "subject": "Lunch Break", "teacher": "-", "room": "-"})
        );
        assert_eq!(entries[6]["subject"], "Free Period");
    }
}

#[actix_web::test]
async fn generate_with_empty_subjects_is_all_free() {
    let dir = TempDir::new().unwrap();
    let app = test::init_service(App::new().app_data(state_in(&dir)).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/data")
        .set_json(json!({"subjects": [], "teachers": [], "rooms": []}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post().uri("/generate").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    for entries in body["timetable"].as_object().unwrap().values() {
        let subjects: Vec<&str> = entries
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["subject"].as_str().unwrap())
            .collect();
        assert_eq!(subjects.iter().filter(|s| **s == "Free Period").count(), 6);
        assert_eq!(subjects[3], "Lunch Break");
    }
}

#[actix_web::test]
async fn generate_without_teachers_is_a_client_error() {
    let dir = TempDir::new().unwrap();
    let app = test::init_service(App::new().app_data(state_in(&dir)).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/data")
        .set_json(json!({"subjects": ["Physics"], "teachers": [], "rooms": ["Lab 1"]}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post().uri("/generate").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("no teachers"));
}

#[actix_web::test]
async fn malformed_data_file_is_a_server_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("data.json"), "not json").unwrap();
    let app = test::init_service(App::new().app_data(state_in(&dir)).configure(configure)).await;

    let req = test::TestRequest::get().uri("/data").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let req = test::TestRequest::post().uri("/generate").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn index_serves_the_page() {
    let dir = TempDir::new().unwrap();
    let app = test::init_service(App::new().app_data(state_in(&dir)).configure(configure)).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = test::read_body(resp).await;
    assert!(std::str::from_utf8(&body).unwrap().contains("Class Timetable"));
}
