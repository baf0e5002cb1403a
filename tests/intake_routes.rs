use actix_web::{App, http::StatusCode, test, web};
use percent_encoding::percent_decode_str;
use serde_json::{Value, json};
use tera::Tera;

use shilaabo_intake::domain::types::WhatsAppNumber;
use shilaabo_intake::models::config::ServerConfig;
use shilaabo_intake::routes::api::api_v1_intake;
use shilaabo_intake::routes::intake::{show_intake_form, submit_intake_form};

const AMINA_MESSAGE: &str = "Shilaabo Car Hire - Client Details\n\nFull Name: Amina Yusuf\nID/Passport: A1234567\nDriving License: DL998877\nCitizenship: Kenya\nAddress: 14 Riverside Dr, Nairobi\nPhone Number: +254700112233";

fn app_data() -> (web::Data<Tera>, web::Data<ServerConfig>) {
    let tera = Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*"))
        .expect("templates parse");
    let config = ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 8080,
        templates_dir: "templates/**/*".to_string(),
        assets_dir: "./assets".to_string(),
        whatsapp_number: WhatsAppNumber::new("254792837410").unwrap(),
    };
    (web::Data::new(tera), web::Data::new(config))
}

fn amina_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("full_name", "Amina Yusuf"),
        ("id_passport", "A1234567"),
        ("dl_number", "DL998877"),
        ("citizenship", "Kenya"),
        ("address", "14 Riverside Dr, Nairobi"),
        ("phone_number", "+254700112233"),
    ]
}

#[actix_web::test]
async fn index_renders_empty_form() {
    let (tera, config) = app_data();
    let app = test::init_service(
        App::new()
            .app_data(tera)
            .app_data(config)
            .service(show_intake_form),
    )
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("Shilaabo Car Hire"));
    for name in [
        "full_name",
        "id_passport",
        "dl_number",
        "citizenship",
        "address",
        "phone_number",
    ] {
        assert!(body.contains(&format!("name=\"{name}\"")), "missing input {name}");
    }
    assert!(!body.contains("class=\"error\""));
}

#[actix_web::test]
async fn empty_submit_shows_all_six_errors_and_no_link() {
    let (tera, config) = app_data();
    let app = test::init_service(
        App::new()
            .app_data(tera)
            .app_data(config)
            .service(submit_intake_form),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/")
        .set_form([("full_name", ""), ("citizenship", "   ")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert_eq!(body.matches("class=\"error\"").count(), 6);
    assert!(body.contains("Full name is required"));
    assert!(body.contains("Driving license number is required"));
    assert!(body.contains("Residential address is required"));
    assert!(!body.contains("wa.me"));
}

#[actix_web::test]
async fn single_blank_field_keeps_other_values() {
    let (tera, config) = app_data();
    let app = test::init_service(
        App::new()
            .app_data(tera)
            .app_data(config)
            .service(submit_intake_form),
    )
    .await;

    let mut fields = amina_fields();
    fields[3] = ("citizenship", "  ");
    let req = test::TestRequest::post()
        .uri("/")
        .set_form(&fields)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert_eq!(body.matches("class=\"error\"").count(), 1);
    assert!(body.contains("Citizenship is required"));
    assert!(body.contains("value=\"Amina Yusuf\""));
    assert!(!body.contains("wa.me"));
}

#[actix_web::test]
async fn valid_submit_hands_off_deep_link() {
    let (tera, config) = app_data();
    let app = test::init_service(
        App::new()
            .app_data(tera)
            .app_data(config)
            .service(submit_intake_form),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/")
        .set_form(amina_fields())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains(
        "https://wa.me/254792837410?text=Shilaabo%20Car%20Hire%20-%20Client%20Details%0A%0AFull%20Name%3A%20Amina%20Yusuf"
    ));
    assert!(body.contains("window.open("));
    assert!(body.contains("target=\"_blank\""));
}

#[actix_web::test]
async fn api_returns_link_that_decodes_to_message() {
    let (_, config) = app_data();
    let app = test::init_service(
        App::new()
            .app_data(config)
            .service(web::scope("/api").service(api_v1_intake)),
    )
    .await;

    let payload: Value = amina_fields()
        .into_iter()
        .map(|(k, v)| (k.to_string(), json!(v)))
        .collect::<serde_json::Map<_, _>>()
        .into();
    let req = test::TestRequest::post()
        .uri("/api/v1/intake")
        .set_json(&payload)
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp["message"], AMINA_MESSAGE);
    let url = resp["url"].as_str().unwrap();
    let text = url
        .strip_prefix("https://wa.me/254792837410?text=")
        .unwrap();
    assert_eq!(percent_decode_str(text).decode_utf8().unwrap(), AMINA_MESSAGE);
}

#[actix_web::test]
async fn api_rejects_blank_fields_with_422() {
    let (_, config) = app_data();
    let app = test::init_service(
        App::new()
            .app_data(config)
            .service(web::scope("/api").service(api_v1_intake)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/intake")
        .set_json(json!({"full_name": "Amina Yusuf", "address": " "}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    let errors = body["errors"].as_object().unwrap();
    assert_eq!(errors.len(), 5);
    assert!(!errors.contains_key("full_name"));
    assert_eq!(errors["address"], "Residential address is required");
    assert_eq!(errors["id_passport"], "ID/Passport number is required");
}

#[actix_web::test]
async fn api_message_keeps_values_as_typed() {
    let (_, config) = app_data();
    let app = test::init_service(
        App::new()
            .app_data(config)
            .service(web::scope("/api").service(api_v1_intake)),
    )
    .await;

    let mut payload = json!({
        "full_name": "Amina Yusuf",
        "id_passport": "A1234567",
        "dl_number": "DL998877",
        "citizenship": "Kenya",
        "address": "14 Riverside Dr, Nairobi",
        "phone_number": "+254700112233",
    });
    payload["citizenship"] = json!(" Kenya  ");
    let req = test::TestRequest::post()
        .uri("/api/v1/intake")
        .set_json(&payload)
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;

    let message = resp["message"].as_str().unwrap();
    assert!(message.contains("\nCitizenship:  Kenya  \n"));
}
