//! `POST /api/session/login`: the login screen's button.
//!
//! Blank fields are rejected before the credentials are checked, like the
//! form does. No session or token is issued; the client only learns whether
//! it may move on to the client list.

use crate::view_model::ClientsViewModel;
use actix_web::{web, HttpResponse, Responder};
use common::requests::{LoginRequest, LoginResponse};
use log::{info, warn};

pub async fn process(
    payload: web::Json<LoginRequest>,
    view_model: web::Data<ClientsViewModel>,
) -> impl Responder {
    if payload.username.trim().is_empty() || payload.password.trim().is_empty() {
        return HttpResponse::BadRequest().body("Por favor, complete todos los campos");
    }

    if view_model.login(&payload.username, &payload.password) {
        info!("user {} logged in", payload.username);
        HttpResponse::Ok().json(LoginResponse {
            authenticated: true,
        })
    } else {
        warn!("rejected login for {:?}", payload.username);
        HttpResponse::Unauthorized().body("Usuario o contraseña incorrectos")
    }
}

#[cfg(test)]
mod tests {
    use super::super::configure_routes;
    use crate::data::in_memory_repository;
    use crate::view_model::ClientsViewModel;
    use actix_web::{http::StatusCode, test, web, App};
    use common::requests::LoginResponse;
    use serde_json::json;

    #[actix_web::test]
    async fn login_outcomes() {
        let view_model = web::Data::new(ClientsViewModel::new(in_memory_repository()));
        let app = test::init_service(
            App::new()
                .app_data(view_model.clone())
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/session/login")
            .set_json(json!({ "username": "usuario", "password": "123456" }))
            .to_request();
        let body: LoginResponse = test::call_and_read_body_json(&app, req).await;
        assert!(body.authenticated);

        let req = test::TestRequest::post()
            .uri("/api/session/login")
            .set_json(json!({ "username": "usuario", "password": "wrong" }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::UNAUTHORIZED
        );

        let req = test::TestRequest::post()
            .uri("/api/session/login")
            .set_json(json!({ "username": "", "password": "" }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::BAD_REQUEST
        );
    }
}
