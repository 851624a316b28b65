use crate::constants::{APPLICATION_JSON, SERVER_ERROR_MESSAGE};
use crate::dtos::offer::ErrorResponse;
use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use actix_web::middleware::ErrorHandlerResponse;
use actix_web::{HttpResponse, Result};
use log::error;

/// Callers only ever see the generic message; the cause goes to the log.
pub fn log_text_error_and_return_500(error: String) -> HttpResponse {
    error!("Error: {}", error);
    HttpResponse::InternalServerError()
        .content_type(APPLICATION_JSON)
        .json(ErrorResponse {
            error: SERVER_ERROR_MESSAGE.to_string(),
        })
}

pub fn json_error_body<B>(res: ServiceResponse<B>) -> Result<ErrorHandlerResponse<B>> {
    let status = res.status();
    let message = if status.is_server_error() {
        SERVER_ERROR_MESSAGE
    } else {
        status.canonical_reason().unwrap_or("Error")
    };
    let body = match serde_json::to_string(&ErrorResponse { error: message.to_string() }) {
        Ok(body) => body,
        Err(_) => format!("{{\"error\":\"{}\"}}", SERVER_ERROR_MESSAGE),
    };

    let (req, res) = res.into_parts();
    let mut res = res.set_body(body);
    res.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static(APPLICATION_JSON),
    );
    let res = ServiceResponse::new(req, res)
        .map_into_boxed_body()
        .map_into_right_body();
    Ok(ErrorHandlerResponse::Response(res))
}

#[cfg(test)]
mod tests {
    use crate::rest_api::base_api::{json_error_body, log_text_error_and_return_500};
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use actix_web::middleware::ErrorHandlers;
    use actix_web::{test, web, App, HttpResponse};

    #[actix_rt::test]
    async fn test_500_hides_cause() {
        let response = log_text_error_and_return_500("disk on fire".to_string());
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Erro interno do servidor"}));
    }

    #[actix_rt::test]
    async fn test_error_responses_get_json_bodies() {
        let app = test::init_service(
            App::new()
                .wrap(ErrorHandlers::new().default_handler(json_error_body))
                .route("/broken", web::get().to(|| async { HttpResponse::BadGateway().body("upstream said no") }))).await;

        let request = test::TestRequest::get().uri("/missing").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(json, serde_json::json!({"error": "Not Found"}));

        let request = test::TestRequest::get().uri("/broken").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(json, serde_json::json!({"error": "Erro interno do servidor"}));
    }
}
