use crate::constants::APPLICATION_JSON;
use crate::persistence::dataset::OfferRepository;
use crate::query::{filter_options, run_query, RawOfferQuery};
use crate::rest_api::base_api::log_text_error_and_return_500;
use actix_web::web::ThinData;
use actix_web::{get, web, HttpRequest, HttpResponse};
use log::{debug, info};

#[get("/api/ofertas")]
pub async fn get_offers(repository: ThinData<OfferRepository>,
                        request: HttpRequest) -> HttpResponse {
    info!("get_offers called");
    let query = RawOfferQuery::from_query_string(request.query_string()).parse();
    debug!("Parsed offer query: {:?}", query);
    let repository = repository.0;

    let page = match web::block(move || run_query(repository.load_offers(), &query)).await {
        Ok(Ok(page)) => page,
        Ok(Err(query_error)) => return log_text_error_and_return_500(query_error.to_string()),
        Err(blocking_error) => return log_text_error_and_return_500(blocking_error.to_string()),
    };

    HttpResponse::Ok()
        .content_type(APPLICATION_JSON)
        .json(page)
}

#[get("/api/ofertas/filtros")]
pub async fn get_filter_options(repository: ThinData<OfferRepository>) -> HttpResponse {
    info!("get_filter_options called");
    let repository = repository.0;

    let options = match web::block(move || filter_options(&repository.load_offers())).await {
        Ok(options) => options,
        Err(blocking_error) => return log_text_error_and_return_500(blocking_error.to_string()),
    };

    HttpResponse::Ok()
        .content_type(APPLICATION_JSON)
        .json(options)
}

#[cfg(test)]
mod tests {
    use crate::dtos::offer::{FilterOptions, FormattedOffer, OffersPage, Pagination, PriceRange};
    use crate::persistence::dataset::OfferRepository;
    use crate::rest_api;
    use actix_web::http::StatusCode;
    use actix_web::web::ThinData;
    use actix_web::{test, App};
    use std::path::PathBuf;

    fn bundled_repository() -> OfferRepository {
        OfferRepository::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join("data.json"))
    }

    #[actix_rt::test]
    async fn test_second_page_of_bundled_dataset() {
        let app = test::init_service(
            App::new()
                .app_data(ThinData(bundled_repository()))
                .configure(rest_api::configure)).await;
        let request = test::TestRequest::get().uri("/api/ofertas?page=2&limit=10").to_request();
        let page: OffersPage<FormattedOffer> = test::call_and_read_body_json(&app, request).await;
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].course_name, "Psicologia");
        assert_eq!(page.data[0].ies_logo, None);
        assert_eq!(page.pagination, Pagination {
            current_page: 2,
            total_pages: 2,
            total_items: 12,
            items_per_page: 10,
            has_next: false,
            has_prev: true,
        });
    }

    #[actix_rt::test]
    async fn test_filters_sort_and_fields_over_http() {
        let app = test::init_service(
            App::new()
                .app_data(ThinData(bundled_repository()))
                .configure(rest_api::configure)).await;
        let request = test::TestRequest::get()
            .uri("/api/ofertas?kind=ead&level=tecnologo&sortBy=offeredPrice&order=asc&fields=courseName,offeredPrice,nope&minPrice=&search=")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(body["data"], serde_json::json!([
            {"courseName": "Logística", "offeredPrice": "R$\u{a0}288,00"},
            {"courseName": "Gestão de Recursos Humanos", "offeredPrice": "R$\u{a0}337,50"},
            {"courseName": "Análise e Desenvolvimento de Sistemas", "offeredPrice": "R$\u{a0}399,90"},
            {"courseName": "Marketing Digital", "offeredPrice": "R$\u{a0}408,00"},
        ]));
        assert_eq!(body["pagination"]["totalItems"], 4);
        assert_eq!(body["pagination"]["hasNext"], false);
    }

    #[actix_rt::test]
    async fn test_repeated_query_keys_use_first_value() {
        let app = test::init_service(
            App::new()
                .app_data(ThinData(bundled_repository()))
                .configure(rest_api::configure)).await;
        let request = test::TestRequest::get().uri("/api/ofertas?page=1&page=2&limit=5&limit=x").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let page: OffersPage<FormattedOffer> = test::read_body_json(response).await;
        assert_eq!(page.pagination.current_page, 1);
        assert_eq!(page.pagination.items_per_page, 5);
        assert_eq!(page.data[0].course_name, "Administração");
    }

    #[actix_rt::test]
    async fn test_unreadable_dataset_is_an_empty_result() {
        let app = test::init_service(
            App::new()
                .app_data(ThinData(OfferRepository::new("/nonexistent/data.json")))
                .configure(rest_api::configure)).await;
        let request = test::TestRequest::get().uri("/api/ofertas").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let page: OffersPage<FormattedOffer> = test::read_body_json(response).await;
        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total_pages, 0);
        assert!(!page.pagination.has_prev);
    }

    #[actix_rt::test]
    async fn test_filter_options_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(ThinData(bundled_repository()))
                .configure(rest_api::configure)).await;
        let request = test::TestRequest::get().uri("/api/ofertas/filtros").to_request();
        let options: FilterOptions = test::call_and_read_body_json(&app, request).await;
        assert_eq!(options.levels, vec!["bacharelado", "tecnologo", "licenciatura"]);
        assert_eq!(options.kinds, vec!["presencial", "ead"]);
        assert_eq!(options.price_range, Some(PriceRange { min: 259.9, max: 2480.0 }));
    }
}
