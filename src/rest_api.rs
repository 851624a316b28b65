pub mod base_api;
pub mod offers_api;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(offers_api::get_filter_options)
        .service(offers_api::get_offers);
}
