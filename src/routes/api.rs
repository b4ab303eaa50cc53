use actix_web::web;

use crate::handlers;

pub fn scoped_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(handlers::pledges::form))
            .route(web::post().to(handlers::pledges::submit)),
    );
}
