pub mod api;

use actix_web::web;

use crate::handlers;
use crate::AppState;

/// Registers state, extractor settings and every route on an app.
pub fn configure(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let payload_limit = state.config.server.max_json_payload_size;
        cfg.app_data(web::Data::new(state))
            .app_data(handlers::json_config(payload_limit))
            .service(api::config())
            // legacy clients post straight to the root
            .route("/", web::post().to(handlers::compare))
            .default_service(web::route().to(handlers::not_found));
    }
}
