use crate::{api::attendance, config::Config};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use std::sync::Arc;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    let list_limiter = Arc::new(build_limiter(config.rate_list_per_min));
    let form_limiter = Arc::new(build_limiter(config.rate_form_per_min));

    cfg.service(
        web::resource("/")
            .wrap(list_limiter)
            .route(web::get().to(attendance::index)),
    )
    .service(
        web::resource("/registrar")
            .wrap(form_limiter.clone())
            .route(web::get().to(attendance::registrar_form))
            .route(web::post().to(attendance::registrar)),
    )
    .service(
        web::resource("/editar/{indice}")
            .wrap(form_limiter.clone())
            .route(web::get().to(attendance::editar_form))
            .route(web::post().to(attendance::editar)),
    )
    .service(
        web::resource("/eliminar/{indice}")
            .wrap(form_limiter)
            .route(web::get().to(attendance::eliminar)),
    );
}
