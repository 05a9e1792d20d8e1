use crate::conf::Conf;
use crate::rest;
use crate::rest::error::query_error_handler;
use crate::{log, Result};
use actix_web::middleware::from_fn;
use actix_web::web::{scope, Data, QueryConfig};
use actix_web::{
    middleware::{Compress, NormalizePath},
    App, HttpServer,
};
use tracing::info;

pub async fn run(conf: Conf) -> Result<()> {
    let bind = (conf.host.clone(), conf.port);
    info!(
        host = %bind.0,
        port = bind.1,
        data_dir = %conf.data_dir.display(),
        public_data_dir = %conf.public_data_dir.display(),
        "Starting server",
    );
    // All the workers share one read-only config
    let conf = Data::new(conf);

    HttpServer::new(move || {
        App::new()
            .wrap(from_fn(log::log))
            .wrap(NormalizePath::trim())
            .wrap(Compress::default())
            .app_data(conf.clone())
            .app_data(QueryConfig::default().error_handler(query_error_handler))
            .service(
                scope("api")
                    .service(rest::data::get_water)
                    .service(rest::data::get_electricity)
                    .service(rest::data::get_stp)
                    .service(rest::data::get_contractor_tracker)
                    .service(rest::data::get_contractors)
                    .service(rest::data::get_waste)
                    .service(rest::view::get_view)
                    .service(rest::view::get_export),
            )
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
