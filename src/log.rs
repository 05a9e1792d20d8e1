use crate::domain::Domain;
use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
    Error, HttpMessage,
};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if cfg!(debug_assertions) {
        builder.init();
    } else {
        builder.json().without_time().init();
    }
}

/// Handlers attach this so the request log knows what was served.
pub struct RequestExtension {
    pub domain: Domain,
    pub entities: usize,
}

impl RequestExtension {
    pub fn new(domain: Domain, entities: usize) -> Self {
        RequestExtension { domain, entities }
    }
}

pub async fn log(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let started_at = Instant::now();
    let req_method = req.method().as_str().to_string();
    let req_path = req.path().to_string();
    let req_query_string = req.query_string().to_string();
    let req_ip = req
        .connection_info()
        .peer_addr()
        .unwrap_or_default()
        .to_string();
    let res = next.call(req).await?;
    let (domain, entities) = match res.request().extensions().get::<RequestExtension>() {
        Some(extension) => (Some(extension.domain.to_string()), Some(extension.entities)),
        None => (None, None),
    };
    info!(
        req_method,
        req_path,
        req_query_string,
        req_ip,
        domain = domain.as_deref(),
        entities,
        res_status = res.status().as_u16(),
        res_time_sec = started_at.elapsed().as_secs_f64(),
    );
    Ok(res)
}
