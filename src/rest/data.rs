use crate::conf::Conf;
use crate::domain::Domain;
use crate::log::RequestExtension;
use crate::model::Record;
use crate::provider;
use crate::rest::error::{RestApiError, RestResult};
use crate::Error;
use actix_web::get;
use actix_web::rt::time::sleep;
use actix_web::web::{self, Data, Json};
use actix_web::{HttpMessage, HttpRequest};

/// Reads off the worker thread, files can be slow.
pub async fn load(domain: Domain, conf: &Data<Conf>) -> Result<Vec<Record>, RestApiError> {
    let conf = conf.clone();
    web::block(move || provider::load(domain, &conf))
        .await
        .map_err(Error::from)
        .and_then(|it| it)
        .map_err(|e| RestApiError::from_error(domain, e))
}

async fn respond(req: HttpRequest, domain: Domain, conf: Data<Conf>) -> RestResult<Vec<Record>> {
    let records = load(domain, &conf).await?;
    req.extensions_mut()
        .insert(RequestExtension::new(domain, records.len()));
    Ok(Json(records))
}

#[get("/water-data")]
pub async fn get_water(req: HttpRequest, conf: Data<Conf>) -> RestResult<Vec<Record>> {
    respond(req, Domain::Water, conf).await
}

#[get("/electricity-data")]
pub async fn get_electricity(req: HttpRequest, conf: Data<Conf>) -> RestResult<Vec<Record>> {
    respond(req, Domain::Electricity, conf).await
}

#[get("/stp-plant-data")]
pub async fn get_stp(req: HttpRequest, conf: Data<Conf>) -> RestResult<Vec<Record>> {
    respond(req, Domain::Stp, conf).await
}

#[get("/contractor-tracker-data")]
pub async fn get_contractor_tracker(
    req: HttpRequest,
    conf: Data<Conf>,
) -> RestResult<Vec<Record>> {
    respond(req, Domain::ContractorTracker, conf).await
}

#[get("/contractors-data")]
pub async fn get_contractors(req: HttpRequest, conf: Data<Conf>) -> RestResult<Vec<Record>> {
    respond(req, Domain::Contractors, conf).await
}

#[get("/waste-management-data")]
pub async fn get_waste(req: HttpRequest, conf: Data<Conf>) -> RestResult<Vec<Record>> {
    sleep(conf.waste_delay).await;
    respond(req, Domain::Waste, conf).await
}
