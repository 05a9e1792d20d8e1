use super::data::load;
use crate::conf::Conf;
use crate::domain::Domain;
use crate::log::RequestExtension;
use crate::rest::error::{RestApiError, RestResult};
use crate::view::{self, date, DateRange, SortDirection, SortState, View, ViewParams};
use crate::{Error, Result};
use actix_web::get;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::web::{Data, Json, Path, Query};
use actix_web::{HttpMessage, HttpRequest, HttpResponse};
use serde::Deserialize;
use std::str::FromStr;
use time::OffsetDateTime;

#[derive(Debug, Default, Deserialize)]
pub struct ViewArgs {
    pub search: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|it| !it.trim().is_empty())
}

fn parse_direction(value: Option<String>) -> Result<SortDirection> {
    match non_empty(value).as_deref().map(str::trim) {
        None => Ok(SortDirection::Asc),
        Some(dir) if dir.eq_ignore_ascii_case("asc") => Ok(SortDirection::Asc),
        Some(dir) if dir.eq_ignore_ascii_case("desc") => Ok(SortDirection::Desc),
        Some(dir) => Err(Error::InvalidInput(format!("Invalid sort direction: {dir}"))),
    }
}

fn parse_bound(value: Option<String>) -> Result<Option<time::Date>> {
    match non_empty(value) {
        Some(text) => date::parse(&text)
            .map(Some)
            .ok_or_else(|| Error::InvalidInput(format!("Invalid date: {text}"))),
        None => Ok(None),
    }
}

impl TryFrom<ViewArgs> for ViewParams {
    type Error = Error;

    fn try_from(args: ViewArgs) -> Result<Self> {
        let direction = parse_direction(args.dir)?;
        // replayed as header clicks, a direction without a key is dropped
        let mut sort = SortState::default();
        if let Some(key) = non_empty(args.sort) {
            sort.toggle(&key);
            if direction == SortDirection::Desc {
                sort.toggle(&key);
            }
        }
        let range = DateRange {
            from: parse_bound(args.from)?,
            to: parse_bound(args.to)?,
        };
        if let (Some(from), Some(to)) = (range.from, range.to) {
            if from > to {
                return Err(Error::InvalidInput(format!(
                    "Range starts after it ends: {from} > {to}"
                )));
            }
        }
        Ok(ViewParams {
            search: non_empty(args.search),
            status: non_empty(args.status),
            kind: non_empty(args.kind),
            sort,
            range,
        })
    }
}

fn parse_domain(domain: &str) -> std::result::Result<Domain, RestApiError> {
    Domain::from_str(domain).map_err(|_| RestApiError::unknown_domain(domain))
}

fn parse_args(args: ViewArgs) -> std::result::Result<ViewParams, RestApiError> {
    ViewParams::try_from(args).map_err(|e| RestApiError::invalid_input(e.to_string()))
}

#[get("/{domain}/view")]
pub async fn get_view(
    req: HttpRequest,
    domain: Path<String>,
    args: Query<ViewArgs>,
    conf: Data<Conf>,
) -> RestResult<View> {
    let domain = parse_domain(&domain)?;
    let params = parse_args(args.into_inner())?;
    let records = load(domain, &conf).await?;
    let view = view::build(
        domain,
        records,
        &params,
        OffsetDateTime::now_utc().date(),
    );
    req.extensions_mut()
        .insert(RequestExtension::new(domain, view.records.len()));
    Ok(Json(view))
}

#[get("/{domain}/export")]
pub async fn get_export(
    req: HttpRequest,
    domain: Path<String>,
    args: Query<ViewArgs>,
    conf: Data<Conf>,
) -> std::result::Result<HttpResponse, RestApiError> {
    let domain = parse_domain(&domain)?;
    let params = parse_args(args.into_inner())?;
    let records = load(domain, &conf).await?;
    let records = view::select(domain, records, &params);
    let csv = view::to_csv(domain, &records).map_err(|e| RestApiError::from_error(domain, e))?;
    req.extensions_mut()
        .insert(RequestExtension::new(domain, records.len()));
    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(format!("{domain}-export.csv"))],
        })
        .body(csv))
}
