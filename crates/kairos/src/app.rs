//! Application wiring: the route table and the seven handlers.

use http::Method;

use kairos_bind::Bindable;
use kairos_core::{AppError, Request, Response};
use kairos_router::{PatternError, Router};
use kairos_server::{Dispatcher, HandlerRegistry};
use kairos_time::{DatesDiffModel, TimezoneModel};

/// Builds the route table.
///
/// Order matters: routes are matched first-registered-first, so the table
/// goes most-specific-first. The single-segment timezone route requires at
/// least three characters, which is what lets `/UTC` and `/GMT` work while
/// two-letter noise falls through to 404.
pub fn build_router() -> Result<Router, PatternError> {
    let mut router = Router::new();
    router.add_route(Method::GET, r"/", "renderServerTime")?;
    router.add_route(
        Method::GET,
        r"/(?P<continent>[a-zA-Z_]+)/(?P<country>[a-zA-Z_]+)/(?P<city>[a-zA-Z_]+)",
        "renderContinentCountryCityTime",
    )?;
    router.add_route(
        Method::GET,
        r"/(?P<continent>[a-zA-Z_]+)/(?P<city>[a-zA-Z_]+)",
        "renderContinentCityTime",
    )?;
    router.add_route(
        Method::GET,
        r"/(?P<timezone>[a-zA-Z_]{3,})",
        "renderTimezoneTime",
    )?;
    router.add_route(Method::POST, r"/api/v1/time", "getTimezoneTime")?;
    router.add_route(Method::POST, r"/api/v1/date", "getTimezoneDate")?;
    router.add_route(Method::POST, r"/api/v1/datediff", "getDatesDiff")?;
    Ok(router)
}

/// Builds the handler registry, one handler per operation in the table.
#[must_use]
pub fn build_handlers() -> HandlerRegistry {
    let mut handlers = HandlerRegistry::new();
    handlers.register("renderServerTime", render_server_time);
    handlers.register("renderTimezoneTime", render_timezone_time);
    handlers.register("renderContinentCityTime", render_continent_city_time);
    handlers.register(
        "renderContinentCountryCityTime",
        render_continent_country_city_time,
    );
    handlers.register("getTimezoneTime", get_timezone_time);
    handlers.register("getTimezoneDate", get_timezone_date);
    handlers.register("getDatesDiff", get_dates_diff);
    handlers
}

/// Builds the dispatcher the binary and the tests serve.
pub fn build_dispatcher() -> Result<Dispatcher, PatternError> {
    Ok(Dispatcher::new(build_router()?, build_handlers()))
}

/// GET `/` - current UTC time as HTML.
async fn render_server_time(_req: Request) -> Result<Response, AppError> {
    Ok(Response::html(&TimezoneModel::utc().display_now()?))
}

/// GET `/{timezone}` - current time in a single-name zone as HTML.
async fn render_timezone_time(req: Request) -> Result<Response, AppError> {
    let timezone = req.path_param("timezone")?;
    Ok(Response::html(&TimezoneModel::new(timezone).display_now()?))
}

/// GET `/{continent}/{city}` - current time in a two-segment zone as HTML.
async fn render_continent_city_time(req: Request) -> Result<Response, AppError> {
    let continent = req.path_param("continent")?;
    let city = req.path_param("city")?;
    let model = TimezoneModel::new(format!("{continent}/{city}"));
    Ok(Response::html(&model.display_now()?))
}

/// GET `/{continent}/{country}/{city}` - three-segment zone as HTML.
async fn render_continent_country_city_time(req: Request) -> Result<Response, AppError> {
    let continent = req.path_param("continent")?;
    let country = req.path_param("country")?;
    let city = req.path_param("city")?;
    let model = TimezoneModel::new(format!("{continent}/{country}/{city}"));
    Ok(Response::html(&model.display_now()?))
}

/// POST `/api/v1/time` - current time in the requested zone as JSON.
async fn get_timezone_time(req: Request) -> Result<Response, AppError> {
    let model = TimezoneModel::bind(&req.body_json())?;
    Ok(Response::json(&model.display_now()?))
}

/// POST `/api/v1/date` - current date in the requested zone as JSON.
async fn get_timezone_date(req: Request) -> Result<Response, AppError> {
    let model = TimezoneModel::bind(&req.body_json())?;
    Ok(Response::json(&model.display_today()?))
}

/// POST `/api/v1/datediff` - difference between two datetimes as JSON.
async fn get_dates_diff(req: Request) -> Result<Response, AppError> {
    let model = DatesDiffModel::bind(&req.body_json())?;
    Ok(Response::json(&model.display_diff()?))
}
