//! Route registration and first-match-wins path matching.

use http::Method;
use regex::Regex;
use thiserror::Error;

use crate::Params;

/// A route pattern failed to compile.
#[derive(Error, Debug)]
#[error("invalid route pattern `{pattern}`: {source}")]
pub struct PatternError {
    /// The pattern as registered, before anchoring.
    pub pattern: String,
    /// The underlying regex compilation error.
    #[source]
    pub source: regex::Error,
}

/// A matched route: the operation to invoke plus whatever the pattern's
/// named capture groups extracted from the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    operation_id: String,
    params: Params,
}

impl RouteMatch {
    /// Returns the operation id of the matched route.
    #[must_use]
    pub fn operation_id(&self) -> &str {
        &self.operation_id
    }

    /// Returns the captured path parameters.
    #[must_use]
    pub const fn params(&self) -> &Params {
        &self.params
    }

    /// Consumes the match, yielding the captured parameters.
    #[must_use]
    pub fn into_params(self) -> Params {
        self.params
    }
}

/// A registered route. Immutable once added.
#[derive(Debug, Clone)]
struct Route {
    method: Method,
    pattern: Regex,
    operation_id: String,
}

/// Ordered route table.
///
/// Routes are tried in registration order and the first one whose method
/// and pattern both match wins, so overlapping patterns are disambiguated
/// by registering the more specific one first. Patterns are anchored to
/// the full path at registration time.
///
/// # Example
///
/// ```rust
/// use http::Method;
/// use kairos_router::Router;
///
/// let mut router = Router::new();
/// router
///     .add_route(Method::GET, r"/(?P<timezone>[a-zA-Z_]{3,})", "renderTimezoneTime")
///     .unwrap();
///
/// let m = router.match_route(&Method::GET, "/UTC").unwrap();
/// assert_eq!(m.operation_id(), "renderTimezoneTime");
/// assert_eq!(m.params().get("timezone"), Some("UTC"));
///
/// assert!(router.match_route(&Method::POST, "/UTC").is_none());
/// assert!(router.match_route(&Method::GET, "/UTC/extra").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Creates an empty route table.
    #[must_use]
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Registers a route at the end of the table.
    ///
    /// The pattern is a regular expression, optionally with named capture
    /// groups (`(?P<name>…)`); it is compiled anchored to the whole path,
    /// so `/api` will not match `/api/v1/time`. Fails if the pattern does
    /// not compile.
    pub fn add_route(
        &mut self,
        method: Method,
        pattern: impl AsRef<str>,
        operation_id: impl Into<String>,
    ) -> Result<(), PatternError> {
        let pattern = pattern.as_ref();
        let anchored = format!(r"\A(?:{pattern})\z");
        let compiled = Regex::new(&anchored).map_err(|source| PatternError {
            pattern: pattern.to_string(),
            source,
        })?;
        self.routes.push(Route {
            method,
            pattern: compiled,
            operation_id: operation_id.into(),
        });
        Ok(())
    }

    /// Returns the number of registered routes.
    #[must_use]
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Scans the table in registration order and returns the first route
    /// whose method and pattern both match, or `None`.
    ///
    /// Named capture groups become [`Params`]; a pattern without captures
    /// yields an empty set, which is not an error.
    #[must_use]
    pub fn match_route(&self, method: &Method, path: &str) -> Option<RouteMatch> {
        for route in &self.routes {
            if route.method != *method {
                continue;
            }
            let Some(captures) = route.pattern.captures(path) else {
                continue;
            };
            let mut params = Params::new();
            for name in route.pattern.capture_names().flatten() {
                if let Some(value) = captures.name(name) {
                    params.insert(name, value.as_str());
                }
            }
            return Some(RouteMatch {
                operation_id: route.operation_id.clone(),
                params,
            });
        }
        None
    }

    /// Returns true if an operation id is registered in the table.
    #[must_use]
    pub fn has_operation(&self, operation_id: &str) -> bool {
        self.routes.iter().any(|r| r.operation_id == operation_id)
    }

    /// Iterates over the registered operation ids in table order.
    pub fn operation_ids(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.operation_id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time_service_router() -> Router {
        let mut router = Router::new();
        router
            .add_route(Method::GET, r"/", "renderServerTime")
            .unwrap();
        router
            .add_route(
                Method::GET,
                r"/(?P<continent>[a-zA-Z_]+)/(?P<country>[a-zA-Z_]+)/(?P<city>[a-zA-Z_]+)",
                "renderContinentCountryCityTime",
            )
            .unwrap();
        router
            .add_route(
                Method::GET,
                r"/(?P<continent>[a-zA-Z_]+)/(?P<city>[a-zA-Z_]+)",
                "renderContinentCityTime",
            )
            .unwrap();
        router
            .add_route(
                Method::GET,
                r"/(?P<timezone>[a-zA-Z_]{3,})",
                "renderTimezoneTime",
            )
            .unwrap();
        router
            .add_route(Method::POST, r"/api/v1/time", "getTimezoneTime")
            .unwrap();
        router
            .add_route(Method::POST, r"/api/v1/date", "getTimezoneDate")
            .unwrap();
        router
            .add_route(Method::POST, r"/api/v1/datediff", "getDatesDiff")
            .unwrap();
        router
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let mut router = Router::new();
        let err = router
            .add_route(Method::GET, r"/(?P<broken", "nope")
            .unwrap_err();
        assert_eq!(err.pattern, r"/(?P<broken");
        assert_eq!(router.route_count(), 0);
    }

    #[test]
    fn root_matches_without_captures() {
        let router = time_service_router();
        let m = router.match_route(&Method::GET, "/").unwrap();
        assert_eq!(m.operation_id(), "renderServerTime");
        assert!(m.params().is_empty());
    }

    #[test]
    fn single_segment_captures_timezone() {
        let router = time_service_router();
        let m = router.match_route(&Method::GET, "/UTC").unwrap();
        assert_eq!(m.operation_id(), "renderTimezoneTime");
        assert_eq!(m.params().get("timezone"), Some("UTC"));
    }

    #[test]
    fn two_segments_take_the_city_route() {
        let router = time_service_router();
        let m = router.match_route(&Method::GET, "/Europe/Moscow").unwrap();
        assert_eq!(m.operation_id(), "renderContinentCityTime");
        assert_eq!(m.params().get("continent"), Some("Europe"));
        assert_eq!(m.params().get("city"), Some("Moscow"));
    }

    #[test]
    fn first_match_wins_for_overlapping_patterns() {
        let mut router = Router::new();
        router
            .add_route(Method::GET, r"/(?P<word>[a-z]+)", "narrow")
            .unwrap();
        router
            .add_route(Method::GET, r"/(?P<anything>.+)", "wide")
            .unwrap();

        // Both patterns match; the earlier registration is taken.
        let m = router.match_route(&Method::GET, "/moscow").unwrap();
        assert_eq!(m.operation_id(), "narrow");
        assert_eq!(m.params().get("word"), Some("moscow"));

        // Only the later pattern matches here.
        let m = router.match_route(&Method::GET, "/12:30").unwrap();
        assert_eq!(m.operation_id(), "wide");
    }

    #[test]
    fn three_segments_take_the_most_specific_route() {
        let router = time_service_router();
        let m = router
            .match_route(&Method::GET, "/America/Argentina/Buenos_Aires")
            .unwrap();
        assert_eq!(m.operation_id(), "renderContinentCountryCityTime");
        assert_eq!(m.params().get("continent"), Some("America"));
        assert_eq!(m.params().get("country"), Some("Argentina"));
        assert_eq!(m.params().get("city"), Some("Buenos_Aires"));
    }

    #[test]
    fn anchoring_rejects_longer_paths() {
        let router = time_service_router();
        assert!(router.match_route(&Method::POST, "/api/v1/time/extra").is_none());
        assert!(router
            .match_route(&Method::GET, "/Europe/Moscow/Center/Kremlin")
            .is_none());
    }

    #[test]
    fn method_must_match() {
        let router = time_service_router();
        assert!(router.match_route(&Method::POST, "/UTC").is_none());
        assert!(router.match_route(&Method::GET, "/api/v1/time").is_none());
    }

    #[test]
    fn short_single_segment_does_not_match() {
        // The timezone route requires at least three characters.
        let router = time_service_router();
        assert!(router.match_route(&Method::GET, "/ab").is_none());
    }

    #[test]
    fn digits_do_not_match_name_routes() {
        let router = time_service_router();
        assert!(router.match_route(&Method::GET, "/Etc/GMT+5").is_none());
    }

    #[test]
    fn operation_lookup() {
        let router = time_service_router();
        assert!(router.has_operation("getDatesDiff"));
        assert!(!router.has_operation("deleteEverything"));
        assert_eq!(router.operation_ids().count(), 7);
    }
}
