use reqwest::Method;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    error::ServiceError,
    route::{DirectionsService, RouteQuery, RouteResult},
};

pub const DEFAULT_DIRECTIONS_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

#[derive(Clone, Deserialize, Debug)]
struct Measure {
    value: u64,
}

#[derive(Clone, Deserialize, Debug)]
struct Leg {
    duration: Measure,
    duration_in_traffic: Option<Measure>,
    distance: Measure,
    #[serde(default)]
    start_address: String,
    #[serde(default)]
    end_address: String,
}

#[derive(Clone, Deserialize, Debug)]
struct Route {
    legs: Vec<Leg>,
}

#[derive(Deserialize, Debug)]
struct Response {
    status: String,
    error_message: Option<String>,
    #[serde(default)]
    routes: Vec<Route>,
}

impl Response {
    fn into_route_result(self) -> Result<RouteResult, ServiceError> {
        if self.status == "ZERO_RESULTS" {
            return Err(ServiceError::NoRoute);
        }

        if self.status != "OK" {
            return Err(ServiceError::Status {
                status: self.status,
                message: self
                    .error_message
                    .unwrap_or_else(|| "no further details".to_string()),
            });
        }

        let leg = self
            .routes
            .into_iter()
            .next()
            .and_then(|route| route.legs.into_iter().next())
            .ok_or(ServiceError::NoRoute)?;

        if leg.duration_in_traffic.is_none() {
            warn!("no traffic data for route, using free-flow duration");
        }

        Ok(RouteResult {
            duration_seconds: leg.duration.value,
            duration_in_traffic_seconds: leg.duration_in_traffic.map(|d| d.value),
            distance_meters: leg.distance.value,
            start_address: leg.start_address,
            end_address: leg.end_address,
        })
    }
}

/// Blocking client for the Google Maps Directions API.
pub struct Client {
    inner: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl Client {
    pub fn new(api_key: &str, base_url: &str) -> Result<Self, ServiceError> {
        Ok(Self {
            inner: reqwest::blocking::Client::builder().build()?,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn request_url(&self, query: &RouteQuery) -> String {
        format!(
            "{}?origin={}&destination={}&mode=driving&departure_time={}&traffic_model=best_guess&key={}",
            self.base_url,
            urlencoding::encode(&query.origin),
            urlencoding::encode(&query.destination),
            query.departure_time.timestamp(),
            urlencoding::encode(&self.api_key),
        )
    }
}

impl DirectionsService for Client {
    fn get_route(&self, query: &RouteQuery) -> Result<RouteResult, ServiceError> {
        debug!(
            origin = %query.origin,
            destination = %query.destination,
            departure_time = query.departure_time.timestamp(),
            "requesting directions"
        );

        let response = self
            .inner
            .request(Method::GET, self.request_url(query))
            .send()?
            .error_for_status()?;

        let json = response.json::<Response>()?;
        debug!(status = %json.status, routes = json.routes.len(), "directions response");

        json.into_route_result()
    }
}
