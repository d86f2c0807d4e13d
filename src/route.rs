use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, Local};

use crate::error::ServiceError;

pub type Address = String;

const METERS_PER_MILE: f64 = 1609.344;

/// A single directions lookup: where from, where to, and when to leave.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteQuery {
    pub origin: Address,
    pub destination: Address,
    pub departure_time: DateTime<Local>,
}

impl RouteQuery {
    /// Leave at `now`, or `offset_minutes` after it.
    pub fn new(
        origin: &Address,
        destination: &Address,
        now: DateTime<Local>,
        offset_minutes: Option<u32>,
    ) -> Self {
        let offset = Duration::minutes(i64::from(offset_minutes.unwrap_or(0)));

        Self {
            origin: origin.clone(),
            destination: destination.clone(),
            departure_time: now + offset,
        }
    }
}

/// What the directions service told us about the first leg of the best route.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteResult {
    pub duration_seconds: u64,
    /// Absent when the service has no traffic data for the route.
    pub duration_in_traffic_seconds: Option<u64>,
    pub distance_meters: u64,
    pub start_address: String,
    pub end_address: String,
}

impl RouteResult {
    /// Traffic-aware duration, falling back to the free-flow duration.
    pub fn travel_seconds(&self) -> u64 {
        self.duration_in_traffic_seconds
            .unwrap_or(self.duration_seconds)
    }
}

/// Anything that can answer a [`RouteQuery`].
pub trait DirectionsService {
    fn get_route(&self, query: &RouteQuery) -> Result<RouteResult, ServiceError>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Units {
    #[default]
    Imperial,
    Metric,
}

impl Units {
    pub fn distance(self, meters: u64) -> f64 {
        match self {
            Units::Imperial => meters as f64 / METERS_PER_MILE,
            Units::Metric => meters as f64 / 1000.0,
        }
    }

    fn distance_label(self) -> &'static str {
        match self {
            Units::Imperial => "mi",
            Units::Metric => "km",
        }
    }

    fn speed_label(self) -> &'static str {
        match self {
            Units::Imperial => "mph",
            Units::Metric => "km/h",
        }
    }
}

/// Distance per hour. A zero duration reports a speed of zero.
pub fn average_speed(distance: f64, seconds: u64) -> f64 {
    if seconds == 0 {
        return 0.0;
    }

    distance / (seconds as f64 / 3600.0)
}

/// Renders seconds as `42 min` or `1 h 05 min`, rounded to the nearest minute.
pub fn format_duration(seconds: u64) -> String {
    let minutes = seconds.saturating_add(30) / 60;
    let (hours, minutes) = (minutes / 60, minutes % 60);

    if hours > 0 {
        format!("{} h {:02} min", hours, minutes)
    } else {
        format!("{} min", minutes)
    }
}

#[derive(Clone, Debug)]
pub struct Estimate {
    pub query: RouteQuery,
    pub result: RouteResult,
}

impl Estimate {
    /// `None` when the travel time runs past what a timestamp can represent.
    pub fn arrival(&self) -> Option<DateTime<Local>> {
        let travel =
            Duration::from_std(StdDuration::from_secs(self.result.travel_seconds())).ok()?;
        self.query.departure_time.checked_add_signed(travel)
    }

    pub fn average_speed(&self, units: Units) -> f64 {
        average_speed(
            units.distance(self.result.distance_meters),
            self.result.travel_seconds(),
        )
    }

    /// `5:42 PM (1 h 05 min, 32.4 mi @ 29.9 mph)`
    pub fn summary(&self, units: Units) -> String {
        let arrival = match self.arrival() {
            Some(arrival) => arrival.format("%-I:%M %p").to_string(),
            None => "unknown".to_string(),
        };

        format!(
            "{} ({}, {} @ {:.1} {})",
            arrival,
            format_duration(self.result.travel_seconds()),
            format_distance(self.result.distance_meters, units),
            self.average_speed(units),
            units.speed_label(),
        )
    }
}

fn format_distance(meters: u64, units: Units) -> String {
    format!("{:.1} {}", units.distance(meters), units.distance_label())
}

/// The current estimate plus, optionally, one for a later departure.
#[derive(Clone, Debug)]
pub struct Report {
    pub current: Estimate,
    pub future: Option<(u32, Estimate)>,
}

impl Report {
    pub fn render(&self, units: Units) -> String {
        let current = &self.current;
        let mut lines = vec![
            format!(
                "Route: {} → {} ({})",
                current.result.start_address,
                current.result.end_address,
                format_distance(current.result.distance_meters, units),
            ),
            format!("Current ETA: {}", current.summary(units)),
        ];

        if let Some((minutes, future)) = &self.future {
            lines.push(format!("ETA in {} min: {}", minutes, future.summary(units)));
        }

        lines.join("\n")
    }
}

/// Ask for the ETA leaving `now`, and again leaving `future_minutes` later if given.
///
/// Both queries share the same `now` so the future departure is offset from the
/// moment of invocation rather than from when the first response arrived. The
/// later query uses the addresses as the service resolved them the first time.
pub fn request_etas(
    service: &impl DirectionsService,
    origin: &Address,
    destination: &Address,
    now: DateTime<Local>,
    future_minutes: Option<u32>,
) -> Result<Report, ServiceError> {
    let query = RouteQuery::new(origin, destination, now, None);
    let result = service.get_route(&query)?;
    let current = Estimate { query, result };

    let future = match future_minutes {
        Some(minutes) => {
            let query = RouteQuery::new(
                &resolved_or(&current.result.start_address, origin),
                &resolved_or(&current.result.end_address, destination),
                now,
                Some(minutes),
            );
            let result = service.get_route(&query)?;
            Some((minutes, Estimate { query, result }))
        }
        None => None,
    };

    Ok(Report { current, future })
}

fn resolved_or(resolved: &str, given: &Address) -> Address {
    if resolved.trim().is_empty() {
        given.clone()
    } else {
        resolved.to_string()
    }
}
