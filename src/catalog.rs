use serde::Serialize;
use std::fmt;

use crate::schedule::{self, DEPARTURES};
use crate::{City, TripList, TripTime};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// A generated trip between two cities.
pub struct Trip {
    id: String,
    from: &'static City,
    to: &'static City,
    departure: TripTime,
    arrival: TripTime,
    operator: &'static str,
    price: u32,
    from_station: &'static str,
    to_station: &'static str,
    duration_hours: f64,
}

impl Trip {
    /// Returns the trip identifier, e.g. `RUH-JED-0600`.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the city of departure.
    #[inline]
    pub fn from(&self) -> &'static City {
        self.from
    }

    /// Returns the city of arrival.
    #[inline]
    pub fn to(&self) -> &'static City {
        self.to
    }

    /// Returns the departure time.
    #[inline]
    pub fn departure(&self) -> TripTime {
        self.departure
    }

    /// Returns the arrival time.
    #[inline]
    pub fn arrival(&self) -> TripTime {
        self.arrival
    }

    /// Returns the operator name.
    #[inline]
    pub fn operator(&self) -> &'static str {
        self.operator
    }

    /// Returns the price, never below 95.
    #[inline]
    pub fn price(&self) -> u32 {
        self.price
    }

    /// Returns the station of departure.
    #[inline]
    pub fn from_station(&self) -> &'static str {
        self.from_station
    }

    /// Returns the station of arrival.
    #[inline]
    pub fn to_station(&self) -> &'static str {
        self.to_station
    }

    /// Returns the duration of the trip in hours.
    #[inline]
    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    /// Performs the conversion into a JSON string.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} → {}, \"{}\" - \"{}\", {} - {}, {} h, {} SAR ({})",
            self.operator,
            self.from.name(),
            self.to.name(),
            self.from_station,
            self.to_station,
            self.departure,
            self.arrival,
            self.duration_hours,
            self.price,
            self.id
        )
    }
}

/// Generates the trips of every departure for all ordered pairs
/// of different cities.
///
/// # Examples
///
/// ```rust
/// # use routes_planner::{generate_trips, CITIES};
/// #
/// let trips = generate_trips(&CITIES);
///
/// assert_eq!(trips.len(), 14 * 13 * 4);
/// ```
pub fn generate_trips(cities: &'static [City]) -> TripList {
    let departures: Vec<TripTime> = DEPARTURES
        .iter()
        .filter_map(|d| crate::parse_trip_time!(d))
        .collect();
    let departures = departures.as_slice();

    let trips: TripList = cities
        .iter()
        .flat_map(|from| {
            cities
                .iter()
                .filter(move |to| to.code() != from.code())
                .flat_map(move |to| {
                    departures
                        .iter()
                        .enumerate()
                        .map(move |(slot, &departure)| make_trip(from, to, slot, departure))
                })
        })
        .collect();

    info!("{} trips generated", trips.len());
    trips
}

fn make_trip(from: &'static City, to: &'static City, slot: usize, departure: TripTime) -> Trip {
    let duration_hours = schedule::duration_hours(from, to);

    let trip = Trip {
        id: format!("{}-{}-{}", from.code(), to.code(), departure.compact()),
        from,
        to,
        departure,
        arrival: schedule::arrival(departure, duration_hours),
        operator: schedule::operator(slot, from, to),
        price: schedule::price(duration_hours, slot),
        from_station: from.station(slot),
        to_station: to.station(slot + 1),
        duration_hours,
    };
    trace!("trip: {}", trip);

    trip
}
