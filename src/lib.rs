//! # routes_planner
//!
//! The `routes_planner` crate generates a catalog of synthetic trips
//! between the cities of Saudi Arabia, keeps the state of a trip
//! selection and resolves the API entrypoint for the admin page.
//!
//! ## Browsing trips
//!
//! Create a view, choose a route and pick one of its trips:
//!
//! ```rust
//! # use routes_planner::{BookingSummary, TripSelectionView};
//! #
//! let mut view = TripSelectionView::new();
//! view.select_origin("RUH").unwrap();
//! view.select_destination("JED").unwrap();
//!
//! assert_eq!(view.filtered_trips().count(), 4);
//!
//! view.select_trip("RUH-JED-0600").unwrap();
//! match view.booking_summary() {
//!     BookingSummary::Ready(trip) => println!("{}", trip),
//!     BookingSummary::Placeholder => println!("Nothing selected"),
//! };
//! ```
//!
//! ## Resolving the entrypoint
//!
//! ```rust
//! # use routes_planner::{resolve_entrypoint, EntrypointConfig, ExecutionContext};
//! #
//! let context = ExecutionContext::browser("https://example.com/admin#/").unwrap();
//! let config = EntrypointConfig::default();
//!
//! assert_eq!(resolve_entrypoint(&context, &config), "https://example.com/api");
//! ```
//!

#[macro_use]
extern crate log;

use chrono::{NaiveTime, Timelike};
use serde::Serialize;
use std::{fmt, fmt::Display, str::FromStr};

mod error;
pub use crate::error::Error;

/// A `Result` alias where the `Err` case is `routes_planner::Error`.
pub type Result<T> = std::result::Result<T, Error>;

mod ser;

mod cities;
pub use crate::cities::{City, CITIES};

mod schedule;
pub use crate::schedule::{BASE_DURATIONS, DEPARTURES, OPERATORS};

mod catalog;
pub use crate::catalog::{generate_trips, Trip};

mod selection;
pub use crate::selection::{BookingSummary, TripSelectionView};

mod entrypoint;
pub use crate::entrypoint::{
    default_entrypoint, resolve_entrypoint, EntrypointConfig, ExecutionContext, API_PATH,
    ENTRYPOINT_VAR,
};

mod admin;
pub use crate::admin::{AdminPage, AdminView, ADMIN_TITLE};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// A time of departure or arrival on a 24-hour wall clock.
pub struct TripTime(NaiveTime);

impl TripTime {
    /// Creates `TripTime` from the number of hours and minutes.
    /// Out of range values give midnight.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use routes_planner::TripTime;
    /// #
    /// let t = TripTime::new(6, 0);
    ///
    /// assert_eq!(format!("{}", t), "06:00");
    /// ```
    pub fn new(hours: u32, minutes: u32) -> Self {
        TripTime(NaiveTime::from_hms_opt(hours, minutes, 0).unwrap_or_default())
    }

    /// Returns the time the given number of whole hours later,
    /// wrapping around midnight.
    pub fn add_hours(&self, hours: u32) -> Self {
        let (time, _) = self
            .0
            .overflowing_add_signed(chrono::Duration::hours(i64::from(hours)));
        TripTime(time)
    }

    /// Returns the time without the separator, e.g. `0930`.
    pub fn compact(&self) -> String {
        format!("{:02}{:02}", self.0.hour(), self.0.minute())
    }
}

impl Display for TripTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl From<NaiveTime> for TripTime {
    fn from(t: NaiveTime) -> Self {
        TripTime::new(t.hour(), t.minute())
    }
}

impl From<TripTime> for NaiveTime {
    #[inline]
    fn from(t: TripTime) -> Self {
        t.0
    }
}

impl FromStr for TripTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let time = NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map_err(|_| Error::ParseTimeError(s.to_string()))?;

        Ok(TripTime(time))
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! parse_trip_time {
    ($str:expr) => {
        match $str.parse::<$crate::TripTime>() {
            Ok(t) => Some(t),
            Err(_) => None,
        }
    };
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
/// Ordered list of trips.
pub struct TripList(Vec<Trip>);

impl TripList {
    /// Creates a new list from `Vec`.
    pub fn new(v: Vec<Trip>) -> Self {
        TripList(v)
    }

    /// Returns true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of trips in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns a reference to the trips of the list.
    #[inline]
    pub fn as_slice(&self) -> &[Trip] {
        self.0.as_slice()
    }

    /// Creates a non-consuming iterator.
    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.0.iter()
    }

    /// Performs the conversion from the list into `Vec`.
    pub fn to_vec(self) -> Vec<Trip> {
        self.0
    }

    /// Performs the conversion into a JSON string.
    ///
    /// # Errors
    ///
    /// The method fails if the trips couldn't be serialized.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Display for TripList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for t in &self.0 {
            writeln!(f, "{}", t)?;
        }
        Ok(())
    }
}

impl FromIterator<Trip> for TripList {
    fn from_iter<I: IntoIterator<Item = Trip>>(iter: I) -> Self {
        TripList(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TripList {
    type Item = &'a Trip;
    type IntoIter = std::slice::Iter<'a, Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for TripList {
    type Item = Trip;
    type IntoIter = std::vec::IntoIter<Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::parse_trip_time;
    use super::TripTime;

    #[test]
    fn trip_time_test() {
        assert_eq!(parse_trip_time!("09:30"), Some(TripTime::new(9, 30)));
        assert_eq!(parse_trip_time!("9:3x"), None);
        assert_eq!(parse_trip_time!(""), None);
        assert_eq!(TripTime::new(25, 0), TripTime::new(0, 0));
    }

    #[test]
    fn add_hours_test() {
        assert_eq!(TripTime::new(6, 0).add_hours(12), TripTime::new(18, 0));
        assert_eq!(TripTime::new(20, 15).add_hours(16), TripTime::new(12, 15));
        assert_eq!(TripTime::new(14, 0).add_hours(10), TripTime::new(0, 0));
        assert_eq!(TripTime::new(9, 30).add_hours(48), TripTime::new(9, 30));
    }

    #[test]
    fn compact_test() {
        assert_eq!(TripTime::new(9, 30).compact(), "0930");
        assert_eq!(TripTime::new(20, 15).compact(), "2015");
    }
}
