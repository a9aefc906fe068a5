use std::fmt;

use crate::{error::Error, Result};
use crate::{generate_trips, City, Trip, TripList, CITIES};

const STATIONS_SEPARATOR: &str = " · ";

/// Choice of a route and a trip over the generated catalog.
///
/// The catalog is generated once when the view is created.
/// Changing the origin or the destination drops the chosen trip.
pub struct TripSelectionView {
    catalog: TripList,
    origin: &'static City,
    destination: &'static City,
    selected_trip_id: Option<String>,
}

impl TripSelectionView {
    /// Creates a view on the route between the first two cities.
    pub fn new() -> Self {
        TripSelectionView {
            catalog: generate_trips(&CITIES),
            origin: &CITIES[0],
            destination: &CITIES[1],
            selected_trip_id: None,
        }
    }

    /// Returns the whole catalog of trips.
    #[inline]
    pub fn catalog(&self) -> &TripList {
        &self.catalog
    }

    /// Returns the city of departure.
    #[inline]
    pub fn origin(&self) -> &'static City {
        self.origin
    }

    /// Returns the city of arrival.
    #[inline]
    pub fn destination(&self) -> &'static City {
        self.destination
    }

    /// Returns the identifier of the chosen trip.
    #[inline]
    pub fn selected_trip_id(&self) -> Option<&str> {
        self.selected_trip_id.as_deref()
    }

    /// Sets the city of departure and drops the chosen trip.
    ///
    /// If the destination was the same city, it moves to the first
    /// of the remaining cities.
    ///
    /// # Errors
    ///
    /// The method fails if no city has the code.
    pub fn select_origin(&mut self, code: &str) -> Result<()> {
        let city = City::find(code)?;
        debug!("origin: {}", city.code());

        self.origin = city;
        if self.destination.code() == city.code() {
            if let Some(first) = self.destination_candidates().next() {
                debug!("destination moved to {}", first.code());
                self.destination = first;
            }
        }
        self.selected_trip_id = None;

        Ok(())
    }

    /// Returns the cities that can be chosen as a destination.
    pub fn destination_candidates(&self) -> impl Iterator<Item = &'static City> {
        let origin = self.origin.code();
        CITIES.iter().filter(move |c| c.code() != origin)
    }

    /// Sets the city of arrival and drops the chosen trip.
    ///
    /// # Errors
    ///
    /// The method fails if no city has the code or the city is the origin.
    pub fn select_destination(&mut self, code: &str) -> Result<()> {
        let city = City::find(code)?;

        if city.code() == self.origin.code() {
            warn!("destination {} is the origin", city.code());
            return Err(Error::SameOriginDestination(city.code().to_string()));
        }
        debug!("destination: {}", city.code());

        self.destination = city;
        self.selected_trip_id = None;

        Ok(())
    }

    /// Chooses one of the trips of the current route.
    ///
    /// # Errors
    ///
    /// The method fails if the trip doesn't run on the current route.
    /// The previous choice is kept then.
    pub fn select_trip(&mut self, id: &str) -> Result<()> {
        let id = id.trim();

        if !self.filtered_trips().any(|t| t.id() == id) {
            warn!("trip {} not found on the route", id);
            return Err(Error::TripNotFound(id.to_string()));
        }
        debug!("selected trip: {}", id);

        self.selected_trip_id = Some(id.to_string());
        Ok(())
    }

    /// Drops the chosen trip.
    pub fn clear_selection(&mut self) {
        self.selected_trip_id = None;
    }

    /// Returns the trips of the current route in catalog order.
    pub fn filtered_trips(&self) -> impl Iterator<Item = &Trip> {
        let (origin, destination) = (self.origin.code(), self.destination.code());
        self.catalog
            .iter()
            .filter(move |t| t.from().code() == origin && t.to().code() == destination)
    }

    /// Returns the chosen trip if it runs on the current route.
    pub fn selected_trip(&self) -> Option<&Trip> {
        let id = self.selected_trip_id.as_deref()?;
        self.filtered_trips().find(|t| t.id() == id)
    }

    /// Returns the stations of the city of departure in one line.
    pub fn origin_stations(&self) -> String {
        self.origin.stations().join(STATIONS_SEPARATOR)
    }

    /// Returns the stations of the city of arrival in one line.
    pub fn destination_stations(&self) -> String {
        self.destination.stations().join(STATIONS_SEPARATOR)
    }

    /// Returns the booking summary of the chosen trip.
    pub fn booking_summary(&self) -> BookingSummary<'_> {
        match self.selected_trip() {
            Some(trip) => BookingSummary::Ready(trip),
            None => BookingSummary::Placeholder,
        }
    }

    /// Confirms the booking of the chosen trip. Nothing is booked.
    pub fn confirm_booking(&self) {
        match self.selected_trip() {
            Some(trip) => info!("booking of {} confirmed", trip.id()),
            None => debug!("no trip to confirm"),
        }
    }
}

impl Default for TripSelectionView {
    fn default() -> Self {
        TripSelectionView::new()
    }
}

#[derive(Debug, PartialEq)]
/// The last step of the booking.
pub enum BookingSummary<'a> {
    /// No trip is chosen yet.
    Placeholder,
    /// The chosen trip.
    Ready(&'a Trip),
}

impl fmt::Display for BookingSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            BookingSummary::Placeholder => {
                write!(f, "Choose a trip from the list to see the booking details.")
            }
            BookingSummary::Ready(trip) => {
                writeln!(f, "Operator: {}", trip.operator())?;
                writeln!(
                    f,
                    "Route: {} ({}) → {} ({})",
                    trip.from().name(),
                    trip.from_station(),
                    trip.to().name(),
                    trip.to_station()
                )?;
                writeln!(
                    f,
                    "Time: {} - {} · {} h",
                    trip.departure(),
                    trip.arrival(),
                    trip.duration_hours()
                )?;
                write!(f, "Total: {} SAR", trip.price())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BookingSummary, TripSelectionView};
    use crate::error::Error;

    #[test]
    fn default_route_test() {
        let view = TripSelectionView::new();

        assert_eq!(view.origin().code(), "RUH");
        assert_eq!(view.destination().code(), "JED");
        assert_eq!(view.catalog().len(), 728);
        assert_eq!(view.selected_trip_id(), None);
        assert_eq!(view.booking_summary(), BookingSummary::Placeholder);

        let ids: Vec<&str> = view.filtered_trips().map(|t| t.id()).collect();
        assert_eq!(
            ids,
            vec!["RUH-JED-0600", "RUH-JED-0930", "RUH-JED-1400", "RUH-JED-2015"]
        );
    }

    #[test]
    fn select_trip_test() {
        let mut view = TripSelectionView::new();

        view.select_trip("RUH-JED-0930").unwrap();
        let trip = view.selected_trip().unwrap();
        assert_eq!(trip.id(), "RUH-JED-0930");
        assert_eq!(view.booking_summary(), BookingSummary::Ready(trip));

        match view.select_trip("DMM-KHB-0600") {
            Err(Error::TripNotFound(id)) => assert_eq!(id, "DMM-KHB-0600"),
            _ => panic!("trip of another route was selected"),
        }
        assert_eq!(view.selected_trip_id(), Some("RUH-JED-0930"));

        view.clear_selection();
        assert!(view.selected_trip().is_none());
    }

    #[test]
    fn change_route_resets_trip_test() {
        let mut view = TripSelectionView::new();

        view.select_trip("RUH-JED-0600").unwrap();
        view.select_origin("DMM").unwrap();
        assert_eq!(view.selected_trip_id(), None);
        assert_eq!(view.destination().code(), "JED");

        view.select_trip("DMM-JED-1400").unwrap();
        view.select_destination("KHB").unwrap();
        assert_eq!(view.selected_trip_id(), None);
        assert_eq!(view.filtered_trips().count(), 4);
    }

    #[test]
    fn same_origin_destination_test() {
        let mut view = TripSelectionView::new();

        assert!(view.destination_candidates().all(|c| c.code() != "RUH"));
        assert_eq!(view.destination_candidates().count(), 13);

        match view.select_destination("ruh") {
            Err(Error::SameOriginDestination(code)) => assert_eq!(code, "RUH"),
            _ => panic!("origin was selected as the destination"),
        }
        assert_eq!(view.destination().code(), "JED");

        view.select_origin("JED").unwrap();
        assert_eq!(view.origin().code(), "JED");
        assert_eq!(view.destination().code(), "RUH");
        assert_eq!(view.filtered_trips().count(), 4);
    }

    #[test]
    fn unknown_city_test() {
        let mut view = TripSelectionView::new();

        assert!(view.select_origin("XXX").is_err());
        assert!(view.select_destination("").is_err());
        assert_eq!(view.origin().code(), "RUH");
    }

    #[test]
    fn stations_test() {
        let view = TripSelectionView::new();

        assert_eq!(
            view.origin_stations(),
            "Riyadh Central Coach Station · King Khalid International Airport"
        );
        assert_eq!(
            view.destination_stations(),
            "Jeddah Station - Al Marwah · King Abdulaziz Airport"
        );
    }

    #[test]
    fn summary_display_test() {
        let mut view = TripSelectionView::new();
        assert_eq!(
            view.booking_summary().to_string(),
            "Choose a trip from the list to see the booking details."
        );

        view.select_trip("RUH-JED-0600").unwrap();
        assert_eq!(
            view.booking_summary().to_string(),
            "Operator: Haramain Express\n\
             Route: Riyadh (Riyadh Central Coach Station) → Jeddah (King Abdulaziz Airport)\n\
             Time: 06:00 - 18:00 · 12 h\n\
             Total: 223 SAR"
        );
    }
}
