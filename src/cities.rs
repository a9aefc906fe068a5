use serde::Serialize;
use std::fmt;

use crate::{error::Error, Result};

#[derive(Debug, PartialEq, Eq, Serialize)]
/// A city served by the trips with its main stations.
pub struct City {
    name: &'static str,
    code: &'static str,
    region: &'static str,
    stations: &'static [&'static str],
}

impl City {
    /// Looks the city up by its code.
    ///
    /// # Errors
    ///
    /// The method fails if no city has the code.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use routes_planner::City;
    /// #
    /// let city = City::find("jed").unwrap();
    ///
    /// assert_eq!(city.name(), "Jeddah");
    /// ```
    pub fn find(code: &str) -> Result<&'static City> {
        let code = code.trim().to_uppercase();

        match CITIES.iter().find(|c| c.code == code) {
            Some(c) => Ok(c),
            None => {
                warn!("no city with code {}", code);
                Err(Error::UnknownCity(code))
            }
        }
    }

    /// Returns the name of the city.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the short code of the city.
    #[inline]
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Returns the administrative region of the city.
    #[inline]
    pub fn region(&self) -> &'static str {
        self.region
    }

    /// Returns the stations of the city, never empty.
    #[inline]
    pub fn stations(&self) -> &'static [&'static str] {
        self.stations
    }

    /// Returns the station at `index`, counting round the list.
    pub fn station(&self, index: usize) -> &'static str {
        self.stations[index % self.stations.len()]
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} — {}", self.name, self.region)
    }
}

/// Cities in the order they are listed to the user.
pub static CITIES: [City; 14] = [
    City {
        name: "Riyadh",
        code: "RUH",
        region: "Riyadh",
        stations: &[
            "Riyadh Central Coach Station",
            "King Khalid International Airport",
        ],
    },
    City {
        name: "Jeddah",
        code: "JED",
        region: "Makkah",
        stations: &["Jeddah Station - Al Marwah", "King Abdulaziz Airport"],
    },
    City {
        name: "Makkah",
        code: "MKH",
        region: "Makkah",
        stations: &["Haramein Station", "Al Aziziyah"],
    },
    City {
        name: "Medina",
        code: "MED",
        region: "Al Madinah",
        stations: &["Prince Mohammed bin Abdulaziz Airport", "Quba Station"],
    },
    City {
        name: "Dammam",
        code: "DMM",
        region: "Eastern Province",
        stations: &["Dammam Railway Station", "King Fahd Airport"],
    },
    City {
        name: "Khobar",
        code: "KHB",
        region: "Eastern Province",
        stations: &["Al Khobar Bus Station", "Seafront Terminal"],
    },
    City {
        name: "Abha",
        code: "AHB",
        region: "Asir",
        stations: &["Abha Regional Airport", "King Abdullah Road Station"],
    },
    City {
        name: "Jazan",
        code: "GIZ",
        region: "Jazan",
        stations: &["Jazan Airport", "Corniche Terminal"],
    },
    City {
        name: "Tabuk",
        code: "TUU",
        region: "Tabuk",
        stations: &["Prince Sultan Airport", "Northern Gateway Station"],
    },
    City {
        name: "Hail",
        code: "HAS",
        region: "Hail",
        stations: &["Hail Airport", "Al Salam Station"],
    },
    City {
        name: "Najran",
        code: "EAM",
        region: "Najran",
        stations: &["Najran Airport", "South Terminal"],
    },
    City {
        name: "Taif",
        code: "TIF",
        region: "Makkah",
        stations: &["Taif Airport", "Al Hawiyah Station"],
    },
    City {
        name: "Al Baha",
        code: "ABT",
        region: "Al Bahah",
        stations: &["Al Aqiq Airport", "King Fahd Road Station"],
    },
    City {
        name: "AlUla",
        code: "ULH",
        region: "Al Madinah",
        stations: &["Prince Abdul Majeed Airport", "Old Town Terminal"],
    },
];

#[cfg(test)]
mod tests {
    use super::{City, CITIES};
    use std::collections::HashSet;

    #[test]
    fn find_test() {
        assert_eq!(City::find("RUH").unwrap().name(), "Riyadh");
        assert_eq!(City::find(" ulh ").unwrap().name(), "AlUla");
        assert!(City::find("XXX").is_err());
        assert!(City::find("").is_err());
    }

    #[test]
    fn cities_test() {
        let codes: HashSet<&str> = CITIES.iter().map(|c| c.code()).collect();
        assert_eq!(codes.len(), CITIES.len());
        assert!(CITIES.iter().all(|c| !c.stations().is_empty()));
    }

    #[test]
    fn station_test() {
        let city = City::find("DMM").unwrap();
        assert_eq!(city.station(0), "Dammam Railway Station");
        assert_eq!(city.station(3), "King Fahd Airport");
        assert_eq!(format!("{}", city), "Dammam — Eastern Province");
    }
}
