use std::error::Error as StdError;
use std::fmt;

/// The Errors wrapper that may occur.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Parsing of the time failed.
    ParseTimeError(String),
    /// No city is known by the passed code.
    UnknownCity(String),
    /// The destination is the same city as the origin.
    SameOriginDestination(String),
    /// The trip is not among the trips of the chosen route.
    TripNotFound(String),
    /// The page location is not a valid URL.
    InvalidLocation(String),
    /// The admin framework failed to load.
    AdminLoadError(String),
    /// Data serialization failed.
    SerializeError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::ParseTimeError(ref s) => {
                debug!("parsing time error: {}", s);
                write!(f, "failed to parse the time of day")
            }
            Error::UnknownCity(ref s) => {
                write!(f, "unknown city code \"{}\"", s)
            }
            Error::SameOriginDestination(ref s) => {
                write!(f, "destination \"{}\" is the same as the origin", s)
            }
            Error::TripNotFound(ref s) => {
                write!(f, "trip \"{}\" is not available on the chosen route", s)
            }
            Error::InvalidLocation(ref s) => {
                debug!("parsing location error: {}", s);
                write!(f, "the page location is not a valid URL")
            }
            Error::AdminLoadError(ref e) => {
                error!("{}", e);
                write!(f, "failed to load the admin interface")
            }
            Error::SerializeError(ref e) => {
                error!("{}", e);
                write!(f, "failed to serialize data")
            }
        }
    }
}

impl StdError for Error {}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Error {
        Error::SerializeError(error.to_string())
    }
}
