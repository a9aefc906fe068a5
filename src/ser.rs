//! Serializers for the core types.

use serde::ser::{Serialize, Serializer};

use crate::TripTime;

impl Serialize for TripTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::TripTime;

    #[test]
    fn trip_time_test() {
        let t = TripTime::new(5, 7);
        let json = serde_json::to_string(&t).unwrap();

        assert_eq!(json, r#""05:07""#);
    }
}
