use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// One of the fixed competing houses. Houses are the unit of ranking and
/// cannot be created dynamically.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum House {
    Ankara,
    Bagdad,
    Cairo,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn house_roundtrips_through_display() {
        for house in House::iter() {
            assert_eq!(House::from_str(&house.to_string()).unwrap(), house);
        }
    }

    #[test]
    fn house_order_is_alphabetical() {
        let houses: Vec<House> = House::iter().collect();
        assert_eq!(houses, vec![House::Ankara, House::Bagdad, House::Cairo]);
    }
}
