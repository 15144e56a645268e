use serde::{Deserialize, Serialize};

/// Currencies offered by the profile form
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    RUB,
    USD,
    EUR,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::RUB, Currency::USD, Currency::EUR];

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::RUB => "RUB",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    pub fn next(&self) -> Currency {
        match self {
            Currency::RUB => Currency::USD,
            Currency::USD => Currency::EUR,
            Currency::EUR => Currency::RUB,
        }
    }

    pub fn prev(&self) -> Currency {
        match self {
            Currency::RUB => Currency::EUR,
            Currency::USD => Currency::RUB,
            Currency::EUR => Currency::USD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&Currency::USD).unwrap(), "\"USD\"");
        let parsed: Currency = serde_json::from_str("\"EUR\"").unwrap();
        assert_eq!(parsed, Currency::EUR);
    }

    #[test]
    fn test_cycle_visits_every_option() {
        let mut current = Currency::RUB;
        for expected in Currency::ALL.iter().skip(1) {
            current = current.next();
            assert_eq!(current, *expected);
        }
        assert_eq!(current.next(), Currency::RUB);
        assert_eq!(Currency::RUB.prev(), Currency::EUR);
    }
}
