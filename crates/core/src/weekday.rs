//! Days of the week, in the Monday-first order the back-office uses.

use crate::error::DomainError;
use crate::labelled_enum;
use crate::value_object::ValueObject;

labelled_enum! {
    pub enum Weekday: DomainError = |s: String| DomainError::validation(format!("unknown weekday '{s}'"));
    {
        Monday => "Monday",
        Tuesday => "Tuesday",
        Wednesday => "Wednesday",
        Thursday => "Thursday",
        Friday => "Friday",
        Saturday => "Saturday",
        Sunday => "Sunday",
    }
}

impl ValueObject for Weekday {}

impl Weekday {
    /// Position in the week, Monday = 0.
    pub fn index(self) -> usize {
        Weekday::ALL.iter().position(|d| *d == self).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_labels() {
        assert_eq!(" Sunday ".parse::<Weekday>().unwrap(), Weekday::Sunday);
        assert!("Funday".parse::<Weekday>().is_err());
        assert!("friday".parse::<Weekday>().is_err());
    }

    #[test]
    fn week_starts_on_monday() {
        assert_eq!(Weekday::ALL.len(), 7);
        assert_eq!(Weekday::Monday.index(), 0);
        assert_eq!(Weekday::Sunday.index(), 6);
    }

    #[test]
    fn serializes_as_plain_label() {
        let json = serde_json::to_string(&Weekday::Wednesday).unwrap();
        assert_eq!(json, "\"Wednesday\"");
    }
}
