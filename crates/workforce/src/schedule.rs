//! Weekly availability on a half-hour grid.
//!
//! Stored shape (one entry per weekday):
//!
//! ```json
//! { "Monday": { "startTime": "8:00 AM", "endTime": "8:00 PM" },
//!   "Sunday": { "startTime": "OFF", "endTime": "OFF" } }
//! ```

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use cleanops_core::{DomainError, DomainResult, ValueObject, Weekday};

const OFF: &str = "OFF";
const FIRST_SLOT_HOUR: u32 = 8;
const LAST_SLOT_HOUR: u32 = 20;

/// A start or end time on the scheduling grid (8:00 AM .. 8:30 PM, every 30 minutes).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShiftTime(NaiveTime);

impl ValueObject for ShiftTime {}

impl ShiftTime {
    /// Build a grid time from a 24-hour clock reading.
    pub fn at(hour: u32, minute: u32) -> DomainResult<Self> {
        let on_grid =
            (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR).contains(&hour) && (minute == 0 || minute == 30);
        if !on_grid {
            return Err(DomainError::validation(format!(
                "{hour:02}:{minute:02} is not a schedulable time"
            )));
        }
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| DomainError::validation("invalid time of day"))
    }

    /// Every grid slot in order.
    pub fn grid() -> impl Iterator<Item = ShiftTime> {
        (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR)
            .flat_map(|h| [0, 30].into_iter().map(move |m| (h, m)))
            .filter_map(|(h, m)| ShiftTime::at(h, m).ok())
    }

    /// Parse the 12-hour form used in stored documents, e.g. `"8:30 AM"`.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let time = NaiveTime::parse_from_str(raw.trim(), "%I:%M %p")
            .map_err(|_| DomainError::validation(format!("invalid time '{raw}'")))?;
        Self::at(time.hour(), time.minute())
    }

    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    pub fn minute(self) -> u32 {
        self.0.minute()
    }
}

impl core::fmt::Display for ShiftTime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0.format("%-I:%M %p"))
    }
}

/// The option list offered for start/end times: `"OFF"` then every grid slot.
pub fn time_options() -> Vec<String> {
    core::iter::once(OFF.to_string())
        .chain(ShiftTime::grid().map(|t| t.to_string()))
        .collect()
}

/// One day's availability.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DayWire", into = "DayWire")]
pub enum DayAvailability {
    Off,
    Window { start: ShiftTime, end: ShiftTime },
}

impl ValueObject for DayAvailability {}

impl DayAvailability {
    pub fn window(start: ShiftTime, end: ShiftTime) -> DomainResult<Self> {
        if end <= start {
            return Err(DomainError::validation(format!(
                "shift must end after it starts ({start} - {end})"
            )));
        }
        Ok(DayAvailability::Window { start, end })
    }

    pub fn is_off(&self) -> bool {
        matches!(self, DayAvailability::Off)
    }
}

impl core::fmt::Display for DayAvailability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DayAvailability::Off => f.write_str(OFF),
            DayAvailability::Window { start, end } => write!(f, "{start} - {end}"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DayWire {
    start_time: String,
    end_time: String,
}

impl TryFrom<DayWire> for DayAvailability {
    type Error = DomainError;

    fn try_from(wire: DayWire) -> Result<Self, Self::Error> {
        // A day is off whenever its start is OFF, whatever the end says.
        if wire.start_time.trim() == OFF {
            return Ok(DayAvailability::Off);
        }
        let start = ShiftTime::parse(&wire.start_time)?;
        let end = ShiftTime::parse(&wire.end_time)?;
        DayAvailability::window(start, end)
    }
}

impl From<DayAvailability> for DayWire {
    fn from(day: DayAvailability) -> Self {
        match day {
            DayAvailability::Off => DayWire {
                start_time: OFF.to_string(),
                end_time: OFF.to_string(),
            },
            DayAvailability::Window { start, end } => DayWire {
                start_time: start.to_string(),
                end_time: end.to_string(),
            },
        }
    }
}

/// Availability for each day of the week.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WeeklyAvailability {
    monday: DayAvailability,
    tuesday: DayAvailability,
    wednesday: DayAvailability,
    thursday: DayAvailability,
    friday: DayAvailability,
    saturday: DayAvailability,
    sunday: DayAvailability,
}

impl ValueObject for WeeklyAvailability {}

impl Default for WeeklyAvailability {
    /// 8:00 AM to 8:00 PM, seven days a week.
    fn default() -> Self {
        let clock = |h| ShiftTime(NaiveTime::from_hms_opt(h, 0, 0).unwrap_or_default());
        let day = DayAvailability::Window {
            start: clock(8),
            end: clock(20),
        };
        Self::uniform(day)
    }
}

impl WeeklyAvailability {
    pub fn uniform(day: DayAvailability) -> Self {
        Self {
            monday: day,
            tuesday: day,
            wednesday: day,
            thursday: day,
            friday: day,
            saturday: day,
            sunday: day,
        }
    }

    pub fn get(&self, day: Weekday) -> DayAvailability {
        match day {
            Weekday::Monday => self.monday,
            Weekday::Tuesday => self.tuesday,
            Weekday::Wednesday => self.wednesday,
            Weekday::Thursday => self.thursday,
            Weekday::Friday => self.friday,
            Weekday::Saturday => self.saturday,
            Weekday::Sunday => self.sunday,
        }
    }

    pub fn set(&mut self, day: Weekday, availability: DayAvailability) {
        let slot = match day {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
            Weekday::Saturday => &mut self.saturday,
            Weekday::Sunday => &mut self.sunday,
        };
        *slot = availability;
    }

    pub fn with(mut self, day: Weekday, availability: DayAvailability) -> Self {
        self.set(day, availability);
        self
    }

    /// Human summary grouping consecutive days with identical availability,
    /// e.g. `["Monday - Friday: 8:00 AM - 8:00 PM", "Saturday - Sunday: OFF"]`.
    pub fn summary(&self) -> Vec<String> {
        let days = Weekday::ALL;
        let mut lines = Vec::new();
        let mut run_start = days[0];
        let mut run_value = self.get(run_start);

        for pair in days.windows(2) {
            let (prev, day) = (pair[0], pair[1]);
            let value = self.get(day);
            if value == run_value {
                continue;
            }
            lines.push(render_run(run_start, prev, run_value));
            run_start = day;
            run_value = value;
        }
        lines.push(render_run(run_start, days[days.len() - 1], run_value));
        lines
    }
}

fn render_run(first: Weekday, last: Weekday, value: DayAvailability) -> String {
    if first == last {
        format!("{first}: {value}")
    } else {
        format!("{first} - {last}: {value}")
    }
}
