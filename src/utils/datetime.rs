use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike};

/// Calendar parts of a timestamp as the form expects them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarFields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl CalendarFields {
    /// Splits a timestamp in its own time zone.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
        }
    }

    pub fn year_value(&self) -> String {
        format!("{:04}", self.year)
    }

    pub fn month_value(&self) -> String {
        format!("{:02}", self.month)
    }

    pub fn day_value(&self) -> String {
        format!("{:02}", self.day)
    }

    pub fn hour_value(&self) -> String {
        format!("{:02}", self.hour)
    }

    pub fn minute_value(&self) -> String {
        format!("{:02}", self.minute)
    }
}

pub fn format_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%Y-%m-%d %H:%M %:z").to_string()
}

/// Renders a session length like `8h 05m`
pub fn format_duration(duration: Duration) -> String {
    let minutes = duration.num_minutes().max(0);
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}
