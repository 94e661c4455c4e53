use chrono::{DateTime, FixedOffset};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::SubmissionError;
use crate::utils::datetime::CalendarFields;
use crate::utils::logging::{log_form_error, log_form_request};

/// Form input ids, one per submitted value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFieldIds {
    pub name: String,
    pub start_time_hour: String,
    pub start_time_minute: String,
    pub start_date_year: String,
    pub start_date_month: String,
    pub start_date_day: String,
    pub end_time_hour: String,
    pub end_time_minute: String,
    pub end_date_year: String,
    pub end_date_month: String,
    pub end_date_day: String,
}

impl FormFieldIds {
    /// All ids in submission order, paired with the JSON key they came from
    pub fn labelled(&self) -> [(&'static str, &str); 11] {
        [
            ("name", self.name.as_str()),
            ("start_time_hour", self.start_time_hour.as_str()),
            ("start_time_minute", self.start_time_minute.as_str()),
            ("start_date_year", self.start_date_year.as_str()),
            ("start_date_month", self.start_date_month.as_str()),
            ("start_date_day", self.start_date_day.as_str()),
            ("end_time_hour", self.end_time_hour.as_str()),
            ("end_time_minute", self.end_time_minute.as_str()),
            ("end_date_year", self.end_date_year.as_str()),
            ("end_date_month", self.end_date_month.as_str()),
            ("end_date_day", self.end_date_day.as_str()),
        ]
    }
}

/// Posts finished sessions to the attendance form
#[derive(Clone)]
pub struct FormSubmitter {
    client: Client,
    form_url: String,
    field_ids: FormFieldIds,
}

impl FormSubmitter {
    pub fn new(form_url: impl Into<String>, field_ids: FormFieldIds) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            form_url: form_url.into(),
            field_ids,
        })
    }

    /// Builds the ordered `field id -> value` body for one session.
    pub fn build_form_data(
        &self,
        display_name: &str,
        start_time: &DateTime<FixedOffset>,
        end_time: &DateTime<FixedOffset>,
    ) -> Vec<(String, String)> {
        let start = CalendarFields::from_datetime(start_time);
        let end = CalendarFields::from_datetime(end_time);
        let ids = &self.field_ids;

        vec![
            (ids.name.clone(), display_name.to_string()),
            (ids.start_time_hour.clone(), start.hour_value()),
            (ids.start_time_minute.clone(), start.minute_value()),
            (ids.start_date_year.clone(), start.year_value()),
            (ids.start_date_month.clone(), start.month_value()),
            (ids.start_date_day.clone(), start.day_value()),
            (ids.end_time_hour.clone(), end.hour_value()),
            (ids.end_time_minute.clone(), end.minute_value()),
            (ids.end_date_year.clone(), end.year_value()),
            (ids.end_date_month.clone(), end.month_value()),
            (ids.end_date_day.clone(), end.day_value()),
        ]
    }

    /// Sends one form-encoded POST. Only a 2xx answer counts as success.
    pub async fn submit(
        &self,
        display_name: &str,
        start_time: &DateTime<FixedOffset>,
        end_time: &DateTime<FixedOffset>,
    ) -> Result<(), SubmissionError> {
        let form_data = self.build_form_data(display_name, start_time, end_time);
        log_form_request(&self.form_url, display_name);

        let response = match self.client.post(&self.form_url).form(&form_data).send().await {
            Ok(response) => response,
            Err(e) => {
                log_form_error(&self.form_url, display_name, &e.to_string());
                return Err(SubmissionError::Transport(e));
            }
        };

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            log_form_error(&self.form_url, display_name, &format!("status {status}"));
            Err(SubmissionError::Status(status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn field_ids() -> FormFieldIds {
        serde_json::from_str(
            r#"{
                "name": "entry.1",
                "start_time_hour": "entry.2_hour",
                "start_time_minute": "entry.2_minute",
                "start_date_year": "entry.3_year",
                "start_date_month": "entry.3_month",
                "start_date_day": "entry.3_day",
                "end_time_hour": "entry.4_hour",
                "end_time_minute": "entry.4_minute",
                "end_date_year": "entry.5_year",
                "end_date_month": "entry.5_month",
                "end_date_day": "entry.5_day"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_form_data_order_and_values() {
        let submitter = FormSubmitter::new("http://localhost/formResponse", field_ids()).unwrap();
        let sgt = FixedOffset::east_opt(8 * 3600).unwrap();
        let start = sgt.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap();
        let end = sgt.with_ymd_and_hms(2024, 1, 5, 17, 45, 0).unwrap();

        let data = submitter.build_form_data("Alice Tan", &start, &end);

        let expected: Vec<(String, String)> = [
            ("entry.1", "Alice Tan"),
            ("entry.2_hour", "09"),
            ("entry.2_minute", "30"),
            ("entry.3_year", "2024"),
            ("entry.3_month", "01"),
            ("entry.3_day", "05"),
            ("entry.4_hour", "17"),
            ("entry.4_minute", "45"),
            ("entry.5_year", "2024"),
            ("entry.5_month", "01"),
            ("entry.5_day", "05"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(data, expected);
    }

    #[test]
    fn test_labelled_ids_follow_submission_order() {
        let ids = field_ids();
        let labels: Vec<&str> = ids.labelled().iter().map(|(label, _)| *label).collect();
        assert_eq!(labels.first(), Some(&"name"));
        assert_eq!(labels.last(), Some(&"end_date_day"));
        assert_eq!(labels.len(), 11);
    }
}
