use crate::models::WeatherReport;
use serde::Deserialize;

/// Why a weather lookup produced no report. Callers surface a generic
/// "couldn't load" notice either way; the detail is only for the log.
#[derive(Debug)]
pub enum WeatherError {
    Upstream(reqwest::Error),
    Malformed,
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        Self::Upstream(err)
    }
}

#[derive(Debug, Deserialize)]
struct WttrResponse {
    current_condition: Vec<WttrCondition>,
}

#[derive(Debug, Deserialize)]
struct WttrCondition {
    #[serde(rename = "temp_F")]
    temp_f: String,
    humidity: String,
    #[serde(rename = "windspeedMiles")]
    windspeed_miles: String,
    #[serde(rename = "weatherDesc")]
    weather_desc: Vec<WttrValue>,
}

#[derive(Debug, Deserialize)]
struct WttrValue {
    value: String,
}

/// One GET against wttr.in keyed by postal code. No retries; a failed or
/// unparseable response is reported as-is and the caller falls back to a
/// canned notice.
pub async fn fetch_weather(
    client: &reqwest::Client,
    zip: &str,
) -> Result<WeatherReport, WeatherError> {
    let url = format!("https://wttr.in/{zip}?format=j1");
    let payload: WttrResponse = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    report_from(payload).ok_or(WeatherError::Malformed)
}

fn report_from(payload: WttrResponse) -> Option<WeatherReport> {
    let current = payload.current_condition.into_iter().next()?;
    Some(WeatherReport {
        temp_f: current.temp_f.trim().parse().ok()?,
        condition: current
            .weather_desc
            .into_iter()
            .next()
            .map(|desc| desc.value)
            .unwrap_or_default(),
        humidity: current.humidity.trim().parse().ok()?,
        wind_mph: current.windspeed_miles.trim().parse().ok()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_wttr_payload_to_report() {
        let payload: WttrResponse = serde_json::from_str(
            r#"{
                "current_condition": [{
                    "temp_F": "72",
                    "humidity": "48",
                    "windspeedMiles": "9",
                    "weatherDesc": [{ "value": "Partly cloudy" }]
                }]
            }"#,
        )
        .unwrap();
        let report = report_from(payload).unwrap();
        assert_eq!(report.temp_f, 72);
        assert_eq!(report.humidity, 48);
        assert_eq!(report.wind_mph, 9);
        assert_eq!(report.condition, "Partly cloudy");
    }

    #[test]
    fn empty_conditions_are_malformed() {
        let payload: WttrResponse =
            serde_json::from_str(r#"{ "current_condition": [] }"#).unwrap();
        assert!(report_from(payload).is_none());
    }

    #[test]
    fn non_numeric_temperature_is_malformed() {
        let payload: WttrResponse = serde_json::from_str(
            r#"{
                "current_condition": [{
                    "temp_F": "n/a",
                    "humidity": "48",
                    "windspeedMiles": "9",
                    "weatherDesc": [{ "value": "Fog" }]
                }]
            }"#,
        )
        .unwrap();
        assert!(report_from(payload).is_none());
    }
}
