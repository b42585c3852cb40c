//! Tolerant response body parsing
//!
//! Device firmwares report readings in wildly different shapes: a proper
//! JSON object, a bare comma-separated pair, or free text with the values
//! buried somewhere inside. The parser applies three extraction strategies
//! in strict order and the first one that produces both values wins; a
//! strategy that does not match falls through instead of failing the call.

use crate::error::{Result, WeatherError};
use crate::reading::Reading;
use once_cell::sync::Lazy;
use regex::Regex;

/// Signed decimal number: optional sign, optional integer and fractional
/// parts, at least one digit.
static NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-+]?\d*\.?\d+").expect("number pattern is valid"));

/// JSON field carrying the temperature
const TEMPERATURE_KEY: &str = "temp";
/// JSON field carrying the relative humidity
const HUMIDITY_KEY: &str = "hum";

/// Extract a reading from a raw response body.
///
/// Blank input fails with [`WeatherError::EmptyBody`] before any strategy
/// runs. If no strategy extracts two numeric values the call fails with
/// [`WeatherError::Parse`]. Extracted values are accepted as-is, with no
/// plausibility bounds.
pub fn parse_reading(text: &str) -> Result<Reading> {
    if text.trim().is_empty() {
        return Err(WeatherError::EmptyBody);
    }

    if let Some(reading) = parse_json_object(text) {
        return Ok(reading);
    }

    if let Some(reading) = parse_delimited_pair(text) {
        return Ok(reading);
    }

    if let Some(reading) = parse_loose_numbers(text) {
        return Ok(reading);
    }

    Err(WeatherError::parse("no numbers found in response"))
}

/// Strategy 1: JSON object like `{"temp":23.5,"hum":60.0}`.
///
/// Field order and extra fields are irrelevant. A body that merely looks
/// like an object but fails to decode, or decodes without both numeric
/// fields, yields no match.
fn parse_json_object(text: &str) -> Option<Reading> {
    let trimmed = text.trim();
    if !(trimmed.starts_with('{') && trimmed.ends_with('}')) {
        return None;
    }

    let value: serde_json::Value = serde_json::from_str(trimmed).ok()?;
    let temperature = value.get(TEMPERATURE_KEY)?.as_f64()?;
    let humidity = value.get(HUMIDITY_KEY)?.as_f64()?;
    Some(Reading::new(temperature, humidity))
}

/// Strategy 2: comma-separated pair like `23.4,55.2`.
///
/// The firmware contract only promises two non-empty segments; a segment
/// that is not a plain number falls through to the loose scan rather than
/// failing the parse.
fn parse_delimited_pair(text: &str) -> Option<Reading> {
    if !text.contains(',') {
        return None;
    }

    let mut segments = text.splitn(3, ',');
    let temperature = segments.next()?.trim();
    let humidity = segments.next()?.trim();
    if temperature.is_empty() || humidity.is_empty() {
        return None;
    }

    Some(Reading::new(
        temperature.parse().ok()?,
        humidity.parse().ok()?,
    ))
}

/// Strategy 3: first two decimal numbers anywhere in the text, in order of
/// appearance. Surrounding text is ignored.
fn parse_loose_numbers(text: &str) -> Option<Reading> {
    let mut numbers = NUMBER_PATTERN
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<f64>().ok());

    let temperature = numbers.next()?;
    let humidity = numbers.next()?;
    Some(Reading::new(temperature, humidity))
}
