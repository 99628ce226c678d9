//! The market data records returned by the token-pairs server.

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// One tradable pair as reported by a single venue.
///
/// A fresh set of these is produced by every successful read. Nothing is
/// merged with a previous snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// Pair identifier, e.g. `"SOL/USDC"`. Unique within one snapshot.
    pub pair: String,
    pub price: f64,
    /// Name of the exchange reporting the price.
    pub dex: String,
    #[serde(rename = "volume24h")]
    pub volume_24h: f64,
    #[serde(rename = "priceUpdate5m")]
    pub price_update_5m: f64,
    pub historical_price_data: Vec<HistoricalPricePoint>,
    pub liquidity: Liquidity,
    pub is_on_watchlist: bool,
}

/// A single (timestamp, price) sample of a pair's history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPricePoint {
    #[serde(with = "epoch_or_rfc3339")]
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

/// Liquidity as sent by the server: either one figure or a list of figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Liquidity {
    Amount(f64),
    Levels(Vec<f64>),
}

impl fmt::Display for Liquidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount(amount) => write!(f, "{amount}"),
            Self::Levels(levels) => {
                for (i, level) in levels.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{level}")?;
                }
                Ok(())
            }
        }
    }
}

/// The (identifier, watch flag) pair echoed back by both watchlist mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistStatus {
    pub pair: String,
    pub is_on_watchlist: bool,
}

/// Accepts the timestamp shapes a JavaScript `Date` would: epoch
/// milliseconds as a number or a digit string, an RFC 3339 string, a
/// date-only `YYYY-MM-DD` (midnight UTC) or a datetime without an offset
/// (read as UTC). Always serializes as epoch milliseconds.
mod epoch_or_rfc3339 {
    use chrono::DateTime;
    use chrono::FixedOffset;
    use chrono::NaiveDate;
    use chrono::NaiveDateTime;
    use chrono::Utc;
    use serde::de::Error;
    use serde::Deserialize;
    use serde::Deserializer;
    use serde::Serializer;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(value.timestamp_millis())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let millis = match Raw::deserialize(deserializer)? {
            Raw::Int(millis) => millis,
            Raw::Float(millis) if millis.is_finite() => millis as i64,
            Raw::Float(millis) => {
                return Err(D::Error::custom(format!("invalid timestamp {millis}")))
            }
            Raw::Text(text) => {
                let text = text.trim();
                if let Ok(millis) = text.parse::<i64>() {
                    millis
                } else {
                    return parse_iso(text)
                        .map_err(|e| D::Error::custom(format!("invalid timestamp {text:?}: {e}")));
                }
            }
        };

        DateTime::<Utc>::from_timestamp_millis(millis)
            .ok_or_else(|| D::Error::custom(format!("timestamp {millis} out of range")))
    }

    fn parse_iso(text: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        let rfc3339 = match DateTime::<FixedOffset>::parse_from_rfc3339(text) {
            Ok(dt) => return Ok(dt.with_timezone(&Utc)),
            Err(e) => e,
        };
        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
                return Ok(naive.and_utc());
            }
        }
        Err(rfc3339)
    }
}
