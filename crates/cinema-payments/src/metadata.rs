//! Session metadata codec.
//!
//! Booking details are attached to the checkout session as string metadata
//! and echoed back verbatim in the settlement webhook. This module is the
//! single place that encodes and decodes that map, so the two sides of the
//! round trip cannot drift apart.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use cinema_core::error::ErrorKind;
use cinema_core::{AppError, AppResult};

/// Booking details carried through the provider as session metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionMetadata {
    pub user_id: Uuid,
    pub movie_id: Uuid,
    pub show_date: NaiveDate,
    pub show_time: String,
    pub seats: Vec<String>,
    pub mobile: Option<String>,
    pub coupon_code: Option<String>,
    /// When checkout started. Settlement stamps the booking with this
    /// instead of the webhook arrival time.
    pub created_at: Option<DateTime<Utc>>,
}

impl SessionMetadata {
    /// Encode as the flat string map the provider accepts.
    ///
    /// Absent optional fields are written as empty strings so the key set
    /// is stable across sessions.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert("user_id".to_string(), self.user_id.to_string());
        map.insert("movie_id".to_string(), self.movie_id.to_string());
        map.insert("show_date".to_string(), self.show_date.to_string());
        map.insert("show_time".to_string(), self.show_time.clone());
        map.insert("seats".to_string(), self.seats.join(","));
        map.insert(
            "mobile".to_string(),
            self.mobile.clone().unwrap_or_default(),
        );
        map.insert(
            "coupon_code".to_string(),
            self.coupon_code.clone().unwrap_or_default(),
        );
        map.insert(
            "created_at".to_string(),
            self.created_at
                .map(|at| at.to_rfc3339())
                .unwrap_or_default(),
        );
        map
    }

    /// Decode the metadata map echoed back by a webhook event.
    ///
    /// An unparseable `created_at` is dropped rather than rejected; the
    /// settlement then falls back to the arrival time.
    pub fn from_map(map: &BTreeMap<String, String>) -> AppResult<Self> {
        let user_id = Uuid::parse_str(required(map, "user_id")?).map_err(|e| {
            AppError::with_source(ErrorKind::Validation, "Invalid user_id in session metadata", e)
        })?;
        let movie_id = Uuid::parse_str(required(map, "movie_id")?).map_err(|e| {
            AppError::with_source(ErrorKind::Validation, "Invalid movie_id in session metadata", e)
        })?;
        let show_date = NaiveDate::parse_from_str(required(map, "show_date")?, "%Y-%m-%d")
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Validation,
                    "Invalid show_date in session metadata",
                    e,
                )
            })?;
        let show_time = required(map, "show_time")?.to_string();

        let seats: Vec<String> = required(map, "seats")?
            .split(',')
            .map(str::trim)
            .filter(|seat| !seat.is_empty())
            .map(str::to_string)
            .collect();
        if seats.is_empty() {
            return Err(AppError::validation("No seats in session metadata"));
        }

        let mobile = optional(map, "mobile");
        let coupon_code = optional(map, "coupon_code");
        let created_at = map
            .get("created_at")
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|at| at.with_timezone(&Utc));

        Ok(Self {
            user_id,
            movie_id,
            show_date,
            show_time,
            seats,
            mobile,
            coupon_code,
            created_at,
        })
    }
}

fn required<'a>(map: &'a BTreeMap<String, String>, key: &str) -> AppResult<&'a str> {
    map.get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::validation(format!("Missing metadata field: {key}")))
}

fn optional(map: &BTreeMap<String, String>, key: &str) -> Option<String> {
    map.get(key).filter(|value| !value.is_empty()).cloned()
}
