//! Hall reservations and overlap detection.
//!
//! Reservations use hour labels like `"10 AM"` at both ends. Labels are
//! normalized onto a 24-hour integer scale for comparison, where `"12 AM"`
//! maps to 24 and marks the end of the day, so ranges ending at midnight
//! stay well-formed.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use cinema_core::{AppError, AppResult};
use cinema_database::repositories::HallBookingRepository;
use cinema_entity::hall::{CreateHallBooking, HallBooking};

/// Request to reserve the hall for part of one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReserveHallRequest {
    /// The user holding the reservation.
    pub user_id: Uuid,
    /// Reservation date.
    pub booking_date: NaiveDate,
    /// Start hour label, e.g. `"10 AM"`.
    pub from_time: String,
    /// End hour label, e.g. `"1 PM"`.
    pub to_time: String,
    /// Free-form request attached to the reservation.
    pub special_request: Option<String>,
    /// Contact number.
    pub mobile: String,
}

/// Handles whole-venue hall reservations.
#[derive(Debug, Clone)]
pub struct HallBookingService {
    /// Hall booking repository.
    hall_repo: Arc<HallBookingRepository>,
}

impl HallBookingService {
    /// Creates a new hall booking service.
    pub fn new(hall_repo: Arc<HallBookingRepository>) -> Self {
        Self { hall_repo }
    }

    /// Reserve the hall, rejecting any overlap with an existing same-day
    /// reservation.
    pub async fn reserve(&self, req: ReserveHallRequest) -> AppResult<HallBooking> {
        let from = normalize_hour(&req.from_time)?;
        let to = normalize_hour(&req.to_time)?;
        if from >= to {
            return Err(AppError::validation("Start time must be before end time"));
        }
        if req.mobile.trim().is_empty() {
            return Err(AppError::validation("Mobile number is required"));
        }

        let same_day = self.hall_repo.find_by_date(req.booking_date).await?;
        for existing in &same_day {
            let existing_from = normalize_hour(&existing.from_time)?;
            let existing_to = normalize_hour(&existing.to_time)?;
            if overlaps(from, to, existing_from, existing_to) {
                return Err(AppError::conflict(format!(
                    "Hall is already booked from {} to {} on this date",
                    existing.from_time, existing.to_time
                )));
            }
        }

        let created = self
            .hall_repo
            .create(&CreateHallBooking {
                user_id: req.user_id,
                booking_date: req.booking_date,
                from_time: req.from_time,
                to_time: req.to_time,
                special_request: req.special_request.unwrap_or_default(),
                mobile: req.mobile,
            })
            .await?;

        info!(
            hall_booking_id = %created.id,
            date = %created.booking_date,
            from = %created.from_time,
            to = %created.to_time,
            "Hall reserved"
        );

        Ok(created)
    }

    /// All reservations, ordered by date then start hour.
    pub async fn list(&self) -> AppResult<Vec<HallBooking>> {
        let mut bookings = self.hall_repo.find_all().await?;
        bookings.sort_by_key(|b| (b.booking_date, normalize_hour(&b.from_time).unwrap_or(0)));
        Ok(bookings)
    }
}

/// Normalize an hour label onto the 24-hour scale used for comparisons.
fn normalize_hour(label: &str) -> AppResult<u32> {
    let trimmed = label.trim();
    let parsed = trimmed.split_once(' ').and_then(|(hour, period)| {
        let hour: u32 = hour.parse().ok()?;
        if !(1..=12).contains(&hour) {
            return None;
        }
        match period {
            "AM" if hour == 12 => Some(24),
            "AM" => Some(hour),
            "PM" if hour == 12 => Some(12),
            "PM" => Some(hour + 12),
            _ => None,
        }
    });

    parsed.ok_or_else(|| AppError::validation(format!("Invalid time slot: {trimmed}")))
}

/// Whether requested `[from, to)` overlaps an existing `[existing_from,
/// existing_to)`.
fn overlaps(from: u32, to: u32, existing_from: u32, existing_to: u32) -> bool {
    (from >= existing_from && from < existing_to)
        || (to > existing_from && to <= existing_to)
        || (from <= existing_from && to >= existing_to)
}
