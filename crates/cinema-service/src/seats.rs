//! Seat availability for a single screening.

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use cinema_core::AppResult;
use cinema_database::repositories::BookingRepository;

/// Resolves which seats are already held for a show.
#[derive(Debug, Clone)]
pub struct SeatService {
    /// Booking repository.
    booking_repo: Arc<BookingRepository>,
}

impl SeatService {
    /// Creates a new seat service.
    pub fn new(booking_repo: Arc<BookingRepository>) -> Self {
        Self { booking_repo }
    }

    /// Sorted, distinct seat labels held by paid bookings for the show.
    pub async fn occupied(
        &self,
        movie_id: Uuid,
        show_date: NaiveDate,
        show_time: &str,
    ) -> AppResult<Vec<String>> {
        self.booking_repo
            .occupied_seats(movie_id, show_date, show_time)
            .await
    }
}
