/// Repository trait for reading reservations
use crate::modules::customer::domain::CustomerId;
use crate::modules::reservation::domain::entities::Reservation;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// All reservations for a customer, earliest first
    async fn find_for_customer(&self, customer_id: CustomerId) -> AppResult<Vec<Reservation>>;
}
