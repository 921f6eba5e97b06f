use crate::modules::customer::domain::{
    repositories::customer_repository::TOP_RESERVATION_HOLDERS_LIMIT, Customer, CustomerId,
    CustomerRepository, NameQuery, RankedCustomer,
};
use crate::modules::reservation::domain::{Reservation, ReservationRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use crate::{log_debug, log_info, log_warn};
use std::sync::Arc;

/// Customer lookups, name search, reservation ranking and persistence.
///
/// Holds no state of its own; concurrent calls are independent and two
/// concurrent saves of the same customer resolve as last write wins.
pub struct CustomerService {
    customer_repo: Arc<dyn CustomerRepository>,
    reservation_repo: Arc<dyn ReservationRepository>,
}

impl CustomerService {
    pub fn new(
        customer_repo: Arc<dyn CustomerRepository>,
        reservation_repo: Arc<dyn ReservationRepository>,
    ) -> Self {
        Self {
            customer_repo,
            reservation_repo,
        }
    }

    /// All customers, ordered by last name then first name
    pub async fn list_customers(&self) -> AppResult<Vec<Customer>> {
        self.customer_repo.find_all().await
    }

    pub async fn get_customer(&self, id: CustomerId) -> AppResult<Customer> {
        self.customer_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::CustomerNotFound(id.value()))
    }

    /// Insert when the customer has no id yet (assigning the new id into it),
    /// otherwise overwrite the stored row.
    pub async fn save_customer(&self, customer: &mut Customer) -> AppResult<CustomerId> {
        customer.validate()?;

        match customer.id() {
            None => {
                let id = self.customer_repo.insert(customer).await?;
                customer.assign_id(id)?;
                log_info!("Created customer {} ({})", id, customer.full_name());
                Ok(id)
            }
            Some(id) => {
                let updated = self.customer_repo.update(id, customer).await?;
                if updated == 0 {
                    log_warn!("Customer {} vanished before update", id);
                    return Err(AppError::CustomerNotFound(id.value()));
                }
                log_debug!("Updated customer {}", id);
                Ok(id)
            }
        }
    }

    /// One word matches first OR last name, two words match first AND last name.
    /// Result order is unspecified.
    pub async fn search_by_name(&self, raw_query: &str) -> AppResult<Vec<Customer>> {
        let query = NameQuery::parse(raw_query)?;
        LogContext::search_operation(raw_query, Some(query.mode()), None);

        let customers = self.customer_repo.search_by_name(&query).await?;

        LogContext::search_operation(raw_query, Some(query.mode()), Some(customers.len()));
        Ok(customers)
    }

    /// Up to ten customers with the most reservations. Ties come back in store order.
    pub async fn top_reservation_holders(&self) -> AppResult<Vec<Customer>> {
        Ok(self
            .top_reservation_holders_with_counts()
            .await?
            .into_iter()
            .map(|ranked| ranked.customer)
            .collect())
    }

    pub async fn top_reservation_holders_with_counts(&self) -> AppResult<Vec<RankedCustomer>> {
        let mut ranked = self
            .customer_repo
            .top_by_reservations(TOP_RESERVATION_HOLDERS_LIMIT)
            .await?;
        ranked.truncate(TOP_RESERVATION_HOLDERS_LIMIT as usize);
        Ok(ranked)
    }

    pub async fn get_reservations(&self, customer: &Customer) -> AppResult<Vec<Reservation>> {
        let id = customer.id().ok_or_else(|| {
            AppError::InvalidInput(format!(
                "Customer {} has not been saved yet",
                customer.full_name()
            ))
        })?;
        self.reservation_repo.find_for_customer(id).await
    }
}
