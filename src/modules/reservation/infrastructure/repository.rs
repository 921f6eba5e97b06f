/// Diesel-based implementation of ReservationRepository
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::modules::customer::domain::CustomerId;
use crate::modules::reservation::domain::{entities::Reservation, repository::ReservationRepository};
use crate::modules::reservation::infrastructure::models::ReservationModel;
use crate::schema::reservations;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use crate::shared::Database;

pub struct ReservationRepositoryImpl {
    db: Arc<Database>,
}

impl ReservationRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn find_for_customer(&self, customer_id: CustomerId) -> AppResult<Vec<Reservation>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<ReservationModel>> {
            let mut conn = db.get_connection()?;
            let started = Instant::now();
            LogContext::db_operation("select", "reservations", None);
            let rows = reservations::table
                .filter(reservations::customer_id.eq(customer_id.value()))
                .select(ReservationModel::as_select())
                .order(reservations::start_at.asc())
                .load(&mut conn)
                .map_err(|e| {
                    AppError::DatabaseError(format!(
                        "Failed to get reservations for customer: {}",
                        e
                    ))
                })?;
            LogContext::db_operation(
                "select",
                "reservations",
                Some(started.elapsed().as_millis() as u64),
            );
            Ok(rows)
        })
        .await??;

        models.into_iter().map(Reservation::try_from).collect()
    }
}
