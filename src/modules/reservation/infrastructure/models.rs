/// Diesel model for the reservations table
use crate::modules::customer::domain::CustomerId;
use crate::modules::reservation::domain::entities::Reservation;
use crate::schema::reservations;
use crate::shared::errors::AppError;
use chrono::NaiveDateTime;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = reservations)]
pub struct ReservationModel {
    pub id: i32,
    pub customer_id: i32,
    pub start_at: NaiveDateTime,
    pub num_guests: i32,
    pub notes: String,
}

impl TryFrom<ReservationModel> for Reservation {
    type Error = AppError;

    fn try_from(model: ReservationModel) -> Result<Self, Self::Error> {
        Ok(Reservation {
            id: model.id,
            customer_id: CustomerId::try_from(model.customer_id)?,
            start_at: model.start_at,
            num_guests: model.num_guests,
            notes: model.notes,
        })
    }
}
