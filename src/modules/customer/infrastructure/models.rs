/// Diesel models for the customers table
use crate::modules::customer::domain::{Customer, CustomerId, RankedCustomer};
use crate::schema::customers;
use crate::shared::errors::AppError;
use diesel::prelude::*;

/// Diesel model for querying existing customers
#[derive(Queryable, Selectable, QueryableByName, Debug, Clone)]
#[diesel(table_name = customers)]
pub struct CustomerModel {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub notes: Option<String>,
}

/// Diesel model for inserting new customers
#[derive(Insertable, Debug)]
#[diesel(table_name = customers)]
pub struct NewCustomer<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub phone: &'a str,
    pub notes: Option<&'a str>,
}

/// Full overwrite of the mutable columns; `notes = None` clears the column
#[derive(AsChangeset, Debug)]
#[diesel(table_name = customers)]
#[diesel(treat_none_as_null = true)]
pub struct CustomerChangeset<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub phone: &'a str,
    pub notes: Option<&'a str>,
}

/// Row of the reservation-count aggregate
#[derive(QueryableByName, Debug, Clone)]
pub struct RankedCustomerModel {
    #[diesel(embed)]
    pub customer: CustomerModel,
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    pub num_reservations: i64,
}

impl<'a> From<&'a Customer> for NewCustomer<'a> {
    fn from(customer: &'a Customer) -> Self {
        Self {
            first_name: &customer.first_name,
            last_name: &customer.last_name,
            phone: &customer.phone,
            notes: customer.notes.as_deref(),
        }
    }
}

impl<'a> From<&'a Customer> for CustomerChangeset<'a> {
    fn from(customer: &'a Customer) -> Self {
        Self {
            first_name: &customer.first_name,
            last_name: &customer.last_name,
            phone: &customer.phone,
            notes: customer.notes.as_deref(),
        }
    }
}

impl TryFrom<CustomerModel> for Customer {
    type Error = AppError;

    /// Convert a row into the domain record, rejecting rows that break its invariants
    fn try_from(model: CustomerModel) -> Result<Self, Self::Error> {
        let id = CustomerId::try_from(model.id).map_err(|_| {
            AppError::ValidationError(format!("Stored customer has invalid id {}", model.id))
        })?;

        if model.first_name.trim().is_empty() || model.last_name.trim().is_empty() {
            return Err(AppError::ValidationError(format!(
                "Stored customer {} has an empty name",
                id
            )));
        }

        Ok(Customer::hydrate(
            id,
            model.first_name,
            model.last_name,
            model.phone,
            model.notes,
        ))
    }
}

impl TryFrom<RankedCustomerModel> for RankedCustomer {
    type Error = AppError;

    fn try_from(model: RankedCustomerModel) -> Result<Self, Self::Error> {
        Ok(RankedCustomer {
            customer: Customer::try_from(model.customer)?,
            reservation_count: model.num_reservations,
        })
    }
}

/// Hydrate a batch of rows, failing on the first invalid one
pub fn to_customers(models: Vec<CustomerModel>) -> Result<Vec<Customer>, AppError> {
    models.into_iter().map(Customer::try_from).collect()
}
