/// Diesel-based implementation of CustomerRepository
///
/// Each call checks out one pooled connection inside `spawn_blocking` and issues
/// a single statement.
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::modules::customer::domain::{
    Customer, CustomerId, CustomerRepository, NameQuery, RankedCustomer,
};
use crate::modules::customer::infrastructure::models::{
    to_customers, CustomerChangeset, CustomerModel, NewCustomer, RankedCustomerModel,
};
use crate::schema::customers;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::{LogContext, TimedOperation};
use crate::shared::Database;

const TABLE: &str = "customers";

fn finished(operation: &str, started: Instant) {
    LogContext::db_operation(operation, TABLE, Some(started.elapsed().as_millis() as u64));
}

pub struct CustomerRepositoryImpl {
    db: Arc<Database>,
}

impl CustomerRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerRepository for CustomerRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Customer>> {
        let db = Arc::clone(&self.db);
        let timer = TimedOperation::new("customers.find_all");

        let models = task::spawn_blocking(move || -> AppResult<Vec<CustomerModel>> {
            let mut conn = db.get_connection()?;
            let started = Instant::now();
            LogContext::db_operation("list", TABLE, None);
            let rows = customers::table
                .select(CustomerModel::as_select())
                .order((customers::last_name.asc(), customers::first_name.asc()))
                .load(&mut conn)
                .map_err(|e| AppError::DatabaseError(format!("Failed to list customers: {}", e)))?;
            finished("list", started);
            Ok(rows)
        })
        .await??;

        timer.finish_with_info(&format!("{} rows", models.len()));
        to_customers(models)
    }

    async fn find_by_id(&self, id: CustomerId) -> AppResult<Option<Customer>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<CustomerModel>> {
            let mut conn = db.get_connection()?;
            let started = Instant::now();
            LogContext::db_operation("find", TABLE, None);
            let row = customers::table
                .find(id.value())
                .select(CustomerModel::as_select())
                .first(&mut conn)
                .optional()
                .map_err(|e| {
                    AppError::DatabaseError(format!("Failed to get customer by id: {}", e))
                })?;
            finished("find", started);
            Ok(row)
        })
        .await??;

        model.map(Customer::try_from).transpose()
    }

    async fn insert(&self, customer: &Customer) -> AppResult<CustomerId> {
        let db = Arc::clone(&self.db);
        let customer = customer.clone();

        let id = task::spawn_blocking(move || -> AppResult<i32> {
            let mut conn = db.get_connection()?;
            let started = Instant::now();
            LogContext::db_operation("insert", TABLE, None);
            let id = diesel::insert_into(customers::table)
                .values(NewCustomer::from(&customer))
                .returning(customers::id)
                .get_result::<i32>(&mut conn)
                .map_err(|e| AppError::DatabaseError(format!("Failed to insert customer: {}", e)))?;
            finished("insert", started);
            Ok(id)
        })
        .await??;

        CustomerId::try_from(id)
            .map_err(|_| AppError::InternalError(format!("Store returned invalid customer id {}", id)))
    }

    async fn update(&self, id: CustomerId, customer: &Customer) -> AppResult<usize> {
        let db = Arc::clone(&self.db);
        let customer = customer.clone();

        task::spawn_blocking(move || -> AppResult<usize> {
            let mut conn = db.get_connection()?;
            let started = Instant::now();
            LogContext::db_operation("update", TABLE, None);
            let updated = diesel::update(customers::table.find(id.value()))
                .set(CustomerChangeset::from(&customer))
                .execute(&mut conn)
                .map_err(|e| AppError::DatabaseError(format!("Failed to update customer: {}", e)))?;
            finished("update", started);
            Ok(updated)
        })
        .await?
    }

    async fn search_by_name(&self, query: &NameQuery) -> AppResult<Vec<Customer>> {
        let db = Arc::clone(&self.db);
        let query = query.clone();

        let models = task::spawn_blocking(move || -> AppResult<Vec<CustomerModel>> {
            let mut conn = db.get_connection()?;
            let started = Instant::now();
            LogContext::db_operation("search", TABLE, None);

            let base = customers::table.select(CustomerModel::as_select());
            let rows = match query.like_patterns().as_slice() {
                [fragment] => base
                    .filter(
                        customers::first_name
                            .like(fragment.as_str())
                            .or(customers::last_name.like(fragment.as_str())),
                    )
                    .load::<CustomerModel>(&mut conn),
                [first, last] => base
                    .filter(
                        customers::first_name
                            .like(first.as_str())
                            .and(customers::last_name.like(last.as_str())),
                    )
                    .load::<CustomerModel>(&mut conn),
                _ => {
                    return Err(AppError::InternalError(
                        "Name query produced no patterns".to_string(),
                    ))
                }
            }
            .map_err(|e| AppError::DatabaseError(format!("Failed to search customers: {}", e)))?;

            finished("search", started);
            Ok(rows)
        })
        .await??;

        to_customers(models)
    }

    async fn top_by_reservations(&self, limit: i64) -> AppResult<Vec<RankedCustomer>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<RankedCustomerModel>> {
            let mut conn = db.get_connection()?;
            let started = Instant::now();
            LogContext::db_operation("rank", TABLE, None);

            // Inner join: customers without reservations never appear
            let rows = diesel::sql_query(
                "SELECT c.id, c.first_name, c.last_name, c.phone, c.notes,
                        COUNT(*) AS num_reservations
                 FROM customers AS c
                 JOIN reservations AS r ON c.id = r.customer_id
                 GROUP BY c.id
                 ORDER BY num_reservations DESC
                 LIMIT $1",
            )
            .bind::<diesel::sql_types::BigInt, _>(limit)
            .load(&mut conn)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to rank customers by reservations: {}", e))
            })?;

            finished("rank", started);
            Ok(rows)
        })
        .await??;

        models.into_iter().map(RankedCustomer::try_from).collect()
    }
}
