/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use diesel::prelude::*;
use diesel::sql_types::{Integer, Timestamp};
use lunchly_lib::modules::customer::{Customer, CustomerId, CustomerService};
use lunchly_lib::shared::Database;

pub struct CustomerFactory {
    first_name: String,
    last_name: String,
    phone: String,
    notes: Option<String>,
}

impl Default for CustomerFactory {
    fn default() -> Self {
        Self {
            first_name: "Test".to_string(),
            last_name: "Customer".to_string(),
            phone: format!("555-{:04}", rand::random::<u16>() % 10000),
            notes: None,
        }
    }
}

impl CustomerFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(first_name: &str, last_name: &str) -> Self {
        Self::default().with_name(first_name, last_name)
    }

    pub fn with_name(mut self, first_name: &str, last_name: &str) -> Self {
        self.first_name = first_name.to_string();
        self.last_name = last_name.to_string();
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }

    pub fn build(self) -> Customer {
        let customer = Customer::new(self.first_name, self.last_name, self.phone);
        match self.notes {
            Some(notes) => customer.with_notes(notes),
            None => customer,
        }
    }

    /// Build and persist through the service
    pub async fn create(self, service: &CustomerService) -> Customer {
        let mut customer = self.build();
        service
            .save_customer(&mut customer)
            .await
            .expect("Failed to save customer");
        customer
    }
}

/// Insert `count` reservations for a customer directly through SQL
pub fn add_reservations(db: &Database, customer_id: CustomerId, count: usize) {
    let mut conn = db.get_connection().expect("Failed to get DB connection");
    let base = chrono::NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(18, 0, 0)
        .unwrap();

    for day in 0..count {
        diesel::sql_query(
            "INSERT INTO reservations (customer_id, start_at, num_guests) VALUES ($1, $2, $3)",
        )
        .bind::<Integer, _>(customer_id.value())
        .bind::<Timestamp, _>(base + chrono::Duration::days(day as i64))
        .bind::<Integer, _>(2)
        .execute(&mut conn)
        .expect("Failed to insert reservation");
    }
}
