use serde::{Deserialize, Serialize};

use crate::modules::customer::domain::value_objects::CustomerId;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// Customer of the restaurant.
///
/// `id` is `None` until the record is first inserted; once assigned it never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    id: Option<CustomerId>,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub notes: Option<String>,
}

impl Customer {
    /// New, unsaved customer
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
            notes: None,
        }
    }

    /// Customer hydrated from a persisted row
    pub fn hydrate(
        id: CustomerId,
        first_name: String,
        last_name: String,
        phone: String,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Some(id),
            first_name,
            last_name,
            phone,
            notes,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn id(&self) -> Option<CustomerId> {
        self.id
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Record the store-assigned id. Refuses to overwrite an existing one.
    pub(crate) fn assign_id(&mut self, id: CustomerId) -> AppResult<()> {
        match self.id {
            Some(existing) if existing != id => Err(AppError::InternalError(format!(
                "Customer {} already has an id, refusing to reassign to {}",
                existing, id
            ))),
            _ => {
                self.id = Some(id);
                Ok(())
            }
        }
    }

    /// Field checks applied before any write. `phone` is free-form and unchecked.
    pub fn validate(&self) -> AppResult<()> {
        Validator::validate_person_name("First name", &self.first_name)?;
        Validator::validate_person_name("Last name", &self.last_name)?;
        Ok(())
    }
}
