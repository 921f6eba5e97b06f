use crate::shared::errors::AppError;

const MAX_NAME_LEN: usize = 255;

pub struct Validator;

impl Validator {
    pub fn validate_person_name(field: &str, value: &str) -> Result<(), AppError> {
        if value.trim().is_empty() {
            return Err(AppError::ValidationError(format!(
                "{} cannot be empty",
                field
            )));
        }
        if value.chars().count() > MAX_NAME_LEN {
            return Err(AppError::ValidationError(format!(
                "{} too long (max {} characters)",
                field, MAX_NAME_LEN
            )));
        }
        Ok(())
    }

    pub fn validate_customer_id(id: i32) -> Result<(), AppError> {
        if id <= 0 {
            return Err(AppError::InvalidInput(format!(
                "Customer ID must be positive, got {}",
                id
            )));
        }
        Ok(())
    }

    pub fn validate_search_query(query: &str) -> Result<(), AppError> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
