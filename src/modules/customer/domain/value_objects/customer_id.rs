//! Store-assigned customer identifier

use serde::{Deserialize, Serialize};

use crate::shared::errors::AppError;
use crate::shared::utils::Validator;

/// Positive integer key assigned by the store on first insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct CustomerId(i32);

impl CustomerId {
    pub fn value(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for CustomerId {
    type Error = AppError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Validator::validate_customer_id(value)?;
        Ok(Self(value))
    }
}

impl From<CustomerId> for i32 {
    fn from(id: CustomerId) -> Self {
        id.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CustomerId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i32 = s.trim().parse()?;
        Self::try_from(raw)
    }
}
