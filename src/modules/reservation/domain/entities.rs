/// Reservation read model
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::modules::customer::domain::CustomerId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i32,
    pub customer_id: CustomerId,
    pub start_at: NaiveDateTime,
    pub num_guests: i32,
    pub notes: String,
}

impl Reservation {
    /// Display form used in listings, e.g. "2024-03-01 7:30 pm"
    pub fn formatted_start_at(&self) -> String {
        self.start_at.format("%Y-%m-%d %-I:%M %P").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn formats_start_time_for_display() {
        let reservation = Reservation {
            id: 1,
            customer_id: CustomerId::try_from(2).unwrap(),
            start_at: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(19, 30, 0)
                .unwrap(),
            num_guests: 4,
            notes: String::new(),
        };
        assert_eq!(reservation.formatted_start_at(), "2024-03-01 7:30 pm");
    }
}
