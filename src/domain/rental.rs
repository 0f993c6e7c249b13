use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CarId, CustomerId};

/// An open rental: one car, one customer, a day count. Immutable once
/// recorded; returning the car removes the record from the ledger, so the
/// rentals sequence only ever holds rentals that are currently out.
///
/// The car and customer are referenced by id, not owned; both outlive the
/// rental.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rental {
    pub car_id: CarId,
    pub customer_id: CustomerId,
    pub days: u32,
    pub opened_at: DateTime<Utc>,
}

impl Rental {
    pub fn new(car_id: impl Into<CarId>, customer_id: impl Into<CustomerId>, days: u32) -> Self {
        assert!(days > 0, "Rental must run for at least one day");
        Self {
            car_id: car_id.into(),
            customer_id: customer_id.into(),
            days,
            opened_at: Utc::now(),
        }
    }
}
