use serde::{Deserialize, Serialize};

use super::{Cents, format_cents};

/// Car identifiers are assigned externally when the fleet is set up
/// (e.g. "C001"), unlike customer ids which the ledger mints itself.
pub type CarId = String;

/// Rentals longer than this many days get the flat long-rental discount.
pub const LONG_RENTAL_THRESHOLD_DAYS: u32 = 7;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Car {
    pub id: CarId,
    pub brand: String,
    pub model: String,
    /// Daily rate in cents. Never negative.
    pub daily_rate_cents: Cents,
    /// True iff no open rental references this car.
    pub available: bool,
}

impl Car {
    pub fn new(
        id: impl Into<CarId>,
        brand: impl Into<String>,
        model: impl Into<String>,
        daily_rate_cents: Cents,
    ) -> Self {
        Self {
            id: id.into(),
            brand: brand.into(),
            model: model.into(),
            daily_rate_cents,
            available: true,
        }
    }

    /// Total price for a rental of `days` days: the daily rate times the
    /// day count, with 10% off for rentals longer than a week. Integer
    /// cents, discount truncated toward zero.
    ///
    /// Pure; day-count validation happens at the service boundary.
    pub fn rental_price(&self, days: u32) -> Cents {
        let gross = self.daily_rate_cents * i64::from(days);
        if days > LONG_RENTAL_THRESHOLD_DAYS {
            gross - gross / 10
        } else {
            gross
        }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn mark_rented(&mut self) {
        self.available = false;
    }

    /// Idempotent: marking an already-available car returned is a no-op.
    pub fn mark_returned(&mut self) {
        self.available = true;
    }
}

impl std::fmt::Display for Car {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} {} (${}/day)",
            self.id,
            self.brand,
            self.model,
            format_cents(self.daily_rate_cents)
        )
    }
}

/// Fleet search filter. Absent fields match everything; brand and model
/// are case-insensitive exact matches; rate bounds are inclusive.
#[derive(Debug, Clone, Default)]
pub struct CarFilter {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub min_rate_cents: Option<Cents>,
    pub max_rate_cents: Option<Cents>,
}

impl CarFilter {
    pub fn matches(&self, car: &Car) -> bool {
        self.brand
            .as_deref()
            .is_none_or(|brand| car.brand.eq_ignore_ascii_case(brand))
            && self
                .model
                .as_deref()
                .is_none_or(|model| car.model.eq_ignore_ascii_case(model))
            && self
                .min_rate_cents
                .is_none_or(|min| car.daily_rate_cents >= min)
            && self
                .max_rate_cents
                .is_none_or(|max| car.daily_rate_cents <= max)
    }
}
