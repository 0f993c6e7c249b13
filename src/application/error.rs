use thiserror::Error;

use crate::domain::Cents;

/// Reportable, non-fatal conditions. Every operation returns control to
/// the caller; the CLI prints these and goes back to the menu.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Car not found: {0}")]
    CarNotFound(String),

    #[error("Car already exists: {0}")]
    CarAlreadyExists(String),

    #[error("Car is not available for rent: {0}")]
    CarNotAvailable(String),

    #[error("Car was not rented: {0}")]
    CarNotRented(String),

    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    #[error("Invalid rental duration: a rental must run for at least one day")]
    InvalidDuration,

    #[error("Daily rate cannot be negative: {0} cents")]
    NegativeRate(Cents),
}
