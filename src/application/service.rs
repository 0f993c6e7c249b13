use crate::domain::{Car, CarFilter, Cents, Customer, Rental};
use crate::storage::Repository;

use super::AppError;

/// Application service providing the rental desk operations. This is the
/// primary interface for any client (CLI, tests, a future TUI).
///
/// Invariants enforced here: car ids are unique in the fleet, a car's
/// availability flag is false iff an open rental references it, and at
/// most one open rental exists per car.
pub struct RentalService {
    repo: Repository,
}

/// Result of renting a car.
#[derive(Debug)]
pub struct RentalReceipt {
    pub rental: Rental,
    pub car: Car,
    pub customer: Customer,
    pub total_cents: Cents,
}

/// Result of returning a car.
pub struct ReturnReceipt {
    pub rental: Rental,
    pub car: Car,
    pub customer: Customer,
    pub total_cents: Cents,
}

/// One line of a customer's rental history.
pub struct HistoryEntry {
    pub rental: Rental,
    pub car: Car,
    pub total_cents: Cents,
}

impl RentalService {
    /// Create a new rental service with the given repository.
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    // ========================
    // Fleet operations
    // ========================

    /// Add a car to the fleet. Ids must be unique; the storage append is
    /// unchecked, so the check lives here, at the only call site.
    pub fn add_car(
        &mut self,
        id: impl Into<String>,
        brand: impl Into<String>,
        model: impl Into<String>,
        daily_rate_cents: Cents,
    ) -> Result<Car, AppError> {
        let id = id.into();
        if daily_rate_cents < 0 {
            return Err(AppError::NegativeRate(daily_rate_cents));
        }
        if self.repo.get_car(&id).is_some() {
            return Err(AppError::CarAlreadyExists(id));
        }

        let car = Car::new(id, brand, model, daily_rate_cents);
        self.repo.save_car(car.clone());
        Ok(car)
    }

    /// Get a car by id.
    pub fn get_car(&self, id: &str) -> Result<Car, AppError> {
        self.repo
            .get_car(id)
            .cloned()
            .ok_or_else(|| AppError::CarNotFound(id.to_string()))
    }

    /// The whole fleet, in insertion order.
    pub fn list_cars(&self) -> Vec<Car> {
        self.repo.list_cars().to_vec()
    }

    /// All cars matching the filter, available or not, in fleet order.
    pub fn search_cars(&self, filter: &CarFilter) -> Vec<Car> {
        self.repo.search_cars(filter)
    }

    /// Cars matching the filter that are free to rent right now. This is
    /// the listing shown during the rent flow.
    pub fn available_cars(&self, filter: &CarFilter) -> Vec<Car> {
        self.repo
            .search_cars(filter)
            .into_iter()
            .filter(|car| car.is_available())
            .collect()
    }

    // ========================
    // Customer operations
    // ========================

    /// Register a customer under a freshly minted "CUS{n}" id. Repeat
    /// names get a new record each time; deduplication is out of scope.
    pub fn register_customer(&mut self, name: impl Into<String>) -> Customer {
        let id = self.repo.next_customer_id();
        let customer = Customer::new(id, name);
        self.repo.save_customer(customer.clone());
        customer
    }

    /// Get a customer by id.
    pub fn get_customer(&self, id: &str) -> Result<Customer, AppError> {
        self.repo
            .get_customer(id)
            .cloned()
            .ok_or_else(|| AppError::CustomerNotFound(id.to_string()))
    }

    /// All registered customers, in registration order.
    pub fn list_customers(&self) -> Vec<Customer> {
        self.repo.list_customers().to_vec()
    }

    // ========================
    // Rental operations
    // ========================

    /// Rent a car to a registered customer for `days` days. On success
    /// the car is marked rented and an open rental is recorded; on any
    /// rejection no state changes.
    pub fn rent_car(
        &mut self,
        car_id: &str,
        customer_id: &str,
        days: u32,
    ) -> Result<RentalReceipt, AppError> {
        if days == 0 {
            return Err(AppError::InvalidDuration);
        }

        let customer = self.get_customer(customer_id)?;

        let car = self
            .repo
            .get_car_mut(car_id)
            .ok_or_else(|| AppError::CarNotFound(car_id.to_string()))?;
        if !car.is_available() {
            return Err(AppError::CarNotAvailable(car_id.to_string()));
        }
        car.mark_rented();
        let car = car.clone();

        let rental = Rental::new(car.id.clone(), customer.id.clone(), days);
        self.repo.save_rental(rental.clone());

        let total_cents = car.rental_price(days);
        Ok(RentalReceipt {
            rental,
            car,
            customer,
            total_cents,
        })
    }

    /// Return a car. The open rental's existence is validated before any
    /// state is touched: with no open rental the car's availability flag
    /// stays exactly as it was.
    pub fn return_car(&mut self, car_id: &str) -> Result<ReturnReceipt, AppError> {
        if self.repo.get_car(car_id).is_none() {
            return Err(AppError::CarNotFound(car_id.to_string()));
        }
        if self.repo.open_rental_for_car(car_id).is_none() {
            return Err(AppError::CarNotRented(car_id.to_string()));
        }

        let car = self
            .repo
            .get_car_mut(car_id)
            .ok_or_else(|| AppError::CarNotFound(car_id.to_string()))?;
        car.mark_returned();
        let car = car.clone();

        let rental = self
            .repo
            .remove_rental_for_car(car_id)
            .ok_or_else(|| AppError::CarNotRented(car_id.to_string()))?;
        let customer = self.get_customer(&rental.customer_id)?;

        let total_cents = car.rental_price(rental.days);
        Ok(ReturnReceipt {
            rental,
            car,
            customer,
            total_cents,
        })
    }

    /// A customer's open rentals, in insertion order, priced with the
    /// car's current rate. Returned rentals are removed from the ledger,
    /// so this reflects what is currently out, not a permanent log. An
    /// unknown customer id simply yields an empty history.
    pub fn rental_history(&self, customer_id: &str) -> Result<Vec<HistoryEntry>, AppError> {
        let mut entries = Vec::new();
        for rental in self.repo.rentals_for_customer(customer_id) {
            let car = self.get_car(&rental.car_id)?;
            let total_cents = car.rental_price(rental.days);
            entries.push(HistoryEntry {
                rental,
                car,
                total_cents,
            });
        }
        Ok(entries)
    }

    /// All open rentals, in insertion order.
    pub fn open_rentals(&self) -> Vec<Rental> {
        self.repo.list_rentals().to_vec()
    }
}

impl Default for RentalService {
    fn default() -> Self {
        Self::new(Repository::new())
    }
}
