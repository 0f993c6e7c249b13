use crate::domain::{Car, CarFilter, Customer, CustomerId, Rental};

/// In-memory store for the fleet, the customer register and the open
/// rentals. The three sequences preserve insertion order, which is also
/// the iteration and search order; every query is a linear scan.
///
/// Appends are unchecked here. Uniqueness of car ids and the one-open-
/// rental-per-car invariant are the application layer's responsibility.
/// Single logical actor, so no synchronization primitives.
pub struct Repository {
    cars: Vec<Car>,
    customers: Vec<Customer>,
    rentals: Vec<Rental>,
    customer_seq: u64,
}

impl Repository {
    pub fn new() -> Self {
        Self {
            cars: Vec::new(),
            customers: Vec::new(),
            rentals: Vec::new(),
            customer_seq: 0,
        }
    }

    // ========================
    // Car operations
    // ========================

    /// Append a car to the fleet.
    pub fn save_car(&mut self, car: Car) {
        self.cars.push(car);
    }

    /// Get a car by id.
    pub fn get_car(&self, id: &str) -> Option<&Car> {
        self.cars.iter().find(|car| car.id == id)
    }

    /// Get a mutable car by id (for availability transitions).
    pub fn get_car_mut(&mut self, id: &str) -> Option<&mut Car> {
        self.cars.iter_mut().find(|car| car.id == id)
    }

    /// All cars in fleet insertion order.
    pub fn list_cars(&self) -> &[Car] {
        &self.cars
    }

    /// All cars matching every supplied filter field, available or not,
    /// in fleet insertion order.
    pub fn search_cars(&self, filter: &CarFilter) -> Vec<Car> {
        self.cars
            .iter()
            .filter(|car| filter.matches(car))
            .cloned()
            .collect()
    }

    // ========================
    // Customer operations
    // ========================

    /// Mint the next customer id from the running counter.
    pub fn next_customer_id(&mut self) -> CustomerId {
        self.customer_seq += 1;
        format!("CUS{}", self.customer_seq)
    }

    /// Append a customer to the register.
    pub fn save_customer(&mut self, customer: Customer) {
        self.customers.push(customer);
    }

    /// Get a customer by id.
    pub fn get_customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.id == id)
    }

    /// All customers in registration order.
    pub fn list_customers(&self) -> &[Customer] {
        &self.customers
    }

    // ========================
    // Rental operations
    // ========================

    /// Append an open rental.
    pub fn save_rental(&mut self, rental: Rental) {
        self.rentals.push(rental);
    }

    /// First open rental referencing the given car, if any.
    pub fn open_rental_for_car(&self, car_id: &str) -> Option<&Rental> {
        self.rentals.iter().find(|rental| rental.car_id == car_id)
    }

    /// Remove and return the first open rental referencing the given car.
    /// Ties between duplicate entries break by insertion order.
    pub fn remove_rental_for_car(&mut self, car_id: &str) -> Option<Rental> {
        let index = self
            .rentals
            .iter()
            .position(|rental| rental.car_id == car_id)?;
        Some(self.rentals.remove(index))
    }

    /// Open rentals for a customer, in insertion order.
    pub fn rentals_for_customer(&self, customer_id: &str) -> Vec<Rental> {
        self.rentals
            .iter()
            .filter(|rental| rental.customer_id == customer_id)
            .cloned()
            .collect()
    }

    /// All open rentals in insertion order.
    pub fn list_rentals(&self) -> &[Rental] {
        &self.rentals
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
