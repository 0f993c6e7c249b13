// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use noleggio::application::{RentalReceipt, RentalService};
use noleggio::storage::Repository;

/// Helper to create a test service over a fresh in-memory repository
pub fn test_service() -> RentalService {
    RentalService::new(Repository::new())
}

/// Test fixture: standard fleet setup
pub struct DemoFleet;

impl DemoFleet {
    /// Create the basic three-car fleet: Camry, Accord, Thar
    pub fn create_basic(service: &mut RentalService) -> Result<()> {
        service.add_car("C001", "Toyota", "Camry", 6000)?;
        service.add_car("C002", "Honda", "Accord", 7000)?;
        service.add_car("C003", "Mahindra", "Thar", 15000)?;
        Ok(())
    }
}

/// Register a customer under `name` and rent them the given car
pub fn rent_to(
    service: &mut RentalService,
    car_id: &str,
    name: &str,
    days: u32,
) -> Result<RentalReceipt> {
    let customer = service.register_customer(name);
    Ok(service.rent_car(car_id, &customer.id, days)?)
}
