mod common;

use anyhow::Result;
use common::{DemoFleet, rent_to, test_service};
use noleggio::application::AppError;

#[test]
fn test_rent_marks_car_unavailable() -> Result<()> {
    let mut service = test_service();
    DemoFleet::create_basic(&mut service)?;

    let receipt = rent_to(&mut service, "C001", "Alice", 10)?;

    assert!(!service.get_car("C001")?.is_available());
    assert_eq!(receipt.rental.car_id, "C001");
    assert_eq!(receipt.rental.days, 10);
    assert_eq!(receipt.total_cents, 54000, "10 days at $60.00 with 10% off");
    assert_eq!(service.open_rentals().len(), 1);

    Ok(())
}

#[test]
fn test_rent_already_rented_car_changes_nothing() -> Result<()> {
    let mut service = test_service();
    DemoFleet::create_basic(&mut service)?;

    rent_to(&mut service, "C001", "Alice", 3)?;
    let result = rent_to(&mut service, "C001", "Bob", 5);

    assert!(matches!(
        result.unwrap_err().downcast_ref::<AppError>(),
        Some(AppError::CarNotAvailable(_))
    ));
    assert!(!service.get_car("C001")?.is_available());
    assert_eq!(service.open_rentals().len(), 1, "No second rental recorded");
    // Bob was still registered; the register never deduplicates
    assert_eq!(service.list_customers().len(), 2);

    Ok(())
}

#[test]
fn test_rent_unknown_car() -> Result<()> {
    let mut service = test_service();
    DemoFleet::create_basic(&mut service)?;

    let result = rent_to(&mut service, "C999", "Alice", 3);
    assert!(matches!(
        result.unwrap_err().downcast_ref::<AppError>(),
        Some(AppError::CarNotFound(_))
    ));
    assert!(service.open_rentals().is_empty());

    Ok(())
}

#[test]
fn test_rent_unknown_customer() -> Result<()> {
    let mut service = test_service();
    DemoFleet::create_basic(&mut service)?;

    let result = service.rent_car("C001", "CUS99", 3);
    assert!(matches!(result, Err(AppError::CustomerNotFound(_))));
    assert!(service.get_car("C001")?.is_available());

    Ok(())
}

#[test]
fn test_rent_zero_days_rejected() -> Result<()> {
    let mut service = test_service();
    DemoFleet::create_basic(&mut service)?;

    let customer = service.register_customer("Alice");
    let result = service.rent_car("C001", &customer.id, 0);

    assert!(matches!(result, Err(AppError::InvalidDuration)));
    assert!(service.get_car("C001")?.is_available());
    assert!(service.open_rentals().is_empty());

    Ok(())
}

#[test]
fn test_return_removes_rental_and_frees_car() -> Result<()> {
    let mut service = test_service();
    DemoFleet::create_basic(&mut service)?;

    rent_to(&mut service, "C001", "Alice", 10)?;
    let receipt = service.return_car("C001")?;

    assert!(service.get_car("C001")?.is_available());
    assert!(service.open_rentals().is_empty());
    assert_eq!(receipt.customer.name, "Alice");
    assert_eq!(receipt.total_cents, 54000);

    Ok(())
}

#[test]
fn test_return_without_open_rental_changes_nothing() -> Result<()> {
    let mut service = test_service();
    DemoFleet::create_basic(&mut service)?;

    rent_to(&mut service, "C001", "Alice", 3)?;
    let result = service.return_car("C002");

    assert!(matches!(result, Err(AppError::CarNotRented(_))));
    // The availability flag is only touched once an open rental is found
    assert!(service.get_car("C002")?.is_available());
    assert_eq!(service.open_rentals().len(), 1, "Alice's rental untouched");

    Ok(())
}

#[test]
fn test_return_unknown_car() -> Result<()> {
    let mut service = test_service();
    DemoFleet::create_basic(&mut service)?;

    let result = service.return_car("C999");
    assert!(matches!(result, Err(AppError::CarNotFound(_))));

    Ok(())
}

#[test]
fn test_car_can_be_rented_again_after_return() -> Result<()> {
    let mut service = test_service();
    DemoFleet::create_basic(&mut service)?;

    rent_to(&mut service, "C001", "Alice", 3)?;
    service.return_car("C001")?;
    let receipt = rent_to(&mut service, "C001", "Bob", 5)?;

    assert_eq!(receipt.customer.name, "Bob");
    assert_eq!(receipt.total_cents, 30000);
    assert!(!service.get_car("C001")?.is_available());

    Ok(())
}

#[test]
fn test_add_car_rejects_duplicate_id() -> Result<()> {
    let mut service = test_service();
    service.add_car("C001", "Toyota", "Camry", 6000)?;

    let result = service.add_car("C001", "Honda", "Accord", 7000);
    assert!(matches!(result, Err(AppError::CarAlreadyExists(_))));
    assert_eq!(service.list_cars().len(), 1);

    Ok(())
}

#[test]
fn test_add_car_rejects_negative_rate() {
    let mut service = test_service();
    let result = service.add_car("C001", "Toyota", "Camry", -100);
    assert!(matches!(result, Err(AppError::NegativeRate(-100))));
    assert!(service.list_cars().is_empty());
}
