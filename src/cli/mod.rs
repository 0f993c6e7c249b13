use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::application::RentalService;
use crate::domain::{CarFilter, Cents, format_cents, parse_cents};

/// Noleggio - Car Rental Desk
#[derive(Parser)]
#[command(name = "noleggio")]
#[command(about = "An in-memory car rental desk for the terminal")]
#[command(version)]
pub struct Cli {
    /// Start with an empty fleet instead of the demo fleet
    #[arg(long)]
    pub empty: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let mut service = RentalService::default();

        if !self.empty {
            seed_demo_fleet(&mut service)?;
            if self.verbose {
                eprintln!(
                    "[Seed] {} cars in the demo fleet",
                    service.list_cars().len()
                );
            }
        }

        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut out = io::stdout();
        menu_loop(&mut service, &mut input, &mut out)
    }
}

/// Seed the sample fleet the desk starts with.
pub fn seed_demo_fleet(service: &mut RentalService) -> Result<()> {
    service.add_car("C001", "Toyota", "Camry", 6000)?;
    service.add_car("C002", "Honda", "Accord", 7000)?;
    service.add_car("C003", "Mahindra", "Thar", 15000)?;
    Ok(())
}

/// The interactive menu. Generic over the input/output handles so the
/// whole flow can be scripted in tests; `Cli::run` wires stdin/stdout.
pub fn menu_loop(
    service: &mut RentalService,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    loop {
        writeln!(out, "===== Car Rental Desk =====")?;
        writeln!(out, "1. Rent a car")?;
        writeln!(out, "2. Return a car")?;
        writeln!(out, "3. View rental history")?;
        writeln!(out, "4. Search cars")?;
        writeln!(out, "5. Exit")?;

        // End of input behaves like choosing Exit
        let Some(choice) = prompt(input, out, "Enter your choice: ")? else {
            break;
        };

        let choice: u32 = match choice.parse() {
            Ok(n) => n,
            Err(_) => {
                writeln!(out, "Invalid input. Please enter a number.")?;
                continue;
            }
        };

        match choice {
            1 => run_rent_flow(service, input, out)?,
            2 => run_return_flow(service, input, out)?,
            3 => run_history_flow(service, input, out)?,
            4 => run_search_flow(service, input, out)?,
            5 => {
                writeln!(out, "\nThank you for using the car rental desk!")?;
                break;
            }
            _ => writeln!(out, "Invalid choice. Please enter a valid option.")?,
        }
    }

    Ok(())
}

fn run_rent_flow(
    service: &mut RentalService,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    writeln!(out, "\n== Rent a Car ==\n")?;

    let Some(name) = prompt(input, out, "Enter your name: ")? else {
        return Ok(());
    };
    let Some(brand) = prompt(input, out, "Enter the car brand (or leave blank): ")? else {
        return Ok(());
    };
    let Some(model) = prompt(input, out, "Enter the car model (or leave blank): ")? else {
        return Ok(());
    };

    let filter = CarFilter {
        brand: optional(brand),
        model: optional(model),
        ..Default::default()
    };
    let available = service.available_cars(&filter);

    writeln!(out, "\nAvailable cars:")?;
    if available.is_empty() {
        writeln!(out, "No cars available.")?;
        return Ok(());
    }
    for car in &available {
        writeln!(out, "{car}")?;
    }

    let Some(car_id) = prompt(input, out, "\nEnter the car ID you want to rent: ")? else {
        return Ok(());
    };
    let Some(days_str) = prompt(input, out, "Enter the number of days for rental: ")? else {
        return Ok(());
    };
    let days: u32 = match days_str.parse() {
        Ok(days) => days,
        Err(_) => {
            writeln!(out, "Invalid number of days.")?;
            return Ok(());
        }
    };

    // A customer record is minted for every rental attempt, before the
    // car choice is validated; a failed selection still leaves the
    // customer on the register.
    let customer = service.register_customer(name);

    let car = match service.get_car(&car_id) {
        Ok(car) => car,
        Err(e) => {
            writeln!(out, "\n{e}")?;
            return Ok(());
        }
    };
    if !car.is_available() {
        writeln!(out, "\nCar is not available for rent: {}", car.id)?;
        return Ok(());
    }

    let total_cents = car.rental_price(days);
    writeln!(out, "\n== Rental Information ==\n")?;
    writeln!(out, "Customer ID: {}", customer.id)?;
    writeln!(out, "Customer name: {}", customer.name)?;
    writeln!(out, "Car: {} {}", car.brand, car.model)?;
    writeln!(out, "Rental days: {days}")?;
    writeln!(out, "Total price: ${}", format_cents(total_cents))?;

    let Some(confirm) = prompt(input, out, "\nConfirm rental (Y/N): ")? else {
        return Ok(());
    };
    if confirm.eq_ignore_ascii_case("y") {
        match service.rent_car(&car.id, &customer.id, days) {
            Ok(_) => writeln!(out, "\nCar rented successfully.")?,
            Err(e) => writeln!(out, "\n{e}")?,
        }
    } else {
        writeln!(out, "\nRental canceled.")?;
    }

    Ok(())
}

fn run_return_flow(
    service: &mut RentalService,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    writeln!(out, "\n== Return a Car ==\n")?;

    let Some(car_id) = prompt(input, out, "Enter the car ID you want to return: ")? else {
        return Ok(());
    };

    match service.return_car(&car_id) {
        Ok(receipt) => writeln!(out, "Car returned successfully by {}.", receipt.customer.name)?,
        Err(e) => writeln!(out, "{e}")?,
    }

    Ok(())
}

fn run_history_flow(
    service: &RentalService,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    let Some(customer_id) = prompt(input, out, "Enter your customer ID: ")? else {
        return Ok(());
    };

    writeln!(out, "\n== Rental History ==\n")?;
    let entries = match service.rental_history(&customer_id) {
        Ok(entries) => entries,
        Err(e) => {
            writeln!(out, "{e}")?;
            return Ok(());
        }
    };

    if entries.is_empty() {
        writeln!(out, "No rentals found.")?;
        return Ok(());
    }
    for entry in &entries {
        writeln!(out, "Car: {} {}", entry.car.brand, entry.car.model)?;
        writeln!(out, "Days: {}", entry.rental.days)?;
        writeln!(out, "Opened: {}", entry.rental.opened_at.format("%Y-%m-%d"))?;
        writeln!(out, "Total price: ${}", format_cents(entry.total_cents))?;
        writeln!(out, "-----------------------")?;
    }

    Ok(())
}

fn run_search_flow(
    service: &RentalService,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    writeln!(out, "\n== Search Cars ==\n")?;

    let Some(brand) = prompt(input, out, "Enter the car brand (or leave blank): ")? else {
        return Ok(());
    };
    let Some(model) = prompt(input, out, "Enter the car model (or leave blank): ")? else {
        return Ok(());
    };
    let Some(min_rate_cents) =
        prompt_price(input, out, "Enter minimum price (or leave blank): ", "minimum")?
    else {
        return Ok(());
    };
    let Some(max_rate_cents) =
        prompt_price(input, out, "Enter maximum price (or leave blank): ", "maximum")?
    else {
        return Ok(());
    };

    let filter = CarFilter {
        brand: optional(brand),
        model: optional(model),
        min_rate_cents,
        max_rate_cents,
    };
    let cars = service.search_cars(&filter);

    writeln!(out, "\n== Search Results ==\n")?;
    if cars.is_empty() {
        writeln!(out, "No cars found.")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<8} {:<12} {:<12} {:>10}  {:<10}",
        "ID", "BRAND", "MODEL", "RATE/DAY", "STATUS"
    )?;
    writeln!(out, "{}", "-".repeat(56))?;
    for car in &cars {
        writeln!(
            out,
            "{:<8} {:<12} {:<12} {:>10}  {:<10}",
            car.id,
            car.brand,
            car.model,
            format!("${}", format_cents(car.daily_rate_cents)),
            if car.is_available() {
                "available"
            } else {
                "rented"
            }
        )?;
    }

    Ok(())
}

/// Print a label, read one trimmed line. None means end of input.
fn prompt(input: &mut dyn BufRead, out: &mut dyn Write, label: &str) -> Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Read an optional price bound. Malformed input reports the problem and
/// is treated as no bound, matching blank input. Outer None means end of
/// input.
fn prompt_price(
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    label: &str,
    which: &str,
) -> Result<Option<Option<Cents>>> {
    let Some(raw) = prompt(input, out, label)? else {
        return Ok(None);
    };
    if raw.is_empty() {
        return Ok(Some(None));
    }
    match parse_cents(&raw) {
        Ok(cents) => Ok(Some(Some(cents))),
        Err(_) => {
            writeln!(out, "Invalid {which} price format.")?;
            Ok(Some(None))
        }
    }
}

fn optional(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
