//! Fee preview binary - computes and displays a charge breakdown without the UI
//!
//! Usage:
//!   cargo run --bin preview-fees -- <monthly_rent> <deposit> <months> <Residential|Commercial>
//!
//! Example:
//!   cargo run --bin preview-fees -- 10000 20000 11 Residential

use anyhow::{bail, Context, Result};
use rent_agreement_desk::calculator::{calculate, AgreementType, FeeInput};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 4 {
        bail!("Usage: preview-fees <monthly_rent> <deposit> <months> <Residential|Commercial>");
    }

    let input = FeeInput {
        monthly_rent: args[0].parse().context("monthly_rent must be a number")?,
        security_deposit: args[1].parse().context("deposit must be a number")?,
        duration_months: args[2].parse().context("months must be a whole number")?,
        agreement_type: args[3].parse::<AgreementType>()?,
    };

    let breakdown = calculate(&input)?;

    println!();
    println!("Charge breakdown ({} agreement)", input.agreement_type);
    println!("--------------------------------------");
    println!("Stamp duty:               ₹{:>8}", breakdown.stamp_duty);
    println!("Registration fee:         ₹{:>8}", breakdown.registration_fee);
    println!(
        "Document handling charge: ₹{:>8}",
        breakdown.document_handling_charge
    );
    println!("Service charge:           ₹{:>8}", breakdown.service_charge);
    println!("--------------------------------------");
    println!("Total:                    ₹{:>8}", breakdown.total);
    println!();

    Ok(())
}
