//! Rent agreement charge calculator.
//!
//! A pure mapping from the calculator form's inputs to a fee breakdown.
//! Identical input always yields identical output; nothing is persisted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Government stamp duty never drops below this floor, whatever the lease value.
pub const STAMP_DUTY_MINIMUM: u64 = 100;

/// Fixed charges, in rupees. Configuration constants, not user-controlled.
pub const REGISTRATION_FEE: u64 = 1000;
pub const DOCUMENT_HANDLING_CHARGE: u64 = 300;
pub const SERVICE_CHARGE: u64 = 799;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgreementType {
    Residential,
    Commercial,
}

impl AgreementType {
    /// Stamp duty rate applied to the base lease amount.
    pub fn stamp_duty_rate(&self) -> f64 {
        match self {
            AgreementType::Residential => 0.0025,
            AgreementType::Commercial => 0.005,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgreementType::Residential => "Residential",
            AgreementType::Commercial => "Commercial",
        }
    }
}

impl std::str::FromStr for AgreementType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Residential" => Ok(AgreementType::Residential),
            "Commercial" => Ok(AgreementType::Commercial),
            other => Err(ValidationError::UnknownAgreementType(other.to_string())),
        }
    }
}

impl std::fmt::Display for AgreementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs from the calculator form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeInput {
    /// Monthly rent in rupees, must be > 0
    pub monthly_rent: f64,
    /// Security deposit in rupees, >= 0
    pub security_deposit: f64,
    /// Agreement duration in months, must be > 0
    pub duration_months: u32,
    pub agreement_type: AgreementType,
}

/// Invalid calculator input. No breakdown is produced; the caller re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("monthly rent must be greater than zero")]
    MonthlyRent,

    #[error("duration must be at least one month")]
    Duration,

    #[error("security deposit must not be negative")]
    SecurityDeposit,

    #[error("unknown agreement type: '{0}'")]
    UnknownAgreementType(String),
}

/// The computed fee breakdown, all values in whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeeBreakdown {
    pub stamp_duty: u64,
    pub registration_fee: u64,
    pub document_handling_charge: u64,
    pub service_charge: u64,
    pub total: u64,
}

/// Compute the fee breakdown for a validated input.
///
/// `base_amount = monthly_rent * duration_months + security_deposit`, stamp
/// duty is the type-specific rate of the base amount rounded half-up with a
/// floor of [`STAMP_DUTY_MINIMUM`], and the total adds the three fixed
/// charges on top.
pub fn calculate(input: &FeeInput) -> Result<FeeBreakdown, ValidationError> {
    if !(input.monthly_rent > 0.0) || !input.monthly_rent.is_finite() {
        return Err(ValidationError::MonthlyRent);
    }
    if input.duration_months == 0 {
        return Err(ValidationError::Duration);
    }
    if !(input.security_deposit >= 0.0) || !input.security_deposit.is_finite() {
        return Err(ValidationError::SecurityDeposit);
    }

    let base_amount =
        input.monthly_rent * f64::from(input.duration_months) + input.security_deposit;

    // f64::round is round-half-away-from-zero, which is half-up for the
    // non-negative amounts validated above.
    let computed = (base_amount * input.agreement_type.stamp_duty_rate()).round() as u64;
    let stamp_duty = computed.max(STAMP_DUTY_MINIMUM);

    Ok(FeeBreakdown {
        stamp_duty,
        registration_fee: REGISTRATION_FEE,
        document_handling_charge: DOCUMENT_HANDLING_CHARGE,
        service_charge: SERVICE_CHARGE,
        total: stamp_duty + REGISTRATION_FEE + DOCUMENT_HANDLING_CHARGE + SERVICE_CHARGE,
    })
}
