//! Step-by-step quote intake
//!
//! `QuoteIntake` is an owned value moved through explicit transitions
//! (route → pallets → insurance → review). Each transition consumes the intake and
//! returns the next state, so there is no shared "current step" to mutate. The
//! calculator only ever sees the finished [`QuoteRequest`].

use std::fmt;

use crate::freight::{non_blank, Pallet, QuoteError, QuoteRequest, RateSchedule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeStep {
    Route,
    Pallets,
    Insurance,
    Review,
}

impl fmt::Display for IntakeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Route => "route",
            Self::Pallets => "pallets",
            Self::Insurance => "insurance",
            Self::Review => "review",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct QuoteIntake {
    step: IntakeStep,
    origin: Option<String>,
    destination: Option<String>,
    pallets: Vec<Pallet>,
    insurance_rate: f64,
    cargo_value: f64,
    stackable: bool,
    company: Option<String>,
}

impl Default for QuoteIntake {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteIntake {
    pub fn new() -> Self {
        Self {
            step: IntakeStep::Route,
            origin: None,
            destination: None,
            pallets: Vec::new(),
            insurance_rate: 0.0,
            cargo_value: 0.0,
            stackable: false,
            company: None,
        }
    }

    pub fn step(&self) -> IntakeStep {
        self.step
    }

    pub fn pallets(&self) -> &[Pallet] {
        &self.pallets
    }

    fn expect_step(&self, expected: IntakeStep, action: &str) -> Result<(), QuoteError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(QuoteError::InvalidInput(format!(
                "cannot {} during the {} step",
                action, self.step
            )))
        }
    }

    /// Select origin and destination; both must exist in the schedule
    pub fn choose_route(
        mut self,
        schedule: &RateSchedule,
        origin: &str,
        destination: &str,
    ) -> Result<Self, QuoteError> {
        self.expect_step(IntakeStep::Route, "choose a route")?;
        schedule.check_origin(origin)?;
        schedule.rate_for(destination)?;

        self.origin = Some(origin.to_string());
        self.destination = Some(destination.to_string());
        self.step = IntakeStep::Pallets;
        Ok(self)
    }

    pub fn add_pallet(mut self, pallet: Pallet) -> Result<Self, QuoteError> {
        self.expect_step(IntakeStep::Pallets, "add a pallet")?;
        self.pallets.push(pallet);
        Ok(self)
    }

    pub fn finish_pallets(mut self) -> Result<Self, QuoteError> {
        self.expect_step(IntakeStep::Pallets, "finish pallets")?;
        if self.pallets.is_empty() {
            return Err(QuoteError::InvalidInput(
                "at least one pallet is required".to_string(),
            ));
        }
        self.step = IntakeStep::Insurance;
        Ok(self)
    }

    pub fn set_insurance(mut self, rate: f64, cargo_value: f64) -> Result<Self, QuoteError> {
        self.expect_step(IntakeStep::Insurance, "set insurance")?;
        if !rate.is_finite() || rate < 0.0 {
            return Err(QuoteError::InvalidInput(format!(
                "insurance rate must be a non-negative number (got {})",
                rate
            )));
        }
        if !cargo_value.is_finite() || cargo_value < 0.0 {
            return Err(QuoteError::InvalidInput(format!(
                "cargo value must be a non-negative number (got {})",
                cargo_value
            )));
        }

        self.insurance_rate = rate;
        self.cargo_value = cargo_value;
        self.step = IntakeStep::Review;
        Ok(self)
    }

    /// Invoice-only fields; accepted at any step
    pub fn with_invoice_details(mut self, stackable: bool, company: Option<String>) -> Self {
        self.stackable = stackable;
        self.company = non_blank(company);
        self
    }

    /// Step back one stage, keeping what was already collected
    pub fn back(mut self) -> Self {
        self.step = match self.step {
            IntakeStep::Route | IntakeStep::Pallets => IntakeStep::Route,
            IntakeStep::Insurance => IntakeStep::Pallets,
            IntakeStep::Review => IntakeStep::Insurance,
        };
        self
    }

    pub fn into_request(self) -> Result<QuoteRequest, QuoteError> {
        self.expect_step(IntakeStep::Review, "build the quote request")?;

        let (Some(origin), Some(destination)) = (self.origin, self.destination) else {
            return Err(QuoteError::InvalidInput("route has not been chosen".to_string()));
        };

        Ok(QuoteRequest {
            pallets: self.pallets,
            origin,
            destination,
            insurance_rate: self.insurance_rate,
            cargo_value: self.cargo_value,
            stackable: self.stackable,
            company: self.company,
        })
    }
}
