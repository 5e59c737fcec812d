//! Sale (payment transaction) model.
//!
//! # Invariants
//! - `id` and `date` are stamped by the store at creation and are not part of
//!   the caller input or the update patch.
//! - `amount` is a non-negative finite currency amount.

use crate::model::validation::{
    require_amount, require_optional_text, require_text, ValidationError,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Store-generated sale identifier, monotonic with creation time.
pub type SaleId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    #[serde(rename = "UPI")]
    Upi,
    Card,
    Paytm,
}

impl PaymentMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Upi => "UPI",
            Self::Card => "Card",
            Self::Paytm => "Paytm",
        }
    }
}

/// Recorded payment for one delivered service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,
    /// Local wall-clock instant the sale was recorded at.
    pub date: NaiveDateTime,
    pub customer: String,
    pub service: String,
    pub barber: String,
    pub amount: f64,
    pub payment: PaymentMethod,
}

/// Caller input for recording a sale.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSale {
    pub customer: String,
    pub service: String,
    pub barber: String,
    pub amount: f64,
    pub payment: PaymentMethod,
}

impl NewSale {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("customer", &self.customer)?;
        require_text("service", &self.service)?;
        require_text("barber", &self.barber)?;
        require_amount(self.amount)
    }

    pub(crate) fn into_sale(self, id: SaleId, date: NaiveDateTime) -> Sale {
        Sale {
            id,
            date,
            customer: self.customer,
            service: self.service,
            barber: self.barber,
            amount: self.amount,
            payment: self.payment,
        }
    }
}

/// Partial update for a recorded sale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalePatch {
    pub customer: Option<String>,
    pub service: Option<String>,
    pub barber: Option<String>,
    pub amount: Option<f64>,
    pub payment: Option<PaymentMethod>,
}

impl SalePatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_optional_text("customer", self.customer.as_ref())?;
        require_optional_text("service", self.service.as_ref())?;
        require_optional_text("barber", self.barber.as_ref())?;
        match self.amount {
            Some(amount) => require_amount(amount),
            None => Ok(()),
        }
    }

    pub(crate) fn apply_to(self, target: &mut Sale) {
        if let Some(customer) = self.customer {
            target.customer = customer;
        }
        if let Some(service) = self.service {
            target.service = service;
        }
        if let Some(barber) = self.barber {
            target.barber = barber;
        }
        if let Some(amount) = self.amount {
            target.amount = amount;
        }
        if let Some(payment) = self.payment {
            target.payment = payment;
        }
    }
}
