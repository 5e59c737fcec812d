//! Customer directory record.

use crate::model::validation::{require_text, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Store-assigned customer identifier.
pub type CustomerId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub visits: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_visit: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Customer fields supplied by callers; the store owns `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerDraft {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub visits: u32,
    pub last_visit: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl CustomerDraft {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_text("phone", &self.phone)
    }

    pub(crate) fn into_customer(self, id: CustomerId) -> Customer {
        Customer {
            id,
            name: self.name,
            phone: self.phone,
            email: self.email,
            visits: self.visits,
            last_visit: self.last_visit,
            notes: self.notes,
        }
    }
}

impl From<Customer> for CustomerDraft {
    fn from(value: Customer) -> Self {
        Self {
            name: value.name,
            phone: value.phone,
            email: value.email,
            visits: value.visits,
            last_visit: value.last_visit,
            notes: value.notes,
        }
    }
}
