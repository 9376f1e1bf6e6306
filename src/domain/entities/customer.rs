//! Customer entity and its public summary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    pub fn new(
        id: i64,
        firstname: String,
        lastname: String,
        email: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            firstname,
            lastname,
            email,
            created_at,
        }
    }
}

/// Input data for creating a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

/// Partial update for an existing customer.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerPatch {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
}

impl CustomerPatch {
    /// Drops blank values so they never overwrite stored data.
    pub fn without_blanks(self) -> Self {
        let keep = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Self {
            firstname: keep(self.firstname),
            lastname: keep(self.lastname),
            email: keep(self.email),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.firstname.is_none() && self.lastname.is_none() && self.email.is_none()
    }
}

/// Customer summary carried in API responses and order confirmations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

impl From<Customer> for CustomerResponse {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id,
            firstname: c.firstname,
            lastname: c.lastname,
            email: c.email,
        }
    }
}
