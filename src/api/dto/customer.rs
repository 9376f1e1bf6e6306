//! DTOs for customer endpoints.

use serde::Deserialize;
use validator::Validate;

use super::fields::trimmed;
use crate::domain::entities::{CustomerPatch, NewCustomer};

/// Request to register a customer.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 100, message = "Customer firstname is required"))]
    pub firstname: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 100, message = "Customer lastname is required"))]
    pub lastname: String,

    #[validate(email(message = "Customer email is not a valid email address"))]
    pub email: String,
}

impl From<CreateCustomerRequest> for NewCustomer {
    fn from(r: CreateCustomerRequest) -> Self {
        Self {
            firstname: r.firstname,
            lastname: r.lastname,
            email: r.email,
        }
    }
}

/// Partial customer update. Absent or blank fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCustomerRequest {
    #[validate(length(max = 100))]
    pub firstname: Option<String>,

    #[validate(length(max = 100))]
    pub lastname: Option<String>,

    #[validate(email(message = "Customer email is not a valid email address"))]
    pub email: Option<String>,
}

impl From<UpdateCustomerRequest> for CustomerPatch {
    fn from(r: UpdateCustomerRequest) -> Self {
        Self {
            firstname: r.firstname,
            lastname: r.lastname,
            email: r.email,
        }
    }
}
