//! Lead-capture orders.
//!
//! The public site submits an [`OrderForm`] (name + phone + message);
//! the admin panel lists submitted [`Order`]s and moves them through a
//! closed status set.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::{EntityId, Timestamp};

/// Order submission from the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderForm {
    #[validate(length(min = 1, max = 200, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 5, max = 30, message = "phone must be 5 to 30 characters"))]
    pub phone: String,
    #[serde(default)]
    #[validate(length(max = 5000, message = "message too long"))]
    pub message: String,
}

impl OrderForm {
    /// Validate the form, mapping the validator report into a
    /// [`CoreError::Validation`] with a readable message.
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))
    }
}

/// Processing status assigned by the admin panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    New,
    InProgress,
    Done,
    Cancelled,
}

/// A submitted order as listed in the admin panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: EntityId,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub message: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}
