//! Simulated checkout form.
//!
//! Submission never leaves the browser: a valid form moves the session to the
//! `Submitted` step and the modal shows its confirmation. Closing the modal
//! returns to the form step but keeps the drafts.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutField {
    FullName,
    Whatsapp,
    Address,
    MoveInDate,
}

impl CheckoutField {
    /// Form order, top to bottom.
    pub const ALL: [CheckoutField; 4] = [
        CheckoutField::FullName,
        CheckoutField::Whatsapp,
        CheckoutField::Address,
        CheckoutField::MoveInDate,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CheckoutField::FullName => "Full Name",
            CheckoutField::Whatsapp => "WhatsApp Number",
            CheckoutField::Address => "Delivery Address in Bali",
            CheckoutField::MoveInDate => "Move-in Date",
        }
    }

    /// HTML input type.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            CheckoutField::FullName | CheckoutField::Address => "text",
            CheckoutField::Whatsapp => "tel",
            CheckoutField::MoveInDate => "date",
        }
    }

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            CheckoutField::FullName => "e.g. Sarah Chen",
            CheckoutField::Whatsapp => "+62 812 3456 7890",
            CheckoutField::Address => "e.g. Jl. Pantai Berawa No. 42, Canggu",
            CheckoutField::MoveInDate => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckoutError {
    #[error("{} is required", .0.label())]
    MissingField(CheckoutField),
}

/// Field drafts for the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub full_name: String,
    pub whatsapp: String,
    pub address: String,
    /// ISO `yyyy-mm-dd` as produced by a date input.
    pub move_in_date: String,
}

impl CheckoutForm {
    #[must_use]
    pub fn get(&self, field: CheckoutField) -> &str {
        match field {
            CheckoutField::FullName => &self.full_name,
            CheckoutField::Whatsapp => &self.whatsapp,
            CheckoutField::Address => &self.address,
            CheckoutField::MoveInDate => &self.move_in_date,
        }
    }

    pub fn set(&mut self, field: CheckoutField, value: impl Into<String>) {
        let value = value.into();
        match field {
            CheckoutField::FullName => self.full_name = value,
            CheckoutField::Whatsapp => self.whatsapp = value,
            CheckoutField::Address => self.address = value,
            CheckoutField::MoveInDate => self.move_in_date = value,
        }
    }

    /// First required field that is blank, in form order.
    ///
    /// Text fields are trimmed; the date only has to be non-empty.
    #[must_use]
    pub fn first_missing(&self) -> Option<CheckoutField> {
        CheckoutField::ALL.into_iter().find(|field| {
            let value = self.get(*field);
            match field {
                CheckoutField::MoveInDate => value.is_empty(),
                _ => value.trim().is_empty(),
            }
        })
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.first_missing().is_none()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckoutStep {
    #[default]
    Form,
    Submitted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutSession {
    pub form: CheckoutForm,
    pub step: CheckoutStep,
}

impl CheckoutSession {
    /// Validate and mark the booking as submitted.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::MissingField`] naming the first blank field.
    pub fn submit(&mut self) -> Result<(), CheckoutError> {
        if let Some(field) = self.form.first_missing() {
            return Err(CheckoutError::MissingField(field));
        }
        self.step = CheckoutStep::Submitted;
        log::info!("checkout submitted (simulated) for {}", self.form.full_name.trim());
        Ok(())
    }

    /// Return to the form step. Drafts are kept for the next open.
    pub fn reset(&mut self) {
        self.step = CheckoutStep::Form;
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.step == CheckoutStep::Submitted
    }
}
