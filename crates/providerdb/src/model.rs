//! # Domain Model
//!
//! This module defines the record types that flow through providerdb:
//!
//! - [`Provider`]: the stored record. This is exactly what lands in the backing file.
//! - [`NewProvider`]: creation input. Carries no id; the store assigns one.
//! - [`ProviderUpdate`]: partial update input. `None` fields keep their stored value.
//! - [`ProviderView`]: the externally visible projection handed to clients.
//!
//! ## On-Disk Shape
//!
//! Records are serialized with camelCase keys:
//!
//! ```text
//! {
//!   "id": 1,
//!   "name": "Acme",
//!   "companyName": "Acme Corp",
//!   "address": "742 Evergreen Terrace"
//! }
//! ```
//!
//! ## Identity
//!
//! `id` is assigned by the store at insert time and never changes afterwards.
//! An id of `0` marks a record that has not been saved yet.
//!
//! ## Names
//!
//! Provider names are unique ignoring case. [`names_match`] is the single
//! comparison used by lookups and uniqueness checks, so "Acme", "acme" and
//! "ACME" all refer to the same provider.
//!
//! ## Field Limits
//!
//! [`NewProvider::validate`] enforces the input rules used by the command layer.
//! Lengths are counted in characters after trimming:
//!
//! | Field | Min | Max |
//! |-------|-----|-----|
//! | `name` | 3 | 100 |
//! | `company_name` | 3 | 200 |
//! | `address` | 10 | 300 |
//!
//! The store itself never validates; it trusts its callers.

use crate::error::{ProviderError, Result};
use serde::{Deserialize, Serialize};

pub const NAME_LIMITS: (usize, usize) = (3, 100);
pub const COMPANY_NAME_LIMITS: (usize, usize) = (3, 200);
pub const ADDRESS_LIMITS: (usize, usize) = (10, 300);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: u64,
    pub name: String,
    pub company_name: String,
    pub address: String,
}

impl Provider {
    /// Builds an unsaved provider (id `0`).
    pub fn new(
        name: impl Into<String>,
        company_name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            company_name: company_name.into(),
            address: address.into(),
        }
    }

    /// Case-insensitive name comparison.
    pub fn has_name(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProvider {
    pub name: String,
    pub company_name: String,
    pub address: String,
}

impl NewProvider {
    pub fn new(
        name: impl Into<String>,
        company_name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            company_name: company_name.into(),
            address: address.into(),
        }
    }

    /// Checks every field against its required length range.
    /// Reports the first offending field.
    pub fn validate(&self) -> Result<()> {
        check_field("name", &self.name, NAME_LIMITS)?;
        check_field("companyName", &self.company_name, COMPANY_NAME_LIMITS)?;
        check_field("address", &self.address, ADDRESS_LIMITS)?;
        Ok(())
    }

    /// Trimmed copy, ready to be stored.
    pub fn into_provider(self) -> Provider {
        Provider::new(
            self.name.trim(),
            self.company_name.trim(),
            self.address.trim(),
        )
    }
}

fn check_field(field: &str, value: &str, (min, max): (usize, usize)) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ProviderError::Validation(format!("{} is required", field)));
    }
    let len = trimmed.chars().count();
    if len < min || len > max {
        return Err(ProviderError::Validation(format!(
            "{} must be between {} and {} characters (got {})",
            field, min, max, len
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderUpdate {
    pub name: Option<String>,
    pub company_name: Option<String>,
    pub address: Option<String>,
}

impl ProviderUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.company_name.is_none() && self.address.is_none()
    }

    /// Overlays the present fields onto `current`. The id is kept.
    pub fn apply_to(&self, current: &Provider) -> NewProvider {
        NewProvider {
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            company_name: self
                .company_name
                .clone()
                .unwrap_or_else(|| current.company_name.clone()),
            address: self
                .address
                .clone()
                .unwrap_or_else(|| current.address.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderView {
    pub id: u64,
    pub name: String,
    pub company_name: String,
    pub address: String,
}

impl From<&Provider> for ProviderView {
    fn from(provider: &Provider) -> Self {
        Self {
            id: provider.id,
            name: provider.name.clone(),
            company_name: provider.company_name.clone(),
            address: provider.address.clone(),
        }
    }
}

impl From<Provider> for ProviderView {
    fn from(provider: Provider) -> Self {
        Self {
            id: provider.id,
            name: provider.name,
            company_name: provider.company_name,
            address: provider.address,
        }
    }
}
