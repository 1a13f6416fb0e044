//! Account record fields and snapshots

use std::collections::BTreeMap;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::RecordId;

/// The account fields the record view displays and edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AccountField {
    Name,
    Phone,
    Website,
    Industry,
    Type,
    BillingStreet,
    BillingCity,
    BillingState,
    BillingCountry,
    BillingPostalCode,
}

impl AccountField {
    /// Field set requested from the record reader, in display order
    pub const ALL: [AccountField; 10] = [
        AccountField::Name,
        AccountField::Phone,
        AccountField::Website,
        AccountField::Industry,
        AccountField::Type,
        AccountField::BillingStreet,
        AccountField::BillingCity,
        AccountField::BillingState,
        AccountField::BillingCountry,
        AccountField::BillingPostalCode,
    ];

    /// Platform API name of the field
    pub fn api_name(&self) -> &'static str {
        match self {
            AccountField::Name => "Name",
            AccountField::Phone => "Phone",
            AccountField::Website => "Website",
            AccountField::Industry => "Industry",
            AccountField::Type => "Type",
            AccountField::BillingStreet => "BillingStreet",
            AccountField::BillingCity => "BillingCity",
            AccountField::BillingState => "BillingState",
            AccountField::BillingCountry => "BillingCountry",
            AccountField::BillingPostalCode => "BillingPostalCode",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountField::Name => "Account Name",
            AccountField::Phone => "Phone",
            AccountField::Website => "Website",
            AccountField::Industry => "Industry",
            AccountField::Type => "Type",
            AccountField::BillingStreet => "Billing Street",
            AccountField::BillingCity => "Billing City",
            AccountField::BillingState => "Billing State/Province",
            AccountField::BillingCountry => "Billing Country",
            AccountField::BillingPostalCode => "Billing Zip/Postal Code",
        }
    }

    pub fn from_api_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.api_name() == name)
    }

    pub fn is_required(&self) -> bool {
        matches!(self, AccountField::Name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// Read-only copy of the account fields pushed by the record feed
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecordSnapshot {
    pub id: RecordId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(default)]
    pub billing: BillingAddress,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<Timestamp>,
}

impl RecordSnapshot {
    pub fn new(id: RecordId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Current value of a field, `None` when blank
    pub fn get(&self, field: AccountField) -> Option<&str> {
        let value = match field {
            AccountField::Name => Some(&self.name),
            AccountField::Phone => self.phone.as_ref(),
            AccountField::Website => self.website.as_ref(),
            AccountField::Industry => self.industry.as_ref(),
            AccountField::Type => self.account_type.as_ref(),
            AccountField::BillingStreet => self.billing.street.as_ref(),
            AccountField::BillingCity => self.billing.city.as_ref(),
            AccountField::BillingState => self.billing.state.as_ref(),
            AccountField::BillingCountry => self.billing.country.as_ref(),
            AccountField::BillingPostalCode => self.billing.postal_code.as_ref(),
        };
        value.map(String::as_str).filter(|v| !v.is_empty())
    }

    /// Set a field; empty strings clear optional fields
    pub fn set(&mut self, field: AccountField, value: &str) {
        let optional = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
        match field {
            AccountField::Name => self.name = value.to_string(),
            AccountField::Phone => self.phone = optional,
            AccountField::Website => self.website = optional,
            AccountField::Industry => self.industry = optional,
            AccountField::Type => self.account_type = optional,
            AccountField::BillingStreet => self.billing.street = optional,
            AccountField::BillingCity => self.billing.city = optional,
            AccountField::BillingState => self.billing.state = optional,
            AccountField::BillingCountry => self.billing.country = optional,
            AccountField::BillingPostalCode => self.billing.postal_code = optional,
        }
    }

    pub fn apply(&mut self, changes: &FieldChanges) {
        for (field, value) in changes.iter() {
            self.set(field, value);
        }
    }
}

/// Field values submitted from the edit form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldChanges {
    values: BTreeMap<AccountField, String>,
}

impl FieldChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: AccountField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn with(mut self, field: AccountField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: AccountField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AccountField, &str)> {
        self.values.iter().map(|(f, v)| (*f, v.as_str()))
    }

    /// Only the fields whose value differs from `snapshot`
    pub fn diff_against(&self, snapshot: &RecordSnapshot) -> FieldChanges {
        let values = self
            .values
            .iter()
            .filter(|(field, value)| snapshot.get(**field).unwrap_or("") != value.as_str())
            .map(|(field, value)| (*field, value.clone()))
            .collect();
        FieldChanges { values }
    }
}
