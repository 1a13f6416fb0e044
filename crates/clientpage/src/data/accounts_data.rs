//! Fixture account store served by the background service worker.
//!
//! Stored in `accounts.yaml`. Each entry carries the record fields, the
//! account's opportunities and a `restricted` flag that makes the record
//! unreadable for the session user.

use clientpage_core::{
    AccountField, ClassificationError, ClassificationResult, FieldChanges, ReadAccessError,
    RecordId, RecordSnapshot, UpdateError,
};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

pub const NO_ACCESS_MESSAGE: &str =
    "You don't have access to this record. Ask your administrator for help or to request access.";
pub const NOT_FOUND_MESSAGE: &str = "The requested resource does not exist";
pub const INSUFFICIENT_ACCESS_MESSAGE: &str = "insufficient access rights on object id";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpportunityStage {
    Prospecting,
    Negotiation,
    ClosedWon,
    ClosedLost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub name: String,
    pub amount: f64,
    pub stage: OpportunityStage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountEntry {
    pub record: RecordSnapshot,
    #[serde(default)]
    pub restricted: bool,
    #[serde(default)]
    pub opportunities: Vec<Opportunity>,
}

impl AccountEntry {
    /// Sum of closed-won opportunity amounts
    pub fn closed_won_total(&self) -> f64 {
        self.opportunities
            .iter()
            .filter(|o| o.stage == OpportunityStage::ClosedWon)
            .map(|o| o.amount)
            .sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountsData {
    #[serde(default)]
    pub accounts: Vec<AccountEntry>,
}

impl AccountsData {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }

    pub fn ids(&self) -> Vec<RecordId> {
        self.accounts.iter().map(|a| a.record.id.clone()).collect()
    }

    pub fn find(&self, record_id: &RecordId) -> Option<&AccountEntry> {
        self.accounts.iter().find(|a| &a.record.id == record_id)
    }

    fn find_mut(&mut self, record_id: &RecordId) -> Option<&mut AccountEntry> {
        self.accounts.iter_mut().find(|a| &a.record.id == record_id)
    }

    /// Snapshot of `record_id` restricted to `fields`. `Name` is always included.
    pub fn read(
        &self,
        record_id: &RecordId,
        fields: &[AccountField],
    ) -> Result<RecordSnapshot, ReadAccessError> {
        let entry = self
            .find(record_id)
            .ok_or_else(|| ReadAccessError::new(record_id.clone(), NOT_FOUND_MESSAGE))?;
        if entry.restricted {
            return Err(ReadAccessError::new(record_id.clone(), NO_ACCESS_MESSAGE));
        }

        let mut snapshot = entry.record.clone();
        for field in AccountField::ALL {
            if !field.is_required() && !fields.contains(&field) {
                snapshot.set(field, "");
            }
        }
        Ok(snapshot)
    }

    /// Server-side high net worth check
    pub fn classify(
        &self,
        record_id: &RecordId,
        threshold: f64,
    ) -> Result<ClassificationResult, ClassificationError> {
        let entry = self
            .find(record_id)
            .filter(|a| !a.restricted)
            .ok_or_else(|| ClassificationError::Service(INSUFFICIENT_ACCESS_MESSAGE.to_string()))?;

        let total = entry.closed_won_total();
        Ok(ClassificationResult::new(total >= threshold, total))
    }

    /// Validate and apply an update, stamping `last_modified`.
    ///
    /// Returns the updated snapshot. The store is unchanged on error.
    pub fn apply_update(
        &mut self,
        record_id: &RecordId,
        changes: &FieldChanges,
        now: Timestamp,
    ) -> Result<RecordSnapshot, UpdateError> {
        let missing: Vec<&str> = changes
            .iter()
            .filter(|(field, value)| field.is_required() && value.trim().is_empty())
            .map(|(field, _)| field.api_name())
            .collect();
        if !missing.is_empty() {
            return Err(UpdateError::new(format!(
                "Required fields are missing: [{}]",
                missing.join(", ")
            )));
        }

        let entry = self
            .find_mut(record_id)
            .filter(|a| !a.restricted)
            .ok_or_else(|| UpdateError::new(INSUFFICIENT_ACCESS_MESSAGE))?;

        entry.record.apply(changes);
        entry.record.last_modified = Some(now);
        Ok(entry.record.clone())
    }

    /// Accounts written to a fresh data directory
    pub fn sample() -> Self {
        let mut harbor = RecordSnapshot::new(RecordId::from("001Dn000001HARB"), "Harborview Capital");
        harbor.phone = Some("(617) 555-0142".to_string());
        harbor.website = Some("harborview.example.com".to_string());
        harbor.industry = Some("Banking".to_string());
        harbor.account_type = Some("Customer - Direct".to_string());
        harbor.billing.street = Some("1 Federal Street".to_string());
        harbor.billing.city = Some("Boston".to_string());
        harbor.billing.state = Some("MA".to_string());
        harbor.billing.country = Some("USA".to_string());
        harbor.billing.postal_code = Some("02110".to_string());

        let mut maple = RecordSnapshot::new(RecordId::from("001Dn000002MAPL"), "Maple Street Bakery");
        maple.phone = Some("(503) 555-0187".to_string());
        maple.industry = Some("Food & Beverage".to_string());
        maple.account_type = Some("Customer - Channel".to_string());
        maple.billing.city = Some("Portland".to_string());
        maple.billing.state = Some("OR".to_string());
        maple.billing.country = Some("USA".to_string());

        let mut vault = RecordSnapshot::new(RecordId::from("001Dn000003VALT"), "Sterling Family Office");
        vault.industry = Some("Finance".to_string());
        vault.account_type = Some("Customer - Direct".to_string());

        Self {
            accounts: vec![
                AccountEntry {
                    record: harbor,
                    restricted: false,
                    opportunities: vec![
                        Opportunity {
                            name: "Wealth Management Mandate".to_string(),
                            amount: 1_250_000.0,
                            stage: OpportunityStage::ClosedWon,
                        },
                        Opportunity {
                            name: "Trust Services Expansion".to_string(),
                            amount: 400_000.0,
                            stage: OpportunityStage::Negotiation,
                        },
                    ],
                },
                AccountEntry {
                    record: maple,
                    restricted: false,
                    opportunities: vec![Opportunity {
                        name: "Business Checking".to_string(),
                        amount: 12_500.0,
                        stage: OpportunityStage::ClosedWon,
                    }],
                },
                AccountEntry {
                    record: vault,
                    restricted: true,
                    opportunities: vec![Opportunity {
                        name: "Private Placement".to_string(),
                        amount: 8_000_000.0,
                        stage: OpportunityStage::ClosedWon,
                    }],
                },
            ],
        }
    }
}
