use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::next_timestamp;

/// Type-safe identifier for Vendors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorId(pub u32);

impl From<u32> for VendorId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for VendorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "vendor_{}", self.0)
    }
}

/// A seller at the market, identified by a unique phone number.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Vendor`](#impl-ActorEntity-for-Vendor) for details on:
/// - Creation parameters ([`VendorCreate`])
/// - Update parameters ([`VendorUpdate`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    pub market_location: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for registering a new vendor.
///
/// Missing fields deserialize as empty strings so they fail validation with
/// a 400 instead of being rejected by the JSON extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VendorCreate {
    pub name: String,
    pub market_location: String,
    pub phone: String,
}

/// Partial update: `None` (absent or `null`) leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VendorUpdate {
    pub name: Option<String>,
    pub market_location: Option<String>,
    pub phone: Option<String>,
}

impl Vendor {
    /// Builds a stored vendor; `created_at` and `updated_at` start equal.
    /// Text fields are stored trimmed.
    pub fn new(id: VendorId, params: VendorCreate) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: params.name.trim().to_string(),
            market_location: params.market_location.trim().to_string(),
            phone: params.phone.trim().to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies every provided field and refreshes `updated_at`.
    pub fn apply(&mut self, update: VendorUpdate) {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(market_location) = update.market_location {
            self.market_location = market_location.trim().to_string();
        }
        if let Some(phone) = update.phone {
            self.phone = phone.trim().to_string();
        }
        self.updated_at = next_timestamp(self.updated_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> VendorCreate {
        VendorCreate {
            name: "Ada".into(),
            market_location: "North Market".into(),
            phone: "555-0100".into(),
        }
    }

    #[test]
    fn new_vendor_has_equal_timestamps() {
        let vendor = Vendor::new(VendorId(1), ada());
        assert_eq!(vendor.created_at, vendor.updated_at);
        assert_eq!(vendor.name, "Ada");
    }

    #[test]
    fn apply_only_touches_provided_fields() {
        let mut vendor = Vendor::new(VendorId(1), ada());
        let before = vendor.clone();

        vendor.apply(VendorUpdate {
            name: Some("Ada Lovelace".into()),
            ..Default::default()
        });

        assert_eq!(vendor.name, "Ada Lovelace");
        assert_eq!(vendor.market_location, before.market_location);
        assert_eq!(vendor.phone, before.phone);
        assert_eq!(vendor.created_at, before.created_at);
        assert!(vendor.updated_at > before.updated_at);
    }

    #[test]
    fn text_fields_are_stored_trimmed() {
        let mut vendor = Vendor::new(
            VendorId(1),
            VendorCreate {
                name: "  Ada ".into(),
                market_location: "\tNorth Market\n".into(),
                phone: " 555-0100 ".into(),
            },
        );
        assert_eq!(vendor.name, "Ada");
        assert_eq!(vendor.market_location, "North Market");
        assert_eq!(vendor.phone, "555-0100");

        vendor.apply(VendorUpdate {
            phone: Some(" 555-0199\t".into()),
            ..Default::default()
        });
        assert_eq!(vendor.phone, "555-0199");
    }

    #[test]
    fn update_payload_treats_null_as_absent() {
        let update: VendorUpdate =
            serde_json::from_str(r#"{"name": null, "phone": "555-0199"}"#).unwrap();
        assert_eq!(update.name, None);
        assert_eq!(update.market_location, None);
        assert_eq!(update.phone.as_deref(), Some("555-0199"));
    }

    #[test]
    fn create_payload_defaults_missing_fields() {
        let create: VendorCreate = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(create.name, "Ada");
        assert!(create.phone.is_empty());
    }

    #[test]
    fn vendor_id_serializes_as_number() {
        let json = serde_json::to_value(Vendor::new(VendorId(7), ada())).unwrap();
        assert_eq!(json["id"], 7);
    }
}
