//! Proposal content normalization.
//!
//! Proposal rows carry four content columns (deliverables, pricing, payment
//! schedule, signature) whose persisted representation drifted over time:
//! older rows store JSON-encoded strings, newer rows store structured JSON.
//! The normalizers here map every historical shape to a single canonical
//! in-memory form so consumers never see the drift.
//!
//! All four normalizers are total: `null` and unparseable input collapse to
//! the field's empty default. They never return an error and never panic,
//! and re-normalizing a canonical value is a no-op.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Canonical shapes
// ---------------------------------------------------------------------------

/// A single line item in itemized pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingItem {
    pub item: String,
    #[serde(default)]
    pub amount: f64,
}

/// Flat package pricing: one record instead of line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackagePricing {
    /// Pricing mode label as authored (e.g. `"fixed"`, `"hourly"`).
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub amount: f64,
}

/// Canonical pricing: an ordered list of line items or a single package
/// record, depending on the pricing mode the proposal was authored with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Pricing {
    Itemized(Vec<PricingItem>),
    Package(PackagePricing),
}

impl Pricing {
    /// The empty default: an itemized list with no entries.
    pub const fn empty() -> Self {
        Pricing::Itemized(Vec::new())
    }

    /// Total amount: the arithmetic sum of line items, or the flat package
    /// amount. Amounts are plain `f64` with no minor-unit discipline.
    pub fn total(&self) -> f64 {
        match self {
            Pricing::Itemized(items) => items.iter().map(|i| i.amount).sum(),
            Pricing::Package(package) => package.amount,
        }
    }
}

impl Default for Pricing {
    fn default() -> Self {
        Pricing::empty()
    }
}

/// A payment schedule milestone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMilestone {
    #[serde(default)]
    pub milestone: String,
    #[serde(default)]
    pub amount: f64,
    /// ISO 8601 date as authored; empty when no date was set.
    #[serde(default)]
    pub due_date: String,
}

/// Signature state for both parties. Empty strings mean "not signed".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Signature {
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub client: String,
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Map a raw persisted value to a canonical shape.
///
/// Strings are treated as JSON-encoded legacy rows: parsed and re-examined
/// as structured data. Anything that fails to parse or does not match the
/// canonical shape yields `None`, which the per-field wrappers replace with
/// that field's empty default.
fn normalize_raw<T: DeserializeOwned>(raw: &Value) -> Option<T> {
    match raw {
        Value::Null => None,
        Value::String(encoded) => {
            let parsed: Value = serde_json::from_str(encoded).ok()?;
            // A doubly-encoded string is not a canonical shape for any field.
            match parsed {
                Value::String(_) => None,
                structured => serde_json::from_value(structured).ok(),
            }
        }
        structured => serde_json::from_value(structured.clone()).ok(),
    }
}

/// Canonical deliverables: an ordered list of strings.
pub fn normalize_deliverables(raw: &Value) -> Vec<String> {
    normalize_raw(raw).unwrap_or_default()
}

/// Canonical pricing. See [`Pricing`].
pub fn normalize_pricing(raw: &Value) -> Pricing {
    normalize_raw(raw).unwrap_or_default()
}

/// Canonical payment schedule: an ordered list of milestones.
pub fn normalize_payment_schedule(raw: &Value) -> Vec<PaymentMilestone> {
    normalize_raw(raw).unwrap_or_default()
}

/// Canonical signature record, defaulting both parties to empty strings.
pub fn normalize_signature(raw: &Value) -> Signature {
    normalize_raw(raw).unwrap_or_default()
}

/// Arithmetic sum of milestone amounts.
pub fn payment_schedule_total(schedule: &[PaymentMilestone]) -> f64 {
    schedule.iter().map(|m| m.amount).sum()
}

// ---------------------------------------------------------------------------
// Aggregated content
// ---------------------------------------------------------------------------

/// Fully normalized proposal content, one field per content column.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ProposalContent {
    pub deliverables: Vec<String>,
    pub pricing: Pricing,
    pub payment_schedule: Vec<PaymentMilestone>,
    pub signature: Signature,
}

impl ProposalContent {
    /// Normalize all four content columns of a proposal row at once.
    pub fn from_raw(
        deliverables: &Value,
        pricing: &Value,
        payment_schedule: &Value,
        signature: &Value,
    ) -> Self {
        Self {
            deliverables: normalize_deliverables(deliverables),
            pricing: normalize_pricing(pricing),
            payment_schedule: normalize_payment_schedule(payment_schedule),
            signature: normalize_signature(signature),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    // -----------------------------------------------------------------------
    // Deliverables
    // -----------------------------------------------------------------------

    #[test]
    fn test_deliverables_null_yields_empty() {
        assert_eq!(normalize_deliverables(&Value::Null), Vec::<String>::new());
    }

    #[test]
    fn test_deliverables_structured_pass_through() {
        let raw = json!(["Wireframes", "Final design"]);
        assert_eq!(
            normalize_deliverables(&raw),
            vec!["Wireframes".to_string(), "Final design".to_string()]
        );
    }

    #[test]
    fn test_deliverables_json_encoded_string() {
        let raw = json!(r#"["Wireframes","Final design"]"#);
        assert_eq!(
            normalize_deliverables(&raw),
            vec!["Wireframes".to_string(), "Final design".to_string()]
        );
    }

    #[test]
    fn test_deliverables_malformed_string_yields_empty() {
        assert_eq!(
            normalize_deliverables(&json!("[not, valid")),
            Vec::<String>::new()
        );
    }

    #[test]
    fn test_deliverables_wrong_shape_yields_empty() {
        assert_eq!(
            normalize_deliverables(&json!({"0": "Wireframes"})),
            Vec::<String>::new()
        );
        assert_eq!(normalize_deliverables(&json!([1, 2])), Vec::<String>::new());
    }

    #[test]
    fn test_deliverables_idempotent() {
        let raw = json!(r#"["a","b"]"#);
        let once = normalize_deliverables(&raw);
        let twice = normalize_deliverables(&serde_json::to_value(&once).unwrap());
        assert_eq!(once, twice);
    }

    // -----------------------------------------------------------------------
    // Pricing
    // -----------------------------------------------------------------------

    #[test]
    fn test_pricing_itemized_from_encoded_string() {
        let pricing = normalize_pricing(&json!(r#"[{"item":"Design","amount":500}]"#));
        assert_matches!(&pricing, Pricing::Itemized(items) if items.len() == 1);
        assert_eq!(
            pricing,
            Pricing::Itemized(vec![PricingItem {
                item: "Design".to_string(),
                amount: 500.0,
            }])
        );
        assert_eq!(pricing.total(), 500.0);
    }

    #[test]
    fn test_pricing_structured_itemized_pass_through() {
        let raw = json!([
            {"item": "Design", "amount": 500},
            {"item": "Development", "amount": 1500},
        ]);
        let pricing = normalize_pricing(&raw);
        assert_eq!(pricing.total(), 2000.0);
    }

    #[test]
    fn test_pricing_package_record() {
        let pricing = normalize_pricing(&json!({
            "type": "fixed",
            "currency": "USD",
            "amount": 2500,
        }));
        assert_matches!(&pricing, Pricing::Package(p) if p.kind == "fixed" && p.currency == "USD");
        assert_eq!(pricing.total(), 2500.0);
    }

    #[test]
    fn test_pricing_package_from_encoded_string() {
        let pricing = normalize_pricing(&json!(r#"{"type":"hourly","currency":"EUR","amount":80}"#));
        assert_matches!(&pricing, Pricing::Package(p) if p.kind == "hourly");
        assert_eq!(pricing.total(), 80.0);
    }

    #[test]
    fn test_pricing_null_and_garbage_yield_empty_itemized() {
        assert_eq!(normalize_pricing(&Value::Null), Pricing::empty());
        assert_eq!(normalize_pricing(&json!("{broken")), Pricing::empty());
        assert_eq!(normalize_pricing(&json!(42)), Pricing::empty());
        assert_eq!(Pricing::empty().total(), 0.0);
    }

    #[test]
    fn test_pricing_item_without_amount_defaults_to_zero() {
        let pricing = normalize_pricing(&json!([{"item": "Kickoff"}]));
        assert_eq!(pricing.total(), 0.0);
    }

    #[test]
    fn test_pricing_idempotent() {
        let raw = json!(r#"{"type":"fixed","currency":"USD","amount":100}"#);
        let once = normalize_pricing(&raw);
        let twice = normalize_pricing(&serde_json::to_value(&once).unwrap());
        assert_eq!(once, twice);
    }

    // -----------------------------------------------------------------------
    // Payment schedule
    // -----------------------------------------------------------------------

    #[test]
    fn test_payment_schedule_null_yields_empty() {
        assert_eq!(normalize_payment_schedule(&Value::Null), vec![]);
    }

    #[test]
    fn test_payment_schedule_structured_pass_through() {
        let raw = json!([
            {"milestone": "Deposit", "amount": 500, "due_date": "2026-09-01"},
            {"milestone": "Delivery", "amount": 1500, "due_date": "2026-10-15"},
        ]);
        let schedule = normalize_payment_schedule(&raw);
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule[0].milestone, "Deposit");
        assert_eq!(schedule[1].due_date, "2026-10-15");
        assert_eq!(payment_schedule_total(&schedule), 2000.0);
    }

    #[test]
    fn test_payment_schedule_from_encoded_string() {
        let raw = json!(r#"[{"milestone":"Deposit","amount":250,"due_date":"2026-09-01"}]"#);
        let schedule = normalize_payment_schedule(&raw);
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0].amount, 250.0);
    }

    #[test]
    fn test_payment_schedule_missing_fields_default() {
        let schedule = normalize_payment_schedule(&json!([{}]));
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0].milestone, "");
        assert_eq!(schedule[0].amount, 0.0);
        assert_eq!(schedule[0].due_date, "");
    }

    #[test]
    fn test_payment_schedule_malformed_yields_empty() {
        assert_eq!(normalize_payment_schedule(&json!("oops")), vec![]);
    }

    #[test]
    fn test_payment_schedule_idempotent() {
        let raw = json!([{"milestone": "Deposit", "amount": 1, "due_date": ""}]);
        let once = normalize_payment_schedule(&raw);
        let twice = normalize_payment_schedule(&serde_json::to_value(&once).unwrap());
        assert_eq!(once, twice);
    }

    // -----------------------------------------------------------------------
    // Signature
    // -----------------------------------------------------------------------

    #[test]
    fn test_signature_null_yields_empty_default() {
        assert_eq!(normalize_signature(&Value::Null), Signature::default());
    }

    #[test]
    fn test_signature_structured_pass_through() {
        let sig = normalize_signature(&json!({"provider": "Ada", "client": "Grace"}));
        assert_eq!(sig.provider, "Ada");
        assert_eq!(sig.client, "Grace");
    }

    #[test]
    fn test_signature_from_encoded_string() {
        let sig = normalize_signature(&json!(r#"{"provider":"Ada","client":""}"#));
        assert_eq!(sig.provider, "Ada");
        assert_eq!(sig.client, "");
    }

    #[test]
    fn test_signature_malformed_string_yields_empty_default() {
        let sig = normalize_signature(&json!("{not valid json"));
        assert_eq!(sig, Signature::default());
        assert_eq!(sig.provider, "");
        assert_eq!(sig.client, "");
    }

    #[test]
    fn test_signature_partial_object_defaults_missing_party() {
        let sig = normalize_signature(&json!({"provider": "Ada"}));
        assert_eq!(sig.provider, "Ada");
        assert_eq!(sig.client, "");
    }

    #[test]
    fn test_signature_idempotent() {
        let raw = json!({"provider": "Ada", "client": "Grace"});
        let once = normalize_signature(&raw);
        let twice = normalize_signature(&serde_json::to_value(&once).unwrap());
        assert_eq!(once, twice);
    }

    // -----------------------------------------------------------------------
    // Aggregated content
    // -----------------------------------------------------------------------

    #[test]
    fn test_from_raw_normalizes_mixed_shapes() {
        let content = ProposalContent::from_raw(
            &json!(r#"["Logo","Brand guide"]"#),
            &json!([{"item": "Design", "amount": 500}]),
            &Value::Null,
            &json!("{corrupted"),
        );
        assert_eq!(content.deliverables.len(), 2);
        assert_eq!(content.pricing.total(), 500.0);
        assert!(content.payment_schedule.is_empty());
        assert_eq!(content.signature, Signature::default());
    }

    #[test]
    fn test_default_content_is_all_empty() {
        let content = ProposalContent::default();
        assert!(content.deliverables.is_empty());
        assert_eq!(content.pricing, Pricing::empty());
        assert!(content.payment_schedule.is_empty());
        assert_eq!(content.signature, Signature::default());
    }
}
