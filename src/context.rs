//! Per-render inputs for a plan card header

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use crate::error::{PlanError, Result};
use crate::plan::{CurrentSitePlan, PlanSlug};

/// Read an explicit `null` as the field's default
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Pricing and site context supplied by the caller for a single render
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingContext {
    /// Full price of the displayed plan
    #[serde(deserialize_with = "null_as_default")]
    pub raw_price: Decimal,

    /// Reduced price offered because the viewer already owns a plan; 0 means none
    #[serde(deserialize_with = "null_as_default")]
    pub discount_price: Decimal,

    /// The plan list being displayed is the Jetpack product line
    #[serde(deserialize_with = "null_as_default")]
    pub is_jetpack: bool,

    /// Whether the selected site is Jetpack-connected. `None` when no site is
    /// selected yet (signup), which is distinct from an explicit `false`.
    pub is_site_jetpack: Option<bool>,

    /// The site runs in Automated Transfer hosting mode
    #[serde(deserialize_with = "null_as_default")]
    pub is_site_at: bool,

    #[serde(deserialize_with = "null_as_default")]
    pub hide_monthly: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_in_signup: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub available_for_purchase: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub show_plan_credits_applied: bool,

    /// Prices are still loading
    #[serde(deserialize_with = "null_as_default")]
    pub is_placeholder: bool,

    /// Label next to the price, e.g. "per month, billed yearly"
    #[serde(deserialize_with = "null_as_default")]
    pub billing_time_frame: String,

    /// Raw price of the matching monthly plan, for the yearly saving callout
    pub related_monthly_price: Option<Decimal>,

    /// Overrides the configured currency when set
    pub currency_code: Option<String>,
}

impl PricingContext {
    /// A discount only counts when it is set and strictly below the raw price
    pub fn has_genuine_discount(&self) -> bool {
        self.discount_price > Decimal::ZERO && self.discount_price < self.raw_price
    }

    /// What a year costs when billed monthly, minus the yearly price.
    /// `None` without a monthly price or when yearly billing saves nothing.
    pub fn yearly_saving(&self) -> Option<Decimal> {
        self.related_monthly_price
            .map(|monthly| monthly * Decimal::from(12) - self.raw_price)
            .filter(|saving| *saving > Decimal::ZERO)
    }
}

/// Everything a plan card header is rendered from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderProps {
    /// The plan this card displays
    pub plan_type: PlanSlug,

    /// The plan the selected site owns; absent during signup when no site exists yet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_site_plan: Option<CurrentSitePlan>,

    #[serde(flatten)]
    pub pricing: PricingContext,
}

impl HeaderProps {
    pub fn new(plan_type: PlanSlug, current_site_plan: CurrentSitePlan, pricing: PricingContext) -> Self {
        Self {
            plan_type,
            current_site_plan: Some(current_site_plan),
            pricing,
        }
    }

    /// Props for a header shown before any site is selected
    pub fn without_site(plan_type: PlanSlug, pricing: PricingContext) -> Self {
        Self {
            plan_type,
            current_site_plan: None,
            pricing,
        }
    }

    pub fn owned_plan(&self) -> Option<PlanSlug> {
        self.current_site_plan.map(|plan| plan.product_slug)
    }

    /// Load props from a YAML or JSON file, chosen by extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yml") | Some("yaml") => Self::from_yaml(&content),
            Some("json") => Self::from_json(&content),
            _ => Err(PlanError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
