//! Plan identities and the plan a site already owns

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Commercial tier of a plan, independent of term or product line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Free,
    Personal,
    Premium,
    Business,
}

impl std::fmt::Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Free => write!(f, "free"),
            Self::Personal => write!(f, "personal"),
            Self::Premium => write!(f, "premium"),
            Self::Business => write!(f, "business"),
        }
    }
}

/// How often a plan is billed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingTerm {
    Monthly,
    Annual,
    Biennial,
}

impl std::fmt::Display for BillingTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Annual => write!(f, "annual"),
            Self::Biennial => write!(f, "biennial"),
        }
    }
}

/// Every plan the dashboard can display or a site can own.
///
/// Serialized as the store slug (`value_bundle`, `jetpack_premium_monthly`, ...),
/// so unknown slugs are rejected at the deserialization boundary instead of
/// falling through the presentation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PlanSlug {
    Free,
    Personal,
    Personal2Years,
    Premium,
    Premium2Years,
    Business,
    Business2Years,
    JetpackFree,
    JetpackPersonal,
    JetpackPersonalMonthly,
    JetpackPremium,
    JetpackPremiumMonthly,
    JetpackBusiness,
    JetpackBusinessMonthly,
}

impl PlanSlug {
    pub const ALL: [PlanSlug; 14] = [
        Self::Free,
        Self::Personal,
        Self::Personal2Years,
        Self::Premium,
        Self::Premium2Years,
        Self::Business,
        Self::Business2Years,
        Self::JetpackFree,
        Self::JetpackPersonal,
        Self::JetpackPersonalMonthly,
        Self::JetpackPremium,
        Self::JetpackPremiumMonthly,
        Self::JetpackBusiness,
        Self::JetpackBusinessMonthly,
    ];

    /// Store slug for this plan
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free_plan",
            Self::Personal => "personal-bundle",
            Self::Personal2Years => "personal-bundle-2y",
            Self::Premium => "value_bundle",
            Self::Premium2Years => "value_bundle-2y",
            Self::Business => "business-bundle",
            Self::Business2Years => "business-bundle-2y",
            Self::JetpackFree => "jetpack_free",
            Self::JetpackPersonal => "jetpack_personal",
            Self::JetpackPersonalMonthly => "jetpack_personal_monthly",
            Self::JetpackPremium => "jetpack_premium",
            Self::JetpackPremiumMonthly => "jetpack_premium_monthly",
            Self::JetpackBusiness => "jetpack_business",
            Self::JetpackBusinessMonthly => "jetpack_business_monthly",
        }
    }

    pub fn tier(&self) -> PlanTier {
        match self {
            Self::Free | Self::JetpackFree => PlanTier::Free,
            Self::Personal | Self::Personal2Years | Self::JetpackPersonal | Self::JetpackPersonalMonthly => {
                PlanTier::Personal
            }
            Self::Premium | Self::Premium2Years | Self::JetpackPremium | Self::JetpackPremiumMonthly => {
                PlanTier::Premium
            }
            Self::Business | Self::Business2Years | Self::JetpackBusiness | Self::JetpackBusinessMonthly => {
                PlanTier::Business
            }
        }
    }

    /// Billing term. Free plans are reported as annual, matching how their
    /// "price for the next 12 months" is presented.
    pub fn term(&self) -> BillingTerm {
        match self {
            Self::JetpackPersonalMonthly | Self::JetpackPremiumMonthly | Self::JetpackBusinessMonthly => {
                BillingTerm::Monthly
            }
            Self::Personal2Years | Self::Premium2Years | Self::Business2Years => BillingTerm::Biennial,
            Self::Free
            | Self::Personal
            | Self::Premium
            | Self::Business
            | Self::JetpackFree
            | Self::JetpackPersonal
            | Self::JetpackPremium
            | Self::JetpackBusiness => BillingTerm::Annual,
        }
    }

    pub fn is_free(&self) -> bool {
        self.tier() == PlanTier::Free
    }

    pub fn is_jetpack(&self) -> bool {
        matches!(
            self,
            Self::JetpackFree
                | Self::JetpackPersonal
                | Self::JetpackPersonalMonthly
                | Self::JetpackPremium
                | Self::JetpackPremiumMonthly
                | Self::JetpackBusiness
                | Self::JetpackBusinessMonthly
        )
    }

    /// Human readable plan name used as the header title
    pub fn title(&self) -> String {
        let tier = match self.tier() {
            PlanTier::Free => "Free",
            PlanTier::Personal => "Personal",
            PlanTier::Premium => "Premium",
            PlanTier::Business => "Business",
        };
        if self.is_jetpack() {
            format!("Jetpack {}", tier)
        } else {
            tier.to_string()
        }
    }
}

impl std::fmt::Display for PlanSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PlanSlug {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|plan| plan.as_str() == s)
            .ok_or_else(|| PlanError::UnknownPlanIdentity { slug: s.to_string() })
    }
}

impl TryFrom<String> for PlanSlug {
    type Error = PlanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PlanSlug> for String {
    fn from(plan: PlanSlug) -> Self {
        plan.as_str().to_string()
    }
}

/// The plan the viewer's site already owns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentSitePlan {
    pub product_slug: PlanSlug,
}

impl CurrentSitePlan {
    pub fn new(product_slug: PlanSlug) -> Self {
        Self { product_slug }
    }
}
