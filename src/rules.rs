//! Presentation rules for a plan card header
//!
//! Each rule is a pure function of the per-render inputs. The render module
//! turns these decisions into fragments; callers that draw their own markup
//! can use the decisions directly.

use log::debug;

use crate::context::{HeaderProps, PricingContext};
use crate::plan::{CurrentSitePlan, PlanSlug};

pub const FREE_PLAN_TOOLTIP: &str = "Price for the next 12 months";

pub const PAID_PLAN_TOOLTIP: &str =
    "You'll receive a discount from the full price of %(price)s because you already have a plan.";

/// Tooltip template explaining the discounted price, chosen by the plan the
/// viewer already owns. The paid-plan template carries a `%(price)s`
/// placeholder for the full price.
pub fn discount_tooltip_message(current_site_plan: &CurrentSitePlan) -> &'static str {
    match current_site_plan.product_slug {
        PlanSlug::Free | PlanSlug::JetpackFree => FREE_PLAN_TOOLTIP,
        PlanSlug::Personal
        | PlanSlug::Personal2Years
        | PlanSlug::Premium
        | PlanSlug::Premium2Years
        | PlanSlug::Business
        | PlanSlug::Business2Years
        | PlanSlug::JetpackPersonal
        | PlanSlug::JetpackPersonalMonthly
        | PlanSlug::JetpackPremium
        | PlanSlug::JetpackPremiumMonthly
        | PlanSlug::JetpackBusiness
        | PlanSlug::JetpackBusinessMonthly => PAID_PLAN_TOOLTIP,
    }
}

/// Tooltip template when the owned plan may be unknown. Without a site there
/// is nothing to discount from, so the free-plan wording applies.
pub fn discount_tooltip_for(current_site_plan: Option<&CurrentSitePlan>) -> &'static str {
    current_site_plan.map_or(FREE_PLAN_TOOLTIP, discount_tooltip_message)
}

/// Which condition put an info indicator on the billing timeframe label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeframeReason {
    FreePlan,
    NonJetpackSite,
    AutomatedTransferSite,
    MonthlyHidden,
}

/// First matching reason for annotating the billing timeframe, in priority order
pub fn billing_timeframe_reason(plan_type: PlanSlug, pricing: &PricingContext) -> Option<TimeframeReason> {
    if plan_type.is_free() {
        Some(TimeframeReason::FreePlan)
    } else if pricing.is_site_jetpack == Some(false) {
        Some(TimeframeReason::NonJetpackSite)
    } else if pricing.is_site_jetpack == Some(true) && pricing.is_site_at {
        Some(TimeframeReason::AutomatedTransferSite)
    } else if pricing.hide_monthly {
        Some(TimeframeReason::MonthlyHidden)
    } else {
        None
    }
}

pub fn shows_billing_timeframe_indicator(plan_type: PlanSlug, pricing: &PricingContext) -> bool {
    let reason = billing_timeframe_reason(plan_type, pricing);
    debug!("billing timeframe indicator for {}: {:?}", plan_type, reason);
    reason.is_some()
}

/// Yearly-vs-monthly callout appears only for Jetpack signups on non-AT sites
pub fn shows_interval_discount(pricing: &PricingContext) -> bool {
    let visible = pricing.is_in_signup && pricing.is_jetpack && !pricing.is_site_at;
    debug!(
        "interval discount (signup {}, jetpack {}, at {}): {}",
        pricing.is_in_signup, pricing.is_jetpack, pricing.is_site_at, visible
    );
    visible
}

/// Whether the "credit applied" label belongs on this header
pub fn shows_credit_label(props: &HeaderProps) -> bool {
    let pricing = &props.pricing;
    let visible = pricing.show_plan_credits_applied
        && pricing.available_for_purchase
        && props.owned_plan() != Some(props.plan_type)
        && pricing.has_genuine_discount();
    debug!(
        "credit label for {} (owned {:?}): {}",
        props.plan_type,
        props.owned_plan(),
        visible
    );
    visible
}
