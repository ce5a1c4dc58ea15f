//! Renderable fragments for a plan card header
//!
//! A fragment is a minimal stand-in for markup: a class name, optional
//! modifiers and text, and children. Callers locate pieces by class the same
//! way a markup test would.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::context::HeaderProps;
use crate::rules;

pub const HEADER_CLASS: &str = "plan-features__header";
pub const TITLE_CLASS: &str = "plan-features__header-title";
pub const PRICE_CLASS: &str = "plan-features__header-price";
pub const TIMEFRAME_CLASS: &str = "plan-features__header-timeframe";
pub const CREDIT_LABEL_CLASS: &str = "plan-features__header-credit-label";
pub const INFO_POPOVER_CLASS: &str = "info-popover";
pub const INTERVAL_DISCOUNT_CLASS: &str = "plan-interval-discount";

pub const IS_DISCOUNTED: &str = "is-discounted";
pub const IS_PLACEHOLDER: &str = "is-placeholder";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fragment {
    pub class: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Fragment>,
}

impl Fragment {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            modifiers: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_modifier_if(mut self, modifier: &str, enabled: bool) -> Self {
        if enabled {
            self.modifiers.push(modifier.to_string());
        }
        self
    }

    pub fn with_child(mut self, child: Fragment) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_optional_child(mut self, child: Option<Fragment>) -> Self {
        self.children.extend(child);
        self
    }

    pub fn has_modifier(&self, modifier: &str) -> bool {
        self.modifiers.iter().any(|m| m == modifier)
    }

    /// All fragments (self included) carrying the given class, depth first
    pub fn find(&self, class: &str) -> Vec<&Fragment> {
        let mut found = Vec::new();
        self.collect(class, &mut found);
        found
    }

    fn collect<'a>(&'a self, class: &str, found: &mut Vec<&'a Fragment>) {
        if self.class == class {
            found.push(self);
        }
        for child in &self.children {
            child.collect(class, found);
        }
    }

    /// Plain text rendering, one line per text-bearing fragment, indented by depth
    pub fn to_text(&self) -> String {
        let mut lines = Vec::new();
        self.text_lines(0, &mut lines);
        lines.join("\n")
    }

    fn text_lines(&self, depth: usize, lines: &mut Vec<String>) {
        let mut depth = depth;
        if let Some(text) = self.text.as_deref().filter(|text| !text.is_empty()) {
            lines.push(format!("{}{}", "  ".repeat(depth), text));
            depth += 1;
        }
        for child in &self.children {
            child.text_lines(depth, lines);
        }
    }
}

/// Fill `%(name)s` placeholders in a message template
pub fn fill_placeholders(template: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(template.to_string(), |message, (name, value)| {
        message.replace(&format!("%({})s", name), value)
    })
}

/// Format an amount with the currency's symbol; whole amounts drop the cents
pub fn format_price(amount: Decimal, currency_code: &str) -> String {
    let digits = if amount.fract().is_zero() || currency_code == "JPY" {
        amount.round_dp(0).normalize().to_string()
    } else {
        let mut cents = amount.round_dp(2);
        cents.rescale(2);
        cents.to_string()
    };
    match currency_code {
        "USD" | "AUD" | "CAD" | "NZD" => format!("${}", digits),
        "EUR" => format!("€{}", digits),
        "GBP" => format!("£{}", digits),
        "JPY" => format!("¥{}", digits),
        other => format!("{} {}", other, digits),
    }
}

/// Decision summary for one header, as reported by `planheader check`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderDecisions {
    pub discount_tooltip: String,
    pub timeframe_indicator: bool,
    pub interval_discount: bool,
    pub credit_label: bool,
}

/// Builds header fragments with a fallback currency for props that carry none
#[derive(Debug, Clone)]
pub struct HeaderRenderer {
    currency_code: String,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new(crate::DEFAULT_CURRENCY)
    }
}

impl HeaderRenderer {
    pub fn new(currency_code: impl Into<String>) -> Self {
        Self {
            currency_code: currency_code.into(),
        }
    }

    fn currency<'a>(&'a self, props: &'a HeaderProps) -> &'a str {
        props.pricing.currency_code.as_deref().unwrap_or(&self.currency_code)
    }

    /// Discount tooltip with the full price filled in
    pub fn discount_tooltip(&self, props: &HeaderProps) -> String {
        let price = format_price(props.pricing.raw_price, self.currency(props));
        fill_placeholders(
            rules::discount_tooltip_for(props.current_site_plan.as_ref()),
            &[("price", price.as_str())],
        )
    }

    /// Billing timeframe label, with an info popover when the rules call for one
    pub fn billing_timeframe(&self, props: &HeaderProps) -> Fragment {
        let pricing = &props.pricing;
        let popover = rules::shows_billing_timeframe_indicator(props.plan_type, pricing)
            .then(|| Fragment::new(INFO_POPOVER_CLASS).with_text(self.discount_tooltip(props)));

        Fragment::new(TIMEFRAME_CLASS)
            .with_modifier_if(IS_DISCOUNTED, pricing.has_genuine_discount())
            .with_modifier_if(IS_PLACEHOLDER, pricing.is_placeholder)
            .with_text(pricing.billing_time_frame.clone())
            .with_optional_child(popover)
    }

    /// Yearly-vs-monthly callout, stating the saving when it can be computed
    pub fn interval_discount(&self, props: &HeaderProps) -> Option<Fragment> {
        let pricing = &props.pricing;
        if !rules::shows_interval_discount(pricing) {
            return None;
        }

        let text = match pricing.yearly_saving() {
            Some(saving) => fill_placeholders(
                "Save %(discount)s over monthly billing",
                &[("discount", format_price(saving, self.currency(props)).as_str())],
            ),
            None => "Billed yearly".to_string(),
        };
        Some(Fragment::new(INTERVAL_DISCOUNT_CLASS).with_text(text))
    }

    pub fn credit_label(&self, props: &HeaderProps) -> Option<Fragment> {
        rules::shows_credit_label(props).then(|| Fragment::new(CREDIT_LABEL_CLASS).with_text("Credit applied"))
    }

    fn price(&self, props: &HeaderProps) -> Fragment {
        let pricing = &props.pricing;
        if pricing.is_placeholder {
            return Fragment::new(PRICE_CLASS).with_modifier_if(IS_PLACEHOLDER, true);
        }

        let currency = self.currency(props);
        let raw = format_price(pricing.raw_price, currency);
        if pricing.has_genuine_discount() {
            let discounted = format_price(pricing.discount_price, currency);
            Fragment::new(PRICE_CLASS)
                .with_modifier_if(IS_DISCOUNTED, true)
                .with_text(format!("{} (was {})", discounted, raw))
        } else {
            Fragment::new(PRICE_CLASS).with_text(raw)
        }
    }

    /// All four decisions for one header, with the tooltip price filled in
    pub fn decisions(&self, props: &HeaderProps) -> HeaderDecisions {
        HeaderDecisions {
            discount_tooltip: self.discount_tooltip(props),
            timeframe_indicator: rules::shows_billing_timeframe_indicator(props.plan_type, &props.pricing),
            interval_discount: rules::shows_interval_discount(&props.pricing),
            credit_label: rules::shows_credit_label(props),
        }
    }

    /// Complete header: title, price, timeframe and the optional callouts
    pub fn header(&self, props: &HeaderProps) -> Fragment {
        let body = Fragment::new(format!("{}-body", HEADER_CLASS))
            .with_child(self.price(props))
            .with_child(self.billing_timeframe(props))
            .with_optional_child(self.credit_label(props))
            .with_optional_child(self.interval_discount(props));

        Fragment::new(HEADER_CLASS)
            .with_child(Fragment::new(TITLE_CLASS).with_text(props.plan_type.title()))
            .with_child(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::PricingContext;
    use crate::plan::{CurrentSitePlan, PlanSlug};

    fn props(plan_type: PlanSlug, owned: PlanSlug, pricing: PricingContext) -> HeaderProps {
        HeaderProps::new(plan_type, CurrentSitePlan::new(owned), pricing)
    }

    #[test]
    fn test_fill_placeholders() {
        let filled = fill_placeholders(rules::PAID_PLAN_TOOLTIP, &[("price", "$100")]);
        assert_eq!(
            filled,
            "You'll receive a discount from the full price of $100 because you already have a plan."
        );
        assert_eq!(fill_placeholders("no args", &[("price", "$1")]), "no args");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Decimal::new(100, 0), "USD"), "$100");
        assert_eq!(format_price(Decimal::new(10000, 2), "USD"), "$100");
        assert_eq!(format_price(Decimal::new(825, 2), "EUR"), "€8.25");
        assert_eq!(format_price(Decimal::new(85, 1), "EUR"), "€8.50");
        assert_eq!(format_price(Decimal::new(12004, 1), "JPY"), "¥1200");
        assert_eq!(format_price(Decimal::new(5, 0), "BRL"), "BRL 5");
    }

    #[test]
    fn test_header_not_blow_up() {
        let header = HeaderRenderer::default().header(&props(PlanSlug::Free, PlanSlug::Free, Default::default()));
        assert_eq!(header.find(HEADER_CLASS).len(), 1);
        assert_eq!(header.find(TITLE_CLASS)[0].text.as_deref(), Some("Free"));
    }

    #[test]
    fn test_timeframe_modifiers() {
        let pricing = PricingContext {
            raw_price: Decimal::new(100, 0),
            discount_price: Decimal::new(80, 0),
            is_placeholder: true,
            billing_time_frame: "per month, billed yearly".to_string(),
            ..Default::default()
        };
        let tf = HeaderRenderer::default().billing_timeframe(&props(PlanSlug::Premium, PlanSlug::Personal, pricing));
        assert!(tf.has_modifier(IS_DISCOUNTED));
        assert!(tf.has_modifier(IS_PLACEHOLDER));
        assert_eq!(tf.text.as_deref(), Some("per month, billed yearly"));
        assert!(tf.find(INFO_POPOVER_CLASS).is_empty());
    }

    #[test]
    fn test_popover_carries_filled_tooltip() {
        let pricing = PricingContext {
            raw_price: Decimal::new(99, 0),
            is_site_jetpack: Some(false),
            currency_code: Some("GBP".to_string()),
            ..Default::default()
        };
        let tf = HeaderRenderer::default().billing_timeframe(&props(PlanSlug::Business, PlanSlug::Premium, pricing));
        let popovers = tf.find(INFO_POPOVER_CLASS);
        assert_eq!(popovers.len(), 1);
        assert_eq!(
            popovers[0].text.as_deref(),
            Some("You'll receive a discount from the full price of £99 because you already have a plan.")
        );
    }

    #[test]
    fn test_interval_discount_saving() {
        let mut pricing = PricingContext {
            raw_price: Decimal::new(22, 0),
            related_monthly_price: Some(Decimal::new(2, 0)),
            is_in_signup: true,
            is_jetpack: true,
            ..Default::default()
        };
        let renderer = HeaderRenderer::default();
        let callout = renderer
            .interval_discount(&props(PlanSlug::JetpackPersonal, PlanSlug::JetpackFree, pricing.clone()))
            .unwrap();
        assert_eq!(callout.text.as_deref(), Some("Save $2 over monthly billing"));

        pricing.related_monthly_price = None;
        let callout = renderer
            .interval_discount(&props(PlanSlug::JetpackPersonal, PlanSlug::JetpackFree, pricing))
            .unwrap();
        assert_eq!(callout.text.as_deref(), Some("Billed yearly"));
    }

    #[test]
    fn test_interval_discount_zero_saving_is_billed_yearly() {
        // 1.35 * 12 is exactly 16.20
        let pricing = PricingContext {
            raw_price: Decimal::new(1620, 2),
            related_monthly_price: Some(Decimal::new(135, 2)),
            is_in_signup: true,
            is_jetpack: true,
            ..Default::default()
        };
        let callout = HeaderRenderer::default()
            .interval_discount(&HeaderProps::without_site(PlanSlug::JetpackPersonal, pricing))
            .unwrap();
        assert_eq!(callout.text.as_deref(), Some("Billed yearly"));
    }

    #[test]
    fn test_interval_discount_fractional_saving() {
        let pricing = PricingContext {
            raw_price: Decimal::new(1500, 2),
            related_monthly_price: Some(Decimal::new(135, 2)),
            is_in_signup: true,
            is_jetpack: true,
            ..Default::default()
        };
        let callout = HeaderRenderer::default()
            .interval_discount(&HeaderProps::without_site(PlanSlug::JetpackPersonal, pricing))
            .unwrap();
        assert_eq!(callout.text.as_deref(), Some("Save $1.20 over monthly billing"));
    }

    #[test]
    fn test_decisions_fill_tooltip_price() {
        let pricing = PricingContext {
            raw_price: Decimal::new(100, 0),
            discount_price: Decimal::new(80, 0),
            available_for_purchase: true,
            show_plan_credits_applied: true,
            is_site_jetpack: Some(false),
            ..Default::default()
        };
        let decisions = HeaderRenderer::default().decisions(&props(PlanSlug::Premium, PlanSlug::Personal, pricing));
        assert_eq!(
            decisions.discount_tooltip,
            "You'll receive a discount from the full price of $100 because you already have a plan."
        );
        assert!(decisions.timeframe_indicator);
        assert!(!decisions.interval_discount);
        assert!(decisions.credit_label);
    }

    #[test]
    fn test_decisions_without_site() {
        let decisions = HeaderRenderer::default().decisions(&HeaderProps::without_site(
            PlanSlug::JetpackPersonal,
            PricingContext {
                is_in_signup: true,
                is_jetpack: true,
                ..Default::default()
            },
        ));
        assert_eq!(decisions.discount_tooltip, rules::FREE_PLAN_TOOLTIP);
        assert!(decisions.interval_discount);
    }

    #[test]
    fn test_price_line() {
        let renderer = HeaderRenderer::new("USD");
        let pricing = PricingContext {
            raw_price: Decimal::new(100, 0),
            discount_price: Decimal::new(80, 0),
            ..Default::default()
        };
        let header = renderer.header(&props(PlanSlug::Premium, PlanSlug::Personal, pricing));
        let price = header.find(PRICE_CLASS)[0];
        assert!(price.has_modifier(IS_DISCOUNTED));
        assert_eq!(price.text.as_deref(), Some("$80 (was $100)"));
    }

    #[test]
    fn test_to_text_indents_children() {
        let fragment = Fragment::new("a")
            .with_text("parent")
            .with_child(Fragment::new("b").with_text("child"));
        assert_eq!(fragment.to_text(), "parent\n  child");
    }
}
