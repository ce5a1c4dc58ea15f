//! planheader - presentation rules for plan card headers
//!
//! Decides how a plan card header on a plan comparison screen is presented:
//! the discount tooltip text, whether the billing timeframe carries an info
//! indicator, whether the yearly-vs-monthly callout is shown and whether a
//! "credit applied" label is shown. Every rule is a pure function of a
//! [`HeaderProps`] record.
//!
//! # Example
//!
//! ```ignore
//! use planheader::{CurrentSitePlan, HeaderProps, HeaderRenderer, PlanSlug, PricingContext};
//! use rust_decimal::Decimal;
//!
//! let props = HeaderProps::new(
//!     PlanSlug::Premium,
//!     CurrentSitePlan::new(PlanSlug::Personal),
//!     PricingContext {
//!         raw_price: Decimal::new(100, 0),
//!         discount_price: Decimal::new(80, 0),
//!         ..Default::default()
//!     },
//! );
//! let header = HeaderRenderer::default().header(&props);
//! println!("{}", header.to_text());
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod plan;
pub mod render;
pub mod rules;

pub use context::{HeaderProps, PricingContext};
pub use error::{PlanError, Result};
pub use plan::{BillingTerm, CurrentSitePlan, PlanSlug, PlanTier};
pub use render::{Fragment, HeaderDecisions, HeaderRenderer};
pub use rules::{
    TimeframeReason, discount_tooltip_for, discount_tooltip_message, shows_billing_timeframe_indicator,
    shows_credit_label, shows_interval_discount,
};

/// Currency used when neither the props nor the config name one
pub const DEFAULT_CURRENCY: &str = "USD";
