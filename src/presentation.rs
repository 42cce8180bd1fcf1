//! Display attributes for enumerated fields and number formatting.
//!
//! Every mapping is total. Values arriving as raw strings (from serialized
//! data or a widget) that fall outside the vocabulary resolve to a fallback
//! instead of failing.

use crate::models::{PartStatus, ServiceCategory, ServiceType};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::str::FromStr;

/// Background color utility class applied to a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ColorToken {
    Success,
    Warning,
    Accent,
    Primary,
    Destructive,
    Muted,
}

impl ColorToken {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "bg-warehouse-success",
            Self::Warning => "bg-warehouse-warning",
            Self::Accent => "bg-warehouse-accent",
            Self::Primary => "bg-primary",
            Self::Destructive => "bg-destructive",
            Self::Muted => "bg-muted",
        }
    }
}

pub const FALLBACK_COLOR: ColorToken = ColorToken::Muted;
pub const FALLBACK_CATEGORY_ICON: &str = "🔨";
pub const NO_NOTES_LABEL: &str = "No notes available";

impl ServiceType {
    #[must_use]
    pub fn color(self) -> ColorToken {
        match self {
            Self::Routine => ColorToken::Success,
            Self::Repair => ColorToken::Warning,
            Self::Inspection => ColorToken::Primary,
            Self::Emergency => ColorToken::Destructive,
        }
    }
}

impl PartStatus {
    #[must_use]
    pub fn color(self) -> ColorToken {
        match self {
            Self::Pending => ColorToken::Muted,
            Self::Ordered => ColorToken::Warning,
            Self::Delivered => ColorToken::Accent,
            Self::Installed => ColorToken::Success,
        }
    }
}

impl ServiceCategory {
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Engine => "🔧",
            Self::Brakes => "🛑",
            Self::Tires => "🚗",
            Self::Electrical => "⚡",
            Self::Transmission => "⚙️",
            Self::Other => FALLBACK_CATEGORY_ICON,
        }
    }
}

#[must_use]
pub fn service_type_color(value: &str) -> ColorToken {
    ServiceType::from_str(value).map_or(FALLBACK_COLOR, ServiceType::color)
}

#[must_use]
pub fn part_status_color(value: &str) -> ColorToken {
    PartStatus::from_str(value).map_or(FALLBACK_COLOR, PartStatus::color)
}

#[must_use]
pub fn category_icon(value: &str) -> &'static str {
    ServiceCategory::from_str(value).map_or(FALLBACK_CATEGORY_ICON, ServiceCategory::icon)
}

/// Title-cased option label for a vocabulary word: `in-progress` → `In Progress`.
#[must_use]
pub fn option_label(value: &str) -> String {
    value
        .split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Insert `,` every three digits of an unsigned integer string.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Two-decimal currency without grouping: `$85.99`, `$35.00`.
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{sign}${:.2}", rounded.abs())
}

/// Grouped currency with up to three decimals, trailing zeros dropped:
/// `$1,200`, `$4,200`, `$149.99`.
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let text = rounded.abs().to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    if fraction.is_empty() {
        format!("{sign}${}", group_thousands(whole))
    } else {
        format!("{sign}${}.{fraction}", group_thousands(whole))
    }
}

/// Grouped integer: `45,230`.
#[must_use]
pub fn format_mileage(mileage: u32) -> String {
    group_thousands(&mileage.to_string())
}

/// Numeric draft text for display, with `invalid_label` when it does not parse.
#[must_use]
pub fn format_draft_amount(raw: Option<&str>, invalid_label: &str) -> String {
    match raw {
        None => String::new(),
        Some(text) => Decimal::from_str(text.trim())
            .map_or_else(|_| invalid_label.to_string(), format_currency),
    }
}

#[must_use]
pub fn notes_or_placeholder(notes: Option<&str>) -> &str {
    notes.filter(|text| !text.trim().is_empty()).unwrap_or(NO_NOTES_LABEL)
}
