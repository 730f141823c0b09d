//! Investment preferences: the record the form assembles and the prompt embeds.
//!
//! Labels are the exact strings sent to the model and shown in menus, so
//! `as_str()`, `Display` and the serde names always agree.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of property the investor is looking for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PropertyType {
    #[default]
    Residential,
    Commercial,
    Plot,
    Apartment,
    /// Unallocated land file in a housing society.
    File,
}

impl PropertyType {
    /// All variants in menu order.
    pub const ALL: [PropertyType; 5] = [
        PropertyType::Residential,
        PropertyType::Commercial,
        PropertyType::Plot,
        PropertyType::Apartment,
        PropertyType::File,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Residential => "Residential",
            PropertyType::Commercial => "Commercial",
            PropertyType::Plot => "Plot",
            PropertyType::Apartment => "Apartment",
            PropertyType::File => "File",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "residential" => Ok(Self::Residential),
            "commercial" => Ok(Self::Commercial),
            "plot" => Ok(Self::Plot),
            "apartment" => Ok(Self::Apartment),
            "file" => Ok(Self::File),
            _ => Err(format!(
                "unknown property type: {} (use residential, commercial, plot, apartment, or file)",
                s
            )),
        }
    }
}

/// How long the investor plans to hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InvestmentHorizon {
    #[serde(rename = "Short Term (1-2 years)")]
    ShortTerm,
    #[default]
    #[serde(rename = "Medium Term (3-5 years)")]
    MediumTerm,
    #[serde(rename = "Long Term (5+ years)")]
    LongTerm,
}

impl InvestmentHorizon {
    /// All variants in menu order.
    pub const ALL: [InvestmentHorizon; 3] = [
        InvestmentHorizon::ShortTerm,
        InvestmentHorizon::MediumTerm,
        InvestmentHorizon::LongTerm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentHorizon::ShortTerm => "Short Term (1-2 years)",
            InvestmentHorizon::MediumTerm => "Medium Term (3-5 years)",
            InvestmentHorizon::LongTerm => "Long Term (5+ years)",
        }
    }
}

impl fmt::Display for InvestmentHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvestmentHorizon {
    type Err = String;

    /// Accepts the full label, the variant name, or `short` / `medium` / `long`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if let Some(h) = Self::ALL
            .iter()
            .find(|h| h.as_str().to_lowercase() == lower)
        {
            return Ok(*h);
        }
        match lower.as_str() {
            "short" | "short-term" | "shortterm" | "short term" => Ok(Self::ShortTerm),
            "medium" | "medium-term" | "mediumterm" | "medium term" => Ok(Self::MediumTerm),
            "long" | "long-term" | "longterm" | "long term" => Ok(Self::LongTerm),
            _ => Err(format!(
                "unknown investment horizon: {} (use short, medium, or long)",
                s
            )),
        }
    }
}

/// How the purchase is paid for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaymentMode {
    #[default]
    Cash,
    Installments,
}

impl PaymentMode {
    /// All variants in menu order.
    pub const ALL: [PaymentMode; 2] = [PaymentMode::Cash, PaymentMode::Installments];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMode::Cash => "Cash",
            PaymentMode::Installments => "Installments",
        }
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cash" => Ok(Self::Cash),
            "installments" | "installment" | "instalments" => Ok(Self::Installments),
            _ => Err(format!(
                "unknown payment mode: {} (use cash or installments)",
                s
            )),
        }
    }
}

/// Assembled preference record handed from the form to the requester.
///
/// Serialized in camelCase; `duration` keeps its wire name although the Rust
/// type is [`InvestmentHorizon`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Free-text budget, e.g. `50 Lac` or `2 Crore`.
    pub budget: String,
    /// Free-text city or area, e.g. `DHA Lahore`.
    pub location: String,
    pub property_type: PropertyType,
    pub duration: InvestmentHorizon,
    pub payment_mode: PaymentMode,
}
