//! Pattern-based recovery of billing figures from electricity bill text.
//!
//! Works on text that has already been pulled out of a bill, whether by
//! copy-paste, `pdftotext`, or an OCR pass. Indian bills vary wildly in
//! layout, so extraction leans on labelled figures ("Total", "Units",
//! "kWh") rather than positional parsing.

use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Labels that introduce the billed amount, most specific first. The
/// capture group accepts digit grouping ("5,000") and optional paise.
const AMOUNT_PATTERNS: [&str; 7] = [
    r"total[:\s]*₹?\s*(\d+(?:,\d+)*(?:\.\d{2})?)",
    r"amount[:\s]*₹?\s*(\d+(?:,\d+)*(?:\.\d{2})?)",
    r"bill[:\s]*₹?\s*(\d+(?:,\d+)*(?:\.\d{2})?)",
    r"₹\s*(\d+(?:,\d+)*(?:\.\d{2})?)",
    r"rs\.?\s*(\d+(?:,\d+)*(?:\.\d{2})?)",
    r"current[:\s]*₹?\s*(\d+(?:,\d+)*(?:\.\d{2})?)",
    r"payable[:\s]*₹?\s*(\d+(?:,\d+)*(?:\.\d{2})?)",
];

/// Labels that introduce the energy consumed, in kWh.
const UNITS_PATTERNS: [&str; 6] = [
    r"units[:\s]*(\d+(?:,\d+)*(?:\.\d{2})?)",
    r"kwh[:\s]*(\d+(?:,\d+)*(?:\.\d{2})?)",
    r"consumption[:\s]*(\d+(?:,\d+)*(?:\.\d{2})?)",
    r"energy[:\s]*(\d+(?:,\d+)*(?:\.\d{2})?)",
    r"present[:\s]*reading[:\s]*(\d+(?:,\d+)*(?:\.\d{2})?)",
    r"current[:\s]*reading[:\s]*(\d+(?:,\d+)*(?:\.\d{2})?)",
];

fn amount_regexes() -> &'static Vec<Regex> {
    static COMPILED: OnceLock<Vec<Regex>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        AMOUNT_PATTERNS
            .iter()
            .filter_map(|pattern| Regex::new(pattern).ok())
            .collect()
    })
}

fn units_regexes() -> &'static Vec<Regex> {
    static COMPILED: OnceLock<Vec<Regex>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        UNITS_PATTERNS
            .iter()
            .filter_map(|pattern| Regex::new(pattern).ok())
            .collect()
    })
}

/// Figures recovered from one pass over a bill's text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BillScan {
    /// Billed amount in ₹, when any amount label matched.
    pub amount: Option<Decimal>,
    /// Energy consumed in kWh, when any units label matched.
    pub units: Option<Decimal>,
}

/// Recovers billing figures from bill text.
pub trait TextExtractor {
    fn extract(&self, text: &str) -> BillScan;
}

/// The built-in extractor. Matching is done against the lowercased text
/// and the first label pattern that hits anywhere settles its figure:
/// the amount takes the largest value that label produced (bills repeat
/// the total in several places), the units take the first.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexBillExtractor;

impl RegexBillExtractor {
    pub fn new() -> Self {
        RegexBillExtractor
    }

    fn scan_amount(text: &str) -> Option<Decimal> {
        for regex in amount_regexes() {
            let candidates: Vec<Decimal> = regex
                .captures_iter(text)
                .filter_map(|caps| caps.get(1))
                .filter_map(|figure| parse_figure(figure.as_str()))
                .collect();
            if let Some(largest) = candidates.into_iter().max() {
                return Some(largest);
            }
        }
        None
    }

    fn scan_units(text: &str) -> Option<Decimal> {
        for regex in units_regexes() {
            if let Some(first) = regex
                .captures_iter(text)
                .filter_map(|caps| caps.get(1))
                .find_map(|figure| parse_figure(figure.as_str()))
            {
                return Some(first);
            }
        }
        None
    }
}

impl TextExtractor for RegexBillExtractor {
    fn extract(&self, text: &str) -> BillScan {
        let lowered = text.to_lowercase();
        let amount = Self::scan_amount(&lowered);
        let units = Self::scan_units(&lowered);
        if let Some(amount) = amount {
            debug!(%amount, "matched billed amount");
        }
        if let Some(units) = units {
            debug!(%units, "matched units consumed");
        }
        BillScan { amount, units }
    }
}

/// Strips digit grouping before parsing a captured figure.
fn parse_figure(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    cleaned.parse::<Decimal>().ok()
}
