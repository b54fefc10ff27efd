//! Billing-figure extraction for electricity bill text.
//!
//! Given text already pulled out of a bill (copy-paste, `pdftotext`, an
//! OCR pass), this crate recovers the billed amount and the units
//! consumed, validates both against plausible ranges, and derives the
//! implied tariff as a cross-check.

pub mod extractor;
pub mod validation;

pub use extractor::{BillScan, RegexBillExtractor, TextExtractor};
pub use validation::{BillValidation, clamp_tariff, validate};
