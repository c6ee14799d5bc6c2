//! Raw statement records as produced by the statement service.
//!
//! Bank exports are messy: fields go missing, amounts arrive as strings, and
//! dates come in whatever format the bank fancies. Every field is therefore
//! optional here and coercion into canonical values is deferred to
//! [crate::report::normalize].

use serde::{Deserialize, Serialize};

/// One transaction row as parsed and categorized by the statement service.
///
/// Field names on the wire are PascalCase, matching the column names the
/// service standardizes statements to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// The transaction narration from the statement.
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    /// The transaction amount. May be a JSON number or a numeric string.
    #[serde(rename = "Amount", default)]
    pub amount: Option<RawAmount>,
    /// Date-like text, e.g. "2024-01-05" or "2024-01-05 00:00:00".
    #[serde(rename = "Date", default)]
    pub date: Option<String>,
    /// "CREDIT" or "DEBIT". Anything else is treated as a debit.
    #[serde(rename = "Type", default)]
    pub kind: Option<String>,
    /// The category assigned by the service, or the "Other" sentinel when it
    /// could not place the transaction.
    #[serde(rename = "Category", default)]
    pub category: Option<String>,
}

/// An amount field that may arrive as a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    /// A plain JSON number.
    Number(f64),
    /// A string that may or may not contain a number.
    Text(String),
}

/// A merchant the statement service could not categorize, grouped by
/// description with its amounts summed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnknownMerchant {
    /// The merchant description shared by the uncategorized transactions.
    #[serde(rename = "Name")]
    pub name: String,
    /// The summed amount, negative for net spending.
    #[serde(rename = "Amount", default)]
    pub amount: Option<RawAmount>,
}

/// The statement currently loaded into the app.
///
/// This is the only shared state in the application. It is owned by the
/// presentation layer and replaced wholesale on each upload; the reporting
/// core only ever borrows it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statement {
    /// All parsed transactions, categorized where the service could.
    pub transactions: Vec<RawRecord>,
    /// Merchants left for the user to categorize on the review page.
    pub unknowns: Vec<UnknownMerchant>,
    /// Category options suggested by the service for the review page.
    pub categories: Vec<String>,
}

impl Statement {
    /// Whether any transactions have been uploaded.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Apply a merchant name to category mapping to the loaded transactions.
    ///
    /// Transactions whose description matches a mapped name get that
    /// category, and the matching unknown merchants are removed so the review
    /// page no longer offers them.
    pub fn apply_mapping(&mut self, mapping: &[(String, String)]) {
        for (name, category) in mapping {
            for record in &mut self.transactions {
                if record.description.as_deref().map(str::trim) == Some(name.trim()) {
                    record.category = Some(category.clone());
                }
            }
        }

        self.unknowns
            .retain(|unknown| !mapping.iter().any(|(name, _)| *name == unknown.name));
    }
}
