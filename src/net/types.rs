//! Wire and domain types shared by resources, state, and rendering.
//!
//! DESIGN
//! ======
//! Records are read-only snapshots: the view never patches them, it replaces
//! the whole list on every render. Identifiers are string newtypes because the
//! server emits them as JSON numbers in some payloads and strings in others.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::RemoteError;

/// Accept either a JSON string or a JSON number as an identifier.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

/// Identifier of an account.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(#[serde(deserialize_with = "string_or_number")] pub String);

/// Identifier of a transaction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(#[serde(deserialize_with = "string_or_number")] pub String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TransactionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parameters used to populate the view.
///
/// `filters` carries any extra list-query fields verbatim; they are forwarded
/// to the transaction list call alongside `account_id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderRequest {
    pub account_id: AccountId,
    #[serde(flatten, default)]
    pub filters: BTreeMap<String, String>,
}

impl RenderRequest {
    pub fn for_account(account_id: impl Into<String>) -> Self {
        Self { account_id: AccountId::new(account_id), filters: BTreeMap::new() }
    }

    #[must_use]
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Query pairs for the list call, `account_id` first.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.filters.len() + 1);
        pairs.push(("account_id".to_owned(), self.account_id.0.clone()));
        pairs.extend(
            self.filters
                .iter()
                .filter(|(k, _)| k.as_str() != "account_id")
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        pairs
    }
}

/// Direction of a transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Modifier class applied to the rendered entry.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Income => "transaction_income",
            Self::Expense => "transaction_expense",
        }
    }
}

/// One transaction as returned by the list call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: TransactionId,
    pub name: String,
    pub sum: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub created_at: String,
}

impl TransactionRecord {
    /// Sum with its sign taken from the transaction kind.
    #[must_use]
    pub fn signed_sum(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.sum.abs(),
            TransactionKind::Expense => -self.sum.abs(),
        }
    }
}

/// Account metadata needed for the page title.
///
/// Some endpoints echo only the name, so `id` is optional on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    #[serde(default)]
    pub id: Option<AccountId>,
    pub name: String,
}

/// Response envelope used by every resource endpoint.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<serde_json::Value>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the payload of a successful response.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Rejected`] when `success` is false and
    /// [`RemoteError::Decode`] when a successful response carries no data.
    pub fn into_data(self) -> Result<T, RemoteError> {
        if !self.success {
            return Err(RemoteError::Rejected(error_message(self.error.as_ref())));
        }
        self.data.ok_or_else(|| RemoteError::Decode("missing data".to_owned()))
    }

    /// Check a response whose payload is irrelevant.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Rejected`] when `success` is false.
    pub fn into_unit(self) -> Result<(), RemoteError> {
        if self.success {
            Ok(())
        } else {
            Err(RemoteError::Rejected(error_message(self.error.as_ref())))
        }
    }
}

fn error_message(error: Option<&serde_json::Value>) -> String {
    match error {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Null) | None => "unknown error".to_owned(),
        Some(other) => other.to_string(),
    }
}
