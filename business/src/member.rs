//! The member record shown in every table row.

use serde::{Deserialize, Serialize};
use ustr::Ustr;

/// A member as returned by the members endpoint.
///
/// Every field is a string on the wire. `id` is interned because it is
/// cloned and compared constantly (selection, edit mode, deletes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub id: Ustr,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl MemberRecord {
    pub fn new(
        id: impl AsRef<str>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: Ustr::from(id.as_ref()),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Field values in column order.
    pub fn fields(&self) -> [&str; 4] {
        [
            self.id.as_str(),
            &self.name,
            &self.email,
            &self.role,
        ]
    }

    /// Whether any field contains `needle_lower`, ignoring case.
    ///
    /// `needle_lower` must already be lowercased.
    pub fn matches(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty()
            || self
                .fields()
                .iter()
                .any(|value| value.to_lowercase().contains(needle_lower))
    }
}
