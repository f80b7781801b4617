//! Member records as served by the data source.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ustr::Ustr;

/// Stable identifier of a member.
///
/// The data source sends ids as JSON strings (`"1"`); plain numbers are
/// accepted as well and kept as their decimal text. Ids are interned with
/// `Ustr` because they are copied and compared on every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemberId(Ustr);

impl MemberId {
    pub fn new(id: &str) -> Self {
        Self(Ustr::from(id))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Ord for MemberId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for MemberId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for MemberId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for MemberId {
    fn from(id: u64) -> Self {
        Self::new(&id.to_string())
    }
}

impl Serialize for MemberId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MemberId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self::new(&text),
            RawId::Unsigned(n) => Self::new(&n.to_string()),
            RawId::Signed(n) => Self::new(&n.to_string()),
        })
    }
}

/// Editable text fields of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberField {
    Name,
    Email,
    Role,
}

impl MemberField {
    /// Column order used by the table.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Role];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Role => "Role",
        }
    }
}

/// One row of the members table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Member {
    pub fn new(
        id: impl Into<MemberId>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    pub fn field(&self, field: MemberField) -> &str {
        match field {
            MemberField::Name => &self.name,
            MemberField::Email => &self.email,
            MemberField::Role => &self.role,
        }
    }

    /// Whether name, email or role contains `needle`.
    ///
    /// `needle` must already be lowercased; the fields are lowercased here.
    pub fn matches(&self, needle: &str) -> bool {
        MemberField::ALL
            .iter()
            .any(|field| self.field(*field).to_lowercase().contains(needle))
    }

    /// Overwrite the fields present in `patch`, keep the rest.
    pub fn apply(&mut self, patch: &MemberPatch) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(email) = &patch.email {
            self.email.clone_from(email);
        }
        if let Some(role) = &patch.role {
            self.role.clone_from(role);
        }
    }
}

/// In-progress edit values for one member. `None` means untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl MemberPatch {
    pub fn get(&self, field: MemberField) -> Option<&str> {
        match field {
            MemberField::Name => self.name.as_deref(),
            MemberField::Email => self.email.as_deref(),
            MemberField::Role => self.role.as_deref(),
        }
    }

    pub fn set(&mut self, field: MemberField, value: String) {
        let slot = match field {
            MemberField::Name => &mut self.name,
            MemberField::Email => &mut self.email,
            MemberField::Role => &mut self.role,
        };
        *slot = Some(value);
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.role.is_none()
    }
}
