use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Server-assigned record identifier.
///
/// The collection store hands out either JSON numbers or strings. The original
/// representation is kept so records round-trip unchanged, while equality and
/// hashing go through the textual form so `5` and `"5"` name the same record.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl EntityId {
    /// Parses a path segment, preferring the numeric form.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(n) => EntityId::Number(n),
            Err(_) => EntityId::Text(raw.trim().to_string()),
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            EntityId::Number(n) => Some(*n),
            EntityId::Text(s) => s.parse().ok(),
        }
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum NumberOrString {
            Int(i64),
            Float(f64),
            String(String),
        }

        match NumberOrString::deserialize(deserializer)? {
            NumberOrString::Int(n) => Ok(EntityId::Number(n)),
            NumberOrString::Float(f) if f.fract() == 0.0 => Ok(EntityId::Number(f as i64)),
            NumberOrString::Float(f) => Err(serde::de::Error::custom(format!(
                "Invalid identifier: {}",
                f
            ))),
            NumberOrString::String(s) => Ok(EntityId::Text(s)),
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{}", n),
            EntityId::Text(s) => f.write_str(s),
        }
    }
}

impl PartialEq for EntityId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (EntityId::Number(a), EntityId::Number(b)) => a == b,
            (EntityId::Text(a), EntityId::Text(b)) => a == b,
            _ => self.to_string() == other.to_string(),
        }
    }
}

impl Eq for EntityId {}

impl Hash for EntityId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl From<i64> for EntityId {
    fn from(n: i64) -> Self {
        EntityId::Number(n)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        EntityId::Text(s.to_string())
    }
}

/// A record type that lives in one remote collection.
pub trait Entity: Serialize + DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static {
    /// Singular name used in logs and error context.
    const KIND: &'static str;
    /// Collection path segment on the remote store.
    const COLLECTION: &'static str;

    /// Body sent when creating a record; the server assigns the id.
    type Draft: Serialize + fmt::Debug + Send + Sync;

    fn id(&self) -> &EntityId;

    /// Value of the named foreign key, if this record carries it.
    fn foreign_key(&self, _name: &str) -> Option<&EntityId> {
        None
    }
}

/// Entities that can be fetched as a list scoped to one foreign-key value.
pub trait Scoped: Entity {
    const FOREIGN_KEY: &'static str;
}

/// Foreign key of every candidate-owned collection.
pub const CANDIDATE_FOREIGN_KEY: &str = "candidateId";
