//! Relation-tuple types
//!
//! A tuple is written `namespace:object#relation@subject`, e.g.
//! `fastapi-resource-server:role:data:admin#member@Soro-Kan`.

use serde::Deserialize;
use std::fmt;

/// Prefix marking an object as a role reference
pub const ROLE_PREFIX: &str = "role:";

/// Relation of a tuple
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Subject holds the permission named by the object, or the role named by
    /// the object grants the permission named by the subject
    Granted,
    /// Subject belongs to the role named by the object
    Member,
    /// Any relation this gateway does not interpret
    Other(String),
}

impl Relation {
    pub fn as_str(&self) -> &str {
        match self {
            Relation::Granted => "granted",
            Relation::Member => "member",
            Relation::Other(name) => name,
        }
    }
}

impl From<&str> for Relation {
    fn from(value: &str) -> Self {
        match value {
            "granted" => Relation::Granted,
            "member" => Relation::Member,
            other => Relation::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable fact held by the relation-tuple store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationTuple {
    pub namespace: String,
    pub object: String,
    pub relation: Relation,
    pub subject_id: String,
}

impl RelationTuple {
    pub fn new(
        namespace: impl Into<String>,
        object: impl Into<String>,
        relation: Relation,
        subject_id: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            object: object.into(),
            relation,
            subject_id: subject_id.into(),
        }
    }

    /// Role name when the object is a `role:` reference
    pub fn role_name(&self) -> Option<&str> {
        self.object.strip_prefix(ROLE_PREFIX)
    }
}

impl fmt::Display for RelationTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}#{}@{}",
            self.namespace, self.object, self.relation, self.subject_id
        )
    }
}

/// Object reference for a role name
pub fn role_object(role_name: &str) -> String {
    format!("{}{}", ROLE_PREFIX, role_name)
}

/// Filter for a list query; fields left unset are not sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TupleFilter {
    pub namespace: String,
    pub subject_id: Option<String>,
    pub object: Option<String>,
    pub relation: Option<Relation>,
}

impl TupleFilter {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            subject_id: None,
            object: None,
            relation: None,
        }
    }

    pub fn subject_id(mut self, subject_id: impl Into<String>) -> Self {
        self.subject_id = Some(subject_id.into());
        self
    }

    pub fn object(mut self, object: impl Into<String>) -> Self {
        self.object = Some(object.into());
        self
    }

    pub fn relation(mut self, relation: Relation) -> Self {
        self.relation = Some(relation);
        self
    }

    /// Query parameters in the store's wire names
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("namespace", self.namespace.clone())];
        if let Some(subject_id) = &self.subject_id {
            query.push(("subject_id", subject_id.clone()));
        }
        if let Some(object) = &self.object {
            query.push(("object", object.clone()));
        }
        if let Some(relation) = &self.relation {
            query.push(("relation", relation.as_str().to_string()));
        }
        query
    }
}

// Wire formats. Fields are lenient: the store omits `subject_id` for
// subject-set tuples and may omit the array when nothing matched.

#[derive(Debug, Deserialize)]
pub(crate) struct RawRelationTuple {
    #[serde(default)]
    namespace: String,
    #[serde(default)]
    object: String,
    #[serde(default)]
    relation: String,
    #[serde(default)]
    subject_id: String,
}

impl From<RawRelationTuple> for RelationTuple {
    fn from(raw: RawRelationTuple) -> Self {
        RelationTuple {
            namespace: raw.namespace,
            object: raw.object,
            relation: Relation::from(raw.relation.as_str()),
            subject_id: raw.subject_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListTuplesResponse {
    #[serde(default)]
    pub relation_tuples: Vec<RawRelationTuple>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CheckResponse {
    #[serde(default)]
    pub allowed: bool,
}
