use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Double-quote an identifier, doubling any embedded quotes.
pub(crate) fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// A possibly database- and schema-qualified object name.
///
/// Displays as a dot-joined list of quoted identifiers, e.g.
/// `"db"."schema"."table"`.
#[derive(Clone, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectName {
    pub database: Option<String>,
    pub schema: Option<String>,
    pub name: String,
}

impl ObjectName {
    /// An unqualified name, such as a database or cluster.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// A fully-qualified name for an object that lives in a schema.
    pub fn qualified(
        database: impl Into<String>,
        schema: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            database: Some(database.into()),
            schema: Some(schema.into()),
            name: name.into(),
        }
    }

    /// Qualify the name with a database.
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }
}

impl Display for ObjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts = [self.database.as_deref(), self.schema.as_deref(), Some(self.name.as_str())]
            .into_iter()
            .flatten()
            .map(quote_ident)
            .collect::<Vec<_>>();
        write!(f, "{}", parts.join("."))
    }
}
