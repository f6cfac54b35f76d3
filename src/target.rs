use crate::Error;

/// Suffix appended to a table name when its foreign definition is moved aside.
pub const FOREIGN_SUFFIX: &str = "_foreign";

/// Quote a PostgreSQL identifier.
///
/// Embedded double quotes are doubled and the whole name is wrapped in
/// double quotes, so any string is safe in identifier position and keeps
/// its exact case.
pub fn quote(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// A schema-qualified table the tool operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    schema: String,
    table: String,
}

impl Target {
    pub fn new(schema: impl Into<String>, table: impl Into<String>) -> Result<Self, Error> {
        let schema = schema.into();
        let table = table.into();
        match (schema.is_empty(), table.is_empty()) {
            (true, _) => Err(Error::EmptyIdentifier("schema")),
            (_, true) => Err(Error::EmptyIdentifier("table")),
            _ => Ok(Self { schema, table }),
        }
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }
    pub fn table(&self) -> &str {
        &self.table
    }
    /// Unquoted name the foreign table carries while a local copy exists.
    pub fn foreign(&self) -> String {
        format!("{}{}", self.table, FOREIGN_SUFFIX)
    }

    /// `"schema"."table"`
    pub fn local_qualified(&self) -> String {
        format!("{}.{}", quote(&self.schema), quote(&self.table))
    }
    /// `"schema"."table_foreign"`
    pub fn foreign_qualified(&self) -> String {
        format!("{}.{}", quote(&self.schema), quote(&self.foreign()))
    }
    /// `"table"`, for the right-hand side of `RENAME TO`.
    pub fn local_bare(&self) -> String {
        quote(&self.table)
    }
    /// `"table_foreign"`, for the right-hand side of `RENAME TO`.
    pub fn foreign_bare(&self) -> String {
        quote(&self.foreign())
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.local_qualified())
    }
}
