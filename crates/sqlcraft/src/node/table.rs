/// A table (or view) referenced by a statement.
///
/// Statements own their table by value; nothing points back at the statement.
///
/// # Example
///
/// ```rust
/// use sqlcraft::Table;
///
/// let t = Table::new("user").with_alias("u").with_schema("app");
/// assert_eq!(t.qualifier(), "u");
/// assert_eq!(t.full_name(), "app.user");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    name: String,
    alias: Option<String>,
    schema: Option<String>,
    view: bool,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.set_alias(alias);
        self
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.set_schema(schema);
        self
    }

    pub fn as_view(mut self) -> Self {
        self.view = true;
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Set the alias; an empty string clears it.
    pub fn set_alias(&mut self, alias: impl Into<String>) -> &mut Self {
        self.alias = non_empty(alias.into());
        self
    }

    /// Set the schema; an empty string clears it.
    pub fn set_schema(&mut self, schema: impl Into<String>) -> &mut Self {
        self.schema = non_empty(schema.into());
        self
    }

    pub fn set_view(&mut self, view: bool) -> &mut Self {
        self.view = view;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    pub fn is_view(&self) -> bool {
        self.view
    }

    /// Name used to qualify this table's columns: the alias when set,
    /// otherwise the schema-qualified name.
    pub fn qualifier(&self) -> String {
        match &self.alias {
            Some(alias) => alias.clone(),
            None => self.full_name(),
        }
    }

    /// `schema.name`, or just `name` without a schema.
    pub fn full_name(&self) -> String {
        match &self.schema {
            Some(schema) => format!("{}.{}", schema, self.name),
            None => self.name.clone(),
        }
    }
}

impl From<&str> for Table {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Table {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&Table> for Table {
    fn from(table: &Table) -> Self {
        table.clone()
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}
