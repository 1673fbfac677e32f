use super::Session;
use crate::error::{SqlError, SqlResult};
use crate::query::{QueryKind, Select};

/// Renders UNION / UNION ALL / INTERSECT / MINUS.
pub(super) struct SetOpWriter;

impl SetOpWriter {
    /// Members are written in order on the shared session and joined by the
    /// keyword on its own line.
    pub(super) fn write<'s>(
        &self,
        session: &mut Session<'_>,
        kind: QueryKind,
        selects: impl IntoIterator<Item = &'s Select>,
    ) -> SqlResult<String> {
        let parts = selects
            .into_iter()
            .map(|select| session.write_nested(select))
            .collect::<SqlResult<Vec<_>>>()?;

        if parts.is_empty() {
            return Err(SqlError::missing_context(format!(
                "cannot compile {kind} without member SELECTs"
            )));
        }

        Ok(parts.join(&format!("\n{kind}\n")))
    }
}
