use super::column::Column;
use crate::error::{SqlError, SqlResult};
use std::fmt;
use std::str::FromStr;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for Direction {
    type Err = SqlError;

    fn from_str(s: &str) -> SqlResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            _ => Err(SqlError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ORDER BY entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    column: Column,
    direction: Direction,
}

impl OrderBy {
    pub fn new(column: Column, direction: Direction) -> Self {
        Self { column, direction }
    }

    /// Build from a textual direction, rejecting anything but ASC/DESC.
    pub fn parse(column: Column, direction: &str) -> SqlResult<Self> {
        Ok(Self::new(column, direction.parse()?))
    }

    pub fn column(&self) -> &Column {
        &self.column
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) -> &mut Self {
        self.direction = direction;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_directions() {
        assert_eq!("ASC".parse::<Direction>().unwrap(), Direction::Asc);
        assert_eq!("desc".parse::<Direction>().unwrap(), Direction::Desc);
    }

    #[test]
    fn rejects_unknown_direction() {
        let err = OrderBy::parse(Column::new("id", "user"), "SIDEWAYS").unwrap_err();
        assert_eq!(err, SqlError::InvalidDirection("SIDEWAYS".into()));
    }
}
