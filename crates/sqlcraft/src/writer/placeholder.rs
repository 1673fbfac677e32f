use crate::value::{Params, Value};

/// Placeholder token prefix; tokens read `:v1`, `:v2`, ...
pub const PLACEHOLDER_PREFIX: &str = ":v";

/// Allocates `:vN` placeholders and records the value bound to each.
///
/// One allocator spans one top-level compile. Nested statements (joins,
/// subqueries, set-operation members) continue the same sequence, so tokens
/// are numbered in the order they appear in the final text.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderAllocator {
    next: usize,
    params: Params,
}

impl Default for PlaceholderAllocator {
    fn default() -> Self {
        Self {
            next: 1,
            params: Params::new(),
        }
    }
}

impl PlaceholderAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart numbering at 1 and forget every bound value.
    pub fn reset(&mut self) {
        self.next = 1;
        self.params.clear();
    }

    /// Bind `value` to the next token and return the token.
    ///
    /// The stored value is normalized: null and empty text become `NULL`,
    /// booleans become `1`/`0`.
    pub fn add(&mut self, value: &Value) -> String {
        let token = format!("{PLACEHOLDER_PREFIX}{}", self.next);
        self.next += 1;
        self.params.push(token.clone(), value.normalized());
        token
    }

    /// Number of tokens handed out since the last reset.
    pub fn len(&self) -> usize {
        self.next - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn into_params(self) -> Params {
        self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_sequential() {
        let mut alloc = PlaceholderAllocator::new();
        assert_eq!(alloc.add(&Value::Int(5)), ":v1");
        assert_eq!(alloc.add(&Value::from("x")), ":v2");
        assert_eq!(alloc.len(), 2);
        assert_eq!(alloc.params().tokens(), [":v1", ":v2"]);
    }

    #[test]
    fn values_are_normalized() {
        let mut alloc = PlaceholderAllocator::new();
        alloc.add(&Value::Bool(true));
        alloc.add(&Value::from(""));
        assert_eq!(alloc.params().get(":v1"), Some(&Value::Int(1)));
        assert_eq!(alloc.params().get(":v2"), Some(&Value::Null));
    }

    #[test]
    fn reset_restarts_numbering() {
        let mut alloc = PlaceholderAllocator::new();
        alloc.add(&Value::Int(1));
        alloc.reset();
        assert!(alloc.is_empty());
        assert!(alloc.params().is_empty());
        assert_eq!(alloc.add(&Value::Int(2)), ":v1");
    }
}
