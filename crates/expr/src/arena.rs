// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use crate::expression::Expression;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArenaError {
    #[error("arena slot {0} is vacant or out of range")]
    Vacant(usize),
}

/// Bulk-lifetime owner for expression trees at the planning boundary.
///
/// The trees themselves stay unique-ownership; the arena only holds the
/// roots that were registered with it. `release` transfers a tree back
/// out, `clear` drops everything still registered.
#[derive(Default)]
pub struct Arena {
    slots: Vec<Option<Box<Expression>>>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tree and returns its handle.
    pub fn add(&mut self, expr: Box<Expression>) -> usize {
        self.slots.push(Some(expr));
        self.slots.len() - 1
    }

    pub fn get(&self, handle: usize) -> Option<&Expression> {
        self.slots.get(handle).and_then(|slot| slot.as_deref())
    }

    /// Transfers ownership of a registered tree back to the caller.
    pub fn release(&mut self, handle: usize) -> Result<Box<Expression>, ArenaError> {
        self.slots
            .get_mut(handle)
            .and_then(Option::take)
            .ok_or(ArenaError::Vacant(handle))
    }

    /// Drops every tree still registered.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use lattica_type::Value;

    use super::*;

    #[test]
    fn test_add_and_release() {
        let mut arena = Arena::new();
        let handle = arena.add(Box::new(Expression::constant(Value::int8(1))));
        assert_eq!(arena.len(), 1);

        let expr = arena.release(handle).unwrap();
        assert_eq!(*expr, Expression::constant(Value::int8(1)));
        assert!(arena.is_empty());

        assert_eq!(arena.release(handle), Err(ArenaError::Vacant(handle)));
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut arena = Arena::new();
        arena.add(Box::new(Expression::constant(Value::int8(1))));
        arena.add(Box::new(Expression::constant(Value::int8(2))));
        arena.clear();
        assert!(arena.is_empty());
    }
}
