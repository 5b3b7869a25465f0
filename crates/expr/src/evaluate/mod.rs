// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use lattica_type::Value;

use crate::context::EvaluationContext;
use crate::expression::Expression;
use crate::function::Functions;

mod arith;
mod call;
mod cast;
mod compare;
mod container;
mod logic;
mod property;
mod unary;
mod variable;

/// Tree-walking evaluation over [`Expression`].
///
/// `evaluate` is a pure function of the node and the context: children
/// are visited left to right, every operand is always evaluated (the
/// logical operators do not short-circuit), and the result is a fresh
/// `Value` per call, so evaluating the same tree from many threads is
/// safe as long as the context is.
pub struct Evaluator<'a> {
    functions: &'a Functions,
}

impl<'a> Evaluator<'a> {
    pub fn new(functions: &'a Functions) -> Self {
        Self { functions }
    }

    pub(crate) fn functions(&self) -> &Functions {
        self.functions
    }

    pub fn evaluate(&self, expr: &Expression, ctx: &dyn EvaluationContext) -> Value {
        match expr {
            Expression::Constant(e) => e.value.clone(),
            Expression::Add(e) => self.add(e, ctx),
            Expression::Sub(e) => self.sub(e, ctx),
            Expression::Mul(e) => self.mul(e, ctx),
            Expression::Div(e) => self.div(e, ctx),
            Expression::Rem(e) => self.rem(e, ctx),
            Expression::Unary(e) => self.unary(e, ctx),
            Expression::Equal(e) => self.equal(e, ctx),
            Expression::NotEqual(e) => self.not_equal(e, ctx),
            Expression::LessThan(e) => self.less_than(e, ctx),
            Expression::LessThanEqual(e) => self.less_than_equal(e, ctx),
            Expression::GreaterThan(e) => self.greater_than(e, ctx),
            Expression::GreaterThanEqual(e) => self.greater_than_equal(e, ctx),
            Expression::In(e) => self.is_in(e, ctx),
            Expression::Contains(e) => self.contains(e, ctx),
            Expression::StartsWith(e) => self.starts_with(e, ctx),
            Expression::EndsWith(e) => self.ends_with(e, ctx),
            Expression::Regex(e) => self.regex(e, ctx),
            Expression::And(e) => self.and(e, ctx),
            Expression::Or(e) => self.or(e, ctx),
            Expression::Xor(e) => self.xor(e, ctx),
            Expression::Cast(e) => self.cast(e, ctx),
            Expression::Call(e) => self.call(e, ctx),
            Expression::List(e) => self.list(e, ctx),
            Expression::Set(e) => self.set(e, ctx),
            Expression::Map(e) => self.map(e, ctx),
            Expression::MapProjection(e) => self.map_projection(e, ctx),
            Expression::Property(e) => self.property(e, ctx),
            Expression::Variable(e) => self.variable(e, ctx),
            Expression::VersionedVariable(e) => self.versioned_variable(e, ctx),
            Expression::Uuid(_) => Value::utf8(uuid::Uuid::new_v4().to_string()),
        }
    }
}
