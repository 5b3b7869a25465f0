// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

pub mod arena;
pub mod context;
pub mod evaluate;
pub mod expression;
pub mod function;

pub use arena::{Arena, ArenaError};
pub use context::{EvaluationContext, StandardContext};
pub use evaluate::Evaluator;
pub use expression::{
    AddExpression, AndExpression, CallExpression, CastExpression, ConstantExpression,
    ContainsExpression, DivExpression, EndsWithExpression, EqualExpression, Expression,
    ExpressionKind, GreaterThanEqualExpression, GreaterThanExpression, InExpression,
    LessThanEqualExpression, LessThanExpression, ListExpression, MapExpression,
    MapProjectionExpression, MapProjectionField, MulExpression, NotEqualExpression, OrExpression,
    PropertyExpression, PropertyKind, RegexExpression, RemExpression, SetExpression,
    StartsWithExpression, SubExpression, UnaryExpression, UnaryOperator, UuidExpression,
    VariableExpression, VersionedVariableExpression, XorExpression,
};
pub use function::{BuiltinFn, FunctionDef, FunctionError, Functions};
