// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use super::{Expression, PropertyKind};

/// One tag per serializable node shape. Property accessors get one kind
/// each, so the wire codec can dispatch on a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionKind {
    Constant,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Unary,
    Equal,
    NotEqual,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,
    In,
    Contains,
    StartsWith,
    EndsWith,
    Regex,
    And,
    Or,
    Xor,
    Cast,
    Call,
    List,
    Set,
    Map,
    MapProjection,
    InputProperty,
    VariableProperty,
    SourceProperty,
    DestProperty,
    EdgeProperty,
    EdgeSrcId,
    EdgeType,
    EdgeRank,
    EdgeDstId,
    Variable,
    VersionedVariable,
    Uuid,
}

impl ExpressionKind {
    /// Stable one-byte code used by the wire codec.
    pub fn code(&self) -> u8 {
        match self {
            ExpressionKind::Constant => 0x01,
            ExpressionKind::Add => 0x02,
            ExpressionKind::Sub => 0x03,
            ExpressionKind::Mul => 0x04,
            ExpressionKind::Div => 0x05,
            ExpressionKind::Rem => 0x06,
            ExpressionKind::Unary => 0x07,
            ExpressionKind::Equal => 0x08,
            ExpressionKind::NotEqual => 0x09,
            ExpressionKind::LessThan => 0x0a,
            ExpressionKind::LessThanEqual => 0x0b,
            ExpressionKind::GreaterThan => 0x0c,
            ExpressionKind::GreaterThanEqual => 0x0d,
            ExpressionKind::In => 0x0e,
            ExpressionKind::Contains => 0x0f,
            ExpressionKind::StartsWith => 0x10,
            ExpressionKind::EndsWith => 0x11,
            ExpressionKind::Regex => 0x12,
            ExpressionKind::And => 0x13,
            ExpressionKind::Or => 0x14,
            ExpressionKind::Xor => 0x15,
            ExpressionKind::Cast => 0x16,
            ExpressionKind::Call => 0x17,
            ExpressionKind::List => 0x18,
            ExpressionKind::Set => 0x19,
            ExpressionKind::Map => 0x1a,
            ExpressionKind::MapProjection => 0x1b,
            ExpressionKind::InputProperty => 0x1c,
            ExpressionKind::VariableProperty => 0x1d,
            ExpressionKind::SourceProperty => 0x1e,
            ExpressionKind::DestProperty => 0x1f,
            ExpressionKind::EdgeProperty => 0x20,
            ExpressionKind::EdgeSrcId => 0x21,
            ExpressionKind::EdgeType => 0x22,
            ExpressionKind::EdgeRank => 0x23,
            ExpressionKind::EdgeDstId => 0x24,
            ExpressionKind::Variable => 0x25,
            ExpressionKind::VersionedVariable => 0x26,
            ExpressionKind::Uuid => 0x27,
        }
    }

    pub fn from_code(code: u8) -> Option<ExpressionKind> {
        Some(match code {
            0x01 => ExpressionKind::Constant,
            0x02 => ExpressionKind::Add,
            0x03 => ExpressionKind::Sub,
            0x04 => ExpressionKind::Mul,
            0x05 => ExpressionKind::Div,
            0x06 => ExpressionKind::Rem,
            0x07 => ExpressionKind::Unary,
            0x08 => ExpressionKind::Equal,
            0x09 => ExpressionKind::NotEqual,
            0x0a => ExpressionKind::LessThan,
            0x0b => ExpressionKind::LessThanEqual,
            0x0c => ExpressionKind::GreaterThan,
            0x0d => ExpressionKind::GreaterThanEqual,
            0x0e => ExpressionKind::In,
            0x0f => ExpressionKind::Contains,
            0x10 => ExpressionKind::StartsWith,
            0x11 => ExpressionKind::EndsWith,
            0x12 => ExpressionKind::Regex,
            0x13 => ExpressionKind::And,
            0x14 => ExpressionKind::Or,
            0x15 => ExpressionKind::Xor,
            0x16 => ExpressionKind::Cast,
            0x17 => ExpressionKind::Call,
            0x18 => ExpressionKind::List,
            0x19 => ExpressionKind::Set,
            0x1a => ExpressionKind::Map,
            0x1b => ExpressionKind::MapProjection,
            0x1c => ExpressionKind::InputProperty,
            0x1d => ExpressionKind::VariableProperty,
            0x1e => ExpressionKind::SourceProperty,
            0x1f => ExpressionKind::DestProperty,
            0x20 => ExpressionKind::EdgeProperty,
            0x21 => ExpressionKind::EdgeSrcId,
            0x22 => ExpressionKind::EdgeType,
            0x23 => ExpressionKind::EdgeRank,
            0x24 => ExpressionKind::EdgeDstId,
            0x25 => ExpressionKind::Variable,
            0x26 => ExpressionKind::VersionedVariable,
            0x27 => ExpressionKind::Uuid,
            _ => return None,
        })
    }
}

impl Display for ExpressionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Expression {
    pub fn kind(&self) -> ExpressionKind {
        match self {
            Expression::Constant(_) => ExpressionKind::Constant,
            Expression::Add(_) => ExpressionKind::Add,
            Expression::Sub(_) => ExpressionKind::Sub,
            Expression::Mul(_) => ExpressionKind::Mul,
            Expression::Div(_) => ExpressionKind::Div,
            Expression::Rem(_) => ExpressionKind::Rem,
            Expression::Unary(_) => ExpressionKind::Unary,
            Expression::Equal(_) => ExpressionKind::Equal,
            Expression::NotEqual(_) => ExpressionKind::NotEqual,
            Expression::LessThan(_) => ExpressionKind::LessThan,
            Expression::LessThanEqual(_) => ExpressionKind::LessThanEqual,
            Expression::GreaterThan(_) => ExpressionKind::GreaterThan,
            Expression::GreaterThanEqual(_) => ExpressionKind::GreaterThanEqual,
            Expression::In(_) => ExpressionKind::In,
            Expression::Contains(_) => ExpressionKind::Contains,
            Expression::StartsWith(_) => ExpressionKind::StartsWith,
            Expression::EndsWith(_) => ExpressionKind::EndsWith,
            Expression::Regex(_) => ExpressionKind::Regex,
            Expression::And(_) => ExpressionKind::And,
            Expression::Or(_) => ExpressionKind::Or,
            Expression::Xor(_) => ExpressionKind::Xor,
            Expression::Cast(_) => ExpressionKind::Cast,
            Expression::Call(_) => ExpressionKind::Call,
            Expression::List(_) => ExpressionKind::List,
            Expression::Set(_) => ExpressionKind::Set,
            Expression::Map(_) => ExpressionKind::Map,
            Expression::MapProjection(_) => ExpressionKind::MapProjection,
            Expression::Property(prop) => match prop.kind {
                PropertyKind::InputProp => ExpressionKind::InputProperty,
                PropertyKind::VarProp => ExpressionKind::VariableProperty,
                PropertyKind::SrcProp => ExpressionKind::SourceProperty,
                PropertyKind::DstProp => ExpressionKind::DestProperty,
                PropertyKind::EdgeProp => ExpressionKind::EdgeProperty,
                PropertyKind::EdgeSrcId => ExpressionKind::EdgeSrcId,
                PropertyKind::EdgeType => ExpressionKind::EdgeType,
                PropertyKind::EdgeRank => ExpressionKind::EdgeRank,
                PropertyKind::EdgeDstId => ExpressionKind::EdgeDstId,
            },
            Expression::Variable(_) => ExpressionKind::Variable,
            Expression::VersionedVariable(_) => ExpressionKind::VersionedVariable,
            Expression::Uuid(_) => ExpressionKind::Uuid,
        }
    }
}
