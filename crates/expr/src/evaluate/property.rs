// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use lattica_type::Value;

use crate::context::EvaluationContext;
use crate::expression::{PropertyExpression, PropertyKind};

use super::Evaluator;

impl Evaluator<'_> {
    pub(crate) fn property(&self, expr: &PropertyExpression, ctx: &dyn EvaluationContext) -> Value {
        match expr.kind {
            PropertyKind::InputProp => ctx.get_input_prop(&expr.prop),
            PropertyKind::VarProp => ctx.get_var_prop(&expr.symbol, &expr.prop),
            PropertyKind::SrcProp => ctx.get_src_prop(&expr.symbol, &expr.prop),
            PropertyKind::DstProp => ctx.get_dst_prop(&expr.symbol, &expr.prop),
            PropertyKind::EdgeProp => ctx.get_edge_prop(&expr.symbol, &expr.prop),
            PropertyKind::EdgeSrcId => ctx.get_edge_prop(&expr.symbol, "_src"),
            PropertyKind::EdgeType => ctx.get_edge_prop(&expr.symbol, "_type"),
            PropertyKind::EdgeRank => ctx.get_edge_prop(&expr.symbol, "_rank"),
            PropertyKind::EdgeDstId => ctx.get_edge_prop(&expr.symbol, "_dst"),
        }
    }
}
