//! Expressions, comparisons and type resolution.

use novl_ir::{
    mangle, BinaryKind, CompareKind, Comparison, ComparisonOp, FunctionCall, Node,
    NumberLiteral, TokenKind, UnaryNegate, ValRef, ValType,
};
use novl_parse::tree::{self, Expr};
use novl_stack::with_stack;

use crate::{AstBuilder, BuildError};

impl AstBuilder<'_> {
    pub(crate) fn build_expr(&mut self, expr: &Expr) -> Result<Node, BuildError> {
        with_stack(|| match expr {
            Expr::Int { text, span } => {
                let value: i32 = text.parse().map_err(|_| BuildError::InvalidNumber {
                    text: text.clone(),
                    span: *span,
                })?;
                Ok(Node::int(value))
            }
            Expr::Float { text, span } => {
                let value: f64 = text.parse().map_err(|_| BuildError::InvalidNumber {
                    text: text.clone(),
                    span: *span,
                })?;
                Ok(Node::Number(NumberLiteral {
                    value,
                    ty: ValType::Double,
                }))
            }
            Expr::Str { text, .. } => Ok(Node::string(strip_quotes(text))),
            // `2147483648` only fits in 32 bits once negated.
            Expr::Neg { operand, span } => match operand.as_ref() {
                Expr::Int { text, .. } if text.parse::<i32>().is_err() => text
                    .parse::<i64>()
                    .ok()
                    .and_then(|value| i32::try_from(-value).ok())
                    .map(Node::int)
                    .ok_or_else(|| BuildError::InvalidNumber {
                        text: format!("-{text}"),
                        span: *span,
                    }),
                _ => Ok(Node::Negate(UnaryNegate {
                    operand: Box::new(self.build_expr(operand)?),
                })),
            },
            Expr::Binary { op, left, right } => {
                let kind = op
                    .kind
                    .operator_text()
                    .and_then(BinaryKind::from_symbol)
                    .ok_or_else(|| BuildError::UnsupportedOperator {
                        op: operator_label(&op.kind),
                        span: op.span,
                    })?;
                let left = self.build_expr(left)?;
                let right = self.build_expr(right)?;
                Ok(Node::binary(kind, left, right))
            }
            Expr::Paren { inner, .. } => self.build_expr(inner),
            Expr::Ident(ident) => Ok(Node::reference(ident.name.clone())),
            Expr::Call { name, args, .. } => {
                let args = args
                    .iter()
                    .map(|arg| self.build_expr(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Node::FunctionCall(FunctionCall {
                    name: name.name.clone(),
                    args,
                }))
            }
        })
    }

    /// Build a comparison, fixing its family from the left operand's type.
    pub(crate) fn build_comparison(
        &mut self,
        comparison: &tree::Comparison,
    ) -> Result<Comparison, BuildError> {
        let left = self.build_expr(&comparison.left)?.to_val_ref();
        let right = self.build_expr(&comparison.right)?.to_val_ref();
        let kind = CompareKind::from_symbol(comparison.op.kind.operator_text().unwrap_or(""));
        let op = ComparisonOp::new(kind, self.val_type(&left));
        Ok(Comparison {
            left: Box::new(left),
            right: Box::new(right),
            op,
        })
    }

    /// Resolved type of a node. Unknown names are `Int`.
    pub fn node_type(&self, node: &Node) -> ValType {
        match node {
            Node::Number(n) => n.ty,
            Node::Str(_) => ValType::String,
            Node::Val(val) => self.val_type(val),
            Node::Binary(bin) => self.node_type(&bin.left),
            Node::Negate(neg) => self.node_type(&neg.operand),
            Node::FunctionCall(call) => {
                let arg_types: Vec<ValType> =
                    call.args.iter().map(|arg| self.node_type(arg)).collect();
                self.scope
                    .function(&mangle(&call.name, &arg_types))
                    .unwrap_or_default()
            }
            Node::Comparison(_)
            | Node::Conditional(_)
            | Node::Body(_)
            | Node::FunctionDef(_)
            | Node::Program(_) => ValType::Int,
        }
    }

    fn val_type(&self, val: &ValRef) -> ValType {
        match val {
            ValRef::Reference { id } | ValRef::Assignment { id, .. } => {
                self.scope.variable(id).unwrap_or_default()
            }
            ValRef::Declaration { declared_type, .. } => *declared_type,
            ValRef::Wrapped(node) => self.node_type(node),
        }
    }
}

/// Drop one pair of surrounding double quotes.
fn strip_quotes(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text)
}

fn operator_label(kind: &TokenKind) -> String {
    kind.operator_text()
        .unwrap_or_else(|| kind.display_name().trim_matches('`'))
        .to_string()
}
