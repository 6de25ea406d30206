//! Control-flow nodes: bodies, if-chains and loops.

use super::{Comparison, Node};

/// A statement list with an optional implicit return.
///
/// `tail_expression` is set only when the last statement of the source
/// block was a bare expression; it is then not repeated in `statements`.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Body {
    pub statements: Vec<Node>,
    pub tail_expression: Option<Box<Node>>,
}

impl Body {
    pub fn new(statements: Vec<Node>) -> Self {
        Body {
            statements,
            tail_expression: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty() && self.tail_expression.is_none()
    }

    /// All statements in evaluation order, tail expression last.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.statements.iter().chain(self.tail_expression.as_deref())
    }
}

/// An if/elseif/else chain, or a `while` loop when `is_loop` is set.
///
/// Each link of `elseif_chain` carries only a condition and a true body.
/// A loop never has a false body or a chain.
#[derive(Clone, Debug, PartialEq)]
pub struct Conditional {
    pub true_body: Body,
    pub false_body: Option<Body>,
    pub condition: Comparison,
    pub elseif_chain: Vec<Conditional>,
    pub is_top_level: bool,
    pub is_loop: bool,
}

impl Conditional {
    /// An `elseif` link: condition and true body only.
    pub fn link(condition: Comparison, true_body: Body) -> Self {
        Conditional {
            true_body,
            false_body: None,
            condition,
            elseif_chain: Vec::new(),
            is_top_level: false,
            is_loop: false,
        }
    }

    pub fn while_loop(condition: Comparison, body: Body) -> Self {
        Conditional {
            true_body: body,
            false_body: None,
            condition,
            elseif_chain: Vec::new(),
            is_top_level: true,
            is_loop: true,
        }
    }
}
