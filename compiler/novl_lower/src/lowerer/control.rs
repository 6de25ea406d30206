//! If-chains and while loops.
//!
//! An if-chain with N `elseif` links allocates one shared exit block plus
//! a true/false pair for the head and for every link. Each link is lowered
//! inside the false block of the one before it:
//!
//! ```text
//! cur:    br %c0, true0, false0
//! true0:  ... br exit
//! false0: br %c1, true1, false1
//! true1:  ... br exit
//! false1: <else body> br exit
//! exit:
//! ```
//!
//! A loop allocates test, body and exit blocks; the body always jumps back
//! to the test.

use novl_ir::{Body, Comparison, Conditional};
use novl_llvm::BlockId;
use tracing::trace;

use super::Lowerer;
use crate::LowerError;

impl Lowerer<'_> {
    /// Lower a conditional; the insertion point ends in its exit block.
    pub(crate) fn lower_conditional(&mut self, cond: &Conditional) -> Result<(), LowerError> {
        let function = self.current_function()?;
        let exit_name = self.builder.unique_id("conditional_exit");
        let exit = self.builder.append_block(function, &exit_name);

        let result = if cond.is_loop {
            self.lower_loop(&cond.condition, &cond.true_body, exit)
        } else {
            trace!(links = cond.elseif_chain.len(), "lowering if-chain");
            self.lower_chain(
                &cond.condition,
                &cond.true_body,
                &cond.elseif_chain,
                cond.false_body.as_ref(),
                exit,
            )
        };
        self.builder.position_at_end(exit);
        result
    }

    /// Lower one link and recurse into the rest of the chain from its
    /// false block. `false_body` belongs to the last link.
    fn lower_chain(
        &mut self,
        condition: &Comparison,
        true_body: &Body,
        links: &[Conditional],
        false_body: Option<&Body>,
        exit: BlockId,
    ) -> Result<(), LowerError> {
        let function = self.current_function()?;
        let test = match self.lower_comparison(condition) {
            Ok(test) => test,
            Err(err) => {
                self.br_if_open(exit);
                return Err(err);
            }
        };
        let true_name = self.builder.unique_id("conditional_true");
        let then_block = self.builder.append_block(function, &true_name);
        let false_name = self.builder.unique_id("conditional_false");
        let else_block = self.builder.append_block(function, &false_name);
        self.builder.cond_br(test, then_block, else_block);

        self.builder.position_at_end(then_block);
        self.lower_body(true_body);
        self.br_if_open(exit);

        self.builder.position_at_end(else_block);
        if let Some((link, rest)) = links.split_first() {
            return self.lower_chain(&link.condition, &link.true_body, rest, false_body, exit);
        }
        if let Some(body) = false_body {
            self.lower_body(body);
        }
        self.br_if_open(exit);
        Ok(())
    }

    fn lower_loop(
        &mut self,
        condition: &Comparison,
        body: &Body,
        exit: BlockId,
    ) -> Result<(), LowerError> {
        let function = self.current_function()?;
        let test_name = self.builder.unique_id("conditional_test");
        let test_block = self.builder.append_block(function, &test_name);
        self.builder.br(test_block);

        self.builder.position_at_end(test_block);
        let test = match self.lower_comparison(condition) {
            Ok(test) => test,
            Err(err) => {
                self.br_if_open(exit);
                return Err(err);
            }
        };
        let true_name = self.builder.unique_id("conditional_true");
        let body_block = self.builder.append_block(function, &true_name);
        self.builder.cond_br(test, body_block, exit);

        self.builder.position_at_end(body_block);
        self.lower_body(body);
        self.br_if_open(test_block);
        Ok(())
    }
}
