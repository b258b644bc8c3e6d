use super::{ParseError as E, Parser};
use crate::internal::{TokenKind as T, *};

impl Parser {
  /// Statements up to the closing `}`, or up to the end of input. Literals
  /// in the block take `return_type` as their type.
  #[instrument(skip_all)]
  pub(super) fn parse_block(&mut self, return_type: &str) -> Result<Vec<Node>, ParseError> {
    if !self.peek_token_is(T::LBrace) {
      let found = self.peek(1).unwrap_or(self.cur_token()).clone();
      return Err(E::ExpectedBlock(found));
    }
    self.bump();
    let mut stmts = Vec::new();
    loop {
      if self.peek_token_is(T::RBrace) {
        self.bump();
        break;
      }
      if self.is_eof() || self.peek_token_is(T::Eof) {
        warn!(pos = %self.cur_token().pos, "block closed by end of input");
        break;
      }
      let stmt = self.parse_stmt(return_type)?;
      append_sibling(&mut stmts, stmt);
    }
    Ok(stmts)
  }

  #[instrument(skip_all)]
  fn parse_stmt(&mut self, return_type: &str) -> Result<Node, ParseError> {
    self.parse_return_stmt(return_type)
  }

  #[instrument(skip_all)]
  fn parse_return_stmt(&mut self, return_type: &str) -> Result<Node, ParseError> {
    self.advance(T::Return)?;
    let value = self.parse_int_lit(return_type)?;
    self.advance(T::Semicolon)?;
    Node::return_stmt(value).map_err(|err| self.ast_error(err))
  }
}
