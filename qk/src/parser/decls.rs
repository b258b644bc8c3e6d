use super::{ParseError as E, Parser};
use crate::internal::{TokenKind as T, *};

impl Parser {
  #[instrument(skip_all)]
  pub fn parse(mut self) -> Result<Program, ParseError> {
    trace!("Parser::parse()");
    let mut program = Program::new();
    while !self.cur_token_is(T::Eof) {
      let decl = self.parse_decl()?;
      program.append(decl).map_err(|err| self.ast_error(err))?;
      // step off the `;` or `}` that ended the declaration
      if !self.bump() {
        break;
      }
    }
    debug!(num_decls = program.decls.len(), "parsed program");
    Ok(program)
  }

  #[instrument(skip_all)]
  fn parse_decl(&mut self) -> Result<Node, ParseError> {
    let name = self.expect_current(T::Ident)?.lexeme.clone();
    self.advance(T::Colon)?;
    match self.peek(1).map(|token| token.kind) {
      Some(T::Fn) => self.parse_fn_decl(name),
      Some(T::Eof) | None => Err(E::IncompleteDecl(self.cur_token().clone())),
      Some(_) => self.parse_var_decl(name),
    }
  }

  #[instrument(skip_all)]
  fn parse_fn_decl(&mut self, name: String) -> Result<Node, ParseError> {
    self.advance(T::Fn)?;
    self.advance(T::LParen)?;
    self.advance(T::RParen)?;
    self.advance(T::Arrow)?;
    let return_type = self.advance(T::Ident)?.lexeme.clone();
    let body = self.parse_block(&return_type)?;
    trace!(%name, %return_type, num_stmts = body.len(), "fn decl");
    Node::fn_decl(name, return_type, body).map_err(|err| self.ast_error(err))
  }

  #[instrument(skip_all)]
  fn parse_var_decl(&mut self, name: String) -> Result<Node, ParseError> {
    let ty = self.advance(T::Ident)?.lexeme.clone();
    self.advance(T::Eq)?;
    let value = self.parse_int_lit(&ty)?;
    self.advance(T::Semicolon)?;
    trace!(%name, %ty, "var decl");
    Node::var_decl(name, ty, value).map_err(|err| self.ast_error(err))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parser::configure_test_tracing;
  use pretty_assertions::assert_eq;

  fn parse(src: &str) -> Result<Program, ParseError> {
    configure_test_tracing();
    Parser::new(Lexer::new(src).lex().unwrap().tokens).parse()
  }

  fn lit(ty: &str, int_value: i64) -> Literal {
    Literal { ty: ty.into(), int_value }
  }

  #[test]
  fn parse_var_decl_scenario() {
    let program = parse("x: i32 = 42;").unwrap();
    assert_eq!(
      program.decls,
      vec![Node::VarDecl(VarDecl {
        name: "x".into(),
        ty: "i32".into(),
        value: lit("i32", 42),
      })]
    );
  }

  #[test]
  fn parse_fn_decl_scenario() {
    let program = parse("main: fn() -> i32 { return 0; }").unwrap();
    assert_eq!(
      program.decls,
      vec![Node::FnDecl(FnDecl {
        name: "main".into(),
        return_type: "i32".into(),
        body: vec![Node::ReturnStmt(ReturnStmt { value: lit("i32", 0) })],
      })]
    );
  }

  #[test]
  fn parse_empty_source() {
    assert_eq!(parse("").unwrap(), Program::new());
    assert_eq!(parse("  \n ").unwrap(), Program::new());
  }

  #[test]
  fn var_decls_round_trip() {
    let cases: &[(&str, &str, i64)] = &[
      ("x", "i32", 42),
      ("_y", "u8", 0),
      ("count2", "i64", 9_223_372_036_854_775_807),
      ("z", "bool", 1),
    ];
    for (name, ty, value) in cases {
      let program = parse(&format!("{name}: {ty} = {value};")).unwrap();
      assert_eq!(
        program.decls,
        vec![Node::var_decl(*name, *ty, Node::literal(*ty, *value)).unwrap()]
      );
    }
  }

  #[test]
  fn mixed_decls_keep_source_order() {
    let input = r#"
      limit: i32 = 10;
      main: fn() -> i32 {
        return 1;
        return 2;
        return 3;
      }
      helper: fn() -> i8 {}
      tail: i8 = 7;
    "#;
    let program = parse(input).unwrap();
    assert_eq!(
      program.decls,
      vec![
        Node::var_decl("limit", "i32", Node::literal("i32", 10)).unwrap(),
        Node::FnDecl(FnDecl {
          name: "main".into(),
          return_type: "i32".into(),
          body: vec![
            Node::ReturnStmt(ReturnStmt { value: lit("i32", 1) }),
            Node::ReturnStmt(ReturnStmt { value: lit("i32", 2) }),
            Node::ReturnStmt(ReturnStmt { value: lit("i32", 3) }),
          ],
        }),
        Node::FnDecl(FnDecl {
          name: "helper".into(),
          return_type: "i8".into(),
          body: vec![],
        }),
        Node::var_decl("tail", "i8", Node::literal("i8", 7)).unwrap(),
      ]
    );
  }

  #[test]
  fn missing_semicolon_fails() {
    let err = parse("x: i32 = 42").unwrap_err();
    assert_eq!(err, E::ExpectedToken { kind: T::Semicolon, found: err.token().clone() });
    assert_eq!(err.token().kind, T::Eof);
  }

  #[test]
  fn missing_semicolon_in_second_decl_fails_whole_parse() {
    let err = parse("a: i32 = 1;\nb: i32 = 2\nc: i32 = 3;").unwrap_err();
    let E::ExpectedToken { kind: T::Semicolon, found } = err else {
      panic!("unexpected error {err:?}");
    };
    assert_eq!(found.lexeme, "c");
    assert_eq!(found.pos, SrcPos::at(3, 1));
  }

  #[test]
  fn decl_must_start_with_ident() {
    let err = parse("42: i32 = 1;").unwrap_err();
    assert_eq!(err.to_string(), "expected identifier, found integer literal `42`");
  }

  #[test]
  fn decl_without_lookahead_is_incomplete() {
    let err = parse("x:").unwrap_err();
    assert_eq!(err, E::IncompleteDecl(Token::new(T::Colon, ":", SrcPos::at(1, 2))));
  }

  #[test]
  fn fn_decl_needs_parens_and_arrow() {
    let err = parse("main: fn -> i32 {}").unwrap_err();
    assert_eq!(err.to_string(), "expected `(`, found `->`");
    let err = parse("main: fn() - > i32 {}").unwrap_err();
    assert_eq!(err.to_string(), "expected `->`, found `-`");
    let err = parse("main: fn() -> {}").unwrap_err();
    assert_eq!(err.to_string(), "expected identifier, found `{`");
  }

  #[test]
  fn float_literal_is_rejected() {
    let err = parse("pi: f32 = 3.14;").unwrap_err();
    assert_eq!(err, E::InvalidIntLit(Token::new(T::IntLit, "3.14", SrcPos::at(1, 11))));
    assert_eq!(err.to_string(), "invalid integer literal `3.14`");
  }

  #[test]
  fn overflowing_literal_is_rejected() {
    let err = parse("big: i64 = 9223372036854775808;").unwrap_err();
    assert!(matches!(err, E::InvalidIntLit(_)));
  }

  #[test]
  fn keyword_cannot_name_a_type() {
    let err = parse("x: return = 1;").unwrap_err();
    assert_eq!(err.to_string(), "expected identifier, found `return`");
  }
}
