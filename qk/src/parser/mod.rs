use crate::internal::{TokenKind as T, *};
use ParseError as E;

mod decls;
mod stmts;

/// Recursive-descent parser over a finished `TokenStream`. The cursor sits
/// on the last token consumed; `advance` checks the token it moves onto.
#[derive(Debug)]
pub struct Parser {
  tokens: TokenStream,
  tok_pos: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
  ExpectedToken { kind: TokenKind, found: Token },
  ExpectedBlock(Token),
  /// Nothing after the `:` of a declaration.
  IncompleteDecl(Token),
  InvalidIntLit(Token),
  Ast { err: AstError, at: Token },
}

impl ParseError {
  /// The token the diagnostic should point at.
  pub const fn token(&self) -> &Token {
    match self {
      E::ExpectedToken { found, .. } => found,
      E::ExpectedBlock(token) | E::IncompleteDecl(token) | E::InvalidIntLit(token) => token,
      E::Ast { at, .. } => at,
    }
  }
}

impl std::fmt::Display for ParseError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      E::ExpectedToken { kind, found } => write!(f, "expected {kind}, found {found}"),
      E::ExpectedBlock(found) => write!(f, "expected block starting with `{{`, found {found}"),
      E::IncompleteDecl(_) => write!(f, "declaration ends after `:`"),
      E::InvalidIntLit(token) => write!(f, "invalid integer literal `{}`", token.lexeme),
      E::Ast { err, .. } => write!(f, "{err}"),
    }
  }
}

impl std::error::Error for ParseError {}

impl Parser {
  pub fn new(mut tokens: TokenStream) -> Parser {
    if !tokens.is_finished() {
      let pos = tokens.last().map_or(SrcPos::at(1, 1), |token| token.pos);
      tokens.push(Token::eof(pos));
    }
    Parser { tokens, tok_pos: 0 }
  }

  pub fn cur_token(&self) -> &Token {
    &self.tokens[self.tok_pos]
  }

  fn cur_token_is(&self, kind: TokenKind) -> bool {
    self.cur_token().is(kind)
  }

  /// Token `offset` positions past the cursor, without moving it.
  pub fn peek(&self, offset: usize) -> Option<&Token> {
    self.tokens.peek(self.tok_pos + offset)
  }

  fn peek_token_is(&self, kind: TokenKind) -> bool {
    self.peek(1).is_some_and(|token| token.is(kind))
  }

  fn is_eof(&self) -> bool {
    self.tok_pos >= self.tokens.len() - 1
  }

  /// Moves onto the next token, which must be of `kind`.
  pub fn advance(&mut self, kind: TokenKind) -> Result<&Token, ParseError> {
    let found = match self.peek(1) {
      Some(next) if next.is(kind) => None,
      Some(next) => Some(next.clone()),
      None => Some(self.cur_token().clone()),
    };
    if let Some(found) = found {
      return Err(E::ExpectedToken { kind, found });
    }
    self.tok_pos += 1;
    Ok(self.cur_token())
  }

  /// Moves onto the next token whatever it is. Returns `false`, without
  /// moving, once the cursor is on the final token.
  pub fn bump(&mut self) -> bool {
    if self.is_eof() {
      trace!("token stream exhausted");
      return false;
    }
    self.tok_pos += 1;
    true
  }

  fn expect_current(&self, kind: TokenKind) -> Result<&Token, ParseError> {
    let token = self.cur_token();
    if token.is(kind) {
      Ok(token)
    } else {
      Err(E::ExpectedToken { kind, found: token.clone() })
    }
  }

  fn ast_error(&self, err: AstError) -> ParseError {
    E::Ast { err, at: self.cur_token().clone() }
  }

  #[instrument(skip_all)]
  fn parse_int_lit(&mut self, ty: &str) -> Result<Node, ParseError> {
    let token = self.advance(T::IntLit)?;
    match token.lexeme.parse::<i64>() {
      Ok(value) => Ok(Node::literal(ty, value)),
      Err(_) => Err(E::InvalidIntLit(token.clone())),
    }
  }
}

#[cfg(test)]
static INIT: std::sync::Once = std::sync::Once::new();

#[cfg(test)]
pub(crate) fn configure_test_tracing() {
  use tracing_subscriber::fmt::format::FmtSpan;
  use tracing_subscriber::{EnvFilter, fmt};
  INIT.call_once(|| {
    let subscriber = fmt::Subscriber::builder()
      .with_env_filter(EnvFilter::from_default_env())
      .with_test_writer()
      .with_span_events(FmtSpan::ACTIVE)
      .finish();
    tracing::subscriber::set_global_default(subscriber)
      .expect("setting default tracing subscriber failed");
  });
}
