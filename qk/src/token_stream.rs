use crate::internal::*;

/// Lexer output, in lexical order. Once finished, the last token is the only
/// `Eof`, and no token is `Invalid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
  tokens: Vec<Token>,
}

impl TokenStream {
  pub fn new() -> Self {
    Self::with_capacity(16)
  }

  pub fn with_capacity(capacity: usize) -> Self {
    TokenStream { tokens: Vec::with_capacity(capacity) }
  }

  /// # Panics
  /// On an `Invalid` token, or on any push after `Eof`.
  pub fn push(&mut self, token: Token) {
    assert!(
      token.kind != TokenKind::Invalid,
      "invalid token reached the token stream at {}",
      token.pos
    );
    assert!(!self.is_finished(), "token pushed after end of stream");
    self.tokens.push(token);
  }

  pub fn peek(&self, index: usize) -> Option<&Token> {
    self.tokens.get(index)
  }

  pub fn len(&self) -> usize {
    self.tokens.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tokens.is_empty()
  }

  pub fn last(&self) -> Option<&Token> {
    self.tokens.last()
  }

  pub fn is_finished(&self) -> bool {
    self.last().is_some_and(|token| token.is(TokenKind::Eof))
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Token> {
    self.tokens.iter()
  }

  pub fn kinds(&self) -> Vec<TokenKind> {
    self.tokens.iter().map(|token| token.kind).collect()
  }
}

impl Default for TokenStream {
  fn default() -> Self {
    Self::new()
  }
}

impl std::ops::Index<usize> for TokenStream {
  type Output = Token;
  fn index(&self, index: usize) -> &Token {
    &self.tokens[index]
  }
}

impl<'a> IntoIterator for &'a TokenStream {
  type Item = &'a Token;
  type IntoIter = std::slice::Iter<'a, Token>;
  fn into_iter(self) -> Self::IntoIter {
    self.tokens.iter()
  }
}
