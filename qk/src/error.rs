use crate::internal::*;

/// Anything that stops a source file from becoming a `Program`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
  Lex(LexError),
  Parse(ParseError),
}

impl Error {
  pub fn pos(&self) -> SrcPos {
    match self {
      Error::Lex(err) => err.pos(),
      Error::Parse(err) => err.token().pos,
    }
  }

  /// Columns covered by the offending input, at least one.
  pub fn width(&self) -> u32 {
    match self {
      Error::Lex(_) => 1,
      Error::Parse(err) => err.token().len.max(1),
    }
  }
}

impl From<LexError> for Error {
  fn from(err: LexError) -> Self {
    Error::Lex(err)
  }
}

impl From<ParseError> for Error {
  fn from(err: ParseError) -> Self {
    Error::Parse(err)
  }
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Error::Lex(err) => write!(f, "{err}"),
      Error::Parse(err) => write!(f, "{err}"),
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Error::Lex(err) => Some(err),
      Error::Parse(err) => Some(err),
    }
  }
}
