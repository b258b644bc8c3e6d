use crate::src_loc::SrcPos;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  Ident,
  IntLit,
  Fn,
  Return,
  Colon,
  Semicolon,
  LParen,
  RParen,
  LBrace,
  RBrace,
  Eq,
  Arrow,
  Dash,
  Gt,
  Eof,
  /// Never pushed onto a `TokenStream`.
  Invalid,
}

impl TokenKind {
  /// Keyword table consulted by the lexer after scanning a word.
  pub fn keyword(word: &str) -> Option<TokenKind> {
    match word {
      "fn" => Some(TokenKind::Fn),
      "return" => Some(TokenKind::Return),
      _ => None,
    }
  }

  pub const fn describe(&self) -> &'static str {
    match self {
      TokenKind::Ident => "identifier",
      TokenKind::IntLit => "integer literal",
      TokenKind::Fn => "`fn`",
      TokenKind::Return => "`return`",
      TokenKind::Colon => "`:`",
      TokenKind::Semicolon => "`;`",
      TokenKind::LParen => "`(`",
      TokenKind::RParen => "`)`",
      TokenKind::LBrace => "`{`",
      TokenKind::RBrace => "`}`",
      TokenKind::Eq => "`=`",
      TokenKind::Arrow => "`->`",
      TokenKind::Dash => "`-`",
      TokenKind::Gt => "`>`",
      TokenKind::Eof => "end of input",
      TokenKind::Invalid => "invalid token",
    }
  }
}

impl std::fmt::Display for TokenKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.describe())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub kind: TokenKind,
  pub lexeme: String,
  pub len: u32,
  pub pos: SrcPos,
}

impl Token {
  pub fn new(kind: TokenKind, lexeme: impl Into<String>, pos: SrcPos) -> Self {
    let lexeme = lexeme.into();
    let len = lexeme.chars().count() as u32;
    Token { kind, lexeme, len, pos }
  }

  pub fn eof(pos: SrcPos) -> Self {
    Token::new(TokenKind::Eof, "", pos)
  }

  pub fn is(&self, kind: TokenKind) -> bool {
    self.kind == kind
  }
}

impl std::fmt::Display for Token {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self.kind {
      TokenKind::Ident | TokenKind::IntLit => write!(f, "{} `{}`", self.kind, self.lexeme),
      kind => write!(f, "{kind}"),
    }
  }
}
