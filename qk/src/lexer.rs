use crate::internal::{TokenKind as T, *};

/// Yielded by `Lexer::advance` once past the end of the source.
pub const TERMINATOR: char = '\0';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
  UnrecognizedChar { ch: char, pos: SrcPos },
}

impl LexError {
  pub const fn pos(&self) -> SrcPos {
    match self {
      LexError::UnrecognizedChar { pos, .. } => *pos,
    }
  }
}

impl std::fmt::Display for LexError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      LexError::UnrecognizedChar { ch, .. } => write!(f, "unrecognized character {ch:?}"),
    }
  }
}

impl std::error::Error for LexError {}

#[derive(Debug)]
pub struct Lexed {
  pub tokens: TokenStream,
  /// Characters dropped in permissive mode, in source order.
  pub skipped: Vec<LexError>,
}

#[derive(Debug)]
pub struct Lexer {
  src: Vec<char>,
  pos: usize,
  cur: char,
  line: u32,
  column: u32,
  strict: bool,
}

impl Lexer {
  pub fn new(src: &str) -> Self {
    let src: Vec<char> = src.chars().collect();
    let cur = src.first().copied().unwrap_or(TERMINATOR);
    Lexer {
      src,
      pos: 0,
      cur,
      line: 1,
      column: 1,
      strict: false,
    }
  }

  /// In strict mode the first unrecognized char fails the whole lex.
  pub fn strict(mut self, strict: bool) -> Self {
    self.strict = strict;
    self
  }

  #[instrument(skip_all)]
  pub fn lex(mut self) -> Result<Lexed, LexError> {
    let mut tokens = TokenStream::with_capacity(64);
    let mut skipped = Vec::new();
    while let Some(next) = self.next_token() {
      match next {
        Ok(token) => tokens.push(token),
        Err(err) if self.strict => return Err(err),
        Err(err) => {
          warn!(%err, pos = %err.pos(), "skipping character");
          skipped.push(err);
        }
      }
    }
    tokens.push(Token::eof(self.here()));
    trace!(num_tokens = tokens.len(), "lexed");
    Ok(Lexed { tokens, skipped })
  }

  fn simple_token(&mut self, kind: TokenKind) -> Token {
    let lexeme = match kind {
      T::Colon => ":",
      T::Semicolon => ";",
      T::LParen => "(",
      T::RParen => ")",
      T::LBrace => "{",
      T::RBrace => "}",
      T::Eq => "=",
      T::Dash => "-",
      T::Gt => ">",
      T::Arrow => "->",
      T::Ident | T::IntLit | T::Fn | T::Return | T::Eof | T::Invalid => unreachable!(),
    };
    let token = Token::new(kind, lexeme, self.here());
    for _ in 0..token.len {
      self.advance();
    }
    token
  }

  /// `None` once the source is exhausted.
  pub fn next_token(&mut self) -> Option<Result<Token, LexError>> {
    while !self.eof() && self.cur.is_ascii_whitespace() {
      self.advance();
    }
    if self.eof() {
      return None;
    }
    let token = match self.cur {
      ':' => self.simple_token(T::Colon),
      ';' => self.simple_token(T::Semicolon),
      '(' => self.simple_token(T::LParen),
      ')' => self.simple_token(T::RParen),
      '{' => self.simple_token(T::LBrace),
      '}' => self.simple_token(T::RBrace),
      '=' => self.simple_token(T::Eq),
      '>' => self.simple_token(T::Gt),
      '-' if self.peek() == '>' => self.simple_token(T::Arrow),
      '-' => self.simple_token(T::Dash),
      c if c.is_ascii_digit() => self.int_lit(),
      c if c.is_ascii_alphabetic() || c == '_' => self.ident(),
      ch => {
        let pos = self.here();
        self.advance();
        return Some(Err(LexError::UnrecognizedChar { ch, pos }));
      }
    };
    Some(Ok(token))
  }

  // `.` is taken lexically, the parser decides whether the run is an integer
  fn int_lit(&mut self) -> Token {
    let pos = self.here();
    let lexeme = self.take_while(|c| c.is_ascii_digit() || c == '.');
    Token::new(T::IntLit, lexeme, pos)
  }

  fn ident(&mut self) -> Token {
    let pos = self.here();
    let lexeme = self.take_while(|c| c.is_ascii_alphanumeric() || c == '_');
    match TokenKind::keyword(&lexeme) {
      Some(keyword) => Token::new(keyword, lexeme, pos),
      None => Token::new(T::Ident, lexeme, pos),
    }
  }

  fn take_while(&mut self, accept: impl Fn(char) -> bool) -> String {
    let mut lexeme = String::new();
    while !self.eof() && accept(self.cur) {
      lexeme.push(self.cur);
      self.advance();
    }
    lexeme
  }

  pub fn advance(&mut self) {
    if self.eof() {
      return;
    }
    if self.cur == '\n' {
      self.line += 1;
      self.column = 1;
    } else {
      self.column += 1;
    }
    self.pos += 1;
    self.cur = self.src.get(self.pos).copied().unwrap_or(TERMINATOR);
  }

  fn peek(&self) -> char {
    self.src.get(self.pos + 1).copied().unwrap_or(TERMINATOR)
  }

  fn here(&self) -> SrcPos {
    SrcPos::at(self.line, self.column)
  }

  const fn eof(&self) -> bool {
    self.pos >= self.src.len()
  }
}
