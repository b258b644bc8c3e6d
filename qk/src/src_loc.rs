use bilge::prelude::*;

/// Line and column of a token's first char, packed into one `u64`.
#[bitsize(64)]
#[derive(FromBits, DebugBits, Clone, Copy, PartialEq, Eq)]
pub struct SrcPos {
  pub column: u32,
  pub line: u32,
}

impl SrcPos {
  /// Both coordinates are 1-based, and kept exactly as the lexer counted them.
  pub fn at(line: u32, column: u32) -> Self {
    SrcPos::new(column, line)
  }

  pub fn lineno(&self) -> u32 {
    self.line()
  }

  pub fn colno(&self) -> u32 {
    self.column()
  }
}

impl std::fmt::Display for SrcPos {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}:{}", self.lineno(), self.colno())
  }
}
