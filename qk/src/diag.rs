use crate::internal::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
  pub line: u32,
  pub col: u32,
  pub width: u32,
  pub msg: String,
}

impl Diagnostic {
  /// Single line, `path:line:col: error: msg`.
  pub fn render(&self, path: &str) -> String {
    format!("{path}:{self}")
  }
}

impl From<&Error> for Diagnostic {
  fn from(err: &Error) -> Self {
    let pos = err.pos();
    Diagnostic {
      line: pos.lineno(),
      col: pos.colno(),
      width: err.width(),
      msg: err.to_string(),
    }
  }
}

impl std::fmt::Display for Diagnostic {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}:{}: error: {}", self.line, self.col, self.msg)
  }
}
