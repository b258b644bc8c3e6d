pub mod ast;
pub mod config;
pub mod diag;
pub mod dump;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod src_loc;
pub mod token;
pub mod token_stream;
pub mod visit;

pub mod internal {
  pub use crate::ast::*;
  pub use crate::config::*;
  pub use crate::diag::*;
  pub use crate::dump::*;
  pub use crate::error::*;
  pub use crate::lexer::*;
  pub use crate::parser::*;
  pub use crate::src_loc::*;
  pub use crate::token::*;
  pub use crate::token_stream::*;
  pub use crate::visit::*;
  pub use tracing::{debug, info, instrument, trace, warn};
}

use internal::{Config, Error, Lexed, Lexer, Parser, Program};

/// Lexes `src`. Unrecognized characters are skipped and listed in
/// `Lexed::skipped`, unless `config.strict` is set.
pub fn lex(src: &str, config: &Config) -> Result<Lexed, Error> {
  Ok(Lexer::new(src).strict(config.strict).lex()?)
}

/// Lexes and parses `src` into a whole program, or the first error found.
pub fn parse(src: &str, config: &Config) -> Result<Program, Error> {
  let lexed = lex(src, config)?;
  Ok(Parser::new(lexed.tokens).parse()?)
}
