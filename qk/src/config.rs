/// Options for a lex/parse run. Log verbosity comes from `RUST_LOG`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
  /// Unrecognized characters fail the lex instead of being skipped.
  pub strict: bool,
  /// `qkc` prints the token stream before parsing.
  pub dump_tokens: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
  UnknownFlag(String),
  ExtraArg(String),
}

impl std::fmt::Display for ConfigError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ConfigError::UnknownFlag(flag) => write!(f, "unknown flag `{flag}`"),
      ConfigError::ExtraArg(arg) => write!(f, "unexpected argument `{arg}`"),
    }
  }
}

impl std::error::Error for ConfigError {}

impl Config {
  /// Parses `qkc` arguments (without the program name) into a config and the
  /// optional source path. `-h`/`--help` yields no path.
  pub fn from_args<I>(args: I) -> Result<(Config, Option<String>), ConfigError>
  where
    I: IntoIterator<Item = String>,
  {
    let mut config = Config::default();
    let mut path = None;
    for arg in args {
      match arg.as_str() {
        "--strict" => config.strict = true,
        "--tokens" => config.dump_tokens = true,
        "-h" | "--help" => return Ok((config, None)),
        flag if flag.starts_with('-') && flag.len() > 1 => {
          return Err(ConfigError::UnknownFlag(arg));
        }
        _ if path.is_some() => return Err(ConfigError::ExtraArg(arg)),
        _ => path = Some(arg),
      }
    }
    Ok((config, path))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn args(list: &[&str]) -> Result<(Config, Option<String>), ConfigError> {
    Config::from_args(list.iter().map(|arg| arg.to_string()))
  }

  #[test]
  fn defaults_are_permissive() {
    assert_eq!(args(&[]), Ok((Config::default(), None)));
    assert!(!Config::default().strict);
  }

  #[test]
  fn flags_and_path() {
    let (config, path) = args(&["--strict", "main.qk", "--tokens"]).unwrap();
    assert_eq!(config, Config { strict: true, dump_tokens: true });
    assert_eq!(path.as_deref(), Some("main.qk"));
  }

  #[test]
  fn help_drops_the_path() {
    assert_eq!(args(&["main.qk", "--help"]), Ok((Config::default(), None)));
  }

  #[test]
  fn rejects_unknown_flags_and_extra_args() {
    assert_eq!(args(&["--fast"]), Err(ConfigError::UnknownFlag("--fast".into())));
    assert_eq!(args(&["a.qk", "b.qk"]), Err(ConfigError::ExtraArg("b.qk".into())));
  }
}
