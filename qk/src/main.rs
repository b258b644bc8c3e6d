use std::io::IsTerminal;
use std::process::ExitCode;

use qk::internal::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

const USAGE: &str = "USAGE: qkc [--strict] [--tokens] <file>";

fn main() -> ExitCode {
  init_tracing();

  let (config, path) = match Config::from_args(std::env::args().skip(1)) {
    Ok(parsed) => parsed,
    Err(err) => {
      eprintln!("ERROR: {err}");
      eprintln!("{USAGE}");
      return ExitCode::FAILURE;
    }
  };
  let Some(path) = path else {
    println!("{USAGE}");
    return ExitCode::SUCCESS;
  };

  let src = match std::fs::read_to_string(&path) {
    Ok(src) => src,
    Err(err) => {
      debug!(%err, "read failed");
      eprintln!("ERROR: Could not open file -> {path}");
      return ExitCode::FAILURE;
    }
  };
  info!(%path, bytes = src.len(), "read source");

  match run(&src, &config) {
    Ok(program) => {
      print!("{}", dump(&program));
      ExitCode::SUCCESS
    }
    Err(err) => {
      eprintln!("{}", Diagnostic::from(&err).render(&path));
      ExitCode::FAILURE
    }
  }
}

fn run(src: &str, config: &Config) -> Result<Program, Error> {
  let lexed = qk::lex(src, config)?;
  if config.dump_tokens {
    print!("{}", dump_tokens(&lexed.tokens));
  }
  let program = Parser::new(lexed.tokens).parse()?;
  debug!(num_decls = program.decls.len(), "parse ok");
  Ok(program)
}

fn init_tracing() {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::WARN.into())
    .from_env_lossy();
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_ansi(std::io::stderr().is_terminal())
    .init();
}
