use crate::internal::*;

/// Text rendering of a tree, one node per line, body statements indented
/// under their function.
pub fn dump(program: &Program) -> String {
  let mut dumper = Dumper::default();
  dumper.visit_program(program);
  dumper.out
}

/// One line per token: index, kind, lexeme, length, position.
pub fn dump_tokens(tokens: &TokenStream) -> String {
  let mut out = String::new();
  for (index, token) in tokens.iter().enumerate() {
    let kind = format!("{:?}", token.kind);
    out.push_str(&format!(
      "{index:>4} {kind:<9} {:<12} len={} {}\n",
      token.lexeme, token.len, token.pos
    ));
  }
  out
}

#[derive(Debug, Default)]
pub struct Dumper {
  out: String,
  depth: usize,
}

impl Dumper {
  fn line(&mut self, text: std::fmt::Arguments<'_>) {
    let indent = "    ".repeat(self.depth);
    self.out.push_str(&format!("{indent}|-- {text}\n"));
  }
}

impl Visitor for Dumper {
  fn visit_program(&mut self, program: &Program) {
    self.out.push_str("Program\n");
    walk_program(self, program);
  }

  fn visit_fn_decl(&mut self, fn_decl: &FnDecl) {
    self.line(format_args!("fn {}() -> {}", fn_decl.name, fn_decl.return_type));
    self.depth += 1;
    walk_fn_decl(self, fn_decl);
    self.depth -= 1;
  }

  fn visit_var_decl(&mut self, var_decl: &VarDecl) {
    let VarDecl { name, ty, value } = var_decl;
    self.line(format_args!("var {name}: {ty} = {}", value.int_value));
  }

  fn visit_return_stmt(&mut self, return_stmt: &ReturnStmt) {
    let Literal { ty, int_value } = &return_stmt.value;
    self.line(format_args!("return {int_value} ({ty})"));
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn lines(lines: &[&str]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
  }

  #[test]
  fn dumps_program() {
    let src = "x: i32 = 42;\nmain: fn() -> i32 {\n  return 0;\n  return 1;\n}\nempty: fn() -> u8 {}";
    let program = crate::parse(src, &Config::default()).unwrap();
    assert_eq!(
      dump(&program),
      lines(&[
        "Program",
        "|-- var x: i32 = 42",
        "|-- fn main() -> i32",
        "    |-- return 0 (i32)",
        "    |-- return 1 (i32)",
        "|-- fn empty() -> u8",
      ])
    );
  }

  #[test]
  fn literals_print_inline_with_their_parent() {
    let src = "a: u8 = 1; f: fn() -> u8 { return 2; }";
    let program = crate::parse(src, &Config::default()).unwrap();
    let out = dump(&program);
    assert_eq!(out.lines().count(), 4);
    assert!(!out.contains("literal"));
  }

  #[test]
  fn dumps_empty_program() {
    assert_eq!(dump(&Program::new()), "Program\n");
  }

  #[test]
  fn dumps_tokens() {
    let lexed = Lexer::new("x: i32").lex().unwrap();
    assert_eq!(
      dump_tokens(&lexed.tokens),
      lines(&[
        "   0 Ident     x            len=1 1:1",
        "   1 Colon     :            len=1 1:2",
        "   2 Ident     i32          len=3 1:4",
        "   3 Eof                    len=0 1:7",
      ])
    );
  }
}
