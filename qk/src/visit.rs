use crate::internal::*;

/// Read-only walk over a finished tree, in source order. Each `visit_*`
/// defaults to the matching `walk_*`, so an implementor overrides only the
/// nodes it cares about and calls `walk_*` to keep descending.
pub trait Visitor {
  fn visit_program(&mut self, program: &Program) {
    walk_program(self, program);
  }

  fn visit_node(&mut self, node: &Node) {
    walk_node(self, node);
  }

  fn visit_fn_decl(&mut self, fn_decl: &FnDecl) {
    walk_fn_decl(self, fn_decl);
  }

  fn visit_var_decl(&mut self, var_decl: &VarDecl) {
    walk_var_decl(self, var_decl);
  }

  fn visit_return_stmt(&mut self, return_stmt: &ReturnStmt) {
    walk_return_stmt(self, return_stmt);
  }

  fn visit_literal(&mut self, _literal: &Literal) {}
}

pub fn walk_program<V: Visitor + ?Sized>(visitor: &mut V, program: &Program) {
  for decl in &program.decls {
    visitor.visit_node(decl);
  }
}

pub fn walk_node<V: Visitor + ?Sized>(visitor: &mut V, node: &Node) {
  match node {
    Node::Program(program) => visitor.visit_program(program),
    Node::FnDecl(fn_decl) => visitor.visit_fn_decl(fn_decl),
    Node::VarDecl(var_decl) => visitor.visit_var_decl(var_decl),
    Node::ReturnStmt(return_stmt) => visitor.visit_return_stmt(return_stmt),
    Node::Literal(literal) => visitor.visit_literal(literal),
  }
}

pub fn walk_fn_decl<V: Visitor + ?Sized>(visitor: &mut V, fn_decl: &FnDecl) {
  for stmt in fn_decl.statements() {
    visitor.visit_node(stmt);
  }
}

pub fn walk_var_decl<V: Visitor + ?Sized>(visitor: &mut V, var_decl: &VarDecl) {
  visitor.visit_literal(&var_decl.value);
}

pub fn walk_return_stmt<V: Visitor + ?Sized>(visitor: &mut V, return_stmt: &ReturnStmt) {
  visitor.visit_literal(&return_stmt.value);
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[derive(Default)]
  struct Trail(Vec<String>);

  impl Visitor for Trail {
    fn visit_fn_decl(&mut self, fn_decl: &FnDecl) {
      self.0.push(format!("fn {}", fn_decl.name));
      walk_fn_decl(self, fn_decl);
    }

    fn visit_var_decl(&mut self, var_decl: &VarDecl) {
      self.0.push(format!("var {}", var_decl.name));
      walk_var_decl(self, var_decl);
    }

    fn visit_literal(&mut self, literal: &Literal) {
      self.0.push(format!("lit {}", literal.int_value));
    }
  }

  #[test]
  fn visits_in_source_order() {
    let src = "a: i32 = 1; main: fn() -> i32 { return 2; return 3; } b: i32 = 4;";
    let program = crate::parse(src, &Config::default()).unwrap();
    let mut trail = Trail::default();
    trail.visit_program(&program);
    assert_eq!(
      trail.0,
      vec!["var a", "lit 1", "fn main", "lit 2", "lit 3", "var b", "lit 4"]
    );
  }

  #[test]
  fn empty_program_visits_nothing() {
    let mut trail = Trail::default();
    trail.visit_program(&Program::new());
    assert!(trail.0.is_empty());
  }
}
