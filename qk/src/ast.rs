//! Tree produced by the parser. Every composite node owns its children
//! outright, in source order.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
  Program,
  FnDecl,
  VarDecl,
  ReturnStmt,
  Literal,
}

impl std::fmt::Display for NodeKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let name = match self {
      NodeKind::Program => "program",
      NodeKind::FnDecl => "function declaration",
      NodeKind::VarDecl => "variable declaration",
      NodeKind::ReturnStmt => "return statement",
      NodeKind::Literal => "literal",
    };
    f.write_str(name)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
  Program(Program),
  FnDecl(FnDecl),
  VarDecl(VarDecl),
  ReturnStmt(ReturnStmt),
  Literal(Literal),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
  pub decls: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FnDecl {
  pub name: String,
  pub return_type: String,
  pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarDecl {
  pub name: String,
  pub ty: String,
  pub value: Literal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStmt {
  pub value: Literal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
  pub ty: String,
  pub int_value: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AstError {
  /// A slot that only holds a literal got something else.
  ExpectedLiteral { parent: NodeKind, found: NodeKind },
  ExpectedStmt(NodeKind),
  ExpectedDecl(NodeKind),
}

impl std::fmt::Display for AstError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      AstError::ExpectedLiteral { parent, found } => {
        write!(f, "{parent} value must be a literal, found {found}")
      }
      AstError::ExpectedStmt(found) => write!(f, "expected a statement, found {found}"),
      AstError::ExpectedDecl(found) => write!(f, "expected a declaration, found {found}"),
    }
  }
}

impl std::error::Error for AstError {}

impl Node {
  pub fn literal(ty: impl Into<String>, int_value: i64) -> Node {
    Node::Literal(Literal { ty: ty.into(), int_value })
  }

  pub fn var_decl(
    name: impl Into<String>,
    ty: impl Into<String>,
    value: Node,
  ) -> Result<Node, AstError> {
    let value = value.into_literal(NodeKind::VarDecl)?;
    Ok(Node::VarDecl(VarDecl { name: name.into(), ty: ty.into(), value }))
  }

  pub fn return_stmt(value: Node) -> Result<Node, AstError> {
    let value = value.into_literal(NodeKind::ReturnStmt)?;
    Ok(Node::ReturnStmt(ReturnStmt { value }))
  }

  pub fn fn_decl(
    name: impl Into<String>,
    return_type: impl Into<String>,
    body: Vec<Node>,
  ) -> Result<Node, AstError> {
    if let Some(bad) = body.iter().find(|node| !node.is_stmt()) {
      return Err(AstError::ExpectedStmt(bad.kind()));
    }
    Ok(Node::FnDecl(FnDecl {
      name: name.into(),
      return_type: return_type.into(),
      body,
    }))
  }

  pub const fn kind(&self) -> NodeKind {
    match self {
      Node::Program(_) => NodeKind::Program,
      Node::FnDecl(_) => NodeKind::FnDecl,
      Node::VarDecl(_) => NodeKind::VarDecl,
      Node::ReturnStmt(_) => NodeKind::ReturnStmt,
      Node::Literal(_) => NodeKind::Literal,
    }
  }

  pub const fn is_stmt(&self) -> bool {
    match self {
      Node::ReturnStmt(_) => true,
      Node::Program(_) => false,
      Node::FnDecl(_) => false,
      Node::VarDecl(_) => false,
      Node::Literal(_) => false,
    }
  }

  pub const fn is_decl(&self) -> bool {
    match self {
      Node::FnDecl(_) => true,
      Node::VarDecl(_) => true,
      Node::Program(_) => false,
      Node::ReturnStmt(_) => false,
      Node::Literal(_) => false,
    }
  }

  fn into_literal(self, parent: NodeKind) -> Result<Literal, AstError> {
    match self {
      Node::Literal(literal) => Ok(literal),
      other => Err(AstError::ExpectedLiteral { parent, found: other.kind() }),
    }
  }
}

impl Program {
  pub const fn new() -> Self {
    Program { decls: Vec::new() }
  }

  pub fn append(&mut self, decl: Node) -> Result<(), AstError> {
    if !decl.is_decl() {
      return Err(AstError::ExpectedDecl(decl.kind()));
    }
    append_sibling(&mut self.decls, decl);
    Ok(())
  }

  pub fn is_empty(&self) -> bool {
    self.decls.is_empty()
  }
}

impl FnDecl {
  pub fn statements(&self) -> std::slice::Iter<'_, Node> {
    self.body.iter()
  }
}

/// Appends in place, so a caller already holding `chain` (even while it is
/// still empty) sees the new node.
pub fn append_sibling(chain: &mut Vec<Node>, node: Node) {
  chain.push(node);
}
