//! Document abstraction over a parsed source file

use super::parser::{self, FunctionDecl, NodeData, NodeId, SyntaxTree};
use super::types::{Location, Range};
use std::path::{Path, PathBuf};

/// A parsed source file with its syntax tree
#[derive(Debug)]
pub struct Document {
    source: String,
    file: PathBuf,
    tree: SyntaxTree,
    functions: Vec<FunctionDecl>,
}

impl Document {
    /// Parse source text. Parsing is best-effort and never fails; constructs
    /// the parser cannot model simply produce no nodes.
    pub fn parse(source: &str, file: &Path) -> Self {
        let result = parser::parse(source);
        Self {
            source: source.to_string(),
            file: file.to_path_buf(),
            tree: result.tree,
            functions: result.functions,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    /// Function declarations found in this file
    pub fn functions(&self) -> &[FunctionDecl] {
        &self.functions
    }

    pub fn node(&self, id: NodeId) -> &NodeData {
        self.tree.node(id)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.tree.node(id).parent
    }

    /// Source text covered by a node
    pub fn node_text(&self, id: NodeId) -> &str {
        let node = self.tree.node(id);
        &self.source[node.start..node.end]
    }

    /// Line/column range of a node
    pub fn node_range(&self, id: NodeId) -> Range {
        let node = self.tree.node(id);
        Range::from_offsets(&self.source, node.start, node.end)
    }

    pub fn location(&self, id: NodeId) -> Location {
        Location::new(self.file.clone(), self.node_range(id))
    }

    /// All node ids, in arena order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        self.tree.ids()
    }

    /// Walk from a node's parent to the root
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            doc: self,
            current: self.tree.node(id).parent,
        }
    }
}

/// Iterator over a node's ancestor chain
pub struct Ancestors<'a> {
    doc: &'a Document,
    current: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.doc.node(id).parent;
        Some(id)
    }
}
