//! Nodes of the namespace tree.

use indexmap::IndexMap;

/// A single node in the namespace tree.
///
/// Directory children keep insertion order, which is the order archive
/// entries were loaded in; `ls` and `find` output depends on it.
/// `.` and `..` are path-expression syntax and are never stored as
/// child names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Named children, unique within this directory.
    Directory(IndexMap<String, Node>),
    /// Opaque immutable payload.
    File(Vec<u8>),
}

impl Node {
    /// Create an empty directory node.
    pub fn dir() -> Self {
        Node::Directory(IndexMap::new())
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File(_))
    }

    /// File payload, if this node is a file.
    pub fn data(&self) -> Option<&[u8]> {
        match self {
            Node::File(data) => Some(data),
            Node::Directory(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_predicates() {
        assert!(Node::dir().is_dir());
        assert!(!Node::dir().is_file());
        assert!(Node::File(b"x".to_vec()).is_file());
    }

    #[test]
    fn data_only_for_files() {
        assert_eq!(Node::File(b"abc".to_vec()).data(), Some(&b"abc"[..]));
        assert_eq!(Node::dir().data(), None);
    }
}
