//! The namespace tree and its working-directory cursor.

use indexmap::IndexMap;
use tracing::warn;

use super::node::Node;
use crate::error::VfsError;

/// In-memory virtual filesystem.
///
/// The tree is grown top-down during loading (`add_dir` / `add_file`)
/// and treated as read-only afterwards. The working directory is a
/// segment sequence from the root; the empty sequence is the root
/// itself. At every moment the sequence resolves to a directory —
/// `cd` only replaces it after a successful resolution.
#[derive(Debug, Clone)]
pub struct Vfs {
    root: Node,
    cwd: Vec<String>,
}

impl Default for Vfs {
    fn default() -> Self {
        Self::new()
    }
}

impl Vfs {
    /// Create an empty filesystem positioned at the root.
    pub fn new() -> Self {
        Self {
            root: Node::dir(),
            cwd: Vec::new(),
        }
    }

    /// Ensure every segment of `path` exists as a directory, creating
    /// missing ones.
    ///
    /// Construction-time only. Fails with [`VfsError::Conflict`] if a
    /// segment already exists as a file, and with
    /// [`VfsError::InvalidName`] if the path contains `.` or `..`.
    pub fn add_dir(&mut self, path: &str) -> Result<(), VfsError> {
        let segments = construction_segments(path)?;
        descend(&mut self.root, &segments, path)?;
        Ok(())
    }

    /// Insert (or overwrite) a file at `path`, creating parent
    /// directories as needed.
    ///
    /// Construction-time only. Fails with [`VfsError::Conflict`] if a
    /// parent segment exists as a file, or if `path` itself names an
    /// existing directory, and with [`VfsError::InvalidName`] if the
    /// path contains `.` or `..`.
    pub fn add_file(&mut self, path: &str, data: Vec<u8>) -> Result<(), VfsError> {
        let mut segments = construction_segments(path)?;
        let Some(name) = segments.pop() else {
            return Err(VfsError::Conflict(path.to_string()));
        };
        let parent = descend(&mut self.root, &segments, path)?;
        if let Some(Node::Directory(_)) = parent.get(name) {
            return Err(VfsError::Conflict(path.to_string()));
        }
        parent.insert(name.to_string(), Node::File(data));
        Ok(())
    }

    /// Turn a path expression into a concrete segment sequence.
    ///
    /// Absolute paths (leading `/`) start from the root; relative paths
    /// start from the working directory. Empty and `.` segments are
    /// dropped; `..` pops the last segment and is a no-op at the root.
    fn normalize(&self, path: &str) -> Vec<String> {
        let mut segments = if path.starts_with('/') {
            Vec::new()
        } else {
            self.cwd.clone()
        };
        for seg in path.split('/') {
            match seg {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                name => segments.push(name.to_string()),
            }
        }
        segments
    }

    /// Walk a segment sequence down from the root.
    fn lookup(&self, segments: &[String], display: &str) -> Result<&Node, VfsError> {
        let mut cur = &self.root;
        for seg in segments {
            match cur {
                Node::Directory(children) => {
                    cur = children
                        .get(seg)
                        .ok_or_else(|| VfsError::NotFound(display.to_string()))?;
                }
                // Files have no children; do not raise further segments.
                Node::File(_) => return Err(VfsError::NotFound(display.to_string())),
            }
        }
        Ok(cur)
    }

    /// Resolve a path expression against the working directory.
    ///
    /// Pure query: neither the tree nor the working directory changes.
    pub fn resolve(&self, path: &str) -> Result<&Node, VfsError> {
        self.lookup(&self.normalize(path), path)
    }

    /// Change the working directory.
    ///
    /// The candidate sequence is resolved from the root first; the
    /// cursor is only replaced on success, so a failing `cd` leaves it
    /// untouched.
    pub fn cd(&mut self, path: &str) -> Result<(), VfsError> {
        let candidate = self.normalize(path);
        match self.lookup(&candidate, path)? {
            Node::Directory(_) => {
                self.cwd = candidate;
                Ok(())
            }
            Node::File(_) => Err(VfsError::NotADirectory(path.to_string())),
        }
    }

    /// Render the working directory; the root renders as `/`.
    pub fn pwd(&self) -> String {
        format!("/{}", self.cwd.join("/"))
    }

    /// The working-directory segments (empty at the root).
    pub fn cwd(&self) -> &[String] {
        &self.cwd
    }

    /// Child names of the working directory, in insertion order.
    ///
    /// The working directory always resolves to a directory, so the
    /// error arm is unreachable in practice; it is reported rather than
    /// panicked on.
    pub fn list(&self) -> Result<Vec<String>, VfsError> {
        match self.lookup(&self.cwd, &self.pwd()) {
            Ok(Node::Directory(children)) => Ok(children.keys().cloned().collect()),
            Ok(Node::File(_)) => {
                warn!(cwd = %self.pwd(), "working directory resolves to a file");
                Err(VfsError::NotADirectory(self.pwd()))
            }
            Err(e) => {
                warn!(cwd = %self.pwd(), "working directory no longer resolves");
                Err(e)
            }
        }
    }

    /// Depth-first search of the whole tree for nodes named `name`.
    ///
    /// Matches files and directories alike, independent of the working
    /// directory, and returns `/`-joined paths in traversal (insertion)
    /// order. An absent name yields an empty result.
    pub fn find(&self, name: &str) -> Vec<String> {
        let mut matches = Vec::new();
        // Explicit worklist; children are pushed in reverse so the pop
        // order follows insertion order.
        let mut stack: Vec<(String, &Node)> = Vec::new();
        if let Node::Directory(children) = &self.root {
            for (child, node) in children.iter().rev() {
                stack.push((child.clone(), node));
            }
        }
        while let Some((path, node)) = stack.pop() {
            if path.rsplit('/').next() == Some(name) {
                matches.push(path.clone());
            }
            if let Node::Directory(children) = node {
                for (child, n) in children.iter().rev() {
                    stack.push((format!("{path}/{child}"), n));
                }
            }
        }
        matches
    }
}

/// Split a construction path into concrete segments.
///
/// `.` and `..` are resolver syntax, never stored names; a path that
/// would store one is rejected outright so a malformed archive fails
/// the load instead of planting unreachable nodes.
fn construction_segments(path: &str) -> Result<Vec<&str>, VfsError> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(|seg| match seg {
            "." | ".." => Err(VfsError::InvalidName(path.to_string())),
            _ => Ok(seg),
        })
        .collect()
}

/// Walk `segments` from `root`, creating missing directories, and
/// return the children map of the final directory.
fn descend<'a>(
    root: &'a mut Node,
    segments: &[&str],
    full: &str,
) -> Result<&'a mut IndexMap<String, Node>, VfsError> {
    let mut cur = match root {
        Node::Directory(children) => children,
        Node::File(_) => return Err(VfsError::Conflict(full.to_string())),
    };
    for seg in segments {
        let entry = cur.entry((*seg).to_string()).or_insert_with(Node::dir);
        cur = match entry {
            Node::Directory(children) => children,
            Node::File(_) => return Err(VfsError::Conflict(full.to_string())),
        };
    }
    Ok(cur)
}
