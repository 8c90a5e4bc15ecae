//! The virtual filesystem: namespace tree, path resolution, and the
//! archive loader that materializes it.

mod archive;
mod node;
mod tree;

pub use archive::{load_archive, load_archive_reader};
pub use node::Node;
pub use tree::Vfs;
