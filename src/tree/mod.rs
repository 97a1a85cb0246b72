pub mod builder;
pub mod node;
pub mod tree;

pub use builder::{build_tree, TreeBuildError};
pub use node::HuffmanNode;
pub use tree::HuffmanTree;
