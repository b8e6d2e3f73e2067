//! Directory traversal with exclusion-based pruning

pub mod scanner;
pub mod tree;

pub use scanner::FileScanner;
pub use tree::generate_tree;
