//! Build-time tooling for the workspace.

pub mod decode_tree;
