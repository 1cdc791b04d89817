//! Merkle-DAG node model for ipfs-kit.
//!
//! Provides [`MerkleNode`], the in-memory representation of one node of an
//! IPFS Merkle-DAG, and its bidirectional mapping to the generic JSON tree
//! shape the daemon API speaks (`Hash`/`Key`, `Name`, `Size`, `Type`,
//! `Links`, `Data`).
//!
//! Nodes are immutable once constructed and their identity is the multihash
//! alone. Trees are parsed bottom-up — every child in `Links` must parse
//! before its parent exists — and the first failure aborts the whole parse.
//! Everything here is a pure function over in-memory values: no I/O, no
//! shared state, safe to call from any thread.

mod error;
mod node;
mod parse;

pub use error::MerkleDagError;
pub use node::MerkleNode;
pub use parse::{merkle_node_from_json, merkle_node_to_json, merkle_nodes_from_json};

pub use ipfs_kit_multihash::Multihash;
