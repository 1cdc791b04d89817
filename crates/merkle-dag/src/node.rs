//! The Merkle-DAG node type.

use std::hash::{Hash, Hasher};

use ipfs_kit_multihash::Multihash;

use crate::error::MerkleDagError;

/// One node of an IPFS Merkle-DAG.
///
/// The multihash is the node's identity and is always present: every
/// constructor base58-decodes the hash string and fails outright if it does
/// not decode, so a node with an invalid hash cannot exist. All other fields
/// are optional metadata and never participate in equality.
///
/// `links` is an ordered sequence, not a set — duplicate child hashes are
/// legal and order is preserved through parse/re-serialize cycles.
#[derive(Debug, Clone)]
pub struct MerkleNode {
    /// Decoded multihash; the node's identity.
    pub hash: Multihash,
    /// DAG-link label.
    pub name: Option<String>,
    /// Cumulative byte size of the subtree, as reported. Advisory only;
    /// never verified against `data` or `links`.
    pub size: Option<u64>,
    /// Node kind discriminant (file, directory, …). Opaque here.
    pub node_type: Option<i64>,
    /// Ordered child nodes.
    pub links: Option<Vec<MerkleNode>>,
    /// The node's own payload bytes.
    pub data: Option<Vec<u8>>,
}

impl MerkleNode {
    /// Builds a node from a base58 hash string alone.
    pub fn new(hash: &str) -> Result<Self, MerkleDagError> {
        Self::from_parts(hash, None, None, None, None, None)
    }

    /// Builds a node from a base58 hash string and a link name.
    pub fn with_name(hash: &str, name: impl Into<String>) -> Result<Self, MerkleDagError> {
        Self::from_parts(hash, Some(name.into()), None, None, None, None)
    }

    /// Builds a node from a base58 hash string plus all optional metadata.
    pub fn from_parts(
        hash: &str,
        name: Option<String>,
        size: Option<u64>,
        node_type: Option<i64>,
        links: Option<Vec<MerkleNode>>,
        data: Option<Vec<u8>>,
    ) -> Result<Self, MerkleDagError> {
        let hash = Multihash::from_base58(hash)?;
        Ok(MerkleNode {
            hash,
            name,
            size,
            node_type,
            links,
            data,
        })
    }

    /// Builds a bare node around an already-decoded multihash.
    pub fn from_multihash(hash: Multihash) -> Self {
        MerkleNode {
            hash,
            name: None,
            size: None,
            node_type: None,
            links: None,
            data: None,
        }
    }

    /// The node's hash in base58 textual form.
    pub fn hash_string(&self) -> String {
        self.hash.to_base58()
    }
}

/// Equality is content identity: two nodes are equal iff their multihashes
/// are byte-equal, whatever their metadata says.
impl PartialEq for MerkleNode {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for MerkleNode {}

impl Hash for MerkleNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH_A: &str = "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG";
    const HASH_B: &str = "QmT78zSuBmuS4z925WZfrqQ1qHaJ56DQaTfyMUF7F8ff5o";

    #[test]
    fn construction_decodes_the_hash() {
        let node = MerkleNode::new(HASH_A).unwrap();
        assert_eq!(node.hash_string(), HASH_A);
        assert!(node.name.is_none());
        assert!(node.links.is_none());
    }

    #[test]
    fn construction_fails_on_undecodable_hash() {
        // '0' is not in the btc alphabet; no partially-valid node comes back.
        assert!(matches!(
            MerkleNode::new("Qm000"),
            Err(MerkleDagError::HashDecode(_))
        ));
    }

    #[test]
    fn equality_ignores_metadata() {
        let plain = MerkleNode::new(HASH_A).unwrap();
        let named = MerkleNode::with_name(HASH_A, "readme.md").unwrap();
        let sized = MerkleNode::from_parts(HASH_A, None, Some(42), Some(2), None, None).unwrap();
        assert_eq!(plain, named);
        assert_eq!(plain, sized);

        let other = MerkleNode::with_name(HASH_B, "readme.md").unwrap();
        assert_ne!(named, other);
    }
}
