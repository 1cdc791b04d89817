//! Merkle-DAG parse/construction error type.

use ipfs_kit_base58::Base58Error;
use thiserror::Error;

/// Error type for Merkle-DAG node construction and JSON parsing.
///
/// Child-parse failures propagate unchanged through parent construction;
/// the first failure wins.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MerkleDagError {
    #[error("expected a JSON object")]
    JsonShape,
    #[error("required field `{0}` is missing or not a string")]
    RequiredFieldMissing(&'static str),
    #[error("hash is not valid base58: {0}")]
    HashDecode(#[from] Base58Error),
}
