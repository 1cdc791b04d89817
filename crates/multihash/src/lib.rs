//! ipfs-kit-multihash - Opaque multihash content identity.
//!
//! Provides [`Multihash`], the canonical binary identity of a piece of
//! content. The bytes are typically self-describing (algorithm prefix plus
//! digest) but are carried opaquely: this crate only converts them to and
//! from their base58 textual form, it never hashes or inspects them.

mod multihash;

pub use multihash::Multihash;
