//! Notary registry contract bindings and payload encoding
//!
//! The registration payload is the ABI-encoded `register(bytes32)` call: the
//! 4-byte function selector acts as the fixed version/format marker, so a
//! payload can always be decoded back to its digest unambiguously for dedup
//! checks or audit.

use alloy::primitives::{Bytes, FixedBytes};
use alloy::sol;
use alloy::sol_types::SolCall;

use crate::domain::Digest;

sol! {
    #[sol(rpc)]
    interface INotaryRegistry {
        /// Anchor a content digest. The contract stamps the record with
        /// block.timestamp and emits `Registered`.
        function register(bytes32 digest) external;

        event Registered(bytes32 indexed digest, address indexed registrant, uint64 timestamp);
    }
}

/// ABI-encode the registration call for `digest`.
pub fn register_calldata(digest: &Digest) -> Bytes {
    let call = INotaryRegistry::registerCall {
        digest: FixedBytes(digest.0),
    };
    Bytes::from(call.abi_encode())
}

/// Decode a registration payload back to its digest.
///
/// Returns `None` when the payload is not a well-formed `register(bytes32)`
/// call — wrong selector, truncated, or trailing bytes.
pub fn decode_register_calldata(data: &[u8]) -> Option<Digest> {
    if data.len() < 4 || data[..4] != INotaryRegistry::registerCall::SELECTOR {
        return None;
    }
    INotaryRegistry::registerCall::abi_decode_validate(data)
        .ok()
        .map(|call| Digest::from(call.digest))
}
