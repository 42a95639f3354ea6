//! Exercises the crate-root API as an outside caller sees it.

use sha1lite::{BLOCK_SIZE, DIGEST_HEX_LEN, DIGEST_LEN, Digest, Error, Result, block_count, hash, padded_len};

#[test]
fn test_framing_helpers_are_reexported() {
    assert_eq!(BLOCK_SIZE, 64);
    assert_eq!(padded_len(55), Some(64));
    assert_eq!(padded_len(56), Some(128));
    assert_eq!(block_count(0), Some(1));
    assert_eq!(block_count(56), Some(2));
    assert_eq!(block_count(507), Some(9));
}

#[test]
fn test_hash_through_root_api() -> Result<()> {
    let digest: Digest = hash(b"Hello, world!")?;
    assert_eq!(digest.to_bytes().len(), DIGEST_LEN);
    assert_eq!(digest.to_hex().len(), DIGEST_HEX_LEN);
    assert_eq!(digest, "943a702d06f34599aee1f8da8ef9f7296031d699".parse()?);
    Ok(())
}

#[test]
fn test_only_digest_parse_errors_are_reachable() {
    let err = Digest::from_hex("not hex").unwrap_err();
    assert!(matches!(err, Error::InvalidHex(_)));
    // Every other error a caller can match on is the length limit.
    match err {
        Error::InvalidHex(_) | Error::MessageTooLong { .. } => {}
    }
}
