// Copyright 2022 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Module containing the canonical-form validators.
//!
//! The per-entity codecs stay ignorant of collection-level invariants; the
//! block and essence assemblers call into this module so the ordering,
//! uniqueness and unlock-reference rules are auditable in one place.

use super::Unlock;
use crate::error::Error;

/// Verifies that a list of serialized byte strings is in ascending
/// lexicographic order and contains no duplicates.
///
/// The validator never re-sorts: a silent re-sort would change which bytes
/// are actually signed or referenced downstream, so a violation is a hard
/// error naming the rule that failed.
pub(crate) fn verify_sorted_unique<K: AsRef<[u8]>>(field: &'static str, keys: &[K]) -> Result<(), Error> {
    for pair in keys.windows(2) {
        match pair[0].as_ref().cmp(pair[1].as_ref()) {
            std::cmp::Ordering::Less => (),
            std::cmp::Ordering::Equal => return Err(Error::DuplicateEntries { field }),
            std::cmp::Ordering::Greater => return Err(Error::UnsortedEntries { field }),
        }
    }
    Ok(())
}

/// Verifies the unlock reference rule over a whole unlock list.
///
/// A reference/alias/nft unlock must point strictly backwards at a signature
/// unlock, and no signature unlock may occur twice.
pub(crate) fn verify_unlocks(unlocks: &[Unlock]) -> Result<(), Error> {
    for (position, unlock) in unlocks.iter().enumerate() {
        match unlock {
            Unlock::Signature { .. } => {
                if unlocks[..position].contains(unlock) {
                    return Err(Error::DuplicateSignatureUnlock { position });
                }
            }
            Unlock::Reference { index } | Unlock::Alias { index } | Unlock::Nft { index } => {
                let reference = *index;
                if reference as usize >= position
                    || !matches!(unlocks[reference as usize], Unlock::Signature { .. })
                {
                    return Err(Error::InvalidUnlockReference { position, reference });
                }
            }
        }
    }
    Ok(())
}

#[cfg(all(test, feature = "rand"))]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_sorted_unique() {
        assert_eq!(verify_sorted_unique::<&[u8]>("f", &[]), Ok(()));
        assert_eq!(verify_sorted_unique("f", &[[0u8, 1], [0, 2]]), Ok(()));
        assert_eq!(
            verify_sorted_unique("f", &[[0u8, 2], [0, 1]]),
            Err(Error::UnsortedEntries { field: "f" })
        );
        assert_eq!(
            verify_sorted_unique("f", &[[0u8, 1], [0, 1]]),
            Err(Error::DuplicateEntries { field: "f" })
        );
    }

    #[test]
    fn test_unlock_reference_rule() {
        let signature = Unlock::rand_signature();
        assert_eq!(verify_unlocks(&[signature, Unlock::Reference { index: 0 }]), Ok(()));

        // Forward and self references are rejected.
        assert_eq!(
            verify_unlocks(&[Unlock::Reference { index: 0 }]),
            Err(Error::InvalidUnlockReference {
                position: 0,
                reference: 0,
            })
        );
        assert_eq!(
            verify_unlocks(&[signature, Unlock::Reference { index: 1 }]),
            Err(Error::InvalidUnlockReference {
                position: 1,
                reference: 1,
            })
        );

        // References must point at a signature unlock.
        assert_eq!(
            verify_unlocks(&[signature, Unlock::Reference { index: 0 }, Unlock::Alias { index: 1 }]),
            Err(Error::InvalidUnlockReference {
                position: 2,
                reference: 1,
            })
        );
    }

    #[test]
    fn test_duplicate_signature_unlock() {
        let signature = Unlock::rand_signature();
        assert_eq!(
            verify_unlocks(&[signature, signature]),
            Err(Error::DuplicateSignatureUnlock { position: 1 })
        );
        assert_eq!(verify_unlocks(&[signature, Unlock::rand_signature()]), Ok(()));
    }
}
