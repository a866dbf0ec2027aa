use serde::{Deserialize, Serialize};

use cnw_core::error::CollectionError;

/// A capacity increment paired with the metadata URI of every token index it
/// covers. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    /// Number of token indices in this batch. Always at least 1.
    pub capacity: u64,
    /// Metadata pointer for the batch. Never empty.
    pub metadata_uri: String,
}

impl Batch {
    /// Validate and build a batch.
    ///
    /// # Errors
    /// `InvalidCapacity` if `capacity` is 0, otherwise `InvalidMetadata` if
    /// `metadata_uri` is empty.
    pub fn new(capacity: u64, metadata_uri: impl Into<String>) -> Result<Self, CollectionError> {
        if capacity == 0 {
            return Err(CollectionError::InvalidCapacity);
        }
        let metadata_uri = metadata_uri.into();
        if metadata_uri.is_empty() {
            return Err(CollectionError::InvalidMetadata);
        }
        Ok(Self {
            capacity,
            metadata_uri,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_batch() {
        let batch = Batch::new(5, "ipfs://abc").unwrap();
        assert_eq!(batch.capacity, 5);
        assert_eq!(batch.metadata_uri, "ipfs://abc");
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(Batch::new(0, "ipfs://abc"), Err(CollectionError::InvalidCapacity));
    }

    #[test]
    fn test_empty_metadata_rejected() {
        assert_eq!(Batch::new(20, ""), Err(CollectionError::InvalidMetadata));
    }

    #[test]
    fn test_capacity_checked_before_metadata() {
        assert_eq!(Batch::new(0, ""), Err(CollectionError::InvalidCapacity));
    }
}
