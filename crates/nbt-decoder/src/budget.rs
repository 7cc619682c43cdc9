use std::mem::size_of;

use crate::error::DecodeError;

/// Running account of the bytes one decode has reserved.
///
/// Every buffer of the tree is reserved through here, with its full
/// declared size, before any of its bytes are read.
pub(crate) struct AllocationBudget {
    limit: usize,
    used: usize,
}

impl AllocationBudget {
    pub(crate) fn new(limit: usize) -> Self {
        Self { limit, used: 0 }
    }

    pub(crate) fn used(&self) -> usize {
        self.used
    }

    /// Charge `bytes` against the limit.
    pub(crate) fn charge(&mut self, bytes: usize) -> Result<(), DecodeError> {
        if bytes > self.limit - self.used {
            return Err(DecodeError::AllocationFailure {
                requested: bytes,
                limit: self.limit,
            });
        }
        self.used += bytes;
        Ok(())
    }

    /// Charge `count` elements of `T` and return an empty vector with
    /// exactly that capacity.
    pub(crate) fn reserve_vec<T>(&mut self, count: usize) -> Result<Vec<T>, DecodeError> {
        let requested = count.saturating_mul(size_of::<T>());
        self.charge(requested)?;

        let mut buf = Vec::new();
        buf.try_reserve_exact(count)
            .map_err(|_| DecodeError::AllocationFailure {
                requested,
                limit: self.limit,
            })?;
        Ok(buf)
    }
}
