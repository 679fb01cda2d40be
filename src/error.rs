use core::fmt;

use alloc::collections::TryReserveError;

/// Entry storage for a [`ScanMap`](crate::ScanMap) could not be obtained.
///
/// Returned by the operations that allocate. The map involved is left exactly
/// as it was before the failing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// Room for `additional` more slots was requested on top of `capacity`,
    /// and the total does not fit in `usize`.
    CapacityOverflow {
        capacity: usize,
        additional: usize,
    },
    /// The allocator refused storage for `requested` slots.
    Reserve {
        requested: usize,
        source: TryReserveError,
    },
}

impl AllocationError {
    #[inline]
    pub(crate) const fn overflow(capacity: usize, additional: usize) -> Self {
        Self::CapacityOverflow { capacity, additional }
    }

    #[inline]
    pub(crate) const fn reserve(requested: usize, source: TryReserveError) -> Self {
        Self::Reserve { requested, source }
    }
}

impl fmt::Display for AllocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow { capacity, additional } => write!(
                f,
                "capacity overflow: cannot add {additional} slots to a map of {capacity}"
            ),
            Self::Reserve { requested, .. } => {
                write!(f, "failed to allocate storage for {requested} map entries")
            }
        }
    }
}

impl core::error::Error for AllocationError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::CapacityOverflow { .. } => None,
            Self::Reserve { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use core::error::Error;

    #[test]
    fn test_display_names_the_slot_counts() {
        let err = AllocationError::overflow(8, usize::MAX);
        assert_eq!(
            err.to_string(),
            format!("capacity overflow: cannot add {} slots to a map of 8", usize::MAX)
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_reserve_error_keeps_its_source() {
        let source = Vec::<u64>::new().try_reserve_exact(usize::MAX).unwrap_err();
        let err = AllocationError::reserve(usize::MAX, source.clone());
        assert!(err.to_string().starts_with("failed to allocate storage for"));
        assert_eq!(err.source().map(|s| s.to_string()), Some(source.to_string()));
    }
}
