//! Definition of what happens to input that cannot fit in a history.

use crate::AppendError;

/// Policy for input longer than the capacity of a history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Oversize {
    /// Refuse the input with [`AppendError::Oversized`].
    Reject,

    /// Keep only the trailing capacity worth of bytes.
    TruncateKeepTail,
}

impl Oversize {
    /// Bytes from the input that should be appended into a history.
    ///
    /// # Arguments
    ///
    /// * `data` - Bytes being appended.
    /// * `capacity` - Capacity of the history.
    pub(crate) fn admit(self, data: &[u8], capacity: usize) -> Result<&[u8], AppendError> {
        if data.len() <= capacity {
            return Ok(data);
        }

        match self {
            Self::Reject => Err(AppendError::Oversized {
                len: data.len(),
                capacity,
            }),

            Self::TruncateKeepTail => {
                trace!(len = data.len(), capacity, "truncating oversized input");
                Ok(data.split_at(data.len() - capacity).1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Oversize::Reject)]
    #[case(Oversize::TruncateKeepTail)]
    fn admit_fitting(#[case] policy: Oversize) {
        assert_eq!(policy.admit(b"", 4), Ok(&b""[..]));
        assert_eq!(policy.admit(b"ab\n", 4), Ok(&b"ab\n"[..]));
        assert_eq!(policy.admit(b"abc\n", 4), Ok(&b"abc\n"[..]));
    }

    #[test]
    fn reject_oversized() {
        assert_eq!(
            Oversize::Reject.admit(b"abcd\n", 4),
            Err(AppendError::Oversized {
                len: 5,
                capacity: 4
            })
        );
    }

    #[test]
    fn truncate_oversized() {
        assert_eq!(
            Oversize::TruncateKeepTail.admit(b"abcdef\n", 4),
            Ok(&b"def\n"[..])
        );
    }
}
