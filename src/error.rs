use core::error::Error;
use core::fmt;
use core::fmt::Display;
use core::fmt::Formatter;

/// Error type returned when reading a variant through the wrong alternative,
/// or when accessing or visiting a variant that currently holds no value.
///
/// Selecting a type outside the alternative set (or an out-of-range index)
/// is rejected at compile time and never reaches this type; `BadAccessError`
/// only reports runtime tag mismatches.
///
/// # Example
///
/// ```rust
/// use oneof::{BadAccessError, OneOf2};
///
/// let v: OneOf2<i32, &str> = OneOf2::of(7);
/// let err = v.get::<&str, _>().unwrap_err();
///
/// assert_eq!(err, BadAccessError::Mismatch { expected: 1, held: 0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadAccessError {
  /// The variant holds a live value, but not the requested alternative.
  /// Both positions are reported to make the mismatch diagnosable.
  Mismatch {
    /// Declared position of the requested alternative.
    expected: usize,
    /// Declared position of the alternative actually held.
    held: usize,
  },
  /// The variant holds no value at all. Reachable only through
  /// [`take`](crate::OneOf2::take) or a panicking
  /// [`emplace_with`](crate::OneOf2::emplace_with) closure.
  Valueless,
}

impl BadAccessError {
  /// Builds the error for an access of the alternative at `expected` against
  /// a variant whose current tag is `held` (`None` when valueless).
  #[inline]
  pub(crate) fn mismatch(expected: usize, held: Option<usize>) -> Self {
    match held {
      Some(held) => BadAccessError::Mismatch { expected, held },
      None => BadAccessError::Valueless,
    }
  }
}

impl Display for BadAccessError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      BadAccessError::Mismatch { expected, held } => write!(
        f,
        "bad variant access: expected the alternative at index {expected}, \
         but the variant holds index {held}"
      ),
      BadAccessError::Valueless => {
        write!(f, "bad variant access: the variant is valueless")
      }
    }
  }
}

impl Error for BadAccessError {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn mismatch_reports_both_indices() {
    let err = BadAccessError::mismatch(2, Some(0));
    assert_eq!(err, BadAccessError::Mismatch { expected: 2, held: 0 });
    let text = err.to_string();
    assert!(text.contains("index 2"));
    assert!(text.contains("index 0"));
  }

  #[test]
  fn valueless_when_no_tag_is_held() {
    let err = BadAccessError::mismatch(1, None);
    assert_eq!(err, BadAccessError::Valueless);
    assert!(err.to_string().contains("valueless"));
  }
}
