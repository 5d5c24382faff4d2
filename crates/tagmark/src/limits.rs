//! Optional bounds for parsing untrusted input.

/// Upper bounds checked by [`try_parse`](crate::try_parse).
///
/// The default imposes no bounds.
///
/// # Examples
///
/// ```
/// use tagmark::{Limits, MarkupError, try_parse};
///
/// let limits = Limits::none().max_input_len(8);
/// let err = try_parse("[switch/][switch/]", &limits).unwrap_err();
/// assert_eq!(err, MarkupError::InputTooLarge { len: 18, max: 8 });
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    /// Maximum input length in bytes.
    pub max_input_len: Option<usize>,
    /// Maximum number of tag candidates, counted across both scans before
    /// overlapping candidates are dropped.
    pub max_matches: Option<usize>,
}

impl Limits {
    /// No bounds.
    pub const fn none() -> Self {
        Self {
            max_input_len: None,
            max_matches: None,
        }
    }

    pub const fn max_input_len(mut self, max: usize) -> Self {
        self.max_input_len = Some(max);
        self
    }

    pub const fn max_matches(mut self, max: usize) -> Self {
        self.max_matches = Some(max);
        self
    }
}
