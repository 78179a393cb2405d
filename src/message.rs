//  MESSAGE.rs
//    by Lut99
//
//  Created:
//    11 Mar 2025, 10:15:02
//  Last edited:
//    14 Jul 2025, 16:10:55
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines the diagnostics that parsers accumulate while they run.
//

use std::error::Error;
use std::fmt::{Debug, Display, Formatter, Result as FResult};

pub use enumset::EnumSet;
use enumset::EnumSetType;


/***** LIBRARY *****/
/// How important a diagnostic is to the user.
///
/// Severities form a bit-flag set, so filters such as the one taken by
/// [`rescue_only()`](crate::rescue::rescue_only()) can combine them:
///
/// ```rust
/// use morsel::{EnumSet, Severity};
///
/// let soft: EnumSet<Severity> = Severity::Message | Severity::Warn;
/// assert!(soft.contains(Severity::Warn));
/// assert!(!soft.contains(Severity::Error));
/// ```
///
/// Note that a severity classifies a _message_, not the parser's control flow. A
/// [`Reply::Error`](crate::reply::Reply::Error) may carry a fatal message of any severity.
#[derive(Debug, Hash, Ord, PartialOrd, EnumSetType)]
pub enum Severity {
    /// Informational only.
    Message,
    /// Suspicious but not necessarily wrong.
    Warn,
    /// The input is malformed.
    Error,
}
impl Display for Severity {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        match self {
            Self::Message => write!(f, "message"),
            Self::Warn => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}



/// A single diagnostic, tagged with a severity and the source span it covers.
///
/// Messages are immutable once built. Parsers collect them in the order they were produced and
/// combinators only ever concatenate those lists, never re-order or drop them.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ErrorMessage<P> {
    /// How important this message is.
    severity: Severity,
    /// The human-readable text.
    text: String,
    /// The position where the offending input begins.
    begin: P,
    /// The position just past the offending input.
    end: P,
}
impl<P> ErrorMessage<P> {
    /// Constructor for an ErrorMessage covering the span `begin..end`.
    #[inline]
    pub fn new(severity: Severity, text: impl Into<String>, begin: P, end: P) -> Self {
        Self { severity, text: text.into(), begin, end }
    }

    /// Constructor for an ErrorMessage covering a single point in the input.
    #[inline]
    pub fn point(severity: Severity, text: impl Into<String>, at: P) -> Self
    where
        P: Clone,
    {
        Self { severity, text: text.into(), begin: at.clone(), end: at }
    }

    /// Returns the severity of this message.
    #[inline]
    pub fn severity(&self) -> Severity { self.severity }

    /// Returns the text of this message.
    #[inline]
    pub fn text(&self) -> &str { &self.text }

    /// Returns the position where the span of this message begins.
    #[inline]
    pub fn begin(&self) -> &P { &self.begin }

    /// Returns the position just past the span of this message.
    #[inline]
    pub fn end(&self) -> &P { &self.end }
}
impl<P: Debug> Display for ErrorMessage<P> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult { write!(f, "{}: {} (at {:?}..{:?})", self.severity, self.text, self.begin, self.end) }
}
impl<P: Debug> Error for ErrorMessage<P> {}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_sets_combine() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let set: EnumSet<Severity> = Severity::Warn | Severity::Error;
        assert!(set.contains(Severity::Warn));
        assert!(set.contains(Severity::Error));
        assert!(!set.contains(Severity::Message));
        assert_eq!(EnumSet::<Severity>::all().len(), 3);
    }

    #[test]
    fn test_point_spans_are_empty() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let msg = ErrorMessage::point(Severity::Error, "unexpected token", 4usize);
        assert_eq!(msg.begin(), msg.end());
        assert_eq!(msg.severity(), Severity::Error);
        assert_eq!(msg.text(), "unexpected token");
    }

    #[test]
    fn test_display() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let msg = ErrorMessage::new(Severity::Warn, "odd spacing", 2usize, 5usize);
        assert_eq!(msg.to_string(), "warning: odd spacing (at 2..5)");
    }
}
