//  REPLY.rs
//    by Lut99
//
//  Created:
//    11 Mar 2025, 10:44:21
//  Last edited:
//    21 Jul 2025, 11:36:09
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines the three-way result of applying a parser to a stream.
//

use crate::message::ErrorMessage;
use crate::stream::Stream;


/***** LIBRARY *****/
/// The result of applying a [`Parser`](crate::parser::Parser) to a [`Stream`].
///
/// A reply is always one of three things:
/// - [`Reply::Success`]: the parser matched; carries the produced value and the advanced stream.
/// - [`Reply::Failure`]: the parser did not match here. This is the _recoverable_ outcome that
///   alternation (see [`or()`](crate::branch::or())) reacts to by trying another branch.
/// - [`Reply::Error`]: the input is malformed and no alternative should be tried. Only
///   [`rescue()`](crate::rescue::rescue()) demotes this back to a Failure.
///
/// Every variant carries the ordered list of diagnostics accumulated so far; combinators
/// concatenate these lists and never drop them.
///
/// # Example
/// ```rust
/// use morsel::prim::token;
/// use morsel::{Parser as _, Reply, Stream as _, StrStream};
///
/// let span = StrStream::new("ab");
/// match token('a').parse(span) {
///     Reply::Success { rest, value, messages } => {
///         assert_eq!(value, 'a');
///         assert_eq!(rest.position(), 1);
///         assert!(messages.is_empty());
///     },
///     other => panic!("unexpected reply {other:?}"),
/// }
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Reply<S: Stream, R> {
    /// The parser matched a prefix of the input.
    Success {
        /// The stream pointing just past the consumed prefix.
        rest: S,
        /// The value produced by the parser.
        value: R,
        /// The diagnostics accumulated during the attempt, in production order.
        messages: Vec<ErrorMessage<S::Position>>,
    },

    /// The parser did not match; alternation may try another branch.
    Failure {
        /// The stream at which alternation should resume.
        rest: S,
        /// The diagnostics accumulated during the attempt, in production order.
        messages: Vec<ErrorMessage<S::Position>>,
    },

    /// The input is malformed; alternation must not try other branches.
    Error {
        /// The stream at the offending input.
        rest: S,
        /// The principal diagnostic describing what went wrong.
        fatal: ErrorMessage<S::Position>,
        /// The surrounding diagnostics accumulated during the attempt, in production order.
        messages: Vec<ErrorMessage<S::Position>>,
    },
}
impl<S: Stream, R> Reply<S, R> {
    /// Returns true iff this reply is a [`Reply::Success`].
    #[inline]
    pub fn is_success(&self) -> bool { matches!(self, Self::Success { .. }) }

    /// Returns true iff this reply is a [`Reply::Failure`].
    #[inline]
    pub fn is_failure(&self) -> bool { matches!(self, Self::Failure { .. }) }

    /// Returns true iff this reply is a [`Reply::Error`].
    #[inline]
    pub fn is_error(&self) -> bool { matches!(self, Self::Error { .. }) }

    /// Returns the stream carried by this reply.
    ///
    /// On Success this is the unconsumed remainder; on Failure, the point where alternation
    /// resumes; on Error, the offending position.
    #[inline]
    pub fn rest(&self) -> &S {
        match self {
            Self::Success { rest, .. } | Self::Failure { rest, .. } | Self::Error { rest, .. } => rest,
        }
    }

    /// Consumes this reply into the stream it carries.
    #[inline]
    pub fn into_rest(self) -> S {
        match self {
            Self::Success { rest, .. } | Self::Failure { rest, .. } | Self::Error { rest, .. } => rest,
        }
    }

    /// Returns the produced value, if this reply is a [`Reply::Success`].
    #[inline]
    pub fn value(&self) -> Option<&R> {
        match self {
            Self::Success { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Returns the principal diagnostic, if this reply is a [`Reply::Error`].
    #[inline]
    pub fn fatal(&self) -> Option<&ErrorMessage<S::Position>> {
        match self {
            Self::Error { fatal, .. } => Some(fatal),
            _ => None,
        }
    }

    /// Returns the accumulated diagnostics of this reply.
    #[inline]
    pub fn messages(&self) -> &[ErrorMessage<S::Position>] {
        match self {
            Self::Success { messages, .. } | Self::Failure { messages, .. } | Self::Error { messages, .. } => messages,
        }
    }

    /// Returns a mutable handle to the accumulated diagnostics of this reply.
    #[inline]
    pub fn messages_mut(&mut self) -> &mut Vec<ErrorMessage<S::Position>> {
        match self {
            Self::Success { messages, .. } | Self::Failure { messages, .. } | Self::Error { messages, .. } => messages,
        }
    }

    /// Consumes this reply into its accumulated diagnostics.
    #[inline]
    pub fn into_messages(self) -> Vec<ErrorMessage<S::Position>> {
        match self {
            Self::Success { messages, .. } | Self::Failure { messages, .. } | Self::Error { messages, .. } => messages,
        }
    }

    /// Consumes this reply into its remaining stream and value.
    ///
    /// # Panics
    /// This function panics if the reply is not a [`Reply::Success`].
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> (S, R) {
        match self {
            Self::Success { rest, value, .. } => (rest, value),
            Self::Failure { .. } => panic!("Cannot unwrap a Reply::Failure as a success"),
            Self::Error { .. } => panic!("Cannot unwrap a Reply::Error as a success"),
        }
    }

    /// Consumes this reply into its principal diagnostic.
    ///
    /// # Panics
    /// This function panics if the reply is not a [`Reply::Error`].
    #[inline]
    #[track_caller]
    pub fn unwrap_fatal(self) -> ErrorMessage<S::Position> {
        match self {
            Self::Error { fatal, .. } => fatal,
            Self::Success { .. } => panic!("Cannot unwrap a Reply::Success as an error"),
            Self::Failure { .. } => panic!("Cannot unwrap a Reply::Failure as an error"),
        }
    }
}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Severity;
    use crate::stream::StrStream;

    #[test]
    fn test_accessors() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let span = StrStream::new("abc");
        let reply: Reply<_, char> = Reply::Success { rest: span, value: 'a', messages: vec![] };
        assert!(reply.is_success());
        assert_eq!(reply.value(), Some(&'a'));
        assert_eq!(reply.fatal(), None);
        assert_eq!(reply.clone().unwrap(), (span, 'a'));

        let fatal = ErrorMessage::point(Severity::Error, "boom", 0usize);
        let reply: Reply<_, char> = Reply::Error { rest: span, fatal: fatal.clone(), messages: vec![] };
        assert!(reply.is_error());
        assert_eq!(reply.fatal(), Some(&fatal));
        assert_eq!(reply.unwrap_fatal(), fatal);
    }

    #[test]
    #[should_panic]
    fn test_unwrap_failure_panics() {
        let reply: Reply<StrStream, char> = Reply::Failure { rest: StrStream::new(""), messages: vec![] };
        let _ = reply.unwrap();
    }
}
