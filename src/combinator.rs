//  COMBINATOR.rs
//    by Lut99
//
//  Created:
//    13 Mar 2025, 11:12:53
//  Last edited:
//    22 Jul 2025, 10:02:31
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines combinators that transform a single parser: mapping,
//!   optionality and lookahead.
//

use crate::message::{ErrorMessage, Severity};
use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;


/***** CONSTANTS *****/
/// The diagnostic text used by [`followed_by()`] when none is given.
const DEFAULT_LOOKAHEAD_TEXT: &str = "expected the lookahead to match";





/***** LIBRARY *****/
/// Passes a parser's result through a function.
///
/// Follows the same stream discipline as [`bind()`](crate::sequence::bind()): on failure or error
/// of the inner parser, the reply's stream is reset to the input.
///
/// # Arguments
/// - `parser`: The parser to run.
/// - `project`: The function applied to its result.
///
/// # Returns
/// A [`Map`]-parser yielding the projected value.
///
/// # Example
/// ```rust
/// use morsel::combinator::map;
/// use morsel::prim::satisfy;
/// use morsel::{Parser as _, StrStream};
///
/// let comb = map(satisfy(|c: &char| c.is_ascii_digit()), |c: char| c.to_digit(10).unwrap());
/// assert_eq!(comb.parse(StrStream::new("7")).unwrap().1, 7);
/// assert!(comb.parse(StrStream::new("x")).is_failure());
/// ```
#[inline]
pub const fn map<P, F>(parser: P, project: F) -> Map<P, F> { Map { parser, project } }

/// The parser returned by [`map()`].
#[derive(Clone, Copy, Debug)]
pub struct Map<P, F> {
    /// The parser whose result is projected.
    parser: P,
    /// The projection function.
    project: F,
}
impl<S: Stream, O, P: Parser<S>, F: Fn(P::Output) -> O> Parser<S> for Map<P, F> {
    type Output = O;

    fn parse(&self, input: S) -> Reply<S, O> {
        match self.parser.parse(input.clone()) {
            Reply::Success { rest, value, messages } => Reply::Success { rest, value: (self.project)(value), messages },
            Reply::Failure { messages, .. } => Reply::Failure { rest: input, messages },
            Reply::Error { fatal, messages, .. } => Reply::Error { rest: input, fatal, messages },
        }
    }
}



/// Makes a parser optional.
///
/// A failure of the inner parser becomes a success with [`None`] and an untouched stream, so the
/// returned parser never fails. Errors still propagate.
///
/// # Arguments
/// - `parser`: The parser to make optional.
///
/// # Returns
/// A [`Maybe`]-parser yielding an [`Option`] of the inner result.
///
/// # Fails
/// The returned parser never fails. It can still error.
///
/// # Example
/// ```rust
/// use morsel::combinator::maybe;
/// use morsel::prim::token;
/// use morsel::{Parser as _, Stream as _, StrStream};
///
/// let span1 = StrStream::new("-x");
/// let span2 = StrStream::new("x");
///
/// let comb = maybe(token('-'));
/// assert_eq!(comb.parse(span1).unwrap(), (span1.next(), Some('-')));
/// assert_eq!(comb.parse(span2).unwrap(), (span2, None));
/// ```
#[inline]
pub const fn maybe<P>(parser: P) -> Maybe<P> { Maybe { parser } }

/// The parser returned by [`maybe()`].
#[derive(Clone, Copy, Debug)]
pub struct Maybe<P> {
    /// The parser made optional.
    parser: P,
}
impl<S: Stream, P: Parser<S>> Parser<S> for Maybe<P> {
    type Output = Option<P::Output>;

    fn parse(&self, input: S) -> Reply<S, Option<P::Output>> {
        match self.parser.parse(input.clone()) {
            Reply::Success { rest, value, messages } => Reply::Success { rest, value: Some(value), messages },
            Reply::Failure { messages, .. } => Reply::Success { rest: input, value: None, messages },
            Reply::Error { rest, fatal, messages } => Reply::Error { rest, fatal, messages },
        }
    }
}



/// Positive lookahead: asserts that a parser matches without consuming input.
///
/// On success of the inner parser, the result is kept but the stream is re-anchored to the input.
/// On failure, the assertion itself is violated, which is reported as an unrecoverable error with
/// a default text; see [`followed_by_msg()`] to choose the text. Errors propagate unchanged.
///
/// # Arguments
/// - `parser`: The parser that must match ahead.
///
/// # Returns
/// A [`FollowedBy`]-parser yielding the inner result without consuming.
///
/// # Example
/// ```rust
/// use morsel::combinator::followed_by;
/// use morsel::prim::token;
/// use morsel::{Parser as _, StrStream};
///
/// let span = StrStream::new("a");
/// let (rest, value) = followed_by(token('a')).parse(span).unwrap();
/// assert_eq!(value, 'a');
/// assert_eq!(rest, span);
/// assert!(followed_by(token('b')).parse(span).is_error());
/// ```
#[inline]
pub fn followed_by<P>(parser: P) -> FollowedBy<P> { FollowedBy { parser, text: DEFAULT_LOOKAHEAD_TEXT.into() } }

/// Positive lookahead with a caller-chosen diagnostic text.
///
/// See [`followed_by()`].
#[inline]
pub fn followed_by_msg<P>(parser: P, text: impl Into<String>) -> FollowedBy<P> { FollowedBy { parser, text: text.into() } }

/// The parser returned by [`followed_by()`] and [`followed_by_msg()`].
#[derive(Clone, Debug)]
pub struct FollowedBy<P> {
    /// The parser that must match ahead.
    parser: P,
    /// The text of the diagnostic raised when it does not.
    text: String,
}
impl<S: Stream, P: Parser<S>> Parser<S> for FollowedBy<P> {
    type Output = P::Output;

    fn parse(&self, input: S) -> Reply<S, P::Output> {
        match self.parser.parse(input.clone()) {
            Reply::Success { value, messages, .. } => Reply::Success { rest: input, value, messages },
            Reply::Failure { messages, .. } => {
                let at = input.position();
                Reply::Error { fatal: ErrorMessage::point(Severity::Error, self.text.clone(), at), rest: input, messages }
            },
            error @ Reply::Error { .. } => error,
        }
    }
}



/// Negative lookahead: succeeds without consuming iff the given parser does not match.
///
/// A success of the inner parser demotes to a recoverable failure at the input (not an error), so
/// the complement composes with alternation and is its own inverse: `not(not(p))` succeeds
/// exactly when `p` would, still consuming nothing. Errors propagate unchanged.
///
/// # Arguments
/// - `parser`: The parser that must not match ahead.
///
/// # Returns
/// A [`NotFollowedBy`]-parser yielding `()`.
///
/// # Fails
/// The returned parser fails iff the inner parser matches.
///
/// # Example
/// ```rust
/// use morsel::combinator::not_followed_by;
/// use morsel::prim::token;
/// use morsel::{Parser as _, StrStream};
///
/// let span = StrStream::new("b");
/// let comb = not_followed_by(token('a'));
/// assert_eq!(comb.parse(span).unwrap(), (span, ()));
/// assert!(not_followed_by(token('b')).parse(span).is_failure());
/// ```
#[inline]
pub const fn not_followed_by<P>(parser: P) -> NotFollowedBy<P> { NotFollowedBy { parser } }

/// Boolean complement of a parser; alias of [`not_followed_by()`].
#[inline]
pub const fn not<P>(parser: P) -> NotFollowedBy<P> { not_followed_by(parser) }

/// The parser returned by [`not_followed_by()`] and [`not()`].
#[derive(Clone, Copy, Debug)]
pub struct NotFollowedBy<P> {
    /// The parser that must not match ahead.
    parser: P,
}
impl<S: Stream, P: Parser<S>> Parser<S> for NotFollowedBy<P> {
    type Output = ();

    fn parse(&self, input: S) -> Reply<S, ()> {
        match self.parser.parse(input.clone()) {
            Reply::Success { messages, .. } => Reply::Failure { rest: input, messages },
            Reply::Failure { messages, .. } => Reply::Success { rest: input, value: (), messages },
            Reply::Error { rest, fatal, messages } => Reply::Error { rest, fatal, messages },
        }
    }
}





/***** TESTS *****/
