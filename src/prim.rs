//  PRIM.rs
//    by Lut99
//
//  Created:
//    12 Mar 2025, 14:20:48
//  Last edited:
//    21 Jul 2025, 13:58:27
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines the primitive parsers out of which everything else is
//!   composed.
//

use std::marker::PhantomData;

use crate::message::{ErrorMessage, Severity};
use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;


/***** LIBRARY *****/
/// Parser that consumes nothing and yields the given value.
///
/// # Arguments
/// - `value`: The value to yield. Cloned for every application.
///
/// # Returns
/// A [`Succeed`]-parser that always succeeds.
///
/// # Fails
/// This parser never fails.
///
/// # Example
/// ```rust
/// use morsel::prim::succeed;
/// use morsel::{Parser as _, StrStream};
///
/// let span = StrStream::new("abc");
/// assert_eq!(succeed(42).parse(span).unwrap(), (span, 42));
/// ```
#[inline]
pub const fn succeed<R: Clone>(value: R) -> Succeed<R> { Succeed { value } }

/// The parser returned by [`succeed()`].
#[derive(Clone, Copy, Debug)]
pub struct Succeed<R> {
    /// The value yielded on every application.
    value: R,
}
impl<S: Stream, R: Clone> Parser<S> for Succeed<R> {
    type Output = R;

    #[inline]
    fn parse(&self, input: S) -> Reply<S, R> { Reply::Success { rest: input, value: self.value.clone(), messages: Vec::new() } }
}



/// Parser that consumes nothing and always fails, recoverably.
///
/// This is the identity of alternation: `or(fail(), p)` behaves as `p`.
///
/// # Returns
/// A [`Fail`]-parser that always fails.
///
/// # Example
/// ```rust
/// use morsel::prim::fail;
/// use morsel::{Parser as _, StrStream};
///
/// assert!(fail::<char>().parse(StrStream::new("abc")).is_failure());
/// ```
#[inline]
pub const fn fail<R>() -> Fail<R> { Fail { _output: PhantomData } }

/// The parser returned by [`fail()`].
#[derive(Clone, Copy, Debug)]
pub struct Fail<R> {
    _output: PhantomData<fn() -> R>,
}
impl<S: Stream, R> Parser<S> for Fail<R> {
    type Output = R;

    #[inline]
    fn parse(&self, input: S) -> Reply<S, R> { Reply::Failure { rest: input, messages: Vec::new() } }
}



/// Parser that consumes nothing and raises an unrecoverable error.
///
/// The produced [`Reply::Error`]'s fatal message has [`Severity::Error`] and a point span at the
/// input position. Alternation will not try other branches past this reply; see
/// [`rescue()`](crate::rescue::rescue()) for the way back.
///
/// # Arguments
/// - `text`: The text of the fatal diagnostic.
///
/// # Returns
/// A [`Raise`]-parser that always errors.
///
/// # Example
/// ```rust
/// use morsel::prim::error;
/// use morsel::{Parser as _, Severity, Stream as _, StrStream};
///
/// let fatal = error::<char>("unsupported construct").parse(StrStream::new("abc").next()).unwrap_fatal();
/// assert_eq!(fatal.severity(), Severity::Error);
/// assert_eq!(fatal.text(), "unsupported construct");
/// assert_eq!((fatal.begin(), fatal.end()), (&1, &1));
/// ```
#[inline]
pub fn error<R>(text: impl Into<String>) -> Raise<R> { Raise { severity: Severity::Error, text: text.into(), _output: PhantomData } }

/// Parser that consumes nothing and raises an unrecoverable error of [`Severity::Warn`].
///
/// See [`error()`] for the general shape. The reply is still a [`Reply::Error`]; the severity
/// only classifies the fatal message, which matters to severity-filtered
/// [`rescue_only()`](crate::rescue::rescue_only()).
#[inline]
pub fn warn<R>(text: impl Into<String>) -> Raise<R> { Raise { severity: Severity::Warn, text: text.into(), _output: PhantomData } }

/// Parser that consumes nothing and raises an unrecoverable error of [`Severity::Message`].
///
/// See [`error()`] for the general shape.
#[inline]
pub fn message<R>(text: impl Into<String>) -> Raise<R> { Raise { severity: Severity::Message, text: text.into(), _output: PhantomData } }

/// The parser returned by [`error()`], [`warn()`] and [`message()`].
#[derive(Clone, Debug)]
pub struct Raise<R> {
    /// The severity of the raised diagnostic.
    severity: Severity,
    /// The text of the raised diagnostic.
    text: String,
    _output: PhantomData<fn() -> R>,
}
impl<S: Stream, R> Parser<S> for Raise<R> {
    type Output = R;

    #[inline]
    fn parse(&self, input: S) -> Reply<S, R> {
        let at = input.position();
        Reply::Error { fatal: ErrorMessage::point(self.severity, self.text.clone(), at), rest: input, messages: Vec::new() }
    }
}



/// Parser that matches the end of the input.
///
/// # Returns
/// An [`Eof`]-parser yielding `()`.
///
/// # Fails
/// The parser fails if any token remains.
///
/// # Example
/// ```rust
/// use morsel::prim::eof;
/// use morsel::{Parser as _, Stream as _, StrStream};
///
/// let span = StrStream::new("a");
/// assert!(eof().parse(span).is_failure());
/// assert_eq!(eof().parse(span.next()).unwrap(), (span.next(), ()));
/// ```
#[inline]
pub const fn eof() -> Eof { Eof }

/// The parser returned by [`eof()`].
#[derive(Clone, Copy, Debug)]
pub struct Eof;
impl<S: Stream> Parser<S> for Eof {
    type Output = ();

    #[inline]
    fn parse(&self, input: S) -> Reply<S, ()> {
        if !input.can_next() {
            Reply::Success { rest: input, value: (), messages: Vec::new() }
        } else {
            Reply::Failure { rest: input, messages: Vec::new() }
        }
    }
}



/// Parser that consumes exactly one token, whatever it is.
///
/// # Returns
/// An [`Any`]-parser yielding the consumed token.
///
/// # Fails
/// The parser fails at end-of-input.
///
/// # Example
/// ```rust
/// use morsel::prim::any;
/// use morsel::{Parser as _, Stream as _, StrStream};
///
/// let span = StrStream::new("ab");
/// assert_eq!(any().parse(span).unwrap(), (span.next(), 'a'));
/// assert!(any().parse(StrStream::new("")).is_failure());
/// ```
#[inline]
pub const fn any() -> Any { Any }

/// The parser returned by [`any()`].
#[derive(Clone, Copy, Debug)]
pub struct Any;
impl<S: Stream> Parser<S> for Any {
    type Output = S::Token;

    #[inline]
    fn parse(&self, input: S) -> Reply<S, S::Token> {
        match input.current() {
            Some(token) => Reply::Success { rest: input.next(), value: token, messages: Vec::new() },
            None => Reply::Failure { rest: input, messages: Vec::new() },
        }
    }
}



/// Parser that consumes one token if it satisfies the given predicate.
///
/// # Arguments
/// - `pred`: The predicate deciding whether the current token matches.
///
/// # Returns
/// A [`Satisfy`]-parser yielding the consumed token.
///
/// # Fails
/// The parser fails, never errors, if the predicate rejects the token or the input is at its end.
/// The failure's stream is the input stream, position unchanged.
///
/// # Example
/// ```rust
/// use morsel::prim::satisfy;
/// use morsel::{Parser as _, Stream as _, StrStream};
///
/// let span1 = StrStream::new("7a");
/// let span2 = StrStream::new("a7");
///
/// let comb = satisfy(|c: &char| c.is_ascii_digit());
/// assert_eq!(comb.parse(span1).unwrap(), (span1.next(), '7'));
/// let reply = comb.parse(span2);
/// assert!(reply.is_failure());
/// assert_eq!(reply.rest().position(), 0);
/// ```
#[inline]
pub const fn satisfy<F>(pred: F) -> Satisfy<F> { Satisfy { pred } }

/// The parser returned by [`satisfy()`].
#[derive(Clone, Copy, Debug)]
pub struct Satisfy<F> {
    /// The predicate that tokens must pass.
    pred: F,
}
impl<S: Stream, F: Fn(&S::Token) -> bool> Parser<S> for Satisfy<F> {
    type Output = S::Token;

    #[inline]
    fn parse(&self, input: S) -> Reply<S, S::Token> {
        match input.current() {
            Some(token) if (self.pred)(&token) => Reply::Success { rest: input.next(), value: token, messages: Vec::new() },
            _ => Reply::Failure { rest: input, messages: Vec::new() },
        }
    }
}



/// Parser that consumes one token if it equals the given one.
///
/// Convenience form of [`satisfy()`] for token types with equality.
///
/// # Arguments
/// - `token`: The token to match.
///
/// # Returns
/// A [`Token`]-parser yielding the consumed token.
///
/// # Fails
/// The parser fails if the current token differs or the input is at its end.
///
/// # Example
/// ```rust
/// use morsel::prim::token;
/// use morsel::{Parser as _, Stream as _, StrStream};
///
/// let span1 = StrStream::new("ab");
/// let span2 = StrStream::new("ba");
///
/// assert_eq!(token('a').parse(span1).unwrap(), (span1.next(), 'a'));
/// assert!(token('a').parse(span2).is_failure());
/// ```
#[inline]
pub const fn token<T>(token: T) -> Token<T> { Token { token } }

/// The parser returned by [`token()`].
#[derive(Clone, Copy, Debug)]
pub struct Token<T> {
    /// The token to match against the stream.
    token: T,
}
impl<S: Stream<Token = T>, T: PartialEq> Parser<S> for Token<T> {
    type Output = T;

    #[inline]
    fn parse(&self, input: S) -> Reply<S, T> {
        match input.current() {
            Some(token) if token == self.token => Reply::Success { rest: input.next(), value: token, messages: Vec::new() },
            _ => Reply::Failure { rest: input, messages: Vec::new() },
        }
    }
}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::{SliceStream, StrStream};

    #[test]
    fn test_succeed_consumes_nothing() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let span = StrStream::new("abc");
        let (rest, value) = succeed("ok").parse(span).unwrap();
        assert_eq!(rest, span);
        assert_eq!(value, "ok");
    }

    #[test]
    fn test_fail_is_recoverable_and_empty() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let reply = fail::<char>().parse(StrStream::new("abc"));
        assert!(reply.is_failure());
        assert!(reply.messages().is_empty());
        assert_eq!(reply.rest().position(), 0);
    }

    #[test]
    fn test_raise_severities() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let span = StrStream::new("abc");
        assert_eq!(error::<()>("e").parse(span).unwrap_fatal().severity(), Severity::Error);
        assert_eq!(warn::<()>("w").parse(span).unwrap_fatal().severity(), Severity::Warn);
        assert_eq!(message::<()>("m").parse(span).unwrap_fatal().severity(), Severity::Message);
    }

    #[test]
    fn test_satisfy_hit_advances_miss_stays() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let comb = satisfy(|c: &char| *c == 'x');
        let hit = StrStream::new("xy");
        assert_eq!(comb.parse(hit).unwrap(), (hit.next(), 'x'));

        let miss = StrStream::new("yx");
        let reply = comb.parse(miss);
        assert!(reply.is_failure());
        assert_eq!(*reply.rest(), miss);
    }

    #[test]
    fn test_token_over_slices() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let tokens = [10, 20];
        let span = SliceStream::new(&tokens);
        assert_eq!(token(10).parse(span).unwrap().1, 10);
        assert!(token(20).parse(span).is_failure());
    }

    #[test]
    fn test_eof_only_at_end() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let span = StrStream::new("a");
        assert!(eof().parse(span).is_failure());
        assert!(eof().parse(span.next()).is_success());
    }
}
