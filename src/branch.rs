//  BRANCH.rs
//    by Lut99
//
//  Created:
//    13 Mar 2025, 10:06:11
//  Last edited:
//    22 Jul 2025, 09:30:17
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines deterministic, first-match alternation combinators.
//

use paste::paste;

use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;


/***** LIBRARY *****/
/// Tries the first parser; if it fails, tries the second on the same input.
///
/// This is the defining predictive rule of the library: a branch that _fails_ is recovered from,
/// a branch that _errors_ is not. Every branch is applied to the alternation's own input stream,
/// so a branch that consumed input before failing does not affect the next one. Diagnostics from
/// failed branches are carried into the returned reply.
///
/// # Arguments
/// - `first`: The parser to try first.
/// - `second`: The parser to try if `first` fails.
///
/// # Returns
/// An [`Or`]-parser yielding whichever branch succeeded.
///
/// # Fails
/// The returned parser fails if both branches fail.
///
/// # Example
/// ```rust
/// use morsel::branch::or;
/// use morsel::prim::token;
/// use morsel::{Parser as _, StrStream};
///
/// let span1 = StrStream::new("a");
/// let span2 = StrStream::new("b");
/// let span3 = StrStream::new("c");
///
/// let comb = or(token('a'), token('b'));
/// assert_eq!(comb.parse(span1).unwrap().1, 'a');
/// assert_eq!(comb.parse(span2).unwrap().1, 'b');
/// let reply = comb.parse(span3);
/// assert!(reply.is_failure());
/// assert!(reply.messages().is_empty());
/// ```
#[inline]
pub const fn or<P, Q>(first: P, second: Q) -> Or<P, Q> { Or { first, second } }

/// The parser returned by [`or()`].
#[derive(Clone, Copy, Debug)]
pub struct Or<P, Q> {
    /// The branch tried first.
    first: P,
    /// The branch tried if the first fails.
    second: Q,
}
impl<S: Stream, R, P: Parser<S, Output = R>, Q: Parser<S, Output = R>> Parser<S> for Or<P, Q> {
    type Output = R;

    fn parse(&self, input: S) -> Reply<S, R> {
        match self.first.parse(input.clone()) {
            Reply::Failure { messages: mut acc, .. } => {
                #[cfg(feature = "log")]
                log::trace!("first branch failed; trying second");
                match self.second.parse(input) {
                    Reply::Success { rest, value, messages } => {
                        acc.extend(messages);
                        Reply::Success { rest, value, messages: acc }
                    },
                    Reply::Failure { rest, messages } => {
                        acc.extend(messages);
                        Reply::Failure { rest, messages: acc }
                    },
                    Reply::Error { rest, fatal, messages } => {
                        acc.extend(messages);
                        Reply::Error { rest, fatal, messages: acc }
                    },
                }
            },
            other => other,
        }
    }
}



/// Tries each parser in a tuple in order, returning the first success.
///
/// The tuple may mix parsers of different types as long as they produce the same output. The
/// first branch that succeeds or errors wins; failures fall through to the next branch, their
/// diagnostics accumulating into the final reply.
///
/// # Arguments
/// - `branches`: A tuple of parsers (any arity up to eight).
///
/// # Returns
/// An [`Alt`]-parser yielding the winning branch's result.
///
/// # Fails
/// The returned parser fails if every branch fails, with the stream at the alternation's input.
///
/// # Example
/// ```rust
/// use morsel::branch::alt;
/// use morsel::prim::{satisfy, token};
/// use morsel::{Parser as _, StrStream};
///
/// let comb = alt((token('!'), satisfy(|c: &char| c.is_ascii_digit()), token('?')));
/// assert_eq!(comb.parse(StrStream::new("7")).unwrap().1, '7');
/// assert_eq!(comb.parse(StrStream::new("?")).unwrap().1, '?');
/// assert!(comb.parse(StrStream::new("x")).is_failure());
/// ```
#[inline]
pub const fn alt<B>(branches: B) -> Alt<B> { Alt { branches } }

/// The parser returned by [`alt()`].
#[derive(Clone, Copy, Debug)]
pub struct Alt<B> {
    /// The tuple of branches to try in order.
    branches: B,
}

/// Implements [`Parser`] for [`Alt`] over a tuple of the given arity.
macro_rules! alt_impl {
    ($($P:ident),+) => {
        paste! {
            impl<S: Stream, R, $($P: Parser<S, Output = R>),+> Parser<S> for Alt<($($P,)+)> {
                type Output = R;

                fn parse(&self, input: S) -> Reply<S, R> {
                    let ($([<$P:lower>],)+) = &self.branches;
                    let mut messages = Vec::new();
                    $(
                        match [<$P:lower>].parse(input.clone()) {
                            Reply::Failure { messages: tail, .. } => {
                                #[cfg(feature = "log")]
                                log::trace!(concat!("branch ", stringify!([<$P:lower>]), " failed; trying next"));
                                messages.extend(tail);
                            },
                            Reply::Success { rest, value, messages: tail } => {
                                messages.extend(tail);
                                return Reply::Success { rest, value, messages };
                            },
                            Reply::Error { rest, fatal, messages: tail } => {
                                messages.extend(tail);
                                return Reply::Error { rest, fatal, messages };
                            },
                        }
                    )+
                    Reply::Failure { rest: input, messages }
                }
            }
        }
    };
}
alt_impl!(P1);
alt_impl!(P1, P2);
alt_impl!(P1, P2, P3);
alt_impl!(P1, P2, P3, P4);
alt_impl!(P1, P2, P3, P4, P5);
alt_impl!(P1, P2, P3, P4, P5, P6);
alt_impl!(P1, P2, P3, P4, P5, P6, P7);
alt_impl!(P1, P2, P3, P4, P5, P6, P7, P8);



/// Tries each parser in a vector in order, returning the first success.
///
/// The runtime-sized sibling of [`alt()`], typically used with
/// [`BoxedParser`](crate::parser::BoxedParser)s for branches of different shapes. An empty vector
/// behaves as [`fail()`](crate::prim::fail()).
///
/// # Arguments
/// - `parsers`: The branches to try, in order.
///
/// # Returns
/// A [`Choice`]-parser yielding the winning branch's result.
///
/// # Fails
/// The returned parser fails if every branch fails (in particular, if there are none).
///
/// # Example
/// ```rust
/// use morsel::branch::choice;
/// use morsel::parser::{BoxableParser as _, BoxedParser};
/// use morsel::prim::token;
/// use morsel::{Parser as _, StrStream};
///
/// let comb = choice(vec![token('a').boxed(), token('b').boxed()]);
/// assert_eq!(comb.parse(StrStream::new("b")).unwrap().1, 'b');
///
/// let empty: morsel::branch::Choice<BoxedParser<StrStream, char>> = choice(vec![]);
/// assert!(empty.parse(StrStream::new("a")).is_failure());
/// ```
#[inline]
pub const fn choice<P>(parsers: Vec<P>) -> Choice<P> { Choice { parsers } }

/// The parser returned by [`choice()`].
#[derive(Debug)]
pub struct Choice<P> {
    /// The branches to try in order.
    parsers: Vec<P>,
}
impl<S: Stream, P: Parser<S>> Parser<S> for Choice<P> {
    type Output = P::Output;

    fn parse(&self, input: S) -> Reply<S, P::Output> {
        let mut messages = Vec::new();
        for parser in &self.parsers {
            match parser.parse(input.clone()) {
                Reply::Failure { messages: tail, .. } => {
                    #[cfg(feature = "log")]
                    log::trace!("branch failed; trying next");
                    messages.extend(tail);
                },
                Reply::Success { rest, value, messages: tail } => {
                    messages.extend(tail);
                    return Reply::Success { rest, value, messages };
                },
                Reply::Error { rest, fatal, messages: tail } => {
                    messages.extend(tail);
                    return Reply::Error { rest, fatal, messages };
                },
            }
        }
        Reply::Failure { rest: input, messages }
    }
}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::prim::{error, fail, token};
    use crate::sequence::right;
    use crate::stream::StrStream;

    #[test]
    fn test_unmatched_alternatives_scenario() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let reply = or(token('a'), token('b')).parse(StrStream::new("c"));
        assert!(reply.is_failure());
        assert_eq!(reply.rest().position(), 0);
        assert!(reply.messages().is_empty());
    }

    #[test]
    fn test_failed_branch_restores_position_scenario() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        // The first branch consumes 'i' before failing on 'f'; the second branch must still see
        // the input from the very start.
        let comb = or(right(token('i'), right(token('f'), token(' '))), token('i'));
        let (rest, value) = comb.parse(StrStream::new("in")).unwrap();
        assert_eq!(value, 'i');
        assert_eq!(rest.position(), 1);
    }

    #[test]
    fn test_fail_is_alternation_identity() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        for source in ["a", "b", ""] {
            let span = StrStream::new(source);
            assert_eq!(or(fail(), token('a')).parse(span), token('a').parse(span));
            assert_eq!(or(token('a'), fail()).parse(span), token('a').parse(span));
        }
    }

    #[test]
    fn test_error_short_circuits() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let span = StrStream::new("b");
        let reply = or(error("broken"), token('b')).parse(span);
        assert!(reply.is_error());
        assert_eq!(reply.fatal().unwrap().text(), "broken");

        // And the same through alt and choice
        assert!(alt((error("broken"), token('b'))).parse(span).is_error());
    }

    #[test]
    fn test_alt_first_match_wins() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        // 'a' matches both branches; the first one decides
        let comb = alt((right(token('a'), token('x')), token('a')));
        let (rest, value) = comb.parse(StrStream::new("ab")).unwrap();
        assert_eq!(value, 'a');
        assert_eq!(rest.position(), 1);
    }

    #[test]
    fn test_choice_empty_fails() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let comb: Choice<crate::parser::BoxedParser<StrStream, char>> = choice(vec![]);
        let reply = comb.parse(StrStream::new("a"));
        assert!(reply.is_failure());
        assert!(reply.messages().is_empty());
    }

    #[test]
    fn test_failure_messages_accumulate() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        use crate::rescue::rescue;

        // A rescued error leaves its diagnostic behind as a failure message; the next branch's
        // success must still carry it.
        let comb = or(rescue(error("first branch broken")), token('b'));
        let reply = comb.parse(StrStream::new("b"));
        assert!(reply.is_success());
        assert_eq!(reply.messages().len(), 1);
        assert_eq!(reply.messages()[0].text(), "first branch broken");
    }
}
