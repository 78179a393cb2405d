//  SEQUENCE.rs
//    by Lut99
//
//  Created:
//    12 Mar 2025, 15:49:33
//  Last edited:
//    22 Jul 2025, 09:12:40
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines combinators that run parsers one after another.
//

use paste::paste;

use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;


/***** LIBRARY *****/
/// Monadic sequencing: runs a parser, then a parser computed from its result.
///
/// The second parser runs on the stream left behind by the first. The returned reply takes its
/// variant and stream from the second parser; the diagnostics of both are concatenated. If the
/// _first_ parser fails or errors, the reply's stream is reset to the input handed to `bind`, so
/// a caller cannot tell whether any input was inspected.
///
/// # Arguments
/// - `parser`: The first parser to run.
/// - `kleisli`: A function from the first parser's result to the second parser.
///
/// # Returns
/// A [`Bind`]-parser yielding whatever the second parser yields.
///
/// # Fails
/// The returned parser fails if either parser fails.
///
/// # Example
/// ```rust
/// use morsel::prim::{any, token};
/// use morsel::sequence::bind;
/// use morsel::{Parser as _, Stream as _, StrStream};
///
/// // Parse any character, then expect the same character again
/// let doubled = bind(any(), |c| token(c));
/// let span1 = StrStream::new("aa");
/// let span2 = StrStream::new("ab");
///
/// assert_eq!(doubled.parse(span1).unwrap(), (span1.next().next(), 'a'));
/// assert!(doubled.parse(span2).is_failure());
/// ```
#[inline]
pub const fn bind<P, F>(parser: P, kleisli: F) -> Bind<P, F> { Bind { parser, kleisli } }

/// The parser returned by [`bind()`].
#[derive(Clone, Copy, Debug)]
pub struct Bind<P, F> {
    /// The first parser to run.
    parser: P,
    /// The function producing the second parser.
    kleisli: F,
}
impl<S: Stream, P: Parser<S>, Q: Parser<S>, F: Fn(P::Output) -> Q> Parser<S> for Bind<P, F> {
    type Output = Q::Output;

    fn parse(&self, input: S) -> Reply<S, Q::Output> {
        match self.parser.parse(input.clone()) {
            Reply::Success { rest, value, mut messages } => match (self.kleisli)(value).parse(rest) {
                Reply::Success { rest, value, messages: tail } => {
                    messages.extend(tail);
                    Reply::Success { rest, value, messages }
                },
                Reply::Failure { rest, messages: tail } => {
                    messages.extend(tail);
                    Reply::Failure { rest, messages }
                },
                Reply::Error { rest, fatal, messages: tail } => {
                    messages.extend(tail);
                    Reply::Error { rest, fatal, messages }
                },
            },
            Reply::Failure { messages, .. } => Reply::Failure { rest: input, messages },
            Reply::Error { fatal, messages, .. } => Reply::Error { rest: input, fatal, messages },
        }
    }
}



/// Runs two parsers in order, keeping the left result.
///
/// Equivalent to `bind(first, |x| map(second, move |_| x))`, including its stream discipline: a
/// failure of `second` surfaces with the stream as it was after `first`.
///
/// # Example
/// ```rust
/// use morsel::prim::token;
/// use morsel::sequence::left;
/// use morsel::{Parser as _, Stream as _, StrStream};
///
/// let span = StrStream::new("a;");
/// let comb = left(token('a'), token(';'));
/// assert_eq!(comb.parse(span).unwrap(), (span.next().next(), 'a'));
/// assert!(comb.parse(StrStream::new("a!")).is_failure());
/// ```
#[inline]
pub const fn left<P, Q>(first: P, second: Q) -> Left<P, Q> { Left { first, second } }

/// The parser returned by [`left()`].
#[derive(Clone, Copy, Debug)]
pub struct Left<P, Q> {
    /// The parser whose result is kept.
    first: P,
    /// The parser whose result is discarded.
    second: Q,
}
impl<S: Stream, P: Parser<S>, Q: Parser<S>> Parser<S> for Left<P, Q> {
    type Output = P::Output;

    fn parse(&self, input: S) -> Reply<S, P::Output> {
        match self.first.parse(input.clone()) {
            Reply::Success { rest: mid, value, mut messages } => match self.second.parse(mid.clone()) {
                Reply::Success { rest, messages: tail, .. } => {
                    messages.extend(tail);
                    Reply::Success { rest, value, messages }
                },
                Reply::Failure { messages: tail, .. } => {
                    messages.extend(tail);
                    Reply::Failure { rest: mid, messages }
                },
                Reply::Error { fatal, messages: tail, .. } => {
                    messages.extend(tail);
                    Reply::Error { rest: mid, fatal, messages }
                },
            },
            Reply::Failure { messages, .. } => Reply::Failure { rest: input, messages },
            Reply::Error { fatal, messages, .. } => Reply::Error { rest: input, fatal, messages },
        }
    }
}



/// Runs two parsers in order, keeping the right result.
///
/// Equivalent to `bind(first, |_| second)`: the second parser's reply is passed through with its
/// own variant and stream, only extended with the first parser's diagnostics.
///
/// # Example
/// ```rust
/// use morsel::prim::token;
/// use morsel::sequence::right;
/// use morsel::{Parser as _, Stream as _, StrStream};
///
/// let span = StrStream::new("-7");
/// let comb = right(token('-'), token('7'));
/// assert_eq!(comb.parse(span).unwrap(), (span.next().next(), '7'));
/// ```
#[inline]
pub const fn right<P, Q>(first: P, second: Q) -> Right<P, Q> { Right { first, second } }

/// The parser returned by [`right()`].
#[derive(Clone, Copy, Debug)]
pub struct Right<P, Q> {
    /// The parser whose result is discarded.
    first: P,
    /// The parser whose result is kept.
    second: Q,
}
impl<S: Stream, P: Parser<S>, Q: Parser<S>> Parser<S> for Right<P, Q> {
    type Output = Q::Output;

    fn parse(&self, input: S) -> Reply<S, Q::Output> {
        match self.first.parse(input.clone()) {
            Reply::Success { rest, mut messages, .. } => match self.second.parse(rest) {
                Reply::Success { rest, value, messages: tail } => {
                    messages.extend(tail);
                    Reply::Success { rest, value, messages }
                },
                Reply::Failure { rest, messages: tail } => {
                    messages.extend(tail);
                    Reply::Failure { rest, messages }
                },
                Reply::Error { rest, fatal, messages: tail } => {
                    messages.extend(tail);
                    Reply::Error { rest, fatal, messages }
                },
            },
            Reply::Failure { messages, .. } => Reply::Failure { rest: input, messages },
            Reply::Error { fatal, messages, .. } => Reply::Error { rest: input, fatal, messages },
        }
    }
}



/// Runs two parsers in order, pairing their results.
///
/// # Example
/// ```rust
/// use morsel::prim::{any, token};
/// use morsel::sequence::both;
/// use morsel::{Parser as _, StrStream};
///
/// let comb = both(token('<'), any());
/// assert_eq!(comb.parse(StrStream::new("<x")).unwrap().1, ('<', 'x'));
/// ```
#[inline]
pub const fn both<P, Q>(first: P, second: Q) -> Both<P, Q> { Both { first, second } }

/// The parser returned by [`both()`].
#[derive(Clone, Copy, Debug)]
pub struct Both<P, Q> {
    /// The parser producing the left half of the pair.
    first: P,
    /// The parser producing the right half of the pair.
    second: Q,
}
impl<S: Stream, P: Parser<S>, Q: Parser<S>> Parser<S> for Both<P, Q> {
    type Output = (P::Output, Q::Output);

    fn parse(&self, input: S) -> Reply<S, (P::Output, Q::Output)> {
        match self.first.parse(input.clone()) {
            Reply::Success { rest: mid, value: first, mut messages } => match self.second.parse(mid.clone()) {
                Reply::Success { rest, value: second, messages: tail } => {
                    messages.extend(tail);
                    Reply::Success { rest, value: (first, second), messages }
                },
                Reply::Failure { messages: tail, .. } => {
                    messages.extend(tail);
                    Reply::Failure { rest: mid, messages }
                },
                Reply::Error { fatal, messages: tail, .. } => {
                    messages.extend(tail);
                    Reply::Error { rest: mid, fatal, messages }
                },
            },
            Reply::Failure { messages, .. } => Reply::Failure { rest: input, messages },
            Reply::Error { fatal, messages, .. } => Reply::Error { rest: input, fatal, messages },
        }
    }
}



/// Runs a parser between two delimiter parsers, keeping only the middle result.
///
/// Defined as `right(open, left(parser, close))`.
///
/// # Example
/// ```rust
/// use morsel::prim::token;
/// use morsel::sequence::between;
/// use morsel::{Parser as _, Stream as _, StrStream};
///
/// let span1 = StrStream::new("(x)");
/// let span2 = StrStream::new("(x!");
///
/// let comb = between(token('x'), token('('), token(')'));
/// let (rest, value) = comb.parse(span1).unwrap();
/// assert_eq!(value, 'x');
/// assert_eq!(rest.position(), 3);
/// assert!(comb.parse(span2).is_failure());
/// ```
#[inline]
pub const fn between<P, L, R>(parser: P, open: L, close: R) -> Right<L, Left<P, R>> { right(open, left(parser, close)) }



/// N-ary sequencing with a projection.
///
/// Takes a tuple of parsers (any arity up to eight) and a function over all their results; the
/// parsers run in order and the function combines their values. A failure or error at step `k`
/// surfaces with the stream as it was before step `k`, mirroring the equivalent nest of
/// [`bind()`]s.
///
/// # Arguments
/// - `parsers`: A tuple of the parsers to run, in order.
/// - `project`: The function combining all results into one.
///
/// # Returns
/// A [`Pipe`]-parser yielding the projection's result.
///
/// # Fails
/// The returned parser fails if any of the given parsers fails.
///
/// # Example
/// ```rust
/// use morsel::prim::{satisfy, token};
/// use morsel::sequence::pipe;
/// use morsel::{Parser as _, Stream as _, StrStream};
///
/// let digit = || satisfy(|c: &char| c.is_ascii_digit());
/// let comb = pipe((digit(), token(':'), digit()), |h, _, m| (h, m));
/// let span = StrStream::new("9:5");
/// let (rest, value) = comb.parse(span).unwrap();
/// assert_eq!(value, ('9', '5'));
/// assert_eq!(rest.position(), 3);
/// ```
#[inline]
pub const fn pipe<T, F>(parsers: T, project: F) -> Pipe<T, F> { Pipe { parsers, project } }

/// The parser returned by [`pipe()`].
#[derive(Clone, Copy, Debug)]
pub struct Pipe<T, F> {
    /// The tuple of parsers to run in order.
    parsers: T,
    /// The function combining all results.
    project: F,
}

/// Implements [`Parser`] for [`Pipe`] over a tuple of the given arity.
macro_rules! pipe_impl {
    ($($P:ident),+) => {
        paste! {
            impl<S: Stream, OUT, FUN, $($P: Parser<S>),+> Parser<S> for Pipe<($($P,)+), FUN>
            where
                FUN: Fn($($P::Output),+) -> OUT,
            {
                type Output = OUT;

                fn parse(&self, input: S) -> Reply<S, OUT> {
                    let ($([<$P:lower>],)+) = &self.parsers;
                    let mut messages = Vec::new();
                    let mut cur = input;
                    $(
                        let [<value_ $P:lower>] = match [<$P:lower>].parse(cur.clone()) {
                            Reply::Success { rest, value, messages: tail } => {
                                messages.extend(tail);
                                cur = rest;
                                value
                            },
                            Reply::Failure { messages: tail, .. } => {
                                messages.extend(tail);
                                return Reply::Failure { rest: cur, messages };
                            },
                            Reply::Error { fatal, messages: tail, .. } => {
                                messages.extend(tail);
                                return Reply::Error { rest: cur, fatal, messages };
                            },
                        };
                    )+
                    Reply::Success { rest: cur, value: (self.project)($([<value_ $P:lower>]),+), messages }
                }
            }
        }
    };
}
pipe_impl!(P1, P2);
pipe_impl!(P1, P2, P3);
pipe_impl!(P1, P2, P3, P4);
pipe_impl!(P1, P2, P3, P4, P5);
pipe_impl!(P1, P2, P3, P4, P5, P6);
pipe_impl!(P1, P2, P3, P4, P5, P6, P7);
pipe_impl!(P1, P2, P3, P4, P5, P6, P7, P8);





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::prim::{any, fail, satisfy, succeed, token};
    use crate::stream::StrStream;

    fn digit() -> impl Parser<StrStream<'static>, Output = char> + Copy { satisfy(|c: &char| c.is_ascii_digit()) }

    #[test]
    fn test_monad_left_identity() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let k = |c: char| token(c);
        for source in ["aa", "ba", ""] {
            let span = StrStream::new(source);
            assert_eq!(bind(succeed('a'), k).parse(span), k('a').parse(span));
        }
    }

    #[test]
    fn test_monad_right_identity() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        for source in ["abc", ""] {
            let span = StrStream::new(source);
            assert_eq!(bind(any(), succeed).parse(span), any().parse(span));
        }
    }

    #[test]
    fn test_monad_associativity() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let k = |c: char| token(c);
        let j = |c: char| token(c);
        for source in ["aaa", "aab", "ab", ""] {
            let span = StrStream::new(source);
            let nested_left = bind(bind(any(), k), j);
            let nested_right = bind(any(), move |x| bind(k(x), j));
            let (l, r) = (nested_left.parse(span), nested_right.parse(span));
            assert_eq!(l.is_success(), r.is_success());
            assert_eq!(l.is_error(), r.is_error());
            assert_eq!(l.value(), r.value());
            assert_eq!(l.messages(), r.messages());
            if l.is_success() {
                assert_eq!(l, r);
            }
        }
    }

    #[test]
    fn test_bind_failure_restores_input() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        // The first sub-parser fails after the input was never consumed; the reply must carry the
        // original stream even if the sub-parser had advanced internally.
        let span = StrStream::new("ab");
        let comb = bind(left(any(), token('!')), |c| succeed(c));
        let reply = comb.parse(span);
        assert!(reply.is_failure());
        assert_eq!(*reply.rest(), span);
    }

    #[test]
    fn test_bind_second_failure_keeps_its_stream() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        // When the second parser fails, the reply's stream is whatever the second parser left
        // behind, which for a token miss is the position after the first parser.
        let span = StrStream::new("ab");
        let comb = bind(any(), |_| token('!'));
        let reply = comb.parse(span);
        assert!(reply.is_failure());
        assert_eq!(reply.rest().position(), 1);
    }

    #[test]
    fn test_between_scenario() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let span = StrStream::new("(x)");
        let (rest, value) = between(token('x'), token('('), token(')')).parse(span).unwrap();
        assert_eq!(value, 'x');
        assert_eq!(rest.position(), 3);
    }

    #[test]
    fn test_pipe_resets_to_before_failing_step() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let comb = pipe((digit(), digit(), digit()), |a, b, c| format!("{a}{b}{c}"));
        let span = StrStream::new("12x");
        let reply = comb.parse(span);
        assert!(reply.is_failure());
        assert_eq!(reply.rest().position(), 2);

        let (rest, value) = comb.parse(StrStream::new("123")).unwrap();
        assert_eq!(value, "123");
        assert_eq!(rest.position(), 3);
    }

    #[test]
    fn test_left_and_right_pick_sides() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let span = StrStream::new("ab");
        assert_eq!(left(any(), any()).parse(span).unwrap().1, 'a');
        assert_eq!(right(any(), any()).parse(span).unwrap().1, 'b');
        assert_eq!(both(any(), any()).parse(span).unwrap().1, ('a', 'b'));
    }

    #[test]
    fn test_sequencing_propagates_failure() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let span = StrStream::new("ab");
        assert!(left(fail::<char>(), any()).parse(span).is_failure());
        assert!(right(any(), fail::<char>()).parse(span).is_failure());
        assert!(both(any(), fail::<char>()).parse(span).is_failure());
    }
}
