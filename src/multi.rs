//  MULTI.rs
//    by Lut99
//
//  Created:
//    14 Mar 2025, 09:36:25
//  Last edited:
//    23 Jul 2025, 15:44:08
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines combinators that apply parsers repeatedly: greedy
//!   repetition, separated lists and operator chains.
//

use crate::combinator::Maybe;
use crate::parser::Parser;
use crate::reply::Reply;
use crate::sequence::Left;
use crate::stream::Stream;


/***** HELPER FUNCTIONS *****/
/// Parses a head followed by zero or more separator-prefixed elements.
///
/// This is the engine behind [`SepBy`] and the chain combinators. A trailing separator whose
/// following element fails is left unconsumed. Fails if fewer than `min` elements were parsed
/// before the first recoverable non-match; errors abort as they are.
fn separated<S: Stream, P: Parser<S>, Q: Parser<S>>(parser: &P, separator: &Q, input: S, min: usize) -> Reply<S, Vec<P::Output>> {
    let mut messages = Vec::new();

    // The head element
    let (mut cur, mut values) = match parser.parse(input.clone()) {
        Reply::Success { rest, value, messages: tail } => {
            messages.extend(tail);
            (rest, vec![value])
        },
        Reply::Failure { messages: tail, .. } => {
            messages.extend(tail);
            return if min == 0 { Reply::Success { rest: input, value: Vec::new(), messages } } else { Reply::Failure { rest: input, messages } };
        },
        Reply::Error { fatal, messages: tail, .. } => {
            messages.extend(tail);
            return Reply::Error { rest: input, fatal, messages };
        },
    };

    // Then separator-prefixed elements until one of the pair stops matching
    loop {
        let after_sep = match separator.parse(cur.clone()) {
            Reply::Success { rest, messages: tail, .. } => {
                messages.extend(tail);
                rest
            },
            Reply::Failure { messages: tail, .. } => {
                messages.extend(tail);
                break;
            },
            Reply::Error { fatal, messages: tail, .. } => {
                messages.extend(tail);
                return Reply::Error { rest: cur, fatal, messages };
            },
        };
        match parser.parse(after_sep) {
            Reply::Success { rest, value, messages: tail } => {
                messages.extend(tail);
                values.push(value);
                cur = rest;
            },
            Reply::Failure { messages: tail, .. } => {
                // The whole attempt, separator included, is discarded
                messages.extend(tail);
                break;
            },
            Reply::Error { rest, fatal, messages: tail } => {
                messages.extend(tail);
                return Reply::Error { rest, fatal, messages };
            },
        }
    }

    if values.len() >= min { Reply::Success { rest: cur, value: values, messages } } else { Reply::Failure { rest: input, messages } }
}





/***** LIBRARY *****/
/// Applies a parser zero or more times, greedily.
///
/// Shorthand for [`many_min(parser, 0)`](many_min()); never fails.
#[inline]
pub const fn many<P>(parser: P) -> Many<P> { many_min(parser, 0) }

/// Applies a parser one or more times, greedily.
///
/// Shorthand for [`many_min(parser, 1)`](many_min()).
#[inline]
pub const fn many1<P>(parser: P) -> Many<P> { many_min(parser, 1) }

/// Applies a parser at least `min` times, then greedily until it first fails.
///
/// An error at any repetition aborts the whole combinator with that error. A failure after at
/// least `min` successes terminates the repetition; the failing attempt's consumption is
/// discarded but its diagnostics are kept.
///
/// Beware of inner parsers that succeed without consuming: repeated application of those never
/// reaches the terminating failure.
///
/// # Arguments
/// - `parser`: The parser to repeat.
/// - `min`: The number of successes below which the whole combinator fails.
///
/// # Returns
/// A [`Many`]-parser yielding the values of all successes, in order.
///
/// # Fails
/// The returned parser fails if `parser` failed before matching `min` times, with the stream at
/// the combinator's input.
///
/// # Example
/// ```rust
/// use morsel::multi::many_min;
/// use morsel::prim::satisfy;
/// use morsel::{Parser as _, Stream as _, StrStream};
///
/// let digit = || satisfy(|c: &char| c.is_ascii_digit());
///
/// let comb = many_min(digit(), 1);
/// let (rest, value) = comb.parse(StrStream::new("42x")).unwrap();
/// assert_eq!(value, vec!['4', '2']);
/// assert_eq!(rest.position(), 2);
/// assert!(comb.parse(StrStream::new("x42")).is_failure());
///
/// let (rest, value) = many_min(digit(), 0).parse(StrStream::new("x")).unwrap();
/// assert_eq!(value, vec![]);
/// assert_eq!(rest.position(), 0);
/// ```
#[inline]
pub const fn many_min<P>(parser: P, min: usize) -> Many<P> { Many { parser, min } }

/// The parser returned by [`many()`], [`many1()`] and [`many_min()`].
#[derive(Clone, Copy, Debug)]
pub struct Many<P> {
    /// The parser applied repeatedly.
    parser: P,
    /// The number of successes required.
    min: usize,
}
impl<S: Stream, P: Parser<S>> Parser<S> for Many<P> {
    type Output = Vec<P::Output>;

    fn parse(&self, input: S) -> Reply<S, Vec<P::Output>> {
        let mut values = Vec::new();
        let mut messages = Vec::new();
        let mut cur = input.clone();
        loop {
            match self.parser.parse(cur.clone()) {
                Reply::Success { rest, value, messages: tail } => {
                    messages.extend(tail);
                    values.push(value);
                    cur = rest;
                },
                Reply::Failure { messages: tail, .. } => {
                    messages.extend(tail);
                    return if values.len() >= self.min {
                        Reply::Success { rest: cur, value: values, messages }
                    } else {
                        Reply::Failure { rest: input, messages }
                    };
                },
                Reply::Error { rest, fatal, messages: tail } => {
                    messages.extend(tail);
                    return Reply::Error { rest, fatal, messages };
                },
            }
        }
    }
}



/// Applies all given parsers in order; all must succeed.
///
/// The runtime-sized sibling of [`pipe()`](crate::sequence::pipe()) for parsers of one type. A
/// failure or error at step `k` surfaces with the stream as it was before step `k`.
///
/// # Example
/// ```rust
/// use morsel::multi::sequence;
/// use morsel::prim::token;
/// use morsel::{Parser as _, StrStream};
///
/// let comb = sequence(vec![token('a'), token('b'), token('c')]);
/// assert_eq!(comb.parse(StrStream::new("abcd")).unwrap().1, vec!['a', 'b', 'c']);
/// assert!(comb.parse(StrStream::new("abd")).is_failure());
/// ```
#[inline]
pub const fn sequence<P>(parsers: Vec<P>) -> Sequence<P> { Sequence { parsers } }

/// The parser returned by [`sequence()`].
#[derive(Debug)]
pub struct Sequence<P> {
    /// The parsers to apply in order.
    parsers: Vec<P>,
}
impl<S: Stream, P: Parser<S>> Parser<S> for Sequence<P> {
    type Output = Vec<P::Output>;

    fn parse(&self, input: S) -> Reply<S, Vec<P::Output>> {
        let mut values = Vec::with_capacity(self.parsers.len());
        let mut messages = Vec::new();
        let mut cur = input;
        for parser in &self.parsers {
            match parser.parse(cur.clone()) {
                Reply::Success { rest, value, messages: tail } => {
                    messages.extend(tail);
                    values.push(value);
                    cur = rest;
                },
                Reply::Failure { messages: tail, .. } => {
                    messages.extend(tail);
                    return Reply::Failure { rest: cur, messages };
                },
                Reply::Error { fatal, messages: tail, .. } => {
                    messages.extend(tail);
                    return Reply::Error { rest: cur, fatal, messages };
                },
            }
        }
        Reply::Success { rest: cur, value: values, messages }
    }
}



/// Applies the given parsers in order until the first failure, keeping the successful prefix.
///
/// Like [`sequence()`], except that a failure is not propagated: the combinator stops and
/// succeeds with the values parsed so far. Errors still abort.
///
/// # Example
/// ```rust
/// use morsel::multi::greed;
/// use morsel::prim::token;
/// use morsel::{Parser as _, Stream as _, StrStream};
///
/// let comb = greed(vec![token('a'), token('b'), token('c')]);
/// let (rest, value) = comb.parse(StrStream::new("abx")).unwrap();
/// assert_eq!(value, vec!['a', 'b']);
/// assert_eq!(rest.position(), 2);
/// ```
#[inline]
pub const fn greed<P>(parsers: Vec<P>) -> Greed<P> { Greed { parsers } }

/// The parser returned by [`greed()`].
#[derive(Debug)]
pub struct Greed<P> {
    /// The parsers to apply in order.
    parsers: Vec<P>,
}
impl<S: Stream, P: Parser<S>> Parser<S> for Greed<P> {
    type Output = Vec<P::Output>;

    fn parse(&self, input: S) -> Reply<S, Vec<P::Output>> {
        let mut values = Vec::new();
        let mut messages = Vec::new();
        let mut cur = input;
        for parser in &self.parsers {
            match parser.parse(cur.clone()) {
                Reply::Success { rest, value, messages: tail } => {
                    messages.extend(tail);
                    values.push(value);
                    cur = rest;
                },
                Reply::Failure { messages: tail, .. } => {
                    messages.extend(tail);
                    break;
                },
                Reply::Error { rest, fatal, messages: tail } => {
                    messages.extend(tail);
                    return Reply::Error { rest, fatal, messages };
                },
            }
        }
        Reply::Success { rest: cur, value: values, messages }
    }
}



/// Parses at least `min` occurrences of a parser, separated by another.
///
/// A trailing separator with no element after it is left unconsumed.
///
/// # Arguments
/// - `parser`: The element parser.
/// - `separator`: The separator parser; its results are discarded.
/// - `min`: The number of elements below which the whole combinator fails.
///
/// # Returns
/// A [`SepBy`]-parser yielding the elements, in order.
///
/// # Fails
/// The returned parser fails if fewer than `min` elements were matched. With `min == 0` it never
/// fails: an immediately-failing element parser yields the empty list on the untouched input.
///
/// # Example
/// ```rust
/// use morsel::multi::sep_by;
/// use morsel::prim::{satisfy, token};
/// use morsel::{Parser as _, Stream as _, StrStream};
///
/// let digit = || satisfy(|c: &char| c.is_ascii_digit());
///
/// let comb = sep_by(digit(), token(','), 1);
/// let (rest, value) = comb.parse(StrStream::new("1,2,3")).unwrap();
/// assert_eq!(value, vec!['1', '2', '3']);
/// assert_eq!(rest.position(), 5);
///
/// // The trailing comma is not consumed
/// let (rest, value) = comb.parse(StrStream::new("1,2,")).unwrap();
/// assert_eq!(value, vec!['1', '2']);
/// assert_eq!(rest.position(), 3);
/// ```
#[inline]
pub const fn sep_by<P, Q>(parser: P, separator: Q, min: usize) -> SepBy<P, Q> { SepBy { parser, separator, min } }

/// The parser returned by [`sep_by()`].
#[derive(Clone, Copy, Debug)]
pub struct SepBy<P, Q> {
    /// The element parser.
    parser: P,
    /// The separator parser.
    separator: Q,
    /// The number of elements required.
    min: usize,
}
impl<S: Stream, P: Parser<S>, Q: Parser<S>> Parser<S> for SepBy<P, Q> {
    type Output = Vec<P::Output>;

    #[inline]
    fn parse(&self, input: S) -> Reply<S, Vec<P::Output>> { separated(&self.parser, &self.separator, input, self.min) }
}



/// Parses at least `min` occurrences of a parser, each terminated by a separator.
///
/// Defined as `many_min(left(parser, separator), min)`: the separator is mandatory after every
/// element, including the last.
///
/// # Example
/// ```rust
/// use morsel::multi::end_by;
/// use morsel::prim::{satisfy, token};
/// use morsel::{Parser as _, Stream as _, StrStream};
///
/// let digit = || satisfy(|c: &char| c.is_ascii_digit());
///
/// let comb = end_by(digit(), token(';'), 1);
/// let (rest, value) = comb.parse(StrStream::new("1;2;")).unwrap();
/// assert_eq!(value, vec!['1', '2']);
/// assert_eq!(rest.position(), 4);
///
/// // An unterminated final element is not part of the list
/// let (rest, value) = comb.parse(StrStream::new("1;2")).unwrap();
/// assert_eq!(value, vec!['1']);
/// assert_eq!(rest.position(), 2);
/// ```
#[inline]
pub const fn end_by<P, Q>(parser: P, separator: Q, min: usize) -> Many<Left<P, Q>> { many_min(crate::sequence::left(parser, separator), min) }



/// Parses a separated list that may, but need not, end in a separator.
///
/// Defined as `left(sep_by(parser, separator, min), maybe(separator))`.
///
/// # Example
/// ```rust
/// use morsel::multi::sep_end_by;
/// use morsel::prim::{satisfy, token};
/// use morsel::{Parser as _, Stream as _, StrStream};
///
/// let digit = || satisfy(|c: &char| c.is_ascii_digit());
///
/// let comb = sep_end_by(digit(), token(','), 1);
/// assert_eq!(comb.parse(StrStream::new("1,2")).unwrap().1, vec!['1', '2']);
/// let (rest, value) = comb.parse(StrStream::new("1,2,")).unwrap();
/// assert_eq!(value, vec!['1', '2']);
/// assert_eq!(rest.position(), 4);
/// ```
#[inline]
pub fn sep_end_by<P, Q: Clone>(parser: P, separator: Q, min: usize) -> Left<SepBy<P, Q>, Maybe<Q>> {
    crate::sequence::left(sep_by(parser, separator.clone(), min), crate::combinator::maybe(separator))
}



/// Parses one or more separated elements and folds them left-associatively.
///
/// The first element seeds the fold; every further element is combined with `fold(acc, next)`.
/// Separator results are discarded. A single element folds to itself.
///
/// # Arguments
/// - `parser`: The element parser.
/// - `separator`: The separator between elements.
/// - `fold`: The left-associative combining function.
///
/// # Returns
/// A [`Chainl`]-parser yielding the folded value.
///
/// # Fails
/// The returned parser fails if no element could be matched.
///
/// # Example
/// ```rust
/// use morsel::combinator::map;
/// use morsel::multi::chainl;
/// use morsel::prim::{satisfy, token};
/// use morsel::{Parser as _, Stream as _, StrStream};
///
/// let digit = || map(satisfy(|c: &char| c.is_ascii_digit()), String::from);
///
/// let comb = chainl(digit(), token('+'), |a: String, b: String| a + &b);
/// let (rest, value) = comb.parse(StrStream::new("1+2+3")).unwrap();
/// assert_eq!(value, "123");
/// assert_eq!(rest.position(), 5);
/// ```
#[inline]
pub const fn chainl<P, Q, F>(parser: P, separator: Q, fold: F) -> Chainl<P, Q, F> { Chainl { parser, separator, fold } }

/// The parser returned by [`chainl()`].
#[derive(Clone, Copy, Debug)]
pub struct Chainl<P, Q, F> {
    /// The element parser.
    parser: P,
    /// The separator parser.
    separator: Q,
    /// The left-associative fold.
    fold: F,
}
impl<S: Stream, P: Parser<S>, Q: Parser<S>, F: Fn(P::Output, P::Output) -> P::Output> Parser<S> for Chainl<P, Q, F> {
    type Output = P::Output;

    fn parse(&self, input: S) -> Reply<S, P::Output> {
        match separated(&self.parser, &self.separator, input, 1) {
            Reply::Success { rest, value, messages } => {
                let mut elems = value.into_iter();
                let Some(mut acc) = elems.next() else { unreachable!() };
                for elem in elems {
                    acc = (self.fold)(acc, elem);
                }
                Reply::Success { rest, value: acc, messages }
            },
            Reply::Failure { rest, messages } => Reply::Failure { rest, messages },
            Reply::Error { rest, fatal, messages } => Reply::Error { rest, fatal, messages },
        }
    }
}



/// As [`chainl()`], but the fold starts from `fold(seed, first)` with a constant seed.
///
/// This allows the accumulator to be of a different type than the elements.
///
/// # Example
/// ```rust
/// use morsel::multi::chainl_from;
/// use morsel::prim::{satisfy, token};
/// use morsel::{Parser as _, StrStream};
///
/// let digit = || satisfy(|c: &char| c.is_ascii_digit());
///
/// // Accumulate digits into a number, seeded with 0
/// let comb = chainl_from(digit(), token('+'), 0u32, |acc, c: char| 10 * acc + c.to_digit(10).unwrap());
/// assert_eq!(comb.parse(StrStream::new("1+2+3")).unwrap().1, 123);
/// assert_eq!(comb.parse(StrStream::new("7")).unwrap().1, 7);
/// ```
#[inline]
pub const fn chainl_from<P, Q, A, F>(parser: P, separator: Q, seed: A, fold: F) -> ChainlFrom<P, Q, A, F> {
    ChainlFrom { parser, separator, seed, fold }
}

/// The parser returned by [`chainl_from()`].
#[derive(Clone, Copy, Debug)]
pub struct ChainlFrom<P, Q, A, F> {
    /// The element parser.
    parser: P,
    /// The separator parser.
    separator: Q,
    /// The value seeding the fold.
    seed: A,
    /// The left-associative fold.
    fold: F,
}
impl<S: Stream, P: Parser<S>, Q: Parser<S>, A: Clone, F: Fn(A, P::Output) -> A> Parser<S> for ChainlFrom<P, Q, A, F> {
    type Output = A;

    fn parse(&self, input: S) -> Reply<S, A> {
        match separated(&self.parser, &self.separator, input, 1) {
            Reply::Success { rest, value, messages } => {
                let mut acc = self.seed.clone();
                for elem in value {
                    acc = (self.fold)(acc, elem);
                }
                Reply::Success { rest, value: acc, messages }
            },
            Reply::Failure { rest, messages } => Reply::Failure { rest, messages },
            Reply::Error { rest, fatal, messages } => Reply::Error { rest, fatal, messages },
        }
    }
}



/// As [`chainl_from()`], but the seed is derived from the first element.
///
/// The fold starts from `select(first)` and combines every further element with
/// `fold(acc, next)`.
#[inline]
pub const fn chainl_select<P, Q, G, F>(parser: P, separator: Q, select: G, fold: F) -> ChainlSelect<P, Q, G, F> {
    ChainlSelect { parser, separator, select, fold }
}

/// The parser returned by [`chainl_select()`].
#[derive(Clone, Copy, Debug)]
pub struct ChainlSelect<P, Q, G, F> {
    /// The element parser.
    parser: P,
    /// The separator parser.
    separator: Q,
    /// The function deriving the seed from the head element.
    select: G,
    /// The left-associative fold.
    fold: F,
}
impl<S: Stream, P: Parser<S>, Q: Parser<S>, A, G: Fn(P::Output) -> A, F: Fn(A, P::Output) -> A> Parser<S> for ChainlSelect<P, Q, G, F> {
    type Output = A;

    fn parse(&self, input: S) -> Reply<S, A> {
        match separated(&self.parser, &self.separator, input, 1) {
            Reply::Success { rest, value, messages } => {
                let mut elems = value.into_iter();
                let Some(head) = elems.next() else { unreachable!() };
                let mut acc = (self.select)(head);
                for elem in elems {
                    acc = (self.fold)(acc, elem);
                }
                Reply::Success { rest, value: acc, messages }
            },
            Reply::Failure { rest, messages } => Reply::Failure { rest, messages },
            Reply::Error { rest, fatal, messages } => Reply::Error { rest, fatal, messages },
        }
    }
}



/// Parses one or more separated elements and folds them right-associatively.
///
/// The last element seeds the fold; walking leftward, every element is combined with
/// `fold(elem, acc)`. Separator results are discarded. A single element folds to itself.
///
/// # Example
/// ```rust
/// use morsel::combinator::map;
/// use morsel::multi::{chainl, chainr};
/// use morsel::prim::{satisfy, token};
/// use morsel::{Parser as _, StrStream};
///
/// let digit = || map(satisfy(|c: &char| c.is_ascii_digit()), String::from);
/// let paren = |a: String, b: String| format!("({a}{b})");
///
/// let span = StrStream::new("1+2+3");
/// assert_eq!(chainr(digit(), token('+'), paren).parse(span).unwrap().1, "(1(23))");
/// assert_eq!(chainl(digit(), token('+'), paren).parse(span).unwrap().1, "((12)3)");
/// ```
#[inline]
pub const fn chainr<P, Q, F>(parser: P, separator: Q, fold: F) -> Chainr<P, Q, F> { Chainr { parser, separator, fold } }

/// The parser returned by [`chainr()`].
#[derive(Clone, Copy, Debug)]
pub struct Chainr<P, Q, F> {
    /// The element parser.
    parser: P,
    /// The separator parser.
    separator: Q,
    /// The right-associative fold.
    fold: F,
}
impl<S: Stream, P: Parser<S>, Q: Parser<S>, F: Fn(P::Output, P::Output) -> P::Output> Parser<S> for Chainr<P, Q, F> {
    type Output = P::Output;

    fn parse(&self, input: S) -> Reply<S, P::Output> {
        match separated(&self.parser, &self.separator, input, 1) {
            Reply::Success { rest, value, messages } => {
                let mut elems = value.into_iter().rev();
                let Some(mut acc) = elems.next() else { unreachable!() };
                for elem in elems {
                    acc = (self.fold)(elem, acc);
                }
                Reply::Success { rest, value: acc, messages }
            },
            Reply::Failure { rest, messages } => Reply::Failure { rest, messages },
            Reply::Error { rest, fatal, messages } => Reply::Error { rest, fatal, messages },
        }
    }
}



/// As [`chainr()`], but the fold starts from `fold(last, seed)` with a constant seed.
///
/// This allows the accumulator to be of a different type than the elements.
#[inline]
pub const fn chainr_from<P, Q, A, F>(parser: P, separator: Q, seed: A, fold: F) -> ChainrFrom<P, Q, A, F> {
    ChainrFrom { parser, separator, seed, fold }
}

/// The parser returned by [`chainr_from()`].
#[derive(Clone, Copy, Debug)]
pub struct ChainrFrom<P, Q, A, F> {
    /// The element parser.
    parser: P,
    /// The separator parser.
    separator: Q,
    /// The value seeding the fold.
    seed: A,
    /// The right-associative fold.
    fold: F,
}
impl<S: Stream, P: Parser<S>, Q: Parser<S>, A: Clone, F: Fn(P::Output, A) -> A> Parser<S> for ChainrFrom<P, Q, A, F> {
    type Output = A;

    fn parse(&self, input: S) -> Reply<S, A> {
        match separated(&self.parser, &self.separator, input, 1) {
            Reply::Success { rest, value, messages } => {
                let mut acc = self.seed.clone();
                for elem in value.into_iter().rev() {
                    acc = (self.fold)(elem, acc);
                }
                Reply::Success { rest, value: acc, messages }
            },
            Reply::Failure { rest, messages } => Reply::Failure { rest, messages },
            Reply::Error { rest, fatal, messages } => Reply::Error { rest, fatal, messages },
        }
    }
}



/// As [`chainr_from()`], but the seed is derived from the last element.
///
/// The mirror image of [`chainl_select()`]: the fold starts from `select(last)` and walks
/// leftward combining every element with `fold(elem, acc)`.
#[inline]
pub const fn chainr_select<P, Q, G, F>(parser: P, separator: Q, select: G, fold: F) -> ChainrSelect<P, Q, G, F> {
    ChainrSelect { parser, separator, select, fold }
}

/// The parser returned by [`chainr_select()`].
#[derive(Clone, Copy, Debug)]
pub struct ChainrSelect<P, Q, G, F> {
    /// The element parser.
    parser: P,
    /// The separator parser.
    separator: Q,
    /// The function deriving the seed from the last element.
    select: G,
    /// The right-associative fold.
    fold: F,
}
impl<S: Stream, P: Parser<S>, Q: Parser<S>, A, G: Fn(P::Output) -> A, F: Fn(P::Output, A) -> A> Parser<S> for ChainrSelect<P, Q, G, F> {
    type Output = A;

    fn parse(&self, input: S) -> Reply<S, A> {
        match separated(&self.parser, &self.separator, input, 1) {
            Reply::Success { rest, value, messages } => {
                let mut elems = value.into_iter().rev();
                let Some(last) = elems.next() else { unreachable!() };
                let mut acc = (self.select)(last);
                for elem in elems {
                    acc = (self.fold)(elem, acc);
                }
                Reply::Success { rest, value: acc, messages }
            },
            Reply::Failure { rest, messages } => Reply::Failure { rest, messages },
            Reply::Error { rest, fatal, messages } => Reply::Error { rest, fatal, messages },
        }
    }
}



/// Repeats a parser as a lazy, infinite iterator of clones.
///
/// Combine with [`partition()`] to split off a fixed prefix for [`sequence()`] while the tail
/// stays lazy.
///
/// # Example
/// ```rust
/// use morsel::multi::{partition, replicate, sequence};
/// use morsel::prim::token;
/// use morsel::{Parser as _, StrStream};
///
/// let (prefix, _tail) = partition(replicate(token('a')), 3);
/// let comb = sequence(prefix);
/// assert_eq!(comb.parse(StrStream::new("aaaa")).unwrap().1, vec!['a', 'a', 'a']);
/// assert!(comb.parse(StrStream::new("aa")).is_failure());
/// ```
#[inline]
pub const fn replicate<P: Clone>(parser: P) -> Replicate<P> { Replicate { parser } }

/// The iterator returned by [`replicate()`].
#[derive(Clone, Copy, Debug)]
pub struct Replicate<P> {
    /// The parser cloned out on every step.
    parser: P,
}
impl<P: Clone> Iterator for Replicate<P> {
    type Item = P;

    #[inline]
    fn next(&mut self) -> Option<P> { Some(self.parser.clone()) }
}

/// Splits the first `count` parsers off an iterator of parsers.
///
/// # Arguments
/// - `parsers`: Any iterator of parsers, typically [`replicate()`].
/// - `count`: The number of parsers to take eagerly.
///
/// # Returns
/// The eager prefix (shorter than `count` if the iterator ran dry) and the untouched lazy tail.
#[inline]
pub fn partition<I: IntoIterator>(parsers: I, count: usize) -> (Vec<I::Item>, I::IntoIter) {
    let mut tail = parsers.into_iter();
    let mut prefix = Vec::with_capacity(count);
    for _ in 0..count {
        match tail.next() {
            Some(parser) => prefix.push(parser),
            None => break,
        }
    }
    (prefix, tail)
}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::map;
    use crate::prim::{error, satisfy, token};
    use crate::stream::StrStream;

    fn digit() -> impl Parser<StrStream<'static>, Output = char> + Copy { satisfy(|c: &char| c.is_ascii_digit()) }

    #[test]
    fn test_number_scenario() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let number = many_min(digit(), 1);
        let (rest, value) = number.parse(StrStream::new("42x")).unwrap();
        assert_eq!(value, vec!['4', '2']);
        assert_eq!(rest.position(), 2);
    }

    #[test]
    fn test_many_below_minimum_restores_input() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let span = StrStream::new("4x");
        let reply = many_min(digit(), 2).parse(span);
        assert!(reply.is_failure());
        assert_eq!(*reply.rest(), span);
    }

    #[test]
    fn test_many_aborts_on_error() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        use crate::branch::or;

        let reply = many(or(map(digit(), Some), error("no letters allowed"))).parse(StrStream::new("12a"));
        assert!(reply.is_error());
        assert_eq!(reply.fatal().unwrap().text(), "no letters allowed");
        assert_eq!(reply.rest().position(), 2);
    }

    #[test]
    fn test_sep_by_scenario() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let comb = sep_by(digit(), token(','), 1);
        let (rest, value) = comb.parse(StrStream::new("1,2,3")).unwrap();
        assert_eq!(value, vec!['1', '2', '3']);
        assert_eq!(rest.position(), 5);
    }

    #[test]
    fn test_sep_by_zero_on_immediate_failure() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let span = StrStream::new("x");
        let (rest, value) = sep_by(digit(), token(','), 0).parse(span).unwrap();
        assert_eq!(value, vec![]);
        assert_eq!(rest, span);
    }

    #[test]
    fn test_sep_by_minimum_enforced() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let span = StrStream::new("1x");
        assert!(sep_by(digit(), token(','), 2).parse(span).is_failure());
        assert!(sep_by(digit(), token(','), 2).parse(StrStream::new("1,2x")).is_success());
    }

    #[test]
    fn test_chainl_scenario() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let digit_str = || map(digit(), String::from);
        let comb = chainl(digit_str(), token('+'), |a: String, b: String| a + &b);
        let (rest, value) = comb.parse(StrStream::new("1+2+3")).unwrap();
        assert_eq!(value, "123");
        assert_eq!(rest.position(), 5);
    }

    #[test]
    fn test_chain_associativity() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let digit_str = || map(digit(), String::from);
        let paren = |a: String, b: String| format!("({a}{b})");
        let span = StrStream::new("1+2+3+4");
        assert_eq!(chainl(digit_str(), token('+'), paren).parse(span).unwrap().1, "(((12)3)4)");
        assert_eq!(chainr(digit_str(), token('+'), paren).parse(span).unwrap().1, "(1(2(34)))");
    }

    #[test]
    fn test_chain_single_element() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let digit_str = || map(digit(), String::from);
        let paren = |a: String, b: String| format!("({a}{b})");
        let span = StrStream::new("5");
        assert_eq!(chainl(digit_str(), token('+'), paren).parse(span).unwrap().1, "5");
        assert_eq!(chainr(digit_str(), token('+'), paren).parse(span).unwrap().1, "5");
    }

    #[test]
    fn test_chain_seeded_variants() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let span = StrStream::new("1+2+3");

        // chainl_from: ((seed . 1) . 2) . 3
        let comb = chainl_from(map(digit(), String::from), token('+'), String::from("s"), |acc, e| format!("({acc}.{e})"));
        assert_eq!(comb.parse(span).unwrap().1, "(((s.1).2).3)");

        // chainr_from: 1 . (2 . (3 . seed))
        let comb = chainr_from(map(digit(), String::from), token('+'), String::from("s"), |e, acc| format!("({e}.{acc})"));
        assert_eq!(comb.parse(span).unwrap().1, "(1.(2.(3.s)))");
    }

    #[test]
    fn test_chain_select_variants() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let span = StrStream::new("1+2+3");

        // Seed derived from the head, fold walks right
        let comb = chainl_select(digit(), token('+'), String::from, |mut acc: String, e| {
            acc.push(e);
            acc
        });
        assert_eq!(comb.parse(span).unwrap().1, "123");

        // Seed derived from the last element, fold walks left
        let comb = chainr_select(digit(), token('+'), String::from, |e, acc: String| format!("{e}{acc}"));
        assert_eq!(comb.parse(span).unwrap().1, "123");
    }

    #[test]
    fn test_chain_below_one_element_fails() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let digit_str = || map(digit(), String::from);
        let reply = chainl(digit_str(), token('+'), |a: String, b: String| a + &b).parse(StrStream::new("x"));
        assert!(reply.is_failure());
        assert_eq!(reply.rest().position(), 0);
    }

    #[test]
    fn test_greed_stops_at_first_failure() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let comb = greed(vec![token('a'), token('b'), token('c')]);
        let (rest, value) = comb.parse(StrStream::new("ax")).unwrap();
        assert_eq!(value, vec!['a']);
        assert_eq!(rest.position(), 1);

        // An empty prefix is fine too
        let (rest, value) = comb.parse(StrStream::new("x")).unwrap();
        assert_eq!(value, vec![]);
        assert_eq!(rest.position(), 0);
    }

    #[test]
    fn test_sequence_needs_all() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let comb = sequence(vec![token('a'), token('b')]);
        assert!(comb.parse(StrStream::new("a")).is_failure());
        assert_eq!(comb.parse(StrStream::new("ab")).unwrap().1, vec!['a', 'b']);
    }

    #[test]
    fn test_partition_splits_lazily() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let (prefix, mut tail) = partition(replicate(token('z')), 2);
        assert_eq!(prefix.len(), 2);
        // The tail still produces parsers on demand
        assert!(tail.next().is_some());
    }
}
