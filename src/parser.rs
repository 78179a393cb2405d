//  PARSER.rs
//    by Lut99
//
//  Created:
//    11 Mar 2025, 11:02:56
//  Last edited:
//    21 Jul 2025, 11:41:32
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines the parser abstraction itself: a pure value that maps a
//!   stream position to a [`Reply`].
//

use std::rc::Rc;
use std::sync::Arc;

use crate::reply::Reply;
use crate::stream::Stream;


/***** LIBRARY *****/
/// A parser: a pure value that consumes a prefix of a [`Stream`] and yields a [`Reply`].
///
/// Parsers are built by combinator application and carry no per-run state, so one parser value
/// can be applied any number of times, to any number of streams, from any number of threads.
/// Applying the same parser to the same stream always yields a structurally equal reply.
///
/// Exceptions thrown by user-supplied predicates or projections are not caught anywhere in this
/// crate; they simply unwind through [`Parser::parse()`].
pub trait Parser<S: Stream> {
    /// The type of values this parser produces on success.
    type Output;

    /// Applies this parser to the given stream.
    fn parse(&self, input: S) -> Reply<S, Self::Output>;
}

// Parsers are values; references and owning pointers to them parse just the same.
impl<'p, S: Stream, P: Parser<S> + ?Sized> Parser<S> for &'p P {
    type Output = P::Output;

    #[inline]
    fn parse(&self, input: S) -> Reply<S, Self::Output> { (**self).parse(input) }
}
impl<S: Stream, P: Parser<S> + ?Sized> Parser<S> for Box<P> {
    type Output = P::Output;

    #[inline]
    fn parse(&self, input: S) -> Reply<S, Self::Output> { (**self).parse(input) }
}
impl<S: Stream, P: Parser<S> + ?Sized> Parser<S> for Rc<P> {
    type Output = P::Output;

    #[inline]
    fn parse(&self, input: S) -> Reply<S, Self::Output> { (**self).parse(input) }
}
impl<S: Stream, P: Parser<S> + ?Sized> Parser<S> for Arc<P> {
    type Output = P::Output;

    #[inline]
    fn parse(&self, input: S) -> Reply<S, Self::Output> { (**self).parse(input) }
}



/// Evaluates the given parser against the given stream.
///
/// This is nothing more than [`Parser::parse()`] spelled as a free function, for call sites that
/// read better that way.
///
/// # Arguments
/// - `parser`: The parser to apply.
/// - `input`: The stream to apply it to.
///
/// # Returns
/// The [`Reply`] produced by the parser.
///
/// # Example
/// ```rust
/// use morsel::parser::run;
/// use morsel::prim::any;
/// use morsel::StrStream;
///
/// let span = StrStream::new("x");
/// assert_eq!(run(&any(), span).unwrap().1, 'x');
/// ```
#[inline]
pub fn run<S: Stream, P: Parser<S>>(parser: &P, input: S) -> Reply<S, P::Output> {
    #[cfg(feature = "log")]
    log::debug!("running parser at position {:?}", input.position());
    parser.parse(input)
}



/// Construct a parser from a function.
///
/// Useful for one-off parsers that do not warrant a dedicated combinator, and as the building
/// block of the [`lazy!`](crate::lazy!)-macro.
///
/// # Arguments
/// - `func`: A closure from a stream to a [`Reply`].
///
/// # Returns
/// A [`FromFn`] parser that defers to `func`.
///
/// # Example
/// ```rust
/// use morsel::parser::from_fn;
/// use morsel::{Parser as _, Reply, Stream as _, StrStream};
///
/// // A parser that consumes nothing and reports the current position
/// let here = from_fn(|input: StrStream| Reply::Success { value: input.position(), rest: input, messages: vec![] });
/// let span = StrStream::new("abc");
/// assert_eq!(here.parse(span).unwrap(), (span, 0));
/// assert_eq!(here.parse(span.next()).unwrap(), (span.next(), 1));
/// ```
#[inline]
pub const fn from_fn<S, R, F>(func: F) -> FromFn<F>
where
    S: Stream,
    F: Fn(S) -> Reply<S, R>,
{
    FromFn { func }
}

/// The parser returned by [`from_fn()`].
#[derive(Clone, Copy, Debug)]
pub struct FromFn<F> {
    /// The function that implements the parse.
    func: F,
}
impl<S: Stream, R, F: Fn(S) -> Reply<S, R>> Parser<S> for FromFn<F> {
    type Output = R;

    #[inline]
    fn parse(&self, input: S) -> Reply<S, R> { (self.func)(input) }
}



/// Lazily constructs a parser at parse time.
///
/// The given expression must be callable as a nullary function producing a parser. Because the
/// resulting [`FromFn`]'s type says nothing about how that parser is built, this erases the
/// parser's type, which is exactly what makes recursive grammars expressible:
///
/// ```rust
/// use morsel::branch::or;
/// use morsel::prim::token;
/// use morsel::sequence::between;
/// use morsel::{lazy, Parser, StrStream};
///
/// // nested := 'x' | '(' nested ')'
/// fn nested<'s>() -> impl Parser<StrStream<'s>, Output = char> {
///     or(token('x'), between(lazy!(nested), token('('), token(')')))
/// }
///
/// assert_eq!(nested().parse(StrStream::new("x")).unwrap().1, 'x');
/// assert_eq!(nested().parse(StrStream::new("((x))")).unwrap().1, 'x');
/// assert!(nested().parse(StrStream::new("((x)")).is_failure());
/// ```
#[macro_export]
macro_rules! lazy {
    ($p:expr) => {
        $crate::parser::from_fn(move |input| $crate::parser::Parser::parse(&$p(), input))
    };
}



/// A parser with its concrete type erased behind a box.
///
/// This is what [`choice()`](crate::branch::choice()) over differently-shaped alternatives wants
/// to store.
pub type BoxedParser<'p, S, R> = Box<dyn Parser<S, Output = R> + 'p>;

/// Extension trait that boxes any sized parser into a [`BoxedParser`].
///
/// # Example
/// ```rust
/// use morsel::branch::choice;
/// use morsel::parser::BoxableParser as _;
/// use morsel::prim::{any, token};
/// use morsel::{Parser as _, StrStream};
///
/// // The two branches have different types; boxing unifies them.
/// let comb = choice(vec![token('!').boxed(), any().boxed()]);
/// assert_eq!(comb.parse(StrStream::new("!x")).unwrap().1, '!');
/// assert_eq!(comb.parse(StrStream::new("yx")).unwrap().1, 'y');
/// ```
pub trait BoxableParser<S: Stream>: Parser<S> {
    /// Boxes this parser, erasing its concrete type.
    #[inline]
    fn boxed<'p>(self) -> BoxedParser<'p, S, Self::Output>
    where
        Self: Sized + 'p,
    {
        Box::new(self)
    }
}
impl<S: Stream, P: Parser<S>> BoxableParser<S> for P {}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::prim::token;
    use crate::stream::StrStream;

    #[test]
    fn test_parsers_are_reusable_and_pure() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let comb = token('a');
        let span = StrStream::new("aa");
        assert_eq!(comb.parse(span), comb.parse(span));
        assert_eq!(run(&comb, span), run(&comb, span));
    }

    #[test]
    fn test_pointer_impls_delegate() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let span = StrStream::new("a");
        let by_ref = &token('a');
        let by_box: BoxedParser<StrStream, char> = token('a').boxed();
        let by_rc = Rc::new(token('a'));
        let by_arc = Arc::new(token('a'));
        assert_eq!(by_ref.parse(span).unwrap().1, 'a');
        assert_eq!(by_box.parse(span).unwrap().1, 'a');
        assert_eq!(by_rc.parse(span).unwrap().1, 'a');
        assert_eq!(by_arc.parse(span).unwrap().1, 'a');
    }
}
