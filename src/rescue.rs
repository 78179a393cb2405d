//  RESCUE.rs
//    by Lut99
//
//  Created:
//    14 Mar 2025, 13:21:50
//  Last edited:
//    23 Jul 2025, 16:19:33
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines combinators that annotate replies with diagnostics, and that
//!   move between the recoverable and unrecoverable worlds.
//

use enumset::EnumSet;

use crate::message::{ErrorMessage, Severity};
use crate::parser::Parser;
use crate::reply::Reply;
use crate::stream::Stream;


/***** LIBRARY *****/
/// Demotes any unrecoverable error of a parser to a recoverable failure.
///
/// The fatal diagnostic is not lost: it is appended to the failure's message list. The failure's
/// stream is the input stream, i.e. the position of the original attempt, so alternation resumes
/// where it would have started.
///
/// # Arguments
/// - `parser`: The parser whose errors to demote.
///
/// # Returns
/// A [`Rescue`]-parser behaving as `parser`, minus the errors.
///
/// # Fails
/// The returned parser fails whenever `parser` fails or errors.
///
/// # Example
/// ```rust
/// use morsel::prim::{error, succeed};
/// use morsel::rescue::rescue;
/// use morsel::{Parser as _, StrStream};
///
/// let span = StrStream::new("abc");
///
/// let reply = rescue(error::<char>("bad input")).parse(span);
/// assert!(reply.is_failure());
/// assert_eq!(reply.messages().len(), 1);
/// assert_eq!(reply.messages()[0].text(), "bad input");
///
/// // Successes are untouched
/// assert_eq!(rescue(succeed('x')).parse(span).unwrap(), (span, 'x'));
/// ```
#[inline]
pub fn rescue<P>(parser: P) -> Rescue<P> { Rescue { parser, severities: EnumSet::all() } }

/// As [`rescue()`], but only demotes errors whose fatal diagnostic has one of the given
/// severities.
///
/// Errors outside the filter pass through unchanged.
///
/// # Example
/// ```rust
/// use morsel::prim::{error, warn};
/// use morsel::rescue::rescue_only;
/// use morsel::{Parser as _, Severity, StrStream};
///
/// let span = StrStream::new("abc");
///
/// let soft = Severity::Message | Severity::Warn;
/// assert!(rescue_only(warn::<char>("iffy"), soft).parse(span).is_failure());
/// assert!(rescue_only(error::<char>("broken"), soft).parse(span).is_error());
/// ```
#[inline]
pub fn rescue_only<P>(parser: P, severities: impl Into<EnumSet<Severity>>) -> Rescue<P> { Rescue { parser, severities: severities.into() } }

/// The parser returned by [`rescue()`] and [`rescue_only()`].
#[derive(Clone, Copy, Debug)]
pub struct Rescue<P> {
    /// The parser whose errors to demote.
    parser: P,
    /// The severities of fatal diagnostics that are demoted.
    severities: EnumSet<Severity>,
}
impl<S: Stream, P: Parser<S>> Parser<S> for Rescue<P> {
    type Output = P::Output;

    fn parse(&self, input: S) -> Reply<S, P::Output> {
        match self.parser.parse(input.clone()) {
            Reply::Error { fatal, mut messages, .. } if self.severities.contains(fatal.severity()) => {
                #[cfg(feature = "log")]
                log::trace!("demoting {}-severity error to failure", fatal.severity());
                messages.push(fatal);
                Reply::Failure { rest: input, messages }
            },
            other => other,
        }
    }
}



/// Appends fixed diagnostics to a parser's reply, whatever its variant.
///
/// # Arguments
/// - `parser`: The parser to annotate.
/// - `messages`: The diagnostics to append, in order.
///
/// # Returns
/// An [`Annotate`]-parser behaving as `parser` with a longer message list.
///
/// # Example
/// ```rust
/// use morsel::prim::token;
/// use morsel::rescue::annotate;
/// use morsel::{ErrorMessage, Parser as _, Severity, StrStream};
///
/// let note = ErrorMessage::point(Severity::Message, "while reading the header", 0usize);
/// let comb = annotate(token('h'), vec![note.clone()]);
///
/// assert_eq!(comb.parse(StrStream::new("h")).messages(), &[note.clone()]);
/// assert_eq!(comb.parse(StrStream::new("x")).messages(), &[note]);
/// ```
#[inline]
pub const fn annotate<P, Pos>(parser: P, messages: Vec<ErrorMessage<Pos>>) -> Annotate<P, Pos> { Annotate { parser, messages } }

/// The parser returned by [`annotate()`].
#[derive(Clone, Debug)]
pub struct Annotate<P, Pos> {
    /// The parser to annotate.
    parser: P,
    /// The diagnostics appended to every reply.
    messages: Vec<ErrorMessage<Pos>>,
}
impl<S, P, Pos> Parser<S> for Annotate<P, Pos>
where
    S: Stream<Position = Pos>,
    P: Parser<S>,
    Pos: Clone,
{
    type Output = P::Output;

    #[inline]
    fn parse(&self, input: S) -> Reply<S, P::Output> {
        let mut reply = self.parser.parse(input);
        reply.messages_mut().extend(self.messages.iter().cloned());
        reply
    }
}



/// Raises an [`Severity::Error`]-diagnostic when the given parser succeeds.
///
/// Composes as `bind(parser, |_| error(text))`: the diagnostic fires at the position _after_ the
/// match. Failures and errors of `parser` pass through under the usual bind rules.
///
/// # Example
/// ```rust
/// use morsel::prim::token;
/// use morsel::rescue::error_when_success;
/// use morsel::{Parser as _, StrStream};
///
/// // A reserved character must not appear here
/// let comb = error_when_success(token('@'), "reserved character");
/// assert!(comb.parse(StrStream::new("@")).is_error());
/// assert!(comb.parse(StrStream::new("a")).is_failure());
/// ```
#[inline]
pub fn error_when_success<P>(parser: P, text: impl Into<String>) -> When<P> {
    When { parser, on: Outcome::Success, severity: Severity::Error, text: text.into() }
}

/// As [`error_when_success()`], with a [`Severity::Warn`] fatal diagnostic.
#[inline]
pub fn warn_when_success<P>(parser: P, text: impl Into<String>) -> When<P> {
    When { parser, on: Outcome::Success, severity: Severity::Warn, text: text.into() }
}

/// As [`error_when_success()`], with a [`Severity::Message`] fatal diagnostic.
#[inline]
pub fn message_when_success<P>(parser: P, text: impl Into<String>) -> When<P> {
    When { parser, on: Outcome::Success, severity: Severity::Message, text: text.into() }
}

/// Raises an [`Severity::Error`]-diagnostic when the given parser fails.
///
/// Composes as `or(parser, error(text))`: the diagnostic fires at the position where the attempt
/// started. This is the usual way to make a grammar's mandatory part report a real error instead
/// of a silent failure.
///
/// # Example
/// ```rust
/// use morsel::prim::{satisfy, token};
/// use morsel::rescue::error_when_failure;
/// use morsel::sequence::right;
/// use morsel::{Parser as _, Severity, Stream as _, StrStream};
///
/// let digit = || satisfy(|c: &char| c.is_ascii_digit());
///
/// // After '[' a digit is mandatory
/// let comb = right(token('['), error_when_failure(digit(), "expected digit"));
/// let reply = comb.parse(StrStream::new("[x"));
/// assert!(reply.is_error());
/// assert_eq!(reply.rest().position(), 1);
/// let fatal = reply.fatal().unwrap();
/// assert_eq!(fatal.text(), "expected digit");
/// assert_eq!(fatal.severity(), Severity::Error);
/// assert_eq!((fatal.begin(), fatal.end()), (&1, &1));
/// ```
#[inline]
pub fn error_when_failure<P>(parser: P, text: impl Into<String>) -> When<P> {
    When { parser, on: Outcome::Failure, severity: Severity::Error, text: text.into() }
}

/// As [`error_when_failure()`], with a [`Severity::Warn`] fatal diagnostic.
#[inline]
pub fn warn_when_failure<P>(parser: P, text: impl Into<String>) -> When<P> {
    When { parser, on: Outcome::Failure, severity: Severity::Warn, text: text.into() }
}

/// As [`error_when_failure()`], with a [`Severity::Message`] fatal diagnostic.
#[inline]
pub fn message_when_failure<P>(parser: P, text: impl Into<String>) -> When<P> {
    When { parser, on: Outcome::Failure, severity: Severity::Message, text: text.into() }
}

/// Replaces the fatal diagnostic when the given parser errors.
///
/// The new diagnostic takes over the old one's span; the old one is pushed onto the message list
/// so that no context is lost. Successes and failures pass through unchanged.
///
/// # Example
/// ```rust
/// use morsel::prim::error;
/// use morsel::rescue::error_when_error;
/// use morsel::{Parser as _, StrStream};
///
/// let comb = error_when_error(error::<char>("low-level detail"), "while parsing the prelude");
/// let reply = comb.parse(StrStream::new("x"));
/// assert_eq!(reply.fatal().unwrap().text(), "while parsing the prelude");
/// assert_eq!(reply.messages()[0].text(), "low-level detail");
/// ```
#[inline]
pub fn error_when_error<P>(parser: P, text: impl Into<String>) -> When<P> {
    When { parser, on: Outcome::Error, severity: Severity::Error, text: text.into() }
}

/// As [`error_when_error()`], with a [`Severity::Warn`] fatal diagnostic.
#[inline]
pub fn warn_when_error<P>(parser: P, text: impl Into<String>) -> When<P> {
    When { parser, on: Outcome::Error, severity: Severity::Warn, text: text.into() }
}

/// As [`error_when_error()`], with a [`Severity::Message`] fatal diagnostic.
#[inline]
pub fn message_when_error<P>(parser: P, text: impl Into<String>) -> When<P> {
    When { parser, on: Outcome::Error, severity: Severity::Message, text: text.into() }
}

/// The reply variant that a [`When`]-parser reacts to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Outcome {
    /// React when the inner parser succeeds.
    Success,
    /// React when the inner parser fails.
    Failure,
    /// React when the inner parser errors.
    Error,
}

/// The parser returned by the `*_when_*` family.
#[derive(Clone, Debug)]
pub struct When<P> {
    /// The parser whose outcome is watched.
    parser: P,
    /// The outcome on which the diagnostic fires.
    on: Outcome,
    /// The severity of the raised diagnostic.
    severity: Severity,
    /// The text of the raised diagnostic.
    text: String,
}
impl<S: Stream, P: Parser<S>> Parser<S> for When<P> {
    type Output = P::Output;

    fn parse(&self, input: S) -> Reply<S, P::Output> {
        match self.on {
            Outcome::Success => match self.parser.parse(input.clone()) {
                Reply::Success { rest, messages, .. } => {
                    let at = rest.position();
                    Reply::Error { fatal: ErrorMessage::point(self.severity, self.text.clone(), at), rest, messages }
                },
                Reply::Failure { messages, .. } => Reply::Failure { rest: input, messages },
                Reply::Error { fatal, messages, .. } => Reply::Error { rest: input, fatal, messages },
            },

            Outcome::Failure => match self.parser.parse(input.clone()) {
                Reply::Failure { messages, .. } => {
                    let at = input.position();
                    Reply::Error { fatal: ErrorMessage::point(self.severity, self.text.clone(), at), rest: input, messages }
                },
                other => other,
            },

            Outcome::Error => match self.parser.parse(input) {
                Reply::Error { rest, fatal, mut messages } => {
                    let replacement = ErrorMessage::new(self.severity, self.text.clone(), fatal.begin().clone(), fatal.end().clone());
                    messages.push(fatal);
                    Reply::Error { rest, fatal: replacement, messages }
                },
                other => other,
            },
        }
    }
}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::prim::{error, fail, message, succeed, token, warn};
    use crate::stream::StrStream;

    #[test]
    fn test_rescue_demotion() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let span = StrStream::new("abc");

        let reply = rescue(error::<char>("boom")).parse(span);
        assert!(reply.is_failure());
        assert_eq!(*reply.rest(), span);
        assert_eq!(reply.messages().len(), 1);
        assert_eq!(reply.messages()[0].text(), "boom");

        // Success and failure are untouched
        assert_eq!(rescue(succeed('v')).parse(span), succeed('v').parse(span));
        assert_eq!(rescue(fail::<char>()).parse(span), fail::<char>().parse(span));
    }

    #[test]
    fn test_rescue_restores_the_attempt_position() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        use crate::sequence::right;

        // The error is raised one token in; the rescued failure is anchored at the attempt start
        let span = StrStream::new("ab");
        let reply = rescue(right(token('a'), error::<char>("deep"))).parse(span);
        assert!(reply.is_failure());
        assert_eq!(*reply.rest(), span);
    }

    #[test]
    fn test_rescue_only_filters_by_severity() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let span = StrStream::new("abc");
        let soft = Severity::Message | Severity::Warn;

        assert!(rescue_only(message::<char>("note"), soft).parse(span).is_failure());
        assert!(rescue_only(warn::<char>("iffy"), soft).parse(span).is_failure());
        assert!(rescue_only(error::<char>("broken"), soft).parse(span).is_error());

        // A single severity works too
        assert!(rescue_only(error::<char>("broken"), Severity::Error).parse(span).is_failure());
    }

    #[test]
    fn test_annotate_fires_on_every_variant() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let note = ErrorMessage::point(Severity::Message, "context", 0usize);
        let span = StrStream::new("a");

        assert_eq!(annotate(token('a'), vec![note.clone()]).parse(span).messages(), &[note.clone()]);
        assert_eq!(annotate(token('b'), vec![note.clone()]).parse(span).messages(), &[note.clone()]);
        assert_eq!(annotate(error::<char>("boom"), vec![note.clone()]).parse(span).messages(), &[note]);
    }

    #[test]
    fn test_error_when_failure_scenario() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        use crate::prim::satisfy;
        use crate::sequence::right;

        let digit = satisfy(|c: &char| c.is_ascii_digit());
        let comb = right(token('['), error_when_failure(digit, "expected digit"));
        let reply = comb.parse(StrStream::new("[x"));
        assert!(reply.is_error());
        assert_eq!(reply.rest().position(), 1);
        let fatal = reply.fatal().unwrap();
        assert_eq!(fatal.text(), "expected digit");
        assert_eq!(fatal.severity(), Severity::Error);
        assert_eq!((fatal.begin(), fatal.end()), (&1, &1));
    }

    #[test]
    fn test_when_success_fires_after_the_match() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let comb = warn_when_success(token('a'), "legacy syntax");
        let reply = comb.parse(StrStream::new("ab"));
        assert!(reply.is_error());
        let fatal = reply.fatal().unwrap();
        assert_eq!(fatal.severity(), Severity::Warn);
        assert_eq!((fatal.begin(), fatal.end()), (&1, &1));

        // The named outcome not happening leaves the reply alone
        assert!(comb.parse(StrStream::new("b")).is_failure());
    }

    #[test]
    fn test_when_error_replaces_and_keeps() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let comb = message_when_error(error::<char>("inner"), "outer context");
        let reply = comb.parse(StrStream::new("x"));
        assert!(reply.is_error());
        assert_eq!(reply.fatal().unwrap().severity(), Severity::Message);
        assert_eq!(reply.fatal().unwrap().text(), "outer context");
        assert_eq!(reply.messages().len(), 1);
        assert_eq!(reply.messages()[0].text(), "inner");

        // Success passes through
        assert!(message_when_error(token('x'), "outer").parse(StrStream::new("x")).is_success());
    }
}
