//  LIB.rs
//    by Lut99
//
//  Created:
//    11 Mar 2025, 09:33:52
//  Last edited:
//    23 Jul 2025, 16:51:08
//  Auto updated?
//    Yes
//
//  Description:
//!   A monadic parser combinator library over positioned token streams.
//!
//!   Parsers are pure values applied to an immutable [`Stream`], producing a three-way [`Reply`]:
//!   a success with the advanced stream, a recoverable failure that alternation backtracks over,
//!   or an unrecoverable error that it does not. Diagnostics accumulate on every reply and carry
//!   a severity; [`rescue()`](rescue::rescue()) moves errors back into the recoverable world.
//!
//!   ```rust
//!   use morsel::multi::many1;
//!   use morsel::prim::satisfy;
//!   use morsel::{Parser as _, Stream as _, StrStream};
//!
//!   let number = many1(satisfy(|c: &char| c.is_ascii_digit()));
//!   let (rest, digits) = number.parse(StrStream::new("42x")).unwrap();
//!   assert_eq!(digits, vec!['4', '2']);
//!   assert_eq!(rest.position(), 2);
//!   ```
//

// Declare modules
pub mod branch;
pub mod combinator;
pub mod message;
pub mod multi;
pub mod parser;
pub mod prim;
pub mod reply;
pub mod rescue;
pub mod sequence;
pub mod stream;

// Bring the core of the library into the crate root
pub use message::{EnumSet, ErrorMessage, Severity};
pub use parser::{run, BoxableParser, BoxedParser, Parser};
pub use reply::Reply;
pub use stream::{Position, SliceStream, Stream, StrStream};
