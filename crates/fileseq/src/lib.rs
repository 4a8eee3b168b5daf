//! Parse "file sequence" pattern strings and expand them into the concrete
//! paths they denote.
//!
//! Production pipelines refer to thousands of sequentially numbered files
//! (frames, versions, tiles) by one short pattern instead of enumerating them
//! by hand. A pattern is tokenized on a delimiter set (`\`, `/` and `.` by
//! default); each non-delimiter segment either matches the sequence grammar
//! or is kept as literal text. A sequence segment is a comma-separated list
//! of slices, each of the form
//!
//! ```text
//! ( INT | PADRUN ) [ '-' INT ] [ 'x' INT ] [ PADRUN ]
//! ```
//!
//! where a `PADRUN` is a run of `@` (one digit each) and `#` (four digits
//! each) padding characters, `-` introduces an inclusive range end, and `x`
//! introduces a non-zero step.
//!
//! Two expansion strategies share the parsed representation:
//! [`EagerSequence`] materializes every path at construction, while
//! [`LazySequence`] stores only the parsed pattern and synthesizes any single
//! path on demand from its index. Both enumerate paths in the same order (the
//! first token varies slowest, the last fastest) behind the shared
//! [`PathSequence`] interface.
//!
//! No filesystem access ever happens; the paths are purely textual.
//!
//! # Examples
//!
//! ```
//! use fileseq::{EagerSequence, LazySequence, PathSequence};
//!
//! let eager = EagerSequence::new("shot/beauty.1-3#.exr");
//! assert!(eager.is_ok());
//! assert_eq!(
//!     eager.full_paths(),
//!     [
//!         "shot/beauty.0001.exr",
//!         "shot/beauty.0002.exr",
//!         "shot/beauty.0003.exr",
//!     ],
//! );
//!
//! let lazy = LazySequence::new("shot/beauty.1-3#.exr");
//! assert_eq!(lazy.path(2).as_deref(), Some("shot/beauty.0003.exr"));
//! ```

mod eager;
mod errors;
mod format;
mod lazy;
mod pattern;
mod sequence;

pub use eager::EagerSequence;
pub use errors::SliceError;
pub use format::write_padded;
pub use lazy::{LazyIter, LazySequence};
pub use pattern::{
    DEFAULT_DELIMITERS, Pattern, Slice, Token, is_sequence_token, parse_slices, split_tokens,
};
pub use sequence::{PathSequence, SequenceOptions};
