//! LSP protocol handlers.
//!
//! One module per feature:
//!
//! - [`hover`]: command documentation under the cursor
//! - [`completion`]: command name completions
//! - [`diagnostics`]: file-path checks over a whole document
//!
//! Handlers are synchronous pure functions over `ServerState` plus a
//! configuration snapshot. They degrade gracefully (return `None`/empty)
//! instead of panicking; a documentation miss is a normal outcome.

pub mod completion;
pub mod diagnostics;
pub mod hover;
