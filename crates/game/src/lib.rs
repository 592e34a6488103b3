//! Rules of the motion game: which command is active, whether a pose
//! satisfies it, the score and the clocks.
//!
//! Time is always passed in as an `Instant` so the rules can be driven
//! deterministically.

mod command;
pub use command::*;

mod state;
pub use state::*;

mod game;
pub use game::*;
