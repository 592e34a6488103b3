//! Webcam motion game served to the local browser.
//!
//! One `Producer` owns the camera and publishes mirrored RGB frames into
//! a `FrameSlot`. Every `/video_feed` connection runs its own `Renderer`,
//! which detects the player's pose on the latest frame, scores it against
//! the active command, ticks the game clock and streams annotated JPEGs.

mod config;
pub use config::*;

mod producer;
pub use producer::*;

mod renderer;
pub use renderer::*;

mod server;
pub use server::*;

mod slot;
pub use slot::*;
