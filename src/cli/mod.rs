/*!
 * Command-Line Front End
 * Argument parsing and text rendering for the sched-sim binary
 */

pub mod args;
pub mod render;

pub use args::{Args, Input, OutputFormat};
pub use render::render_table;
