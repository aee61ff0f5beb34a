pub mod az;
pub mod directory;
pub mod git;

pub use az::*;
pub use directory::*;
pub use git::*;

/// Trait for all prompt segments
pub trait Segment {
    /// Whether the segment has anything to show for this render
    fn enabled(&self) -> bool;

    /// Display text, empty when the segment is disabled
    fn string(&self) -> String;

    /// Segment name, also the key into theme colors
    fn name(&self) -> &'static str;
}
