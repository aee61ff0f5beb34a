pub mod config;
pub mod environment;
pub mod prompt;
pub mod segments;
pub mod themes;
pub mod utils;

pub use config::*;
pub use environment::*;
pub use prompt::*;
pub use segments::*;
pub use themes::*;
pub use utils::*;
