pub mod artifact;
pub mod outcome;
pub mod project;

pub use artifact::*;
pub use outcome::*;
pub use project::*;
