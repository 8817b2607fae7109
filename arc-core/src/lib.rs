pub mod detect;
pub mod error;
pub mod header;
pub mod machine;

pub use detect::*;
pub use error::*;
pub use machine::*;
