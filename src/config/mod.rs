pub mod types;
pub mod reader;
pub mod validator;

pub use types::*;
pub use reader::*;
pub use validator::*;
