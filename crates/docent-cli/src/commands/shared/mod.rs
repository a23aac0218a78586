pub mod limit;
pub mod parse;
pub mod role;
pub mod session;
