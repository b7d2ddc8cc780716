pub mod check;
pub mod encode;
pub mod parse;
pub mod verify;
