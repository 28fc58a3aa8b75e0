pub mod keyboard;
pub mod keys;
pub mod pointer;
