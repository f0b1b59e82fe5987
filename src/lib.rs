extern crate rand;
#[macro_use] extern crate log;
#[macro_use] extern crate error_chain;
#[cfg(test)] extern crate env_logger;

pub mod errors;

#[macro_use] mod macro_def;

pub mod matrix;
pub use matrix::{Matrix, MatrixIter};

pub mod ops;
pub use ops::{add, mult};

mod norm;
pub use norm::Norm;
