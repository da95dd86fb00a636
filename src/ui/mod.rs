//! Interactive input layer
//!
//! Business logic depends on the [`UserInput`] trait; the CLI plugs in the
//! `dialoguer` implementation and tests plug in scripted input.

pub mod input;

pub use input::{DialoguerInput, InputError, Result as InputResult, UserInput};
