//! Main module for fixity library functionality

pub mod ast;
pub mod error;
pub mod grammar;
pub mod language;
pub mod lexing;
pub mod operators;
pub mod parsing;
pub mod testing;
