//! Main module for ini-tree library functionality

pub mod convert;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod loader;
pub mod parsing;
pub mod settings;
pub mod tree;
