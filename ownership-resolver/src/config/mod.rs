//! Configuration module for the ownership resolver.
//! Defines and wires application-wide dependencies.

mod dependencies;

pub use dependencies::Dependencies;
