//! Constants for elliptic-curve algorithms

pub mod sm2;
