//! A library for deciding the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! Design
//! - Databases own the state of a solve, linked through a context
//! - Procedures are methods on the context
//! - Configuration is fixed when a context is created
//!
//! The solve itself is conflict-driven clause learning:
//! boolean constraint propagation over two watched literals,
//! clause learning by resolution to the first unique implication point,
//! and backjumps guided by the learnt clause.

#![allow(unused_must_use)]
#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

mod builder;
pub mod config;
pub mod context;
pub mod structures;
pub mod types;

mod procedures;

pub mod generic;

pub mod db;
mod misc;
mod transient;
