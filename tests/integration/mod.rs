//! Integration tests for splitscope
//!
//! These tests verify that the tracer, session, renderer and binary work
//! together.

#[path = "../common/mod.rs"]
pub mod common;

pub mod cli;
pub mod properties;
pub mod render;
pub mod replay;
