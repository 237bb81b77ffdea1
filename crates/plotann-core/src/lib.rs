//! plotann Core Types and Definitions
//!
//! This crate provides the foundational types used to lay out and draw
//! neural network diagrams. It includes:
//!
//! - **Colors**: Color handling with CSS color support and the default
//!   categorical palette ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Drawable primitives (circles, lines, text) and the explicit
//!   drawing [`draw::Canvas`] they render onto ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
