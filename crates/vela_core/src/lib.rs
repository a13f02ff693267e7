//! Vela Core Primitives
//!
//! Toolkit-independent geometry and color types shared by the chart,
//! animation, and rendering layers:
//!
//! - **Geometry**: [`Point`], [`Size`], [`Rect`]
//! - **Color**: [`Color`] (linear-space RGBA, f32 channels)

pub mod geometry;

pub use geometry::{Color, Point, Rect, Size};
