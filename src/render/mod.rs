//! Renderer-agnostic drawing surface.
//!
//! Charts append primitives to a [`Scene`]; the egui layer paints it.

pub mod scene;

pub use scene::{
    AxisGroup, AxisOrient, AxisTick, CircleElement, Element, ElementKind, PathElement, Scene,
    Surface, TextElement,
};
