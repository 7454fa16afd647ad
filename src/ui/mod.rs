//! egui front end: scene painting, the top bar and the hover overlay.

pub mod canvas;
pub mod panels;
pub mod tooltip;
