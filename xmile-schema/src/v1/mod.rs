//! XMILE 1.0 schema definitions
//!
//! This module contains the definitions of the XMILE 1.0 interface elements needed to bind a
//! `<slider>` and the model tree that holds it. Elements outside of this tree (variables,
//! simulation specs, headers, ...) are skipped when reading.

mod document;
mod entity;
mod format;
mod reset_to;
mod slider;
mod view;

pub use document::*;
pub use entity::*;
pub use format::*;
pub use reset_to::*;
pub use slider::*;
pub use view::*;
