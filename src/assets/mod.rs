//! Model loading
//!
//! OBJ files are parsed with `tobj` and turned into an [`Appearance`] that can
//! be placed on any scene node.
//!
//! [`Appearance`]: crate::gfx::scene::Appearance

pub mod loader;

pub use loader::{load_obj, load_obj_or_empty, AssetError};
