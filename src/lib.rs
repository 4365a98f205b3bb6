// Reusable library API — visible to both CLI and WASM builds
pub mod candidates;
pub mod errors;
pub mod grid;
pub mod layout;
pub mod logging;
pub mod numbering;
pub mod options;
pub mod placement;
pub mod scoring;
pub mod trim;
pub mod validate;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use candidates::ClueInput;
pub use errors::LayoutError;
pub use layout::{generate_layout, Layout, LayoutStatus};
pub use options::LayoutOptions;
