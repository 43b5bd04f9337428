pub mod error;
pub mod galaxy;
pub mod layout;
pub mod lexicon;
mod logging;
pub mod output;
mod wasm;

pub use error::{GalaxyError, LookupError};
pub use galaxy::{GalaxyConfig, GalaxyRequest, build_galaxy, compute_galaxy_json, explore};
pub use layout::{Layout, LayoutConfig, Node, Point, RelatedItem, Role, compute_layout, compute_layout_seeded};
pub use wasm::{compute_galaxy, default_config, set_log_level};
