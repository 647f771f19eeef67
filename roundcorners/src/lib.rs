pub mod model;
pub mod geometry {
    pub mod arc;
    pub mod cubic;
    pub mod limits;
    pub mod math;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod batch;
    pub mod outcome;
    pub mod splice;
    pub mod supernode;
    pub mod trim;
}
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod selection;
pub mod store;
pub mod svg;
pub mod transform;

pub use algorithms::batch::{round_corners, round_path, Batch};
pub use algorithms::outcome::{FilletShape, Outcome, Rejection};
pub use config::RoundOptions;
pub use diagnostics::Diagnostics;
pub use error::RoundError;
pub use model::{Method, Node, Path, Subpath, Vec2};
pub use selection::SelectionKey;
pub use store::{MemoryStore, PathHandle, PathStore};
