pub mod cache;
pub mod error;
pub mod legend;
pub mod limits;
pub mod model;
pub mod state;
pub mod table;
pub mod algorithms {
    pub mod classify;
    pub mod jenks;
}
pub mod json;

pub use algorithms::classify::classify;
pub use algorithms::jenks::{compute_breaks, goodness_of_variance_fit, within_class_ssd};
pub use cache::BreaksCache;
pub use error::{BreaksError, TableError};
pub use model::{Breaks, ClassRange, Color, Palette};
pub use state::{render, render_cached, Frame, MapState};
pub use table::PriceTable;
