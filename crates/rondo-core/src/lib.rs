mod detection;
mod geom;
mod settings;

pub mod math;

pub use detection::*;
pub use geom::*;
pub use settings::*;

pub type Vector2 = nalgebra::Vector2<f64>;
