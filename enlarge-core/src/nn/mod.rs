pub mod layers;

pub use layers::Enlarge;
