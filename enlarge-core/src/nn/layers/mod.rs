pub mod enlarge;

pub use enlarge::Enlarge;
