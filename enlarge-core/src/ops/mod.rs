pub mod enlarge;
pub mod traits;

pub use enlarge::{enlarge_backward_op, enlarge_forward_op, enlarge_op, EnlargeBackward};
