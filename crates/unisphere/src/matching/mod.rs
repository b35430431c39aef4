pub mod faculty;
pub mod recommendation;

pub use faculty::{classify, Faculty};
