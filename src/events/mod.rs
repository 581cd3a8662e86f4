pub mod pointer;
pub mod scroll;

pub use pointer::PointerBinding;
pub use scroll::ScrollBinding;
