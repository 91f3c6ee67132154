pub mod at;
pub mod batch;
pub mod loss;

pub use at::At;
pub use batch::BatchDescriptor;
pub use loss::Loss;
