pub mod annotation;
pub mod classification;
pub mod codec;
pub mod detection;
pub mod pipeline;
pub mod shared;
