pub mod crop;
pub mod pipeline;
pub mod threshold;
