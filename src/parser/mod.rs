pub mod line;
pub mod pipeline;
pub mod stream;

pub use line::*;
pub use pipeline::*;
pub use stream::*;
