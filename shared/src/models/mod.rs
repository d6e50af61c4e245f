mod invoice;
mod theme;

pub use invoice::*;
pub use theme::*;
