pub mod instrument;
pub mod quote;
pub mod report;

pub use instrument::*;
pub use quote::*;
pub use report::*;
