pub mod branding;
pub mod error;
pub mod report;
pub mod validation;

pub use branding::*;
pub use error::*;
pub use report::*;
pub use validation::*;
