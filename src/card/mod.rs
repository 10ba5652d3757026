//! Card module containing the number scheme and the issuing logic

pub mod issuer;
pub mod scheme;

pub use issuer::*;
pub use scheme::*;
