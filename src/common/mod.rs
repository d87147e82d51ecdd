pub mod error;
pub mod extract;
pub mod naming;
pub mod response;
