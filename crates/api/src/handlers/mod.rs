pub mod echo;
pub mod responses;
