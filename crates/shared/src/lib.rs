pub mod canvas;
pub mod domain;
pub mod error;
