//! Progress reporting while a suggestion is in flight

pub mod reporter;
