pub mod bars;
pub mod patterns;
pub mod symbols;
