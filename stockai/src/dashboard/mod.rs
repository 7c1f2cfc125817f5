pub mod bars;
pub mod patterns;
pub mod search;
pub mod view;
