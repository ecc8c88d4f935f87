pub mod calculator;
pub mod form;
pub mod normalizer;
