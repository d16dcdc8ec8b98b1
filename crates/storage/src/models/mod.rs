mod exercise;

pub use exercise::Exercise;
