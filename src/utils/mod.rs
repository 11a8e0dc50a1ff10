pub use vectors::{argsort, vector_max, vector_min, Sort};

mod vectors;
