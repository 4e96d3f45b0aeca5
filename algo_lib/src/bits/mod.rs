pub mod bit_ops;
pub mod iter_ones;
