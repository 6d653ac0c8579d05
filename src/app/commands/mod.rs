pub mod load;
pub mod replace;
