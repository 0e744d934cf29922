pub mod extract;
pub mod load;
pub mod select;
