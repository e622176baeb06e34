pub mod page;
pub mod panels;
