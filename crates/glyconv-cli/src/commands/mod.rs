pub mod batch;
pub mod evaluate;
pub mod table;
