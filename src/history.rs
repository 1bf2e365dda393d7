pub mod edit;
pub mod manager;
