pub mod feedback;
pub mod models;
