pub mod model;
pub mod routes;
pub mod selection;

pub use routes::routes;
