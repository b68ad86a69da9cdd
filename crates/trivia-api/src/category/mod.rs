pub mod routes;

pub use routes::{CategoryMap, category_map, routes};
