pub mod client;
pub mod entities;
pub mod ports;
pub mod prompts;
pub mod schema;
pub mod services;
pub mod value_objects;
pub mod view;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
