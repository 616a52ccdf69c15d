pub mod location;

pub use location::{Coords, Location};
