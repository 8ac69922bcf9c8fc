pub mod hole;

pub use hole::{find_hole, find_hole_at_least, has_hole, has_hole_at_least, is_hole, Hole};
