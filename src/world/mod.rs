//! Location registry: regions, routes, towns, dungeons, gyms and the
//! requirements that gate them.

mod data;
mod registry;
mod requirements;
mod types;

#[allow(unused_imports)]
pub use data::sample_world_data;
#[allow(unused_imports)]
pub use registry::{World, WorldError};
#[allow(unused_imports)]
pub use requirements::{all_completed, unmet_hints, Requirement};
#[allow(unused_imports)]
pub use types::*;
