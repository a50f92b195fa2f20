// Re-export components and events
pub use crate::body::components::*;
pub use crate::body::events::*;
pub use crate::circulation::components::*;
pub use crate::circulation::events::*;
pub use crate::delay::events::*;
pub use crate::delay::resources::*;

// Re-export system sets, action ids and helpers
pub use crate::circulation::plugin::CirculationSets;
pub use crate::circulation::systems::{BLOOD_REGEN_ACTION, PART_REGEN_PREFIX};
pub use crate::delay::plugin::DelaySets;
pub use crate::delay::systems::elapsed_ms;
