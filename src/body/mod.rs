pub mod components;
pub mod events;
pub mod plugin;

pub use components::{Anatomy, BodyPart, Characteristic};
pub use events::{DamageKind, PartImpactEvent};
pub use plugin::plugin;
