pub mod components;
pub mod events;
pub mod plugin;
pub mod systems;

pub use components::{InjuredCirculation, PartHealth, Severity};
pub use events::{
    BleedRateChangedEvent, BloodLevelChangedEvent, DestroyCause, DestroyEvent,
    PartHealthChangedEvent,
};
pub use plugin::{plugin, CirculationSets};
pub use systems::{BLOOD_REGEN_ACTION, PART_REGEN_PREFIX};
