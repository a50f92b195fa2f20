pub mod events;
pub mod plugin;
pub mod resources;
pub mod systems;

pub use events::DelayedActionEvent;
pub use plugin::{plugin, DelaySets};
pub use resources::DelayQueue;
pub use systems::{elapsed_ms, fire_due_actions_system};
