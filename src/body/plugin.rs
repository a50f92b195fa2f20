use bevy::prelude::*;

use super::events::PartImpactEvent;

/// Body plugin: registers the part-impact message
pub fn plugin(app: &mut App) {
    app.add_message::<PartImpactEvent>();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::events::DamageKind;

    #[test]
    fn test_plugin_registers_message() {
        let mut app = App::new();
        app.add_plugins(plugin);

        let entity = app.world_mut().spawn_empty().id();
        app.world_mut()
            .write_message(PartImpactEvent::new(entity, "torso", 10, DamageKind::Direct));
        app.update();
    }
}
