pub mod body;
pub mod circulation;
pub mod delay;
pub mod prelude;

use bevy::prelude::*;

/// Installs the whole anatomy stack: delayed actions, body-part impacts and
/// the circulation model.
pub fn plugin(app: &mut App) {
    app.add_plugins((delay::plugin, body::plugin, circulation::plugin));
}
