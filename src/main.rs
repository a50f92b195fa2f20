use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use voxel_anatomy::prelude::*;

/// Headless anatomy simulation: a humanoid subject takes seeded random hits
/// while the circulation model bleeds and heals it.
#[derive(Parser, Debug, Resource)]
#[command(name = "voxel-anatomy")]
struct Args {
    /// Seed for the impact script
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Milliseconds of game time between impacts
    #[arg(long, default_value_t = 1500)]
    impact_interval_ms: u64,

    /// Smallest raw damage per impact
    #[arg(long, default_value_t = 5)]
    min_damage: i32,

    /// Largest raw damage per impact
    #[arg(long, default_value_t = 25)]
    max_damage: i32,

    /// Stop after this much game time, if the subject survives
    #[arg(long, default_value_t = 120_000)]
    duration_ms: u64,

    /// Game-time speedup relative to wall clock
    #[arg(long, default_value_t = 10.0)]
    time_scale: f32,
}

/// Marker for the entity taking the beating
#[derive(Component)]
struct Subject;

#[derive(Resource)]
struct ImpactScript {
    rng: StdRng,
    timer: Timer,
}

fn main() {
    let args = Args::parse();
    App::new()
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(
            Duration::from_millis(16),
        )))
        .add_plugins(bevy::log::LogPlugin::default())
        .insert_resource(ImpactScript {
            rng: StdRng::seed_from_u64(args.seed),
            timer: Timer::new(
                Duration::from_millis(args.impact_interval_ms),
                TimerMode::Repeating,
            ),
        })
        .insert_resource(args)
        .add_plugins(voxel_anatomy::plugin)
        .add_systems(Startup, (configure_clock, spawn_subject))
        .add_systems(
            Update,
            (
                random_impact_system,
                log_part_health_system,
                log_blood_level_system,
                handle_destroy_system,
                stop_after_duration_system,
            ),
        )
        .run();
}

fn configure_clock(args: Res<Args>, mut time: ResMut<Time<Virtual>>) {
    time.set_relative_speed(args.time_scale);
}

fn spawn_subject(mut commands: Commands) {
    commands.spawn((Subject, Anatomy::humanoid()));
    info!("spawned a humanoid subject");
}

/// Deal a random hit to a random body part on every script tick
fn random_impact_system(
    time: Res<Time>,
    args: Res<Args>,
    mut script: ResMut<ImpactScript>,
    subjects: Query<(Entity, &Anatomy), With<Subject>>,
    mut impacts: MessageWriter<PartImpactEvent>,
) {
    script.timer.tick(time.delta());
    for _ in 0..script.timer.times_finished_this_tick() {
        for (entity, anatomy) in subjects.iter() {
            // Sort so the seed, not HashMap order, decides the target
            let mut parts: Vec<&String> = anatomy.parts.keys().collect();
            parts.sort();
            let part = parts[script.rng.gen_range(0..parts.len())].clone();
            let kinds = DamageKind::all();
            let kind = kinds[script.rng.gen_range(0..kinds.len())];
            let amount = script.rng.gen_range(args.min_damage..=args.max_damage);
            info!("impact: {} {} to the {}", kind.name(), amount, part);
            impacts.write(PartImpactEvent::new(entity, part, amount, kind));
        }
    }
}

fn log_part_health_system(
    mut events: MessageReader<PartHealthChangedEvent>,
    query: Query<&InjuredCirculation>,
) {
    for event in events.read() {
        let Ok(injured) = query.get(event.entity) else {
            continue;
        };
        if let Some(part) = injured.part_healths.get(&event.part) {
            let severity = injured
                .part_severity(&event.part)
                .map_or("healthy", |s| s.name());
            info!(
                "{}: {}/{} ({})",
                event.part, part.health, part.max_health, severity
            );
        }
    }
}

fn log_blood_level_system(
    mut events: MessageReader<BloodLevelChangedEvent>,
    query: Query<&InjuredCirculation>,
) {
    for event in events.read() {
        let Ok(injured) = query.get(event.entity) else {
            continue;
        };
        info!(
            "blood: {}/{} (rate {:+.1}/s)",
            event.level, injured.max_blood_level, injured.blood_regen_rate
        );
    }
}

/// The host side of the terminal transition: despawn and stop the sim
fn handle_destroy_system(
    mut commands: Commands,
    mut events: MessageReader<DestroyEvent>,
    mut exit: MessageWriter<AppExit>,
) {
    for event in events.read() {
        info!("subject destroyed: {}", event.cause.name());
        commands.entity(event.entity).try_despawn();
        exit.write(AppExit::Success);
    }
}

fn stop_after_duration_system(
    time: Res<Time>,
    args: Res<Args>,
    mut exit: MessageWriter<AppExit>,
) {
    if elapsed_ms(&time) >= args.duration_ms {
        info!("subject survived the session");
        exit.write(AppExit::Success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["voxel-anatomy"]);
        assert_eq!(args.seed, 42);
        assert_eq!(args.impact_interval_ms, 1500);
        assert_eq!(args.min_damage, 5);
        assert_eq!(args.max_damage, 25);
        assert_eq!(args.time_scale, 10.0);
    }

    #[test]
    fn test_args_override() {
        let args = Args::parse_from(["voxel-anatomy", "--seed", "7", "--max-damage", "60"]);
        assert_eq!(args.seed, 7);
        assert_eq!(args.max_damage, 60);
    }

    #[test]
    fn test_seeded_script_is_deterministic() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..32 {
            assert_eq!(a.gen_range(0..6usize), b.gen_range(0..6usize));
        }
    }
}
