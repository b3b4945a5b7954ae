//! Camera plugin (render-only).
//!
//! One camera lives for the whole app so the restart flip can span both
//! scenes. It is centred on the play area, which makes world coordinates
//! equal scene coordinates (origin bottom-left, y up).
//!
//! ```text
//! Startup:          spawn MainCamera
//! OnEnter(Playing): re-centre on the (possibly resized) play area
//! ```

use bevy::prelude::*;

use crate::common::{
    play_area::{fit_play_area_to_view, PlayArea},
    state::GameState,
};

#[derive(Component)]
pub struct MainCamera;

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_camera).add_systems(
        OnEnter(GameState::Playing),
        center_on_play_area.after(fit_play_area_to_view),
    );
}

fn spawn_camera(mut commands: Commands, area: Res<PlayArea>) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera,
        Transform::from_translation(area.center().extend(999.0)),
    ));
}

fn center_on_play_area(area: Res<PlayArea>, mut q_cam: Query<&mut Transform, With<MainCamera>>) {
    for mut tf in &mut q_cam {
        let c = area.center();
        tf.translation.x = c.x;
        tf.translation.y = c.y;
    }
}

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::common::{play_area::PlayArea, test_utils::run_system_once};

    #[test]
    fn camera_looks_at_play_area_centre() {
        let mut world = World::new();
        world.insert_resource(PlayArea::new(400.0, 600.0));
        run_system_once(&mut world, super::spawn_camera);

        world.insert_resource(PlayArea::new(1000.0, 500.0));
        run_system_once(&mut world, super::center_on_play_area);

        let mut q = world.query_filtered::<&Transform, With<super::MainCamera>>();
        let tf = q.single(&world).unwrap();
        assert_eq!(tf.translation.truncate(), Vec2::new(500.0, 250.0));
    }
}
