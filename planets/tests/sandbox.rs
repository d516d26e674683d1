use approx::assert_abs_diff_eq;
use glam::DVec2;
use planets::scenario::init_binary;
use planets::{Intent, Key, Mode, Sandbox, SandboxConfig, World};

fn running_world() -> World {
    let mut world = World::new(&SandboxConfig::default()).unwrap();
    world.toggle_time();
    world
}

// ==================================================================================
// Physics
// ==================================================================================

#[test]
fn momentum_is_conserved() {
    let mut world = running_world();
    world.create_body(DVec2::new(-3.0, 1.0), DVec2::new(0.5, 1.0), 1.0, 40.0).unwrap();
    world.create_body(DVec2::new(4.0, -2.0), DVec2::new(-1.0, 0.0), 1.0, 15.0).unwrap();
    world.create_body(DVec2::new(0.0, 6.0), DVec2::new(2.0, -0.5), 1.0, 3.0).unwrap();
    let before = world.total_momentum();

    for _ in 0..300 {
        world.step_time(1.0 / 60.0, 10);
    }

    let after = world.total_momentum();
    assert_abs_diff_eq!(after.x, before.x, epsilon = 1e-8);
    assert_abs_diff_eq!(after.y, before.y, epsilon = 1e-8);
}

fn heavy_and_light(world: &mut World, light_velocity: DVec2) -> impl Fn(&World) -> f64 {
    let heavy = world.create_body(DVec2::ZERO, DVec2::ZERO, 1.0, 100.0).unwrap();
    let light = world.create_body(DVec2::new(10.0, 0.0), light_velocity, 1.0, 1.0).unwrap();
    move |w: &World| (w.body(light).unwrap().position - w.body(heavy).unwrap().position).length()
}

#[test]
fn light_body_stays_bound_to_heavy_body() {
    let mut world = running_world();
    let separation = heavy_and_light(&mut world, DVec2::new(0.0, 7.0));
    let initial = separation(&world);

    for _ in 0..600 {
        world.step_time(1.0 / 60.0, 10);
        let d = separation(&world);
        assert!(d < 3.0 * initial, "escaped to {}", d);
        assert!(d.is_finite());
    }
}

#[test]
fn slow_light_body_falls_inward() {
    // v = 3 starts at apoapsis of a narrow ellipse; the first second is a
    // steady fall toward the heavy body
    let mut world = running_world();
    let separation = heavy_and_light(&mut world, DVec2::new(0.0, 3.0));
    let mut last = separation(&world);

    for _ in 0..60 {
        world.step_time(1.0 / 60.0, 10);
        let d = separation(&world);
        assert!(d < last, "moved outward to {}", d);
        last = d;
    }
    assert!(last < 5.0);
}

#[test]
fn paused_world_does_not_move() {
    let mut world = World::new(&SandboxConfig::default()).unwrap();
    init_binary(&mut world).unwrap();
    let before = world.snapshot();
    world.step_time(1.0, 10);
    assert_eq!(world.snapshot(), before);
}

// ==================================================================================
// Camera
// ==================================================================================

#[test]
fn follow_keeps_view_while_body_moves() {
    let config = SandboxConfig::default();
    let mut world = World::new(&config).unwrap();
    init_binary(&mut world).unwrap();
    let mut sandbox = Sandbox::from_world(&config, world);

    // light body sits at (10, 0): screen (350, 250)
    sandbox.handle(Intent::Pan { delta: DVec2::new(-40.0, 15.0) }).unwrap();
    let light_screen = sandbox.real_to_screen(DVec2::new(10.0, 0.0));
    let before = sandbox.camera_position();
    sandbox.handle(Intent::RightClick { screen: light_screen }).unwrap();
    assert_abs_diff_eq!(sandbox.camera_position().x, before.x, epsilon = 1e-12);
    assert_abs_diff_eq!(sandbox.camera_position().y, before.y, epsilon = 1e-12);

    sandbox.handle(Intent::Key(Key::Space)).unwrap();
    for _ in 0..60 {
        sandbox.tick(config.frame_dt());
    }

    // the followed body stays at the same screen spot
    let id = sandbox.camera().is_following().unwrap();
    let position = sandbox.world().body(id).unwrap().position;
    let screen = sandbox.real_to_screen(position);
    assert_abs_diff_eq!(screen.x, light_screen.x, epsilon = 1e-6);
    assert_abs_diff_eq!(screen.y, light_screen.y, epsilon = 1e-6);

    // unfollowing does not jump either
    let followed_view = sandbox.camera_position();
    sandbox.handle(Intent::RightClick { screen: DVec2::new(1.0, 1.0) }).unwrap();
    assert_eq!(sandbox.camera().is_following(), None);
    assert_abs_diff_eq!(sandbox.camera_position().x, followed_view.x, epsilon = 1e-9);
    assert_abs_diff_eq!(sandbox.camera_position().y, followed_view.y, epsilon = 1e-9);
}

#[test]
fn screen_round_trip_through_sandbox() {
    let mut sandbox = Sandbox::with_default_body(&SandboxConfig::default()).unwrap();
    sandbox.handle(Intent::Scroll { notches: -3.0 }).unwrap();
    sandbox.handle(Intent::Pan { delta: DVec2::new(12.0, 7.0) }).unwrap();
    for p in [DVec2::new(3.0, -4.0), DVec2::new(-250.0, 0.001)] {
        let back = sandbox.screen_to_real(sandbox.real_to_screen(p));
        assert_abs_diff_eq!(back.x, p.x, epsilon = 1e-9);
        assert_abs_diff_eq!(back.y, p.y, epsilon = 1e-9);
    }
}

// ==================================================================================
// Interaction
// ==================================================================================

#[test]
fn newest_overlapping_body_wins_the_click() {
    let config = SandboxConfig::default();
    let mut world = World::new(&config).unwrap();
    world.create_body(DVec2::ZERO, DVec2::ZERO, 2.0, 1.0).unwrap();
    let b = world.create_body(DVec2::new(1.0, 0.0), DVec2::ZERO, 2.0, 1.0).unwrap();
    let mut sandbox = Sandbox::from_world(&config, world);

    let overlap = sandbox.real_to_screen(DVec2::new(0.5, 0.0));
    sandbox.handle(Intent::LeftClick { screen: overlap, create: false }).unwrap();
    assert_eq!(sandbox.mode(), Mode::Selected(b));
}

#[test]
fn selecting_pauses_time() {
    let mut sandbox = Sandbox::with_default_body(&SandboxConfig::default()).unwrap();
    sandbox.handle(Intent::Key(Key::Space)).unwrap();
    assert!(sandbox.world().is_time_flowing());

    let origin = sandbox.real_to_screen(DVec2::ZERO);
    sandbox.handle(Intent::LeftClick { screen: origin, create: false }).unwrap();
    assert!(!sandbox.world().is_time_flowing());
}

#[test]
fn focused_field_is_released_when_body_is_removed() {
    let mut sandbox = Sandbox::with_default_body(&SandboxConfig::default()).unwrap();
    let origin = sandbox.real_to_screen(DVec2::ZERO);
    sandbox.handle(Intent::LeftClick { screen: origin, create: false }).unwrap();
    let id = sandbox.world().is_selected().unwrap();
    let mass_box = sandbox.fields()[0].rect().top_left + DVec2::new(5.0, 5.0);
    sandbox.handle(Intent::LeftClick { screen: mass_box, create: false }).unwrap();

    sandbox.remove_body(id).unwrap();
    assert_eq!(sandbox.mode(), Mode::Neutral);
    sandbox.handle(Intent::Key(Key::Space)).unwrap();
    assert!(sandbox.world().is_time_flowing());
}

#[test]
fn bad_mass_text_is_rejected() {
    let mut sandbox = Sandbox::with_default_body(&SandboxConfig::default()).unwrap();
    let origin = sandbox.real_to_screen(DVec2::ZERO);
    sandbox.handle(Intent::LeftClick { screen: origin, create: false }).unwrap();
    let id = sandbox.world().is_selected().unwrap();
    let mass_box = sandbox.fields()[0].rect().top_left + DVec2::new(5.0, 5.0);

    for text in ["-5", "abc"] {
        sandbox.handle(Intent::LeftClick { screen: mass_box, create: false }).unwrap();
        for _ in 0..sandbox.fields()[0].input().len() {
            sandbox.handle(Intent::Key(Key::Backspace)).unwrap();
        }
        for c in text.chars() {
            sandbox.handle(Intent::Key(Key::Char(c))).unwrap();
        }
        assert!(sandbox.handle(Intent::Key(Key::Enter)).is_err());
        assert_eq!(sandbox.world().body(id).unwrap().mass(), 100.0);
        assert_eq!(sandbox.fields()[0].input(), "100");
    }
}
