use umbra_ngin::settings::ShadowSettings;

#[test]
fn defaults_match_the_demo_scene() {
    let settings = ShadowSettings::default();

    assert_eq!(settings.light_pos, cgmath::Point3::new(2.5, 4.8, 7.0));
    assert_eq!(settings.light_target, cgmath::Point3::new(3.5, 0.0, 3.5));
    assert_eq!(settings.proj_width, 10.0);
    assert_eq!(settings.proj_height, 10.0);
    assert!(!settings.perspective);
    assert_eq!(settings.fov_deg, 120.0);
    assert_eq!(settings.bias, -0.006);
    assert_eq!(settings.pcf_radius, 4);
    assert!(!settings.rotate);
}

#[test]
fn light_position_clamps_to_its_range() {
    let mut settings = ShadowSettings::default();

    settings.nudge_light_x(-100.0);
    assert_eq!(settings.light_pos.x, -10.0);
    settings.nudge_light_x(100.0);
    assert_eq!(settings.light_pos.x, 10.0);

    settings.nudge_light_y(-100.0);
    assert_eq!(settings.light_pos.y, 1.0);
    settings.nudge_light_y(100.0);
    assert_eq!(settings.light_pos.y, 20.0);

    settings.nudge_light_z(-100.0);
    assert_eq!(settings.light_pos.z, 1.0);
    settings.nudge_light_z(100.0);
    assert_eq!(settings.light_pos.z, 20.0);
}

#[test]
fn target_clamps_to_its_range() {
    let mut settings = ShadowSettings::default();

    settings.nudge_target_x(-100.0);
    assert_eq!(settings.light_target.x, -10.0);
    settings.nudge_target_y(-100.0);
    assert_eq!(settings.light_target.y, 0.0);
    settings.nudge_target_z(100.0);
    assert_eq!(settings.light_target.z, 20.0);
}

#[test]
fn projection_size_never_collapses() {
    let mut settings = ShadowSettings::default();

    settings.nudge_proj_width(-100.0);
    assert_eq!(settings.proj_width, 0.1);
    settings.nudge_proj_height(-100.0);
    assert_eq!(settings.proj_height, 0.1);

    settings.nudge_proj_width(1000.0);
    assert_eq!(settings.proj_width, 100.0);
}

#[test]
fn fov_and_bias_clamp() {
    let mut settings = ShadowSettings::default();

    settings.nudge_fov(-1000.0);
    assert_eq!(settings.fov_deg, 1.0);
    settings.nudge_fov(1000.0);
    assert_eq!(settings.fov_deg, 179.0);

    settings.nudge_bias(-1.0);
    assert_eq!(settings.bias, -0.01);
    settings.nudge_bias(1.0);
    assert_eq!(settings.bias, 0.00001);
}

#[test]
fn pcf_radius_saturates_at_both_ends() {
    let mut settings = ShadowSettings::default();

    settings.nudge_pcf_radius(-100);
    assert_eq!(settings.pcf_radius, 0);
    settings.nudge_pcf_radius(-1);
    assert_eq!(settings.pcf_radius, 0);

    settings.nudge_pcf_radius(100);
    assert_eq!(settings.pcf_radius, ShadowSettings::PCF_RADIUS_MAX);
}

#[test]
fn toggles_flip_back_and_forth() {
    let mut settings = ShadowSettings::default();

    settings.toggle_perspective();
    assert!(settings.perspective);
    settings.toggle_perspective();
    assert!(!settings.perspective);

    settings.toggle_rotate();
    assert!(settings.rotate);
}
