// Scenario tests for the interaction state machine.
//
// The fixture is a 400x400 canvas with the origin at its center, so the
// origin sits at (200, 200) canvas px, the hit radius is 100 and the
// on-screen range (half the smaller dimension) is 200.

use dial_core::{Contact, ContactId, DialParams, Phase, RadialSlider, Viewport};
use glam::DVec2;

fn make_slider() -> RadialSlider {
    let viewport = Viewport::new(400.0, 400.0).unwrap();
    RadialSlider::new(DVec2::splat(0.5), viewport, DialParams::default())
}

fn touch(id: i32, x: f64, y: f64) -> Contact {
    Contact::new(ContactId::Touch(id), DVec2::new(x, y))
}

// Arm with contact `id` at the origin and nudge once so the handle is
// grabbed.
fn grab(slider: &mut RadialSlider, id: i32) {
    assert!(slider.contact_start(&[touch(id, 200.0, 200.0)]));
    assert!(slider.contact_move(touch(id, 201.0, 200.0)));
    assert_eq!(slider.phase(), Phase::Grabbed);
}

#[test]
fn contact_outside_origin_never_leaves_idle() {
    let mut slider = make_slider();
    // 150 px from the origin, outside the 100 px hit circle
    assert!(!slider.contact_start(&[touch(1, 350.0, 200.0)]));
    assert_eq!(slider.phase(), Phase::Idle);
    assert!(!slider.contact_move(touch(1, 300.0, 200.0)));
    assert_eq!(slider.phase(), Phase::Idle);
}

#[test]
fn contact_inside_origin_arms() {
    let mut slider = make_slider();
    assert!(slider.contact_start(&[touch(3, 250.0, 200.0)]));
    assert_eq!(slider.phase(), Phase::Armed);
    assert_eq!(slider.active_contact(), Some(ContactId::Touch(3)));
}

#[test]
fn start_picks_the_first_qualifying_contact() {
    let mut slider = make_slider();
    let contacts = [
        touch(8, 390.0, 390.0), // outside
        touch(9, 210.0, 210.0), // inside, first qualifier
        touch(10, 200.0, 200.0),
    ];
    assert!(slider.contact_start(&contacts));
    assert_eq!(slider.active_contact(), Some(ContactId::Touch(9)));
}

#[test]
fn second_start_is_ignored_while_active() {
    let mut slider = make_slider();
    assert!(slider.contact_start(&[touch(3, 250.0, 200.0)]));
    assert!(!slider.contact_start(&[touch(4, 200.0, 200.0)]));
    assert_eq!(slider.active_contact(), Some(ContactId::Touch(3)));
}

#[test]
fn grab_requires_reaching_handle_beyond_center() {
    let mut slider = make_slider();

    // first interaction parks the handle at (300, 200), 100 px out
    grab(&mut slider, 1);
    assert!(slider.contact_move(touch(1, 300.0, 200.0)));
    assert!(slider.contact_end(ContactId::Touch(1)));
    assert_eq!(slider.extent_px(), DVec2::new(300.0, 200.0));

    // a new contact arms but approaching the handle from the inside, short
    // of its distance from the origin, must not grab it
    assert!(slider.contact_start(&[touch(2, 250.0, 200.0)]));
    assert!(slider.contact_move(touch(2, 240.0, 200.0)));
    assert_eq!(slider.phase(), Phase::Armed);
    // the handle did not move while merely armed
    assert_eq!(slider.extent_px(), DVec2::new(300.0, 200.0));

    // once the contact is past the handle's own distance, it grabs
    assert!(slider.contact_move(touch(2, 310.0, 200.0)));
    assert_eq!(slider.phase(), Phase::Grabbed);
}

#[test]
fn grabbed_handle_follows_and_clamps_radially() {
    let mut slider = make_slider();
    grab(&mut slider, 1);

    // twice the on-screen range along +x clamps to exactly the range
    assert!(slider.contact_move(touch(1, 600.0, 200.0)));
    assert_eq!(slider.extent_px(), DVec2::new(400.0, 200.0));
    assert_eq!(slider.value_norm(), 1.0);

    // a diagonal overshoot keeps its direction: offset (320, 240) has
    // length 400, so it lands at half that offset, still 200 px out
    assert!(slider.contact_move(touch(1, 520.0, 440.0)));
    let extent = slider.extent_px();
    assert!((extent - DVec2::new(360.0, 320.0)).length() < 1e-9);
    assert!((extent.distance(DVec2::new(200.0, 200.0)) - 200.0).abs() < 1e-9);
    assert_eq!(slider.value_norm(), 1.0);
}

#[test]
fn extent_stays_inside_the_unit_square() {
    // origin near the right edge: the on-screen disk pokes past x = 1
    let viewport = Viewport::new(400.0, 400.0).unwrap();
    let mut slider = RadialSlider::new(DVec2::new(0.9, 0.5), viewport, DialParams::default());

    assert!(slider.contact_start(&[touch(1, 360.0, 200.0)]));
    assert!(slider.contact_move(touch(1, 370.0, 200.0)));
    assert_eq!(slider.phase(), Phase::Grabbed);

    // 200 px out is on the disk, but normalized x would be 1.4
    assert!(slider.contact_move(touch(1, 560.0, 200.0)));
    assert_eq!(slider.extent(), DVec2::new(1.0, 0.5));
}

#[test]
fn value_scales_into_the_configured_range() {
    let mut slider = make_slider();
    slider.params.min = 0.0;
    slider.params.max = 100.0;
    grab(&mut slider, 1);

    // half the on-screen range
    assert!(slider.contact_move(touch(1, 300.0, 200.0)));
    assert_eq!(slider.value_norm(), 0.5);
    assert_eq!(slider.value(), 50.0);
    assert_eq!(slider.value_text(), "50.0");

    // the same relative displacement in a narrower range
    slider.params.min = 10.0;
    slider.params.max = 30.0;
    assert_eq!(slider.value(), 20.0);
    assert_eq!(slider.value_text(), "20.0");
}

#[test]
fn release_returns_idle_wherever_it_lands() {
    let mut slider = make_slider();
    grab(&mut slider, 1);
    // the release position is irrelevant; only the identity matters
    assert!(slider.contact_end(ContactId::Touch(1)));
    assert_eq!(slider.phase(), Phase::Idle);
    assert_eq!(slider.active_contact(), None);

    // release from armed works the same way
    assert!(slider.contact_start(&[touch(2, 250.0, 200.0)]));
    assert_eq!(slider.phase(), Phase::Armed);
    assert!(slider.contact_end(ContactId::Touch(2)));
    assert_eq!(slider.phase(), Phase::Idle);
}

#[test]
fn unmatched_identities_are_ignored() {
    let mut slider = make_slider();
    assert!(slider.contact_start(&[touch(7, 250.0, 200.0)]));

    assert!(!slider.contact_move(touch(8, 300.0, 200.0)));
    assert!(!slider.contact_end(ContactId::Touch(8)));
    assert!(!slider.contact_end(ContactId::Mouse));
    assert_eq!(slider.active_contact(), Some(ContactId::Touch(7)));

    assert!(slider.contact_end(ContactId::Touch(7)));
}

#[test]
fn mouse_identity_is_distinct_from_touch() {
    let mut slider = make_slider();
    let mouse = Contact::new(ContactId::Mouse, DVec2::new(250.0, 200.0));
    assert!(slider.contact_start(&[mouse]));
    assert!(!slider.contact_move(touch(1, 250.0, 200.0)));
    assert!(slider.contact_end(ContactId::Mouse));
    assert_eq!(slider.phase(), Phase::Idle);
}

#[test]
fn interaction_restarts_after_release() {
    let mut slider = make_slider();
    grab(&mut slider, 1);
    assert!(slider.contact_end(ContactId::Touch(1)));
    assert!(slider.contact_start(&[touch(2, 250.0, 200.0)]));
    assert_eq!(slider.phase(), Phase::Armed);
}

#[test]
fn uniform_resize_preserves_the_value() {
    let mut slider = make_slider();
    grab(&mut slider, 1);
    assert!(slider.contact_move(touch(1, 300.0, 200.0)));
    assert_eq!(slider.value_norm(), 0.5);

    // normalized state carries over; a uniform rescale keeps the value
    slider.set_viewport(Viewport::new(800.0, 800.0).unwrap());
    assert_eq!(slider.value_norm(), 0.5);
    assert_eq!(slider.extent_px(), DVec2::new(600.0, 400.0));
}
