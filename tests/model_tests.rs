use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use approx::assert_relative_eq;
use floem_spectrum::{
    DecelerationConfig, GestureState, ManualScheduler, PickerConfig, PickerDelegate, PickerModel,
    PickerType,
};

fn model(picker_type: PickerType) -> (PickerModel, ManualScheduler) {
    let scheduler = ManualScheduler::new();
    let model = PickerModel::new(PickerConfig::new(picker_type), Box::new(scheduler.clone()));
    (model, scheduler)
}

type Calls = Rc<RefCell<Vec<(f64, PickerType)>>>;

/// Records every notification. The model only holds the delegate weakly, so
/// the caller keeps the returned `Rc` alive.
fn recorder(model: &mut PickerModel) -> (Calls, Rc<dyn PickerDelegate>) {
    let calls: Calls = Rc::new(RefCell::new(Vec::new()));
    let sink = calls.clone();
    let delegate: Rc<dyn PickerDelegate> =
        Rc::new(move |v: f64, t: PickerType| sink.borrow_mut().push((v, t)));
    model.set_delegate(Rc::downgrade(&delegate));
    (calls, delegate)
}

fn active_ticket(model: &PickerModel) -> floem_spectrum::Ticket {
    match model.state() {
        GestureState::Decelerating { ticket, .. } => ticket,
        other => panic!("expected deceleration, got {other:?}"),
    }
}

fn speed(model: &PickerModel) -> f64 {
    match model.state() {
        GestureState::Decelerating { speed, .. } => speed,
        other => panic!("expected deceleration, got {other:?}"),
    }
}

#[test]
fn test_hue_wraps_past_one() {
    let (mut m, _) = model(PickerType::Hue);
    m.set_value(0.95);
    m.add_to_value(0.1);
    assert_relative_eq!(m.value(), 0.05, epsilon = 1e-12);
}

#[test]
fn test_hue_wraps_below_zero() {
    let (mut m, _) = model(PickerType::Hue);
    m.set_value(0.05);
    m.add_to_value(-0.1);
    assert_relative_eq!(m.value(), 0.95, epsilon = 1e-12);
}

#[test]
fn test_hue_keeps_exact_one() {
    let (mut m, _) = model(PickerType::Hue);
    m.set_value(1.0);
    assert_eq!(m.value(), 1.0);
}

#[test]
fn test_channel_clamps_without_redraw() {
    for picker_type in [PickerType::Saturation, PickerType::Brightness] {
        let (mut m, _) = model(picker_type);
        let (calls, _delegate) = recorder(&mut m);

        m.set_value(0.9);
        assert!(m.take_needs_display());

        m.add_to_value(0.3);
        assert_eq!(m.value(), 1.0);
        assert!(!m.needs_display());

        m.add_to_value(-4.0);
        assert_eq!(m.value(), 0.0);
        assert!(!m.needs_display());

        let values: Vec<f64> = calls.borrow().iter().map(|(v, _)| *v).collect();
        assert_eq!(values, vec![0.9, 1.0, 0.0]);
        assert!(calls.borrow().iter().all(|(_, t)| *t == picker_type));
    }
}

#[test]
fn test_value_stays_in_unit_range() {
    let deltas = [0.3, 0.9, -2.7, 0.01, 5.5, -0.49, 1.0, -1.0, 0.75];
    for picker_type in [PickerType::Hue, PickerType::Saturation, PickerType::Brightness] {
        let (mut m, _) = model(picker_type);
        for d in deltas {
            m.add_to_value(d);
            assert!(
                (0.0..=1.0).contains(&m.value()),
                "{picker_type}: {} out of range",
                m.value()
            );
        }
    }
}

#[test]
fn test_delegate_fires_once_per_mutation() {
    let (mut m, _) = model(PickerType::Hue);
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    let delegate: Rc<dyn PickerDelegate> = Rc::new(move |_: f64, _: PickerType| c.set(c.get() + 1));
    m.set_delegate(Rc::downgrade(&delegate));

    m.set_value(0.2);
    m.add_to_value(0.9);
    m.pan_began(0.0);
    m.pan_changed(10.0, 100.0);
    assert_eq!(count.get(), 3);
}

#[test]
fn test_dropped_delegate_is_skipped() {
    let (mut m, _) = model(PickerType::Saturation);
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    let delegate: Rc<dyn PickerDelegate> = Rc::new(move |_: f64, _: PickerType| c.set(c.get() + 1));
    let weak: Weak<dyn PickerDelegate> = Rc::downgrade(&delegate);
    m.set_delegate(weak);
    m.set_value(0.5);
    drop(delegate);
    m.set_value(0.6);
    assert_eq!(count.get(), 1);
    assert_eq!(m.value(), 0.6);
}

#[test]
fn test_hue_preview_redraws_without_touching_value() {
    let (mut m, _) = model(PickerType::Saturation);
    let (calls, _delegate) = recorder(&mut m);
    m.set_value(0.4);
    m.take_needs_display();
    calls.borrow_mut().clear();

    m.set_hue_value_for_preview(0.3);
    assert!(m.needs_display());
    assert_eq!(m.value(), 0.4);
    assert_eq!(m.hue_value_for_preview(), 0.3);
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_drag_moves_by_width_fraction() {
    let (mut m, _) = model(PickerType::Brightness);
    m.set_value(0.5);
    m.pan_began(100.0);
    m.pan_changed(150.0, 200.0);
    assert_relative_eq!(m.value(), 0.75, epsilon = 1e-12);
    m.pan_changed(110.0, 200.0);
    assert_relative_eq!(m.value(), 0.55, epsilon = 1e-12);
    assert_eq!(m.state(), GestureState::Tracking { last_x: Some(110.0) });
}

#[test]
fn test_changed_without_began_is_tolerated() {
    let (mut m, _) = model(PickerType::Hue);
    m.set_value(0.5);
    m.pan_changed(80.0, 100.0);
    assert_eq!(m.value(), 0.5);
    assert_eq!(m.state(), GestureState::Tracking { last_x: Some(80.0) });
    m.pan_changed(90.0, 100.0);
    assert_relative_eq!(m.value(), 0.6, epsilon = 1e-12);
}

#[test]
fn test_release_without_deceleration_goes_idle() {
    let (mut m, scheduler) = model(PickerType::Hue);
    m.set_should_decelerate(false);
    m.pan_began(0.0);
    m.pan_changed(20.0, 100.0);
    m.pan_ended(900.0);
    assert_eq!(m.state(), GestureState::Idle);
    assert!(scheduler.scheduled().is_empty());
}

#[test]
fn test_release_schedules_tick_cycle() {
    let (mut m, scheduler) = model(PickerType::Hue);
    m.pan_began(0.0);
    m.pan_ended(400.0);
    assert!(m.is_decelerating());
    let scheduled = scheduler.scheduled();
    assert_eq!(scheduled.len(), 1);
    assert_relative_eq!(scheduled[0].1.as_secs_f64(), 0.025, epsilon = 1e-9);
    assert_eq!(speed(&m), 400.0);
}

#[test]
fn test_cancelled_pan_also_decelerates() {
    let (mut m, _) = model(PickerType::Hue);
    m.pan_began(0.0);
    m.pan_cancelled(-250.0);
    assert_eq!(speed(&m), -250.0);
}

#[test]
fn test_speed_decays_geometrically() {
    let (mut m, _) = model(PickerType::Hue);
    m.pan_began(0.0);
    m.pan_ended(1000.0);
    let ticket = active_ticket(&m);
    for n in 1..=5 {
        m.tick(ticket);
        assert_relative_eq!(speed(&m), 1000.0 * 0.7255_f64.powi(n), max_relative = 1e-12);
    }
}

#[test]
fn test_tick_moves_value() {
    let (mut m, _) = model(PickerType::Hue);
    m.set_value(0.5);
    m.set_deceleration_speed(1000.0);
    let ticket = active_ticket(&m);
    m.tick(ticket);
    assert_relative_eq!(m.value(), 0.5 + 725.5 * 0.025 / 100.0, epsilon = 1e-12);
}

#[test]
fn test_deceleration_stops_at_threshold() {
    let (mut m, scheduler) = model(PickerType::Saturation);
    m.set_value(0.5);
    m.set_deceleration_speed(1.0);
    let ticket = active_ticket(&m);

    let mut ticks = 0;
    while m.is_decelerating() {
        m.tick(ticket);
        ticks += 1;
        assert!(ticks < 100, "deceleration never stopped");
    }
    // First n with 0.7255^n <= 0.001
    assert_eq!(ticks, 22);
    assert_eq!(m.state(), GestureState::Idle);
    assert_eq!(scheduler.cancelled(), vec![ticket]);
    assert!(scheduler.active().is_empty());
}

#[test]
fn test_negligible_speed_does_not_schedule() {
    let (mut m, scheduler) = model(PickerType::Hue);
    m.pan_began(0.0);
    m.pan_ended(0.0005);
    assert_eq!(m.state(), GestureState::Idle);
    assert!(scheduler.scheduled().is_empty());
}

#[test]
fn test_new_speed_replaces_running_cycle() {
    let (mut m, scheduler) = model(PickerType::Hue);
    m.set_deceleration_speed(300.0);
    let first = active_ticket(&m);
    m.set_deceleration_speed(-600.0);
    let second = active_ticket(&m);
    assert_ne!(first, second);
    assert_eq!(scheduler.cancelled(), vec![first]);
    assert_eq!(scheduler.active(), vec![second]);
    assert_eq!(speed(&m), -600.0);
}

#[test]
fn test_new_pan_cancels_deceleration() {
    let (mut m, scheduler) = model(PickerType::Hue);
    m.set_value(0.5);
    m.pan_began(0.0);
    m.pan_ended(800.0);
    let ticket = active_ticket(&m);

    m.pan_began(40.0);
    assert_eq!(m.state(), GestureState::Tracking { last_x: Some(40.0) });
    assert!(scheduler.active().is_empty());

    // A tick already in flight must not move the value.
    m.tick(ticket);
    assert_eq!(m.value(), 0.5);
}

#[test]
fn test_stale_ticket_is_ignored() {
    let (mut m, _) = model(PickerType::Hue);
    m.set_value(0.2);
    m.set_deceleration_speed(500.0);
    let old = active_ticket(&m);
    m.set_deceleration_speed(500.0);
    m.tick(old);
    assert_eq!(speed(&m), 500.0);
    assert_eq!(m.value(), 0.2);
}

#[test]
fn test_disabling_deceleration_stops_cycle() {
    let (mut m, scheduler) = model(PickerType::Brightness);
    m.set_deceleration_speed(500.0);
    m.set_should_decelerate(false);
    assert_eq!(m.state(), GestureState::Idle);
    assert!(scheduler.active().is_empty());
}

#[test]
fn test_custom_deceleration_config() {
    let mut config = PickerConfig::new(PickerType::Hue);
    config.deceleration.decay = 0.5;
    config.deceleration.tick_interval_secs = 0.01;
    let scheduler = ManualScheduler::new();
    let mut m = PickerModel::new(config, Box::new(scheduler.clone()));
    m.set_deceleration_speed(8.0);
    let ticket = active_ticket(&m);
    m.tick(ticket);
    assert_eq!(speed(&m), 4.0);
    assert_relative_eq!(scheduler.scheduled()[0].1.as_secs_f64(), 0.01, epsilon = 1e-9);
}

#[test]
fn test_negative_tick_interval_falls_back_to_default() {
    let mut config = PickerConfig::new(PickerType::Hue);
    config.deceleration.tick_interval_secs = -0.025;
    let scheduler = ManualScheduler::new();
    let mut m = PickerModel::new(config, Box::new(scheduler.clone()));
    assert_eq!(m.deceleration(), DecelerationConfig::default());

    m.pan_began(0.0);
    m.pan_ended(400.0);
    assert!(m.is_decelerating());
    assert_relative_eq!(scheduler.scheduled()[0].1.as_secs_f64(), 0.025, epsilon = 1e-9);
}

#[test]
fn test_nan_tick_interval_falls_back_to_default() {
    let mut config = PickerConfig::new(PickerType::Saturation);
    config.deceleration.tick_interval_secs = f64::NAN;
    let m = PickerModel::new(config, Box::new(ManualScheduler::new()));
    assert_eq!(m.deceleration().tick_interval_secs, 0.025);
}

#[test]
fn test_non_decaying_config_still_stops() {
    let mut config = PickerConfig::new(PickerType::Hue);
    config.deceleration.decay = 1.0;
    let mut m = PickerModel::new(config, Box::new(ManualScheduler::new()));
    m.set_deceleration_speed(400.0);
    let ticket = active_ticket(&m);

    let mut ticks = 0;
    while m.is_decelerating() {
        m.tick(ticket);
        ticks += 1;
        assert!(ticks < 1_000, "deceleration never stopped");
    }
    assert_eq!(m.state(), GestureState::Idle);
}
