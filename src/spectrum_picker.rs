//! Horizontally scrollable spectrum picker view.
//!
//! Paints a five-stop gradient centered on the current value behind a fixed
//! vertical indicator. Dragging shifts the gradient; releasing with speed
//! lets it coast to a stop.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

use floem::action::exec_after;
use floem::kurbo::{Line, Rect, Shape, Stroke};
use floem::peniko::{Color, Gradient};

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::config::PickerConfig;
use crate::constants;
use crate::model::{PickerDelegate, PickerModel};
use crate::picker_type::PickerType;
use crate::scheduler::{Scheduler, Ticket};
use crate::velocity::VelocityTracker;

/// External values closer than this to the model's are treated as echoes.
const VALUE_EPSILON: f64 = 1e-9;

enum PickerUpdate {
    Value(f64),
    HuePreview(f64),
    Tick(Ticket),
}

/// Drives model ticks from Floem timers.
///
/// Floem timers fire once, so each tick re-arms the next one for as long as
/// its ticket is the active one.
struct FloemScheduler {
    id: ViewId,
    next: u64,
    active: Rc<Cell<Option<Ticket>>>,
}

impl FloemScheduler {
    fn new(id: ViewId) -> Self {
        Self {
            id,
            next: 0,
            active: Rc::new(Cell::new(None)),
        }
    }
}

/// Gradient axis: starts at the right edge, ends at the left edge.
fn gradient_line(w: f64, h: f64) -> ((f64, f64), (f64, f64)) {
    ((w, h / 2.0), (0.0, h / 2.0))
}

/// Vertical indicator at the midpoint, inset from top and bottom alike.
fn indicator_line(w: f64, h: f64) -> Line {
    let inset = h * constants::INDICATOR_INSET;
    Line::new((w / 2.0, inset), (w / 2.0, h - inset))
}

/// Push a value written to the bound signal into the model, skipping the
/// echo of the model's own notification.
fn apply_external_value(model: &mut PickerModel, v: f64) {
    if (v - model.value()).abs() > VALUE_EPSILON {
        model.set_value(v);
    }
}

fn arm(id: ViewId, ticket: Ticket, interval: Duration, active: Rc<Cell<Option<Ticket>>>) {
    exec_after(interval, move |_| {
        if active.get() == Some(ticket) {
            id.update_state(PickerUpdate::Tick(ticket));
            arm(id, ticket, interval, active);
        }
    });
}

impl Scheduler for FloemScheduler {
    fn schedule_repeating(&mut self, interval: Duration) -> Ticket {
        self.next += 1;
        let ticket = Ticket::new(self.next);
        self.active.set(Some(ticket));
        arm(self.id, ticket, interval, self.active.clone());
        ticket
    }

    fn cancel(&mut self, ticket: Ticket) {
        if self.active.get() == Some(ticket) {
            self.active.set(None);
        }
    }
}

/// Writes model changes into the bound signal, then forwards them.
struct SignalDelegate {
    value: RwSignal<f64>,
    forward: RefCell<Option<Weak<dyn PickerDelegate>>>,
}

impl PickerDelegate for SignalDelegate {
    fn value_changed(&self, value: f64, picker_type: PickerType) {
        if self.value.get_untracked() != value {
            self.value.set(value);
        }
        let forward = self.forward.borrow().as_ref().and_then(Weak::upgrade);
        if let Some(delegate) = forward {
            delegate.value_changed(value, picker_type);
        }
    }
}

pub struct SpectrumPicker {
    id: ViewId,
    held: bool,
    model: PickerModel,
    tracker: VelocityTracker,
    epoch: Instant,
    size: floem::taffy::prelude::Size<f32>,
    delegate: Rc<SignalDelegate>,
}

/// Creates a spectrum picker for one HSB channel.
///
/// - `value`: 0.0–1.0 position along the channel; read and written by the picker.
pub fn spectrum_picker(picker_type: PickerType, value: RwSignal<f64>) -> SpectrumPicker {
    spectrum_picker_with_config(PickerConfig::new(picker_type), value)
}

/// Like [`spectrum_picker`], with deceleration tuning from `config`.
pub fn spectrum_picker_with_config(config: PickerConfig, value: RwSignal<f64>) -> SpectrumPicker {
    let id = ViewId::new();

    create_effect(move |_| {
        let v = value.get();
        id.update_state(PickerUpdate::Value(v));
    });

    let mut model = PickerModel::new(config, Box::new(FloemScheduler::new(id)));
    model.set_value(value.get_untracked());

    let delegate = Rc::new(SignalDelegate {
        value,
        forward: RefCell::new(None),
    });
    let weak: Weak<SignalDelegate> = Rc::downgrade(&delegate);
    let weak: Weak<dyn PickerDelegate> = weak;
    model.set_delegate(weak);

    SpectrumPicker {
        id,
        held: false,
        model,
        tracker: VelocityTracker::default(),
        epoch: Instant::now(),
        size: Default::default(),
        delegate,
    }
    .style(|s| {
        s.height(constants::PICKER_HEIGHT)
            .border_radius(constants::CORNER_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl SpectrumPicker {
    /// Disable to stop dead on release instead of coasting.
    pub fn should_decelerate(mut self, enabled: bool) -> Self {
        self.model.set_should_decelerate(enabled);
        self
    }

    /// Hue shown by a saturation or brightness spectrum.
    pub fn hue_preview(mut self, hue: RwSignal<f64>) -> Self {
        let id = self.id;
        self.model.set_hue_value_for_preview(hue.get_untracked());
        create_effect(move |_| {
            let h = hue.get();
            id.update_state(PickerUpdate::HuePreview(h));
        });
        self
    }

    /// Also notify `delegate` of every change. The picker does not keep it alive.
    pub fn delegate(self, delegate: Weak<dyn PickerDelegate>) -> Self {
        *self.delegate.forward.borrow_mut() = Some(delegate);
        self
    }

    pub fn value(&self) -> f64 {
        self.model.value()
    }

    pub fn picker_type(&self) -> PickerType {
        self.model.picker_type()
    }

    fn now(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    fn refresh(&mut self) {
        if self.model.take_needs_display() {
            self.id.request_paint();
        }
    }
}

impl View for SpectrumPicker {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<PickerUpdate>() {
            match *update {
                PickerUpdate::Value(v) => apply_external_value(&mut self.model, v),
                PickerUpdate::HuePreview(h) => self.model.set_hue_value_for_preview(h),
                PickerUpdate::Tick(ticket) => self.model.tick(ticket),
            }
            self.refresh();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                let now = self.now();
                self.tracker.reset();
                self.tracker.push(now, e.pos.x);
                self.model.pan_began(e.pos.x);
                self.refresh();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    let now = self.now();
                    self.tracker.push(now, e.pos.x);
                    self.model.pan_changed(e.pos.x, self.size.width as f64);
                    self.refresh();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(e) => {
                if self.held {
                    self.held = false;
                    let now = self.now();
                    self.tracker.push(now, e.pos.x);
                    self.model.pan_ended(self.tracker.velocity());
                    self.refresh();
                }
                EventPropagation::Continue
            }
            Event::FocusLost => {
                if self.held {
                    self.held = false;
                    let now = self.now();
                    self.tracker.hold(now);
                    self.model.pan_cancelled(self.tracker.velocity());
                    self.refresh();
                }
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::CORNER_RADIUS);

        cx.save();
        cx.clip(&rrect);

        // Runs right → left: the right edge shows the lowest sample.
        let stops = self
            .model
            .color_stops()
            .map(|stop| (stop.offset, stop.color.to_color()));
        let (start, end) = gradient_line(w, h);
        let gradient = Gradient::new_linear(start, end).with_stops(stops);
        // BezPath, not Rect: the vello Rect fast-path only fills solid colors.
        let path = rect.to_path(0.1);
        cx.fill(&path, &gradient, 0.0);

        // Fixed selection indicator
        let indicator = indicator_line(w, h);
        cx.stroke(
            &indicator,
            Color::rgba8(0, 0, 0, constants::INDICATOR_ALPHA),
            &Stroke::new(constants::INDICATOR_WIDTH),
        );

        cx.restore();
    }
}
