//! Gradient color stops for a picker centered on a value.

use crate::color::Hsb;
use crate::constants;
use crate::picker_type::PickerType;

/// One stop of the five-stop spectrum gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Relative gradient position (0.0–1.0).
    pub offset: f32,
    /// Range-adjusted channel sample the color was made from.
    pub sample: f64,
    pub color: Hsb,
}

/// Five stops sampled at `value - 2p .. value + 2p`, `p` being the channel's
/// padding. Samples are range-adjusted per [`PickerType::adjust_sample`].
pub fn color_stops(picker_type: PickerType, value: f64, hue_preview: f64) -> [ColorStop; 5] {
    let p = picker_type.padding();
    let raw = [
        value - 2.0 * p,
        value - p,
        value,
        value + p,
        value + 2.0 * p,
    ];
    let mut stops = [ColorStop {
        offset: 0.0,
        sample: 0.0,
        color: Hsb::default(),
    }; 5];
    for (i, stop) in stops.iter_mut().enumerate() {
        let sample = picker_type.adjust_sample(raw[i]);
        *stop = ColorStop {
            offset: constants::STOP_POSITIONS[i],
            sample,
            color: picker_type.sample_color(sample, hue_preview),
        };
    }
    stops
}
