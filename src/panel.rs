//! Panel of three cross-wired pickers composing one HSB color, with a
//! swatch, the hex code, and a copy button.

#[cfg(feature = "clipboard")]
use std::sync::Once;

use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};

use crate::color::Hsb;
use crate::constants;
use crate::picker_type::PickerType;
use crate::spectrum_picker::spectrum_picker;

#[cfg(feature = "clipboard")]
static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the three-picker panel.
///
/// The panel reads from and writes to `color`. External changes to the signal
/// move the pickers; dragging any picker updates the signal.
pub fn spectrum_panel(color: RwSignal<Hsb>) -> impl IntoView {
    #[cfg(feature = "clipboard")]
    LOAD_LUCIDE_FONT.call_once(|| {
        floem::text::FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });

    let initial = color.get_untracked();
    let h = RwSignal::new(initial.hue);
    let s = RwSignal::new(initial.saturation);
    let b = RwSignal::new(initial.brightness);

    // Channels -> color
    create_effect(move |_| {
        let next = Hsb::new(h.get(), s.get(), b.get());
        if color.get_untracked() != next {
            color.set(next);
        }
    });

    // External color -> channels
    create_effect(move |_| sync_channels([h, s, b], color.get()));

    v_stack((
        spectrum_picker(PickerType::Hue, h),
        spectrum_picker(PickerType::Saturation, s).hue_preview(h),
        spectrum_picker(PickerType::Brightness, b).hue_preview(h),
        h_stack((
            empty().style(move |st| {
                st.width(constants::SWATCH_SIZE)
                    .height(constants::SWATCH_SIZE)
                    .border_radius(constants::CORNER_RADIUS as f32)
                    .border(1.0)
                    .border_color(Color::rgb8(180, 180, 180))
                    .background(color.get().to_color())
            }),
            label(move || format!("#{}", color.get().to_hex())).style(|st| {
                st.font_size(constants::HEX_FONT)
                    .font_family("monospace".to_string())
                    .color(Color::rgb8(120, 120, 120))
            }),
            // Spacer pushes the copy button to the right
            empty().style(|st| st.flex_grow(1.0)),
            #[cfg(feature = "clipboard")]
            copy_button(move || color.get_untracked().to_hex()),
        ))
        .style(|st| st.items_center().gap(constants::GAP)),
    ))
    .style(|st| {
        st.gap(constants::GAP)
            .padding(constants::PADDING)
            .size_full()
            .justify_center()
            .background(Color::rgb8(242, 242, 242))
    })
}

/// Write `c` into the hue, saturation and brightness signals, skipping
/// channels that already hold the exact value.
fn sync_channels(channels: [RwSignal<f64>; 3], c: Hsb) {
    for (signal, v) in channels.into_iter().zip([c.hue, c.saturation, c.brightness]) {
        if signal.get_untracked() != v {
            signal.set(v);
        }
    }
}

/// A small copy button that copies the result of `get_text` to the clipboard.
#[cfg(feature = "clipboard")]
fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&get_text());
    })
}

#[cfg(feature = "clipboard")]
fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(text) {
                tracing::warn!(error = %e, "Failed to copy to clipboard");
            }
        }
        Err(e) => tracing::warn!(error = %e, "Clipboard unavailable"),
    }
}
