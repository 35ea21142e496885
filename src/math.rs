//! Color and range math. All functions use normalized f64 in 0.0–1.0.

/// HSB/HSV → RGB. All values 0.0–1.0.
pub(crate) fn hsb_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = (h * 6.0).rem_euclid(6.0);
    let i = h6.floor() as u32;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Circular wrap into 0.0–1.0. In-range values (1.0 included) pass through.
pub(crate) fn wrap_unit(x: f64) -> f64 {
    if (0.0..=1.0).contains(&x) {
        x
    } else {
        x.rem_euclid(1.0)
    }
}

/// Hue sample adjustment for the spectrum preview.
///
/// Below zero wraps (`1 + x`), above one reflects (`1 - x`).
pub(crate) fn reflect_unit(x: f64) -> f64 {
    if x < 0.0 {
        1.0 + x
    } else if x > 1.0 {
        1.0 - x
    } else {
        x
    }
}
