// CSS value builders shared by the DOM sinks.

#[inline]
pub fn translate_rotate(x: f32, y: f32, rotation_deg: f32) -> String {
    format!("translate3d({:.3}px, {:.3}px, 0) rotate({:.3}deg)", x, y, rotation_deg)
}

#[inline]
pub fn translate(x: f32, y: f32) -> String {
    format!("translate({:.3}px, {:.3}px)", x, y)
}

#[inline]
pub fn translate_x(offset_px: f64) -> String {
    format!("translateX({:.3}px)", offset_px)
}

#[inline]
pub fn translate_y_percent(percent: f32) -> String {
    format!("translateY({:.3}%)", percent)
}

#[inline]
pub fn px(value: f32) -> String {
    format!("{:.2}px", value)
}
