use eframe::egui::{
    self, emath::Rot2, epaint::TextShape, Align2, Color32, FontId, Painter, Pos2, Response,
    Sense, Shape, Stroke, Ui, Vec2,
};

use crate::render::{AxisGroup, AxisOrient, Element, Scene, Surface, TextElement};

/// Screen pixels per typographic point.
const PX_PER_PT: f32 = 4.0 / 3.0;
const TICK_FONT_PX: f32 = 10.0;

// ---------------------------------------------------------------------------
// Scene painter
// ---------------------------------------------------------------------------

/// Allocate a fixed-size canvas and paint every primitive of `scene` on it.
///
/// The returned response covers the canvas; subtract `response.rect.min` from
/// pointer positions to get scene coordinates.
pub fn paint_scene(ui: &mut Ui, scene: &Scene) -> Response {
    let (response, painter) = ui.allocate_painter(scene.size(), Sense::hover());
    let origin = response.rect.min.to_vec2();
    let ink = ui.visuals().strong_text_color();

    for element in scene.elements() {
        match element {
            Element::Path(path) => {
                let points: Vec<Pos2> = path
                    .points
                    .iter()
                    .filter(|p| is_finite(**p))
                    .map(|p| *p + origin)
                    .collect();
                // A lone point draws nothing, as with an SVG path of one move-to.
                if points.len() >= 2 {
                    let stroke = Stroke::new(path.stroke_width, path.color);
                    painter.add(Shape::line(points, stroke));
                }
            }
            Element::Circle(circle) => {
                if is_finite(circle.center) {
                    painter.circle_filled(circle.center + origin, circle.radius, circle.fill);
                }
            }
            Element::Text(text) => paint_text(&painter, text, origin, ink),
            Element::AxisGroup(axis) => paint_axis(&painter, axis, origin, ink),
        }
    }

    response
}

fn is_finite(p: Pos2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// Text is anchored at its baseline start; egui galleys are anchored top-left.
fn paint_text(painter: &Painter, text: &TextElement, origin: Vec2, ink: Color32) {
    let size_px = text.size_pt * PX_PER_PT;
    let font = FontId::proportional(size_px);
    let galley = painter.layout_no_wrap(text.text.clone(), font, ink);
    let angle = text.rotation_deg.to_radians();
    let rot = Rot2::from_angle(angle);
    let top_left = text.anchor + origin + rot * Vec2::new(0.0, -size_px * 0.8);

    // The default fonts have no bold face, so bold is a doubled stroke.
    if text.bold {
        let nudge = rot * Vec2::new(0.6, 0.0);
        let shadow = TextShape::new(top_left + nudge, galley.clone(), ink);
        painter.add(shadow.with_angle(angle));
    }
    painter.add(TextShape::new(top_left, galley, ink).with_angle(angle));
}

fn paint_axis(painter: &Painter, axis: &AxisGroup, origin: Vec2, ink: Color32) {
    let stroke = Stroke::new(1.0, ink);
    let font = FontId::proportional(TICK_FONT_PX);
    let (r0, r1) = axis.range;
    let t = axis.translate;
    let size = AxisGroup::TICK_SIZE;
    let label_gap = size + AxisGroup::TICK_PADDING;
    let at = |x: f32, y: f32| egui::pos2(x, y) + origin;

    match axis.orient {
        AxisOrient::Bottom => {
            // Domain line with outer ticks at both ends.
            let domain = vec![at(r0, t + size), at(r0, t), at(r1, t), at(r1, t + size)];
            painter.add(Shape::line(domain, stroke));
            for tick in axis.ticks.iter().filter(|tick| tick.offset.is_finite()) {
                let x = tick.offset;
                painter.line_segment([at(x, t), at(x, t + size)], stroke);
                painter.text(
                    at(x, t + label_gap),
                    Align2::CENTER_TOP,
                    &tick.label,
                    font.clone(),
                    ink,
                );
            }
        }
        AxisOrient::Left => {
            let domain = vec![at(t - size, r0), at(t, r0), at(t, r1), at(t - size, r1)];
            painter.add(Shape::line(domain, stroke));
            for tick in axis.ticks.iter().filter(|tick| tick.offset.is_finite()) {
                let y = tick.offset;
                painter.line_segment([at(t - size, y), at(t, y)], stroke);
                painter.text(
                    at(t - label_gap, y),
                    Align2::RIGHT_CENTER,
                    &tick.label,
                    font.clone(),
                    ink,
                );
            }
        }
    }
}
