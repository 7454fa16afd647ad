use eframe::egui::{self, Color32, Pos2, Stroke, Vec2};

use super::canvas;
use crate::config::TooltipConfig;
use crate::render::Scene;

// ---------------------------------------------------------------------------
// Hover state and fade animation
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    Start,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Fade {
    from: f32,
    to: f32,
    started: f64,
}

/// Overlay that fades in while the pointer is on the line and out after it
/// leaves. Times are seconds on any monotonic clock (egui's input time).
#[derive(Clone, Debug)]
pub struct Tooltip {
    hovering: bool,
    anchor: Pos2,
    fade: Fade,
    duration: f64,
    offset: Vec2,
}

impl Tooltip {
    pub fn new(config: &TooltipConfig) -> Self {
        Self {
            hovering: false,
            anchor: Pos2::ZERO,
            fade: Fade {
                from: 0.0,
                to: 0.0,
                started: 0.0,
            },
            duration: config.fade_secs,
            offset: Vec2::new(config.offset[0], config.offset[1]),
        }
    }

    /// Feed the current hover result; returns the edge crossed, if any.
    ///
    /// A new fade always starts from the opacity shown at `now`, so leaving
    /// mid fade-in reverses from wherever the overlay got to.
    pub fn update(
        &mut self,
        over_line: bool,
        pointer: Option<Pos2>,
        now: f64,
    ) -> Option<HoverEvent> {
        match (over_line, self.hovering) {
            (true, false) => {
                self.hovering = true;
                if let Some(p) = pointer {
                    self.anchor = p + self.offset;
                }
                self.start_fade(1.0, now);
                log::debug!("Tooltip hover start at {:?}", self.anchor);
                Some(HoverEvent::Start)
            }
            (false, true) => {
                self.hovering = false;
                self.start_fade(0.0, now);
                log::debug!("Tooltip hover end");
                Some(HoverEvent::End)
            }
            _ => None,
        }
    }

    fn start_fade(&mut self, to: f32, now: f64) {
        self.fade = Fade {
            from: self.opacity(now),
            to,
            started: now,
        };
    }

    pub fn opacity(&self, now: f64) -> f32 {
        let t = if self.duration > 0.0 {
            ((now - self.fade.started) / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let eased = ease_cubic_in_out(t) as f32;
        self.fade.from + (self.fade.to - self.fade.from) * eased
    }

    pub fn is_animating(&self, now: f64) -> bool {
        now - self.fade.started < self.duration && self.fade.from != self.fade.to
    }

    /// Screen position of the overlay's top-left corner.
    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }
}

fn ease_cubic_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

// ---------------------------------------------------------------------------
// egui overlay
// ---------------------------------------------------------------------------

/// Paint the scatter scene in a floating, bordered panel at the tooltip anchor.
pub fn show(ctx: &egui::Context, tooltip: &Tooltip, scatter: &Scene, now: f64) {
    if tooltip.is_animating(now) {
        ctx.request_repaint();
    }
    let opacity = tooltip.opacity(now);
    if opacity <= 0.0 {
        return;
    }

    egui::Area::new(egui::Id::new("scatter_tooltip"))
        .order(egui::Order::Tooltip)
        .fixed_pos(tooltip.anchor())
        .interactable(false)
        .show(ctx, |ui: &mut egui::Ui| {
            ui.set_opacity(opacity);
            egui::Frame::popup(ui.style())
                .stroke(Stroke::new(1.0, Color32::GRAY))
                .show(ui, |ui: &mut egui::Ui| {
                    canvas::paint_scene(ui, scatter);
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    fn tooltip() -> Tooltip {
        Tooltip::new(&TooltipConfig::default())
    }

    #[test]
    fn starts_hidden() {
        let t = tooltip();
        assert_eq!(t.opacity(0.0), 0.0);
        assert!(!t.is_animating(0.0));
    }

    #[test]
    fn hover_edges_are_reported_once() {
        let mut t = tooltip();
        assert_eq!(t.update(false, None, 0.0), None);
        assert_eq!(
            t.update(true, Some(pos2(300.0, 200.0)), 1.0),
            Some(HoverEvent::Start)
        );
        assert_eq!(t.update(true, Some(pos2(310.0, 200.0)), 1.1), None);
        assert_eq!(
            t.update(false, Some(pos2(310.0, 260.0)), 1.2),
            Some(HoverEvent::End)
        );
        assert_eq!(t.update(false, None, 1.3), None);
    }

    #[test]
    fn anchor_is_offset_from_the_pointer_on_hover_start() {
        let mut t = tooltip();
        t.update(true, Some(pos2(300.0, 200.0)), 0.0);
        assert_eq!(t.anchor(), pos2(300.0, 172.0));
        t.update(true, Some(pos2(500.0, 500.0)), 0.1);
        assert_eq!(t.anchor(), pos2(300.0, 172.0));
    }

    #[test]
    fn fades_in_over_the_configured_duration() {
        let mut t = tooltip();
        t.update(true, Some(pos2(0.0, 0.0)), 10.0);
        assert_eq!(t.opacity(10.0), 0.0);
        assert_eq!(t.opacity(10.25), 0.5);
        assert_eq!(t.opacity(10.5), 1.0);
        assert!(t.is_animating(10.25));
        assert!(!t.is_animating(11.0));
    }

    #[test]
    fn hover_end_interrupts_fade_in_from_current_opacity() {
        let mut t = tooltip();
        t.update(true, Some(pos2(0.0, 0.0)), 0.0);
        let partial = t.opacity(0.1);
        assert!(partial > 0.0 && partial < 1.0);

        t.update(false, None, 0.1);
        assert_eq!(t.opacity(0.1), partial);
        assert!(t.opacity(0.3) < partial);
        assert_eq!(t.opacity(0.6), 0.0);
    }
}
