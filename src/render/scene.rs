use eframe::egui::{Color32, Pos2, Vec2};

// ---------------------------------------------------------------------------
// Drawing primitives
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Path,
    Circle,
    Text,
    AxisGroup,
}

impl ElementKind {
    pub const ALL: [ElementKind; 4] = [
        ElementKind::Path,
        ElementKind::Circle,
        ElementKind::Text,
        ElementKind::AxisGroup,
    ];
}

/// Connected polyline through `points`, in order.
#[derive(Clone, Debug, PartialEq)]
pub struct PathElement {
    pub points: Vec<Pos2>,
    pub stroke_width: f32,
    pub color: Color32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CircleElement {
    pub center: Pos2,
    pub radius: f32,
    pub fill: Color32,
}

/// Text anchored at the start of its baseline, rotated about the anchor.
#[derive(Clone, Debug, PartialEq)]
pub struct TextElement {
    pub anchor: Pos2,
    pub text: String,
    pub size_pt: f32,
    pub bold: bool,
    /// Clockwise degrees; `-90.0` reads bottom-to-top.
    pub rotation_deg: f32,
}

impl TextElement {
    pub fn new(anchor: Pos2, text: impl Into<String>, size_pt: f32) -> Self {
        Self {
            anchor,
            text: text.into(),
            size_pt,
            bold: false,
            rotation_deg: 0.0,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn rotated(mut self, degrees: f32) -> Self {
        self.rotation_deg = degrees;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    /// Horizontal axis, ticks and labels below the line.
    Bottom,
    /// Vertical axis, ticks and labels left of the line.
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    /// Pixel position along the axis.
    pub offset: f32,
    pub label: String,
}

/// A rendered axis: domain line, tick marks and tick labels.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisGroup {
    pub orient: AxisOrient,
    /// y of a bottom axis, x of a left axis.
    pub translate: f32,
    /// Pixel extent covered by the domain line.
    pub range: (f32, f32),
    pub ticks: Vec<AxisTick>,
}

impl AxisGroup {
    pub const TICK_SIZE: f32 = 6.0;
    pub const TICK_PADDING: f32 = 3.0;
}

#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Path(PathElement),
    Circle(CircleElement),
    Text(TextElement),
    AxisGroup(AxisGroup),
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Path(_) => ElementKind::Path,
            Element::Circle(_) => ElementKind::Circle,
            Element::Text(_) => ElementKind::Text,
            Element::AxisGroup(_) => ElementKind::AxisGroup,
        }
    }
}

// ---------------------------------------------------------------------------
// Surface – what renderers draw against
// ---------------------------------------------------------------------------

/// A fixed-size drawing target that keeps appended primitives until removed.
pub trait Surface {
    fn size(&self) -> Vec2;
    fn append(&mut self, element: Element);
    /// Remove every primitive of the given kinds.
    fn remove_kinds(&mut self, kinds: &[ElementKind]);

    fn clear(&mut self) {
        self.remove_kinds(&ElementKind::ALL);
    }
}

/// Retained list of primitives, painted every frame by the UI layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    size: Vec2,
    elements: Vec<Element>,
}

impl Scene {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            elements: Vec::new(),
        }
    }

    /// Primitives in drawing order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn count(&self, kind: ElementKind) -> usize {
        self.elements.iter().filter(|e| e.kind() == kind).count()
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathElement> {
        self.elements.iter().filter_map(|e| match e {
            Element::Path(p) => Some(p),
            _ => None,
        })
    }

    #[cfg(test)]
    pub fn circles(&self) -> impl Iterator<Item = &CircleElement> {
        self.elements.iter().filter_map(|e| match e {
            Element::Circle(c) => Some(c),
            _ => None,
        })
    }

    #[cfg(test)]
    pub fn texts(&self) -> impl Iterator<Item = &TextElement> {
        self.elements.iter().filter_map(|e| match e {
            Element::Text(t) => Some(t),
            _ => None,
        })
    }

    #[cfg(test)]
    pub fn axis_groups(&self) -> impl Iterator<Item = &AxisGroup> {
        self.elements.iter().filter_map(|e| match e {
            Element::AxisGroup(a) => Some(a),
            _ => None,
        })
    }

    /// Whether `pos` lies on the stroke of any path, widened by `tolerance`.
    pub fn hit_path(&self, pos: Pos2, tolerance: f32) -> bool {
        self.paths().any(|path| {
            let reach = path.stroke_width * 0.5 + tolerance;
            let finite: Vec<Pos2> = path
                .points
                .iter()
                .copied()
                .filter(|p| p.x.is_finite() && p.y.is_finite())
                .collect();
            // A lone point is never painted, so it cannot be hovered either.
            finite
                .windows(2)
                .any(|w| distance_to_segment(pos, w[0], w[1]) <= reach)
        })
    }
}

impl Surface for Scene {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn append(&mut self, element: Element) {
        self.elements.push(element);
    }

    fn remove_kinds(&mut self, kinds: &[ElementKind]) {
        self.elements.retain(|e| !kinds.contains(&e.kind()));
    }
}

fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
