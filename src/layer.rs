//! A flat scene layer of filled rectangles plus the surface they draw onto.
//!
//! Nodes keep insertion order as draw order; later nodes paint over earlier ones.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

#[derive(Clone, Debug, PartialEq)]
pub struct RectNode {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    pub opacity: f64,
    /// Scale applied around the rectangle centre.
    pub scale: f64,
}

impl RectNode {
    pub fn new(x: f64, y: f64, width: f64, height: f64, fill: impl Into<String>, opacity: f64) -> Self {
        Self { x, y, width, height, fill: fill.into(), opacity, scale: 1.0 }
    }

    /// Drawn bounds `(x, y, w, h)` after scaling.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let w = self.width * self.scale;
        let h = self.height * self.scale;
        (self.x - (w - self.width) / 2.0, self.y - (h - self.height) / 2.0, w, h)
    }
}

/// Anything that can paint filled rectangles.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64, background: &str);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: &str, opacity: f64);
}

#[derive(Clone, Debug, Default)]
pub struct Layer {
    nodes: Vec<RectNode>, // indexed by NodeId
    order: Vec<NodeId>,   // draw order, back to front
}

impl Layer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, node: RectNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.order.push(id);
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids in draw order.
    pub fn children(&self) -> &[NodeId] {
        &self.order
    }

    pub fn get(&self, id: NodeId) -> Option<&RectNode> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut RectNode> {
        self.nodes.get_mut(id.0)
    }

    pub fn raise_to_top(&mut self, id: NodeId) {
        if let Some(pos) = self.order.iter().position(|&n| n == id) {
            let n = self.order.remove(pos);
            self.order.push(n);
        }
    }

    pub fn position(&self, id: NodeId) -> Option<(f64, f64)> {
        self.get(id).map(|n| (n.x, n.y))
    }

    pub fn set_position(&mut self, id: NodeId, x: f64, y: f64) {
        if let Some(n) = self.get_mut(id) {
            n.x = x;
            n.y = y;
        }
    }

    pub fn width(&self, id: NodeId) -> Option<f64> {
        self.get(id).map(|n| n.width)
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        for id in &self.order {
            let n = &self.nodes[id.0];
            let (x, y, w, h) = n.bounds();
            surface.fill_rect(x, y, w, h, &n.fill, n.opacity);
        }
    }
}
