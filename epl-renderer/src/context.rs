use tiny_skia::{
    Color, FillRule, Paint, PathBuilder, Pixmap, PixmapPaint, Rect, Stroke, Transform,
};

/// Drawing surface shared by all field renderers.
///
/// The current transform is explicit state on the context. A renderer that
/// sets it must reset it to identity before handing control back, so no
/// rotation or scale leaks into the next command.
pub struct DrawingContext<'a> {
    pixmap: &'a mut Pixmap,
    transform: Transform,
}

impl<'a> DrawingContext<'a> {
    pub fn new(pixmap: &'a mut Pixmap) -> Self {
        Self {
            pixmap,
            transform: Transform::identity(),
        }
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    pub fn reset_transform(&mut self) {
        self.transform = Transform::identity();
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(color);
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let Some(rect) = Rect::from_xywh(x, y, width, height) else {
            return;
        };
        self.pixmap.fill_rect(rect, &solid(color), self.transform, None);
    }

    /// Fills the region produced by combining the rectangle into an empty
    /// region with XOR. An even-odd fill of a path containing the rectangle
    /// once models that combine exactly.
    pub fn fill_rect_xor(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let Some(rect) = Rect::from_xywh(x, y, width, height) else {
            return;
        };
        let mut pb = PathBuilder::new();
        pb.push_rect(rect);
        let Some(path) = pb.finish() else {
            return;
        };
        self.pixmap
            .fill_path(&path, &solid(color), FillRule::EvenOdd, self.transform, None);
    }

    pub fn stroke_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        pen_width: f32,
        color: Color,
    ) {
        let Some(rect) = Rect::from_xywh(x, y, width, height) else {
            return;
        };
        let mut pb = PathBuilder::new();
        pb.push_rect(rect);
        let Some(path) = pb.finish() else {
            return;
        };
        let stroke = Stroke {
            width: pen_width,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &solid(color), &stroke, self.transform, None);
    }

    pub fn stroke_line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        pen_width: f32,
        color: Color,
    ) {
        let mut pb = PathBuilder::new();
        pb.move_to(x1, y1);
        pb.line_to(x2, y2);
        let Some(path) = pb.finish() else {
            return;
        };
        let stroke = Stroke {
            width: pen_width,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &solid(color), &stroke, self.transform, None);
    }

    /// Composites an image onto the canvas under the current transform.
    pub fn blit(&mut self, x: i32, y: i32, source: &Pixmap) {
        self.pixmap.draw_pixmap(
            x,
            y,
            source.as_ref(),
            &PixmapPaint::default(),
            self.transform,
            None,
        );
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }
}

fn solid(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color);
    paint
}
