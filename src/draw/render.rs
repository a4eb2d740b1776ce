//! Stroke rendering: the renderer capability and its Cairo implementation.

use super::brush::BrushFamily;
use super::color::Color;
use super::stroke::{FinishedStroke, StrokePoint};

/// Affine transform from stroke coordinates to surface coordinates.
///
/// Laid out like `cairo::Matrix`: `x' = xx*x + xy*y + x0`, `y' = yx*x + yy*y + y0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub xx: f64,
    pub yx: f64,
    pub xy: f64,
    pub yy: f64,
    pub x0: f64,
    pub y0: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        xx: 1.0,
        yx: 0.0,
        xy: 0.0,
        yy: 1.0,
        x0: 0.0,
        y0: 0.0,
    };

    pub fn translate(dx: f64, dy: f64) -> Self {
        Self {
            x0: dx,
            y0: dy,
            ..Self::IDENTITY
        }
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            xx: sx,
            yy: sy,
            ..Self::IDENTITY
        }
    }

    /// Maps a point through the transform.
    pub fn apply(&self, point: &StrokePoint) -> (f64, f64) {
        (
            self.xx * point.x + self.xy * point.y + self.x0,
            self.yx * point.x + self.yy * point.y + self.y0,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Transform> for cairo::Matrix {
    fn from(t: Transform) -> Self {
        cairo::Matrix::new(t.xx, t.yx, t.xy, t.yy, t.x0, t.y0)
    }
}

/// Draws finished strokes onto some surface type.
pub trait StrokeRenderer<S: ?Sized> {
    type Error;

    fn draw(
        &self,
        surface: &S,
        stroke: &FinishedStroke,
        transform: &Transform,
    ) -> Result<(), Self::Error>;
}

/// Renders every stroke in order (first = bottom layer).
pub fn render_strokes<S, R>(
    renderer: &R,
    surface: &S,
    strokes: &[FinishedStroke],
    transform: &Transform,
) -> Result<(), R::Error>
where
    S: ?Sized,
    R: StrokeRenderer<S>,
{
    for stroke in strokes {
        renderer.draw(surface, stroke, transform)?;
    }
    Ok(())
}

/// Polyline renderer for a `cairo::Context`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CairoRenderer;

impl CairoRenderer {
    pub fn new() -> Self {
        Self
    }
}

/// Alpha multiplier applied to highlighter ink.
const HIGHLIGHTER_ALPHA: f64 = 0.4;

impl StrokeRenderer<cairo::Context> for CairoRenderer {
    type Error = cairo::Error;

    fn draw(
        &self,
        ctx: &cairo::Context,
        stroke: &FinishedStroke,
        transform: &Transform,
    ) -> Result<(), cairo::Error> {
        let points = stroke.points();
        let Some(first) = points.first() else {
            return Ok(());
        };
        let brush = stroke.brush();
        let color = brush.color();

        ctx.save()?;
        ctx.transform((*transform).into());

        match brush.family() {
            BrushFamily::Highlighter => {
                set_source(ctx, color, HIGHLIGHTER_ALPHA);
                ctx.set_line_cap(cairo::LineCap::Square);
                ctx.set_line_join(cairo::LineJoin::Bevel);
            }
            BrushFamily::Marker | BrushFamily::Pen => {
                set_source(ctx, color, 1.0);
                ctx.set_line_cap(cairo::LineCap::Round);
                ctx.set_line_join(cairo::LineJoin::Round);
            }
        }

        if points.len() == 1 {
            // A tap leaves a dot the size of the brush
            ctx.arc(first.x, first.y, brush.size() / 2.0, 0.0, std::f64::consts::TAU);
            ctx.fill()?;
        } else if brush.family() == BrushFamily::Pen {
            // Per-segment width so pressure shows up in the line weight
            for pair in points.windows(2) {
                let pressure = (pair[0].pressure + pair[1].pressure) / 2.0;
                ctx.set_line_width(brush.size() * pressure.clamp(0.1, 1.0));
                ctx.move_to(pair[0].x, pair[0].y);
                ctx.line_to(pair[1].x, pair[1].y);
                ctx.stroke()?;
            }
        } else {
            ctx.set_line_width(brush.size());
            ctx.move_to(first.x, first.y);
            for point in &points[1..] {
                ctx.line_to(point.x, point.y);
            }
            ctx.stroke()?;
        }

        ctx.restore()
    }
}

fn set_source(ctx: &cairo::Context, color: Color, alpha_scale: f64) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a * alpha_scale);
}

/// Fills the whole target with a solid background color.
pub fn fill_background(ctx: &cairo::Context, color: Color) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_operator(cairo::Operator::Source);
    ctx.paint()?;
    ctx.restore()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_leaves_points_unchanged() {
        let p = StrokePoint::new(3.0, -4.0);
        assert_eq!(Transform::IDENTITY.apply(&p), (3.0, -4.0));
    }

    #[test]
    fn scale_and_translate_apply() {
        let p = StrokePoint::new(2.0, 5.0);
        assert_eq!(Transform::scale(2.0, 3.0).apply(&p), (4.0, 15.0));
        assert_eq!(Transform::translate(1.0, -1.0).apply(&p), (3.0, 4.0));
    }
}
