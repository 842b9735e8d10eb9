// SPDX-License-Identifier: MPL-2.0
//! Loading spinner drawn on a canvas, rotated by the app's tick subscription.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Radians advanced per animation tick.
pub const ROTATION_STEP: f32 = PI / 12.0;

const ARC_SEGMENTS: u16 = 24;
const STROKE_WIDTH: f32 = 3.0;

/// A ring with a rotating three-quarter arc.
#[derive(Debug, Clone, Copy)]
pub struct AnimatedSpinner {
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            rotation,
            color,
            size: sizing::ICON_MD,
        }
    }

    /// Next rotation angle, wrapped to one turn.
    #[must_use]
    pub fn advance(rotation: f32) -> f32 {
        (rotation + ROTATION_STEP) % (2.0 * PI)
    }

    pub fn into_element<'a, Message: 'a>(self) -> iced::Element<'a, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        // Redrawn on every tick, so no cache.
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(Color { a: 0.2, ..self.color }),
        );

        // -90° so rotation 0 starts at the top
        let start_angle = self.rotation - PI / 2.0;
        let sweep = PI * 1.5;

        let mut arc = canvas::path::Builder::new();
        arc.move_to(point_on_circle(center, radius, start_angle));
        for i in 1..=ARC_SEGMENTS {
            let t = f32::from(i) / f32::from(ARC_SEGMENTS);
            arc.line_to(point_on_circle(center, radius, start_angle + sweep * t));
        }

        frame.stroke(
            &arc.build(),
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}

fn point_on_circle(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}
