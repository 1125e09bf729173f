use std::cell::RefCell;

use iced::mouse;
use iced::widget::canvas::{self, Fill, Frame, Path, Stroke, fill::Rule};
use iced::{Color, Element, Length, Pixels, Point, Rectangle, Renderer, Size, Theme};

use crate::core::geo::{GeoDataset, Region};
use crate::core::projector::{self, RenderSpec};
use crate::models::Bounds;

/// Fallback extent for a dataset without any coordinates.
const WORLD: Bounds = Bounds {
    min_lon: -180.0,
    min_lat: -60.0,
    max_lon: 180.0,
    max_lat: 85.0,
};

const BACKGROUND: Color = Color {
    r: 0.96,
    g: 0.96,
    b: 0.95,
    a: 1.0,
};

/// Equirectangular mapping from degrees to canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Viewport {
    center_lon: f64,
    center_lat: f64,
    scale: f64,
    size: Size,
}

impl Viewport {
    /// Largest scale at which `target` fits inside `size` minus `padding`
    /// on each side.
    fn fit(target: &Bounds, size: Size, padding: [u32; 2]) -> Self {
        let avail_w = (size.width as f64 - 2.0 * padding[0] as f64).max(1.0);
        let avail_h = (size.height as f64 - 2.0 * padding[1] as f64).max(1.0);
        let scale = (avail_w / target.width().max(1e-6)).min(avail_h / target.height().max(1e-6));
        Self {
            center_lon: (target.min_lon + target.max_lon) / 2.0,
            center_lat: (target.min_lat + target.max_lat) / 2.0,
            scale,
            size,
        }
    }

    fn project(&self, lon: f64, lat: f64) -> Point {
        Point::new(
            (self.size.width as f64 / 2.0 + (lon - self.center_lon) * self.scale) as f32,
            (self.size.height as f64 / 2.0 - (lat - self.center_lat) * self.scale) as f32,
        )
    }

    fn unproject(&self, point: Point) -> (f64, f64) {
        (
            self.center_lon + (point.x as f64 - self.size.width as f64 / 2.0) / self.scale,
            self.center_lat - (point.y as f64 - self.size.height as f64 / 2.0) / self.scale,
        )
    }
}

fn region_path(region: &Region, viewport: &Viewport) -> Path {
    Path::new(|builder| {
        for ring in region.polygons.iter().flatten() {
            let mut points = ring.iter().map(|[lon, lat]| viewport.project(*lon, *lat));
            if let Some(first) = points.next() {
                builder.move_to(first);
                for point in points {
                    builder.line_to(point);
                }
                builder.close();
            }
        }
    })
}

fn to_color(color: projector::Color, alpha: f32) -> Color {
    Color::from_rgba8(color.r, color.g, color.b, alpha)
}

/// Canvas program drawing a [`RenderSpec`] over the dataset geometry.
struct MapView<'a> {
    dataset: &'a GeoDataset,
    spec: RenderSpec,
}

/// Country layers are tessellated once per spec and canvas size; only the
/// tooltip is redrawn while the cursor moves.
#[derive(Default)]
struct MapState {
    layers: canvas::Cache,
    drawn: RefCell<Option<RenderSpec>>,
    hovering: bool,
}

impl MapView<'_> {
    fn viewport(&self, size: Size) -> Viewport {
        match &self.spec.focus {
            Some(focus) => Viewport::fit(&focus.bounds(), size, focus.padding),
            None => Viewport::fit(&self.dataset.bounds().unwrap_or(WORLD), size, [0, 0]),
        }
    }

    /// Tooltip label under a canvas position.
    fn hover_label(&self, size: Size, position: Point) -> Option<&str> {
        let (lon, lat) = self.viewport(size).unproject(position);
        self.tooltip_at(lon, lat)
    }

    fn tooltip_at(&self, lon: f64, lat: f64) -> Option<&str> {
        let region = self.dataset.region_at(lon, lat)?;
        self.spec
            .base_for(&region.name)
            .find_map(|styled| styled.tooltip.as_deref())
    }

    fn draw_tooltip(&self, frame: &mut Frame, position: Point, label: &str) {
        let size = 14.0;
        let origin = Point::new(position.x + 12.0, position.y + 12.0);
        let width = label.chars().count() as f32 * size * 0.6 + 12.0;
        frame.fill_rectangle(origin, Size::new(width, size + 10.0), Color::WHITE);
        frame.stroke(
            &Path::rectangle(origin, Size::new(width, size + 10.0)),
            Stroke::default().with_color(Color::from_rgb8(0x99, 0x99, 0x99)).with_width(1.0),
        );
        frame.fill_text(canvas::Text {
            content: label.to_string(),
            position: Point::new(origin.x + 6.0, origin.y + 5.0),
            color: Color::BLACK,
            size: Pixels(size),
            ..canvas::Text::default()
        });
    }

    fn draw_layers(&self, frame: &mut Frame, viewport: &Viewport) {
        frame.fill_rectangle(Point::ORIGIN, frame.size(), BACKGROUND);
        let regions = self.dataset.regions();

        for styled in self.spec.base.iter().chain(&self.spec.overlay) {
            let Some(region) = regions.get(styled.feature) else {
                continue;
            };
            let path = region_path(region, viewport);
            let style = &styled.style;
            if let Some(fill) = style.fill.filter(|_| style.fill_opacity > 0.0) {
                frame.fill(
                    &path,
                    Fill {
                        style: canvas::Style::Solid(to_color(fill, style.fill_opacity)),
                        rule: Rule::EvenOdd,
                    },
                );
            }
            frame.stroke(
                &path,
                Stroke::default()
                    .with_color(to_color(style.stroke, 1.0))
                    .with_width(style.weight),
            );
        }
    }
}

impl<Message> canvas::Program<Message> for MapView<'_> {
    type State = MapState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let over = match event {
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) => cursor.is_over(bounds),
            canvas::Event::Mouse(mouse::Event::CursorLeft) => false,
            _ => return None,
        };
        // One last redraw after leaving clears the tooltip.
        let was_over = std::mem::replace(&mut state.hovering, over);
        (over || was_over).then(canvas::Action::request_redraw)
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let size = bounds.size();

        let mut drawn = state.drawn.borrow_mut();
        if drawn.as_ref() != Some(&self.spec) {
            state.layers.clear();
            *drawn = Some(self.spec.clone());
        }

        let viewport = self.viewport(size);
        let layers = state
            .layers
            .draw(renderer, size, |frame| self.draw_layers(frame, &viewport));

        let mut hover = Frame::new(renderer, size);
        if let Some(position) = cursor.position_in(bounds) {
            if let Some(label) = self.hover_label(size, position) {
                self.draw_tooltip(&mut hover, position, label);
            }
        }

        vec![layers, hover.into_geometry()]
    }
}

/// Map canvas filling the available space.
pub fn map_view<'a, Message: 'a>(dataset: &'a GeoDataset, spec: RenderSpec) -> Element<'a, Message> {
    canvas::Canvas::new(MapView { dataset, spec })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::projector::project;
    use crate::models::VisitStatus;

    const TWO_SQUARES: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {"name": "Westland"},
             "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]]]}},
            {"type": "Feature", "properties": {"name": "Eastland"},
             "geometry": {"type": "Polygon", "coordinates": [[[20, 0], [30, 0], [30, 10], [20, 10], [20, 0]]]}}
        ]
    }"#;

    fn two_squares() -> GeoDataset {
        TWO_SQUARES.parse().unwrap()
    }

    #[test]
    fn tooltip_names_the_hovered_country() {
        let dataset = two_squares();
        let map = MapView {
            spec: project(&dataset, |_: &str| VisitStatus::NotVisited, None),
            dataset: &dataset,
        };

        assert_eq!(map.tooltip_at(5.0, 5.0), Some("Westland"));
        assert_eq!(map.tooltip_at(25.0, 2.0), Some("Eastland"));
        assert_eq!(map.tooltip_at(15.0, 5.0), None);
    }

    #[test]
    fn hover_label_follows_the_viewport() {
        let dataset = two_squares();
        let map = MapView {
            spec: project(&dataset, |_: &str| VisitStatus::Visited, Some("Eastland")),
            dataset: &dataset,
        };
        let size = Size::new(400.0, 300.0);

        // Focused on Eastland, the canvas center is inside it.
        let center = Point::new(200.0, 150.0);
        assert_eq!(map.hover_label(size, center), Some("Eastland"));
    }

    #[test]
    fn unfocused_map_fits_dataset_extent() {
        let dataset = two_squares();
        let map = MapView {
            spec: project(&dataset, |_: &str| VisitStatus::NotVisited, None),
            dataset: &dataset,
        };

        let viewport = map.viewport(Size::new(600.0, 200.0));

        assert_eq!((viewport.center_lon, viewport.center_lat), (15.0, 5.0));
        assert_eq!(viewport.scale, 20.0);
    }

    #[test]
    fn cursor_movement_requests_a_redraw() {
        let dataset = two_squares();
        let map = MapView {
            spec: project(&dataset, |_: &str| VisitStatus::NotVisited, None),
            dataset: &dataset,
        };
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(400.0, 300.0));
        let mut state = MapState::default();
        let position = Point::new(50.0, 60.0);
        let moved = canvas::Event::Mouse(mouse::Event::CursorMoved { position });

        let mut move_to = |cursor: Point| {
            canvas::Program::<()>::update(
                &map,
                &mut state,
                &moved,
                bounds,
                mouse::Cursor::Available(cursor),
            )
            .is_some()
        };

        // 1. Moving over the map redraws so the tooltip follows
        assert!(move_to(position));
        assert!(move_to(Point::new(51.0, 61.0)));

        // 2. Leaving redraws once to clear it, then stays idle
        assert!(move_to(Point::new(900.0, 900.0)));
        assert!(!move_to(Point::new(901.0, 900.0)));
    }

    #[test]
    fn fit_keeps_target_inside_padding() {
        let target = Bounds {
            min_lon: 129.0,
            min_lat: 30.0,
            max_lon: 146.0,
            max_lat: 46.0,
        };
        let size = Size::new(800.0, 600.0);
        let viewport = Viewport::fit(&target, size, [30, 30]);

        let sw = viewport.project(target.min_lon, target.min_lat);
        let ne = viewport.project(target.max_lon, target.max_lat);
        assert!(sw.x >= 29.9 && ne.x <= 770.1);
        assert!(ne.y >= 29.9 && sw.y <= 570.1);
        // The tighter axis touches the padding.
        assert!((sw.y - 570.0).abs() < 0.5 || (sw.x - 30.0).abs() < 0.5);
    }

    #[test]
    fn unproject_inverts_project() {
        let viewport = Viewport::fit(&WORLD, Size::new(1000.0, 500.0), [0, 0]);
        let point = viewport.project(2.35, 48.85);
        let (lon, lat) = viewport.unproject(point);
        assert!((lon - 2.35).abs() < 1e-3);
        assert!((lat - 48.85).abs() < 1e-3);
    }
}
