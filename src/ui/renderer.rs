//! Scene rendering with tiny-skia
//!
//! Layout calculation is separated from rasterization: `SceneLayout` is the
//! full description of one frame (background, grid lines, marks) derived from
//! the application state, `SceneRenderer` turns it into a pixmap.

use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Rect as SkiaRect, Stroke, Transform};

use crate::app::AppState;
use crate::domain::color::Rgb;
use crate::domain::core::Rect;
use crate::domain::grid::Mark;

/// Outline and cross color; marks do not follow the grid line color
pub const MARK_STROKE_COLOR: Rgb = Rgb::BLACK;
/// Circle interior
pub const MARK_FILL_COLOR: Rgb = Rgb::WHITE;

#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("Failed to create {width}x{height} pixmap for rendering")]
    PixmapCreationFailed { width: u32, height: u32 },
}

/// Line segment in integer client pixels, inclusive start, exclusive end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    pub color: Rgb,
}

/// Ellipse inscribed in a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ellipse {
    pub bounds: Rect,
    pub outline: Rgb,
    pub fill: Rgb,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneLayout {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub background: Rgb,
    /// Grid lines followed by cross diagonals, in drawing order
    pub lines: Vec<Line>,
    pub circles: Vec<Ellipse>,
}

impl SceneLayout {
    /// Builds the frame for a `canvas_width` x `canvas_height` client area
    pub fn from_state(state: &AppState, canvas_width: u32, canvas_height: u32) -> Self {
        let settings = state.settings();
        let geometry = state.geometry();
        let cells = state.cells_count() as i32;
        let (width, height) = (canvas_width as i32, canvas_height as i32);

        let mut lines = Vec::new();
        for i in 1..cells {
            let y = i * geometry.cell_height;
            lines.push(Line { x1: 0, y1: y, x2: width, y2: y, color: settings.grid_line_color });
        }
        for i in 1..cells {
            let x = i * geometry.cell_width;
            lines.push(Line { x1: x, y1: 0, x2: x, y2: height, color: settings.grid_line_color });
        }

        let mut circles = Vec::new();
        for (coords, mark) in state.marks().marked_cells(state.cells_count()) {
            let cell = geometry.cell_rect(coords);
            match mark {
                Mark::Circle => circles.push(Ellipse {
                    bounds: cell,
                    outline: MARK_STROKE_COLOR,
                    fill: MARK_FILL_COLOR,
                }),
                Mark::Cross => {
                    lines.push(Line {
                        x1: cell.x,
                        y1: cell.y,
                        x2: cell.right(),
                        y2: cell.bottom(),
                        color: MARK_STROKE_COLOR,
                    });
                    lines.push(Line {
                        x1: cell.right(),
                        y1: cell.y,
                        x2: cell.x,
                        y2: cell.bottom(),
                        color: MARK_STROKE_COLOR,
                    });
                }
                Mark::Empty => {}
            }
        }

        Self {
            canvas_width,
            canvas_height,
            background: settings.current_bg_color,
            lines,
            circles,
        }
    }
}

/// Rasterizes scene layouts. Strokes are 1px wide and aliased so lines land
/// on whole pixels.
#[derive(Debug, Default)]
pub struct SceneRenderer;

impl SceneRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, layout: &SceneLayout) -> Result<Pixmap, RendererError> {
        let mut pixmap = Pixmap::new(layout.canvas_width, layout.canvas_height).ok_or(
            RendererError::PixmapCreationFailed {
                width: layout.canvas_width,
                height: layout.canvas_height,
            },
        )?;

        pixmap.fill(layout.background.to_skia());
        self.render_lines(&mut pixmap, &layout.lines);
        self.render_circles(&mut pixmap, &layout.circles);

        Ok(pixmap)
    }

    fn render_lines(&self, pixmap: &mut Pixmap, lines: &[Line]) {
        let stroke = Stroke { width: 1.0, ..Stroke::default() };

        for line in lines {
            let mut path_builder = PathBuilder::new();
            path_builder.move_to(line.x1 as f32 + 0.5, line.y1 as f32 + 0.5);
            path_builder.line_to(line.x2 as f32 + 0.5, line.y2 as f32 + 0.5);

            if let Some(path) = path_builder.finish() {
                let paint = solid_paint(line.color.to_skia());
                pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
            }
        }
    }

    fn render_circles(&self, pixmap: &mut Pixmap, circles: &[Ellipse]) {
        let stroke = Stroke { width: 1.0, ..Stroke::default() };

        for circle in circles {
            // Degenerate cells (zero width or height) have nothing to draw
            let Some(oval) = SkiaRect::from_xywh(
                circle.bounds.x as f32 + 0.5,
                circle.bounds.y as f32 + 0.5,
                (circle.bounds.w - 1).max(0) as f32,
                (circle.bounds.h - 1).max(0) as f32,
            ) else {
                continue;
            };

            let Some(path) = PathBuilder::from_oval(oval) else {
                continue;
            };

            let fill = solid_paint(circle.fill.to_skia());
            pixmap.fill_path(&path, &fill, FillRule::Winding, Transform::identity(), None);

            let outline = solid_paint(circle.outline.to_skia());
            pixmap.stroke_path(&path, &outline, &stroke, Transform::identity(), None);
        }
    }
}

fn solid_paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color);
    paint.anti_alias = false;
    paint
}

/// Converts tiny-skia's RGBA bytes into the BGRA order of a 32-bit DIB
pub fn pixmap_to_bgra(pixmap: &Pixmap) -> Vec<u8> {
    let mut data = pixmap.data().to_vec();
    for pixel in data.chunks_exact_mut(4) {
        pixel.swap(0, 2);
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::controller::{AppController, EditorLauncher, LaunchError};
    use crate::config::Settings;
    use crate::input::{InputEvent, MouseButton};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct NoEditor;

    impl EditorLauncher for NoEditor {
        fn launch(&self) -> Result<(), LaunchError> {
            Ok(())
        }
    }

    fn settings() -> Settings {
        Settings {
            current_bg_color: Rgb::new(10, 20, 30),
            grid_line_color: Rgb::new(200, 0, 0),
            ..Settings::default()
        }
    }

    fn controller() -> AppController {
        AppController::new(
            AppState::new(settings()),
            Box::new(StdRng::seed_from_u64(3)),
            Box::new(NoEditor),
        )
    }

    fn pixel(pixmap: &Pixmap, x: u32, y: u32) -> Rgb {
        let color = pixmap.pixel(x, y).unwrap();
        Rgb::new(color.red(), color.green(), color.blue())
    }

    #[test]
    fn layout_has_inner_grid_lines_only() {
        let state = AppState::new(settings());
        let layout = SceneLayout::from_state(&state, 320, 240);

        assert_eq!(layout.lines.len(), 6);
        assert_eq!(layout.lines[0], Line { x1: 0, y1: 60, x2: 320, y2: 60, color: Rgb::new(200, 0, 0) });
        assert_eq!(layout.lines[3], Line { x1: 80, y1: 0, x2: 80, y2: 240, color: Rgb::new(200, 0, 0) });
        assert!(layout.circles.is_empty());
        assert_eq!(layout.background, Rgb::new(10, 20, 30));
    }

    #[test]
    fn single_cell_grid_has_no_lines() {
        let state = AppState::new(Settings { cells_count: 1, ..settings() });
        assert!(SceneLayout::from_state(&state, 320, 240).lines.is_empty());
    }

    #[test]
    fn circle_is_bounded_by_its_cell() {
        let mut controller = controller();
        controller.handle(InputEvent::Click { button: MouseButton::Left, x: 100, y: 70 });

        let layout = SceneLayout::from_state(controller.state(), 320, 240);
        assert_eq!(layout.circles.len(), 1);
        assert_eq!(layout.circles[0].bounds, Rect::new(80, 60, 80, 60));
    }

    #[test]
    fn cross_is_two_diagonals() {
        let mut controller = controller();
        controller.handle(InputEvent::Click { button: MouseButton::Right, x: 5, y: 5 });

        let layout = SceneLayout::from_state(controller.state(), 320, 240);
        let diagonals = &layout.lines[6..];
        assert_eq!(diagonals.len(), 2);
        assert_eq!((diagonals[0].x1, diagonals[0].y1, diagonals[0].x2, diagonals[0].y2), (0, 0, 80, 60));
        assert_eq!((diagonals[1].x1, diagonals[1].y1, diagonals[1].x2, diagonals[1].y2), (80, 0, 0, 60));
        assert!(diagonals.iter().all(|line| line.color == MARK_STROKE_COLOR));
    }

    #[test]
    fn render_fills_background_and_draws_lines() {
        let state = AppState::new(settings());
        let layout = SceneLayout::from_state(&state, 320, 240);
        let pixmap = SceneRenderer::new().render(&layout).unwrap();

        assert_eq!((pixmap.width(), pixmap.height()), (320, 240));
        assert_eq!(pixel(&pixmap, 40, 30), Rgb::new(10, 20, 30));
        assert_eq!(pixel(&pixmap, 80, 10), Rgb::new(200, 0, 0));
        assert_eq!(pixel(&pixmap, 10, 60), Rgb::new(200, 0, 0));
    }

    #[test]
    fn render_circle_interior_and_cross_center() {
        let mut controller = controller();
        controller.handle(InputEvent::Click { button: MouseButton::Left, x: 100, y: 70 });
        controller.handle(InputEvent::Click { button: MouseButton::Right, x: 260, y: 200 });

        let layout = SceneLayout::from_state(controller.state(), 320, 240);
        let pixmap = SceneRenderer::new().render(&layout).unwrap();

        // Circle interior in cell (1,1), centred at (120, 90)
        assert_eq!(pixel(&pixmap, 120, 90), MARK_FILL_COLOR);
        // Both diagonals of cell (3,3) cross near its centre
        assert_eq!(pixel(&pixmap, 280, 210), MARK_STROKE_COLOR);
    }

    #[test]
    fn zero_size_canvas_fails() {
        let state = AppState::new(settings());
        let layout = SceneLayout::from_state(&state, 0, 240);

        assert!(matches!(
            SceneRenderer::new().render(&layout),
            Err(RendererError::PixmapCreationFailed { width: 0, height: 240 })
        ));
    }

    #[test]
    fn bgra_conversion_swaps_red_and_blue() {
        let mut pixmap = Pixmap::new(2, 1).unwrap();
        pixmap.fill(Rgb::new(1, 2, 3).to_skia());

        let bgra = pixmap_to_bgra(&pixmap);
        assert_eq!(bgra, vec![3, 2, 1, 255, 3, 2, 1, 255]);
    }
}
