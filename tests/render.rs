use cairo::{Context, ImageSurface};
use canvas_draw::demo::{self, Canvas};
use canvas_draw::draw::{
    BLACK, BLUE, CYAN, CornerRadius, DARK_GRAY, Density, DrawScope, GREEN, ImageBitmap,
    LIGHT_GRAY, MAGENTA, RED, Sp, YELLOW,
};
use canvas_draw::{Config, MainScreen};

const DENSITY: f64 = 2.0;

/// Renders one canvas at its own size (density 2.0) with its origin at `origin_y`.
fn render_canvas(canvas: &Canvas, extra_height: i32, origin_y: i32) -> ImageSurface {
    let density = Density::new(DENSITY, 1.0);
    let width = density.dp_round_to_px(canvas.min_size().width);
    let height = density.dp_round_to_px(canvas.min_size().height);
    let surface =
        ImageSurface::create(cairo::Format::ARgb32, width, height + extra_height).unwrap();
    {
        let ctx = Context::new(&surface).unwrap();
        ctx.translate(0.0, origin_y as f64);
        let scope = DrawScope::new(
            &ctx,
            canvas_draw::draw::Size::new(width as f64, height as f64),
            density,
        );
        canvas.draw(&scope);
    }
    surface
}

/// Returns (a, r, g, b) of a pixel, premultiplied as Cairo stores it.
fn argb(surface: &mut ImageSurface, x: i32, y: i32) -> (u8, u8, u8, u8) {
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let offset = y as usize * stride + x as usize * 4;
    let pixel = u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]);
    (
        (pixel >> 24) as u8,
        (pixel >> 16) as u8,
        (pixel >> 8) as u8,
        pixel as u8,
    )
}

fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
    surface
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0))
        .unwrap_or(false)
}

fn solid_image(r: f64, g: f64, b: f64) -> ImageBitmap {
    let surface = ImageSurface::create(cairo::Format::ARgb32, 16, 16).unwrap();
    {
        let ctx = Context::new(&surface).unwrap();
        ctx.set_source_rgb(r, g, b);
        ctx.paint().unwrap();
    }
    ImageBitmap::from_surface(surface).unwrap()
}

#[test]
fn circle_fills_center_not_corners() {
    let mut surface = render_canvas(&demo::simple_circle(GREEN), 0, 0);
    assert_eq!(argb(&mut surface, 32, 32), (255, 0, 255, 0));
    assert_eq!(argb(&mut surface, 1, 1).0, 0);
}

#[test]
fn gradient_runs_from_center_color_to_outer_color() {
    let mut surface = render_canvas(&demo::circle_with_gradient(GREEN, DARK_GRAY), 0, 0);
    let (a, r, g, _) = argb(&mut surface, 32, 32);
    assert_eq!(a, 255);
    assert!(g > 240 && r < 10, "center should be green, got r={r} g={g}");

    let (a, r, g, b) = argb(&mut surface, 32, 61);
    assert_eq!(a, 255);
    assert!(g < 120, "edge should be close to dark gray, got g={g}");
    assert!(r > 40 && b > 40, "edge should be close to dark gray, got r={r} b={b}");
    assert_eq!(argb(&mut surface, 0, 0).0, 0);
}

#[test]
fn rect_fills_whole_canvas() {
    let mut surface = render_canvas(&demo::simple_rect(DARK_GRAY), 0, 0);
    assert_eq!(argb(&mut surface, 0, 0), (255, 0x44, 0x44, 0x44));
    assert_eq!(argb(&mut surface, 63, 63), (255, 0x44, 0x44, 0x44));
}

#[test]
fn round_rect_leaves_corners_empty() {
    let canvas = demo::simple_round_rect(LIGHT_GRAY, CornerRadius::new(10.0, 10.0));
    let mut surface = render_canvas(&canvas, 0, 0);
    assert_eq!(argb(&mut surface, 32, 32), (255, 0xCC, 0xCC, 0xCC));
    assert_eq!(argb(&mut surface, 32, 0), (255, 0xCC, 0xCC, 0xCC));
    assert_eq!(argb(&mut surface, 0, 0).0, 0);
}

#[test]
fn line_runs_along_the_diagonal() {
    let mut surface = render_canvas(&demo::simple_line(BLUE), 0, 0);
    assert_eq!(argb(&mut surface, 32, 32), (255, 0, 0, 255));
    assert_eq!(argb(&mut surface, 60, 4).0, 0);
    assert_eq!(argb(&mut surface, 4, 60).0, 0);
}

#[test]
fn oval_fills_tall_canvas() {
    let mut surface = render_canvas(&demo::simple_oval(MAGENTA), 0, 0);
    assert_eq!(surface.height(), 128);
    assert_eq!(argb(&mut surface, 32, 64), (255, 255, 0, 255));
    assert_eq!(argb(&mut surface, 32, 120), (255, 255, 0, 255));
    assert_eq!(argb(&mut surface, 2, 2).0, 0);
}

#[test]
fn arc_strokes_only_the_upper_half() {
    let mut surface = render_canvas(&demo::simple_arc(CYAN), 0, 0);
    assert_eq!(argb(&mut surface, 32, 1), (255, 0, 255, 255));
    assert_eq!(argb(&mut surface, 32, 62).0, 0);
    assert_eq!(argb(&mut surface, 32, 32).0, 0);
}

#[test]
fn path_outlines_without_filling() {
    let mut surface = render_canvas(&demo::simple_path(BLACK), 0, 0);
    assert_eq!(argb(&mut surface, 32, 1), (255, 0, 0, 0));
    assert_eq!(argb(&mut surface, 32, 62), (255, 0, 0, 0));
    assert_eq!(argb(&mut surface, 32, 32).0, 0);
}

#[test]
fn points_mark_corners_and_center() {
    let mut surface = render_canvas(&demo::simple_points(RED), 0, 0);
    assert_eq!(argb(&mut surface, 0, 0), (255, 255, 0, 0));
    assert_eq!(argb(&mut surface, 63, 63), (255, 255, 0, 0));
    assert_eq!(argb(&mut surface, 32, 32), (255, 255, 0, 0));
    assert_eq!(argb(&mut surface, 16, 16).0, 0);
}

#[test]
fn outline_strokes_the_border() {
    let mut surface = render_canvas(&demo::simple_outline(YELLOW), 0, 0);
    assert_eq!(argb(&mut surface, 32, 1), (255, 255, 255, 0));
    assert_eq!(argb(&mut surface, 1, 32), (255, 255, 255, 0));
    assert_eq!(argb(&mut surface, 32, 32).0, 0);
}

#[test]
fn image_is_scaled_and_lit() {
    // Blue * yellow + red = red.
    let mut surface = render_canvas(&demo::simple_image(solid_image(0.0, 0.0, 1.0)), 0, 0);
    assert_eq!(argb(&mut surface, 32, 32), (255, 255, 0, 0));
    assert_eq!(argb(&mut surface, 63, 63), (255, 255, 0, 0));
}

#[test]
fn text_is_drawn_above_its_baseline() {
    let canvas = demo::simple_text("Hello Canvas", Sp(12.0));
    // Give the glyphs room above the origin; nothing may land below it.
    let mut surface = render_canvas(&canvas, 40, 40);
    assert!(surface_has_pixels(&mut surface));

    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let below_baseline = &data[(40 + 8) * stride..];
    assert!(below_baseline.iter().all(|byte| *byte == 0));
}

#[test]
fn whole_screen_renders_at_viewport_size() {
    let mut config = Config::default();
    config.screen.width = 360;
    config.screen.height = 1000;
    config.screen.density = 2.0;
    let screen = MainScreen::new(&config).unwrap();
    let mut surface = screen.render().unwrap();

    assert_eq!(surface.width(), 360);
    assert_eq!(surface.height(), 1000);
    // Background is opaque white where no canvas is drawn.
    assert_eq!(argb(&mut surface, 2, 2), (255, 255, 255, 255));

    // The first canvas is the green circle, centered at the top.
    let first = screen.cells()[0].placement;
    let (cx, cy) = (
        first.offset.x + first.size.width / 2,
        first.offset.y + first.size.height / 2,
    );
    assert_eq!(argb(&mut surface, cx, cy), (255, 0, 255, 0));
}
