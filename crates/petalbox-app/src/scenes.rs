//! Demo scene construction and SVG output.
//!
//! Recreates the shape demos with their default slider values: static
//! renders for the slider-driven shapes, numbered frame sequences for
//! the tap-driven animations. "Taps" are scripted trigger events on
//! the frame clock.

use crate::{config::DemoConfig, random, AppError};
use kurbo::{Point, Rect};
use peniko::Color;
use petalbox_core::{
    AnimationState, Arc, Checkerbox, ColorCyclingCircle, Easing, FillRule, Flower, GridSize,
    Shape, ShapeStyle, Trapezoid, Triangle,
};
use petalbox_render::SvgDocument;

/// Render every demo scene into the configured output directory.
pub fn render_all(config: &DemoConfig) -> Result<(), AppError> {
    std::fs::create_dir_all(&config.output_dir)?;
    let rect = config.canvas_rect();

    render_triangle(config, rect)?;
    render_arc(config, rect)?;
    render_flower(config, rect)?;
    render_color_wheel(config, rect)?;
    render_blend_circles(config, rect)?;
    render_trapezoid_taps(config, rect)?;
    render_checkerbox_taps(config, rect)?;

    log::info!("wrote demo output to {}", config.output_dir.display());
    Ok(())
}

fn write_scene(config: &DemoConfig, name: &str, doc: &SvgDocument) -> Result<(), AppError> {
    doc.write_to_file(&config.output_dir.join(name))?;
    Ok(())
}

fn render_triangle(config: &DemoConfig, rect: Rect) -> Result<(), AppError> {
    log::info!("rendering triangle");
    let mut doc = SvgDocument::new(rect.width(), rect.height());
    let style = ShapeStyle::filled(Color::from_rgba8(239, 68, 68, 255));
    doc.render_shape(&Shape::Triangle(Triangle::new()), rect, &style);
    write_scene(config, "triangle.svg", &doc)
}

fn render_arc(config: &DemoConfig, rect: Rect) -> Result<(), AppError> {
    log::info!("rendering arc");
    let mut doc = SvgDocument::new(rect.width(), rect.height());
    // Inset by half the stroke width so the stroke stays inside the
    // rect, the way a border stroke would.
    let arc = Arc::new(0.0, 110.0, true).inset(5.0);
    let style = ShapeStyle::stroked(Color::from_rgba8(59, 130, 246, 255), 10.0);
    doc.render_shape(&Shape::Arc(arc), rect, &style);
    write_scene(config, "arc.svg", &doc)
}

fn render_flower(config: &DemoConfig, rect: Rect) -> Result<(), AppError> {
    log::info!("rendering flower");
    let mut doc = SvgDocument::new(rect.width(), rect.height());
    let style = ShapeStyle::filled(Color::from_rgba8(0, 122, 255, 255))
        .with_fill_rule(FillRule::EvenOdd);
    doc.render_shape(&Shape::Flower(Flower::default()), rect, &style);
    write_scene(config, "flower.svg", &doc)
}

fn render_color_wheel(config: &DemoConfig, rect: Rect) -> Result<(), AppError> {
    log::info!("rendering color wheel");
    let mut doc = SvgDocument::new(rect.width(), rect.height());
    let circle = ColorCyclingCircle::new(0.0, 100)?;
    doc.render_shape(
        &Shape::ColorCyclingCircle(circle),
        rect,
        &ShapeStyle::default(),
    );
    write_scene(config, "color_wheel.svg", &doc)
}

/// Three primary circles with screen blending: where all overlap,
/// white.
fn render_blend_circles(config: &DemoConfig, rect: Rect) -> Result<(), AppError> {
    log::info!("rendering blend circles");
    // The slider value scales the circle diameter; rendered here at
    // full deflection. Layout tuned for a 300pt canvas, scaled with it.
    let amount = 1.0;
    let scale = config.canvas_size / 300.0;
    let radius = 100.0 * amount * scale;
    let center = rect.center();

    let mut doc = SvgDocument::new(rect.width(), rect.height());
    doc.background(Color::from_rgba8(0, 0, 0, 255));
    let offsets = [
        (-50.0, -80.0, Color::from_rgba8(255, 0, 0, 255)),
        (50.0, -80.0, Color::from_rgba8(0, 255, 0, 255)),
        (0.0, 0.0, Color::from_rgba8(0, 0, 255, 255)),
    ];
    for (dx, dy, color) in offsets {
        let at = Point::new(center.x + dx * scale, center.y + dy * scale);
        doc.fill_circle(at, radius, color, true);
    }
    write_scene(config, "blend.svg", &doc)
}

fn render_trapezoid_taps(config: &DemoConfig, rect: Rect) -> Result<(), AppError> {
    log::info!("rendering trapezoid tap animation");
    let style = ShapeStyle::filled(Color::from_rgba8(0, 0, 0, 255));

    // First tap at t = 0 heads for the wide inset; a second tap
    // halfway through retargets mid-flight, which keeps the displayed
    // value continuous.
    let mut state = AnimationState::idle(Trapezoid::new(50.0)).animate_to(
        Trapezoid::new(120.0),
        0.0,
        config.animation_duration,
        Easing::EaseInOut,
    );
    let retarget_at = config.animation_duration / 2.0;
    let mut retargeted = false;

    for frame in 0..config.frame_count() * 2 {
        let now = frame as f64 * config.frame_interval();
        if !retargeted && now >= retarget_at {
            state = state.animate_to(
                Trapezoid::new(50.0),
                now,
                config.animation_duration,
                Easing::EaseInOut,
            );
            retargeted = true;
        }

        let (trapezoid, done) = state.sample(now);
        log::debug!("trapezoid frame {frame}: inset {}", trapezoid.inset_amount);

        let mut doc = SvgDocument::new(rect.width(), rect.height());
        doc.render_shape(&Shape::Trapezoid(trapezoid), rect, &style);
        write_scene(config, &format!("trapezoid_{frame:03}.svg"), &doc)?;

        state = state.advance(now);
        if done && retargeted {
            break;
        }
    }
    Ok(())
}

fn render_checkerbox_taps(config: &DemoConfig, rect: Rect) -> Result<(), AppError> {
    log::info!("rendering checkerbox tap animation");
    let style = ShapeStyle::filled(Color::from_rgba8(0, 0, 0, 255));

    let start = Checkerbox::new(4, 4)?;
    // The tap picks new grid dimensions; the pair animates jointly.
    let target = Checkerbox::new(random::pick_in_range(3, 8), random::pick_in_range(3, 8))?;
    log::info!(
        "checkerbox tap: {}x{} -> {}x{}",
        start.rows,
        start.columns,
        target.rows,
        target.columns
    );

    let mut state = AnimationState::idle(GridSize::from(start)).animate_to(
        GridSize::from(target),
        0.0,
        config.animation_duration,
        Easing::Linear,
    );

    for frame in 0..config.frame_count() {
        let now = frame as f64 * config.frame_interval();
        let (grid, done) = state.sample(now);
        let checkerbox = Checkerbox::from(grid);
        log::debug!(
            "checkerbox frame {frame}: {}x{}",
            checkerbox.rows,
            checkerbox.columns
        );

        let mut doc = SvgDocument::new(rect.width(), rect.height());
        doc.render_shape(&Shape::Checkerbox(checkerbox), rect, &style);
        write_scene(config, &format!("checkerbox_{frame:03}.svg"), &doc)?;

        state = state.advance(now);
        if done {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn quick_config(output_dir: PathBuf) -> DemoConfig {
        DemoConfig {
            output_dir,
            canvas_size: 100.0,
            frame_rate: 4,
            animation_duration: 1.0,
        }
    }

    #[test]
    fn test_render_all_writes_every_scene() {
        let dir = tempfile::tempdir().unwrap();
        let config = quick_config(dir.path().to_path_buf());
        render_all(&config).unwrap();

        for name in [
            "triangle.svg",
            "arc.svg",
            "flower.svg",
            "color_wheel.svg",
            "blend.svg",
            "trapezoid_000.svg",
            "checkerbox_000.svg",
        ] {
            assert!(dir.path().join(name).exists(), "missing {name}");
        }

        // The checkerbox sequence covers the full duration: 4 fps over
        // one second plus both endpoints.
        assert!(dir.path().join("checkerbox_004.svg").exists());
        assert!(!dir.path().join("checkerbox_005.svg").exists());
    }

    #[test]
    fn test_trapezoid_sequence_extends_past_retarget() {
        let dir = tempfile::tempdir().unwrap();
        let config = quick_config(dir.path().to_path_buf());
        render_trapezoid_taps(&config, config.canvas_rect()).unwrap();

        // Retarget at 0.5s pushes the finish to 1.5s: frame 6 is the
        // last one.
        assert!(dir.path().join("trapezoid_006.svg").exists());
        assert!(!dir.path().join("trapezoid_007.svg").exists());
    }
}
