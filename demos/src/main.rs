// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless walkthrough of the editor view.
//!
//! Builds a small level, scripts a few pointer gestures and camera moves, and
//! writes one SVG per step into the directory given as the first argument
//! (default: `target/quarry_frames`).
//!
//! Run with `RUST_LOG=debug` to see the gesture log.

use std::path::{Path, PathBuf};

use kurbo::{Point, Rect, Vec2};
use quarry_editor::{EditorView, Modifiers, PointerEvent};
use quarry_surface::SvgSurface;
use quarry_world::World;

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let out_dir = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from("target/quarry_frames"), PathBuf::from);
    std::fs::create_dir_all(&out_dir)?;

    let mut world = sample_world();
    log::info!("sample world has {} points", world.point_count());
    let viewport = Rect::new(0.0, 0.0, f64::from(WIDTH), f64::from(HEIGHT));
    let mut view = EditorView::new(Point::new(320.0, 240.0), 0);
    view.config_mut().show_bounds_debug = true;
    view.set_viewport(&world, viewport);

    let mut frames = Frames {
        dir: out_dir,
        next: 0,
        viewport,
        svg: SvgSurface::default(),
    };
    frames.write(&mut view, &world, None)?;

    // Box-select the left cluster.
    let from = Point::new(60.0, 60.0);
    let to = Point::new(260.0, 260.0);
    view.primary_pressed(&world, &PointerEvent::new(from));
    view.primary_dragged(&world, &PointerEvent::new(to));
    frames.write(&mut view, &world, Some(to))?;
    view.primary_released(&mut world);
    log::info!("selected {} points", view.selection().len());

    // Shift-click a point on the right to add it.
    let extra = view.world_to_view(Point::new(480.0, 200.0));
    let add = PointerEvent::new(extra).with_modifiers(Modifiers::SHIFT);
    view.primary_pressed(&world, &add);
    view.primary_released(&mut world);
    frames.write(&mut view, &world, Some(extra))?;

    // Drag the selection; the first frame shows the preview offset.
    let grab = view.world_to_view(Point::new(100.0, 100.0));
    let drop = grab + Vec2::new(40.0, 60.0);
    view.primary_pressed(&world, &PointerEvent::new(grab));
    view.primary_dragged(&world, &PointerEvent::new(drop));
    frames.write(&mut view, &world, Some(drop))?;
    view.primary_released(&mut world);
    frames.write(&mut view, &world, Some(drop))?;

    // Zoom towards the cursor, then pan against the bounds.
    for _ in 0..4 {
        view.zoom(&world, 1, Some(drop));
    }
    frames.write(&mut view, &world, Some(drop))?;
    view.move_by(&world, Vec2::new(-2_000.0, 0.0));
    frames.write(&mut view, &world, Some(drop))?;
    log::info!("camera: {:?}", view.camera().debug_info());

    log::info!("wrote {} frames to {}", frames.next, frames.dir.display());
    Ok(())
}

fn sample_world() -> World {
    let mut world = World::new();
    world.set_bounds(Some(Rect::new(0.0, 0.0, 800.0, 600.0)));

    let p0 = world.add_point(Point::new(100.0, 100.0), "p0");
    let p1 = world.add_point(Point::new(220.0, 120.0), "p1");
    let p2 = world.add_point(Point::new(160.0, 230.0), "p2");
    let p3 = world.add_point(Point::new(480.0, 200.0), "p3");
    let p4 = world.add_point(Point::new(120.0, 300.0), "p4");
    let p5 = world.add_point(Point::new(520.0, 380.0), "p5");

    // The first two lines drive the reflection and distance overlays.
    world.add_line(p0, p3);
    world.add_line(p4, p1);
    world.add_line(p2, p5);
    world
}

struct Frames {
    dir: PathBuf,
    next: usize,
    viewport: Rect,
    svg: SvgSurface,
}

impl Frames {
    fn write(
        &mut self,
        view: &mut EditorView,
        world: &World,
        pointer: Option<Point>,
    ) -> std::io::Result<()> {
        self.svg.clear();
        view.render(world, &mut self.svg, self.viewport, 0.0, pointer);
        let path = frame_path(&self.dir, self.next);
        std::fs::write(&path, self.svg.to_svg(WIDTH, HEIGHT))?;
        log::debug!("wrote {}", path.display());
        self.next += 1;
        Ok(())
    }
}

fn frame_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("frame_{index:03}.svg"))
}
