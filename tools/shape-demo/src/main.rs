// Copyright 2025. Scripted drawing session for raster-canvas.
//
// Usage:
//   shape-demo [--width <W>] [--height <H>] [--output <stem>] [--no-export]
//
// Draws a fixed list of shapes (some deliberately invalid), reports each
// failure and shape kind, reads back pixel (0, 0), and exports `<stem>.ppm`.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use raster_canvas::color::{self, palette_name, PALETTE};
use raster_canvas::{Canvas, Circle, Point, Rectangle, Shape, Triangle};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// Canvas width in pixels
    #[arg(long, default_value_t = 1024)]
    width: i32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 1024)]
    height: i32,

    /// Output file stem; `.ppm` is appended
    #[arg(short = 'o', long = "output", default_value = "output")]
    output: String,

    /// Skip writing the image
    #[arg(long)]
    no_export: bool,
}

/// A labelled draw call, optionally followed by a `"<name> is a <kind>"`
/// line for its group.
struct Step {
    label: &'static str,
    shape: Box<dyn Shape>,
    report_kind_of: Option<&'static str>,
}

fn step(label: &'static str, shape: impl Shape + 'static) -> Step {
    Step {
        label,
        shape: Box::new(shape),
        report_kind_of: None,
    }
}

impl Step {
    fn then_report(mut self, name: &'static str) -> Self {
        self.report_kind_of = Some(name);
        self
    }
}

fn script() -> Vec<Step> {
    let p = Point::new;
    vec![
        step("rect", Rectangle::new(p(100, 300), p(600, 900), color::RED)).then_report("rect"),
        step("rect2", Rectangle::new(p(0, 0), p(100, 1024), color::GREEN)),
        step("rect3", Rectangle::new(p(100, 300), p(100, 1022), 102)),
        step("circ", Circle::new(p(500, 500), 200, color::GREEN)),
        step("circ2", Circle::new(p(0, 0), 200, color::PURPLE)),
        step("circ3", Circle::new(p(500, 500), 200, 18)).then_report("circ"),
        step("tri", Triangle::new(p(100, 100), p(600, 300), p(859, 850), color::YELLOW)),
        step("tri2", Triangle::new(p(1, -1), p(7, 300), p(859, 10000), color::YELLOW)),
        step("tri3", Triangle::new(p(100, 100), p(600, 300), p(859, 850), -1)).then_report("tri"),
    ]
}

/// Draw every step in order, writing failures and kind lines to `out` as
/// they happen. Returns the number of rejected shapes.
fn run<W: Write>(canvas: &mut Canvas, steps: &[Step], out: &mut W) -> io::Result<usize> {
    let mut failures = 0;
    for s in steps {
        if let Err(e) = s.shape.draw(canvas) {
            writeln!(out, "{}: {}", s.label, e)?;
            failures += 1;
        }
        if let Some(name) = s.report_kind_of {
            writeln!(out, "{} is a {}", name, s.shape.kind())?;
        }
    }
    Ok(failures)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Arguments::parse();

    println!("starting ...");
    let mut canvas = Canvas::new(args.width, args.height);
    log::info!("canvas {}x{}", canvas.width(), canvas.height());

    let steps = script();
    let failures = run(&mut canvas, &steps, &mut io::stdout().lock())?;
    log::info!("{} of {} shapes rejected", failures, steps.len());

    let (w, h) = canvas.extent();
    println!("{}", w);
    println!("{}", h);
    match canvas.pixel(0, 0) {
        Ok(c) => println!("{}", c.b),
        Err(e) => println!("pixel (0, 0): {}", e),
    }

    let black = PALETTE[color::BLACK as usize];
    if let Err(e) = canvas.draw_pixel(0, 0, black) {
        println!("pixel (0, 0): {}", e);
    }
    if let Ok(c) = canvas.pixel(0, 0) {
        println!(
            "({} {} {}) {}",
            c.r,
            c.g,
            c.b,
            palette_name(&c).unwrap_or("unknown")
        );
    }

    if !args.no_export {
        let path = canvas
            .export_image(&args.output)
            .with_context(|| format!("exporting canvas to {}.ppm", args.output))?;
        log::info!("wrote {}", path.display());
    }
    Ok(())
}
