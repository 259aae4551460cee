//! # Simplex Demo
//!
//! Walks the Triangle and Tetrahedron contract on the console: premature
//! queries, valid shapes with computed metrics, and each validation failure
//! in turn. Expected failures are matched by error kind and reported inline;
//! anything unanticipated propagates out of `main`.

use clap::{Parser, ValueEnum};
use config::constants::DISPLAY_PRECISION;
use simplex_geom::{GeometryError, Point, Tetrahedron, Triangle};

#[derive(Parser)]
#[command(name = "simplex-demo")]
#[command(about = "Walk through the triangle and tetrahedron contract")]
struct Args {
    /// Which demo sequence to run
    #[arg(long, value_enum, default_value = "all")]
    demo: Demo,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Demo {
    Triangle,
    Tetrahedron,
    All,
}

fn main() -> Result<(), GeometryError> {
    let args = Args::parse();

    if args.demo != Demo::Tetrahedron {
        run_triangle_demo()?;
    }
    if args.demo != Demo::Triangle {
        run_tetrahedron_demo()?;
    }
    Ok(())
}

fn run_triangle_demo() -> Result<(), GeometryError> {
    println!("Testing Triangle:");
    println!("----------------------");

    let mut triangle = Triangle::new();

    // Querying before initialization must fail
    match triangle.area() {
        Err(err @ GeometryError::Uninitialized { .. }) => {
            println!("Expected error: {err}");
        }
        other => {
            println!("Unexpected result from premature area query: {other:?}");
        }
    }

    triangle.set_coordinates(
        Point::new(0.0, 0.0),
        Point::new(3.0, 0.0),
        Point::new(0.0, 4.0),
    )?;
    println!("{}", triangle.describe()?);
    println!(
        "Triangle area: {:.*} square units\n",
        DISPLAY_PRECISION,
        triangle.area()?
    );

    // Collinear points must be rejected
    let mut invalid = Triangle::new();
    match invalid.set_coordinates(
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(2.0, 2.0),
    ) {
        Err(err @ GeometryError::InvalidGeometry { .. }) => {
            println!("Expected error: {err}\n");
        }
        other => {
            println!("Unexpected result from collinear points: {other:?}\n");
        }
    }

    Ok(())
}

fn run_tetrahedron_demo() -> Result<(), GeometryError> {
    println!("Testing Tetrahedron:");
    println!("-------------------------");

    let mut tetrahedron = Tetrahedron::new();
    let base = (
        Point::new(0.0, 0.0),
        Point::new(3.0, 0.0),
        Point::new(0.0, 4.0),
    );

    // Negative height must be rejected before any base validation
    match tetrahedron.set_coordinates(base.0, base.1, base.2, Point::new(5.0, 5.0), -5.0) {
        Err(err @ GeometryError::InvalidParameter { .. }) => {
            println!("Expected error: {err}");
        }
        other => {
            println!("Unexpected result from negative height: {other:?}");
        }
    }

    // An apex in the base's plane must be rejected
    match tetrahedron.set_coordinates(base.0, base.1, base.2, Point::new(1.5, 2.0), 5.0) {
        Err(err @ GeometryError::InvalidGeometry { .. }) => {
            println!("Expected error: {err}");
        }
        other => {
            println!("Unexpected result from in-plane apex: {other:?}");
        }
    }

    tetrahedron.set_coordinates(base.0, base.1, base.2, Point::new(5.0, 5.0), 5.0)?;
    println!("{}", tetrahedron.describe()?);
    println!(
        "Tetrahedron volume: {:.*} cubic units",
        DISPLAY_PRECISION,
        tetrahedron.volume()?
    );

    // A fresh solid rejects queries until initialized
    let fresh = Tetrahedron::new();
    match fresh.describe() {
        Err(err @ GeometryError::Uninitialized { .. }) => {
            println!("\nExpected error from fresh instance: {err}");
        }
        other => {
            println!("\nUnexpected result from fresh instance: {other:?}");
        }
    }

    Ok(())
}
