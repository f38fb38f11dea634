//! Minimal Hilbert path example: generate a curve and walk its first points.

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Order-3 curve: an 8x8 grid traversed in 64 steps
    let curve = hilbertpath::HilbertCurve::new(3)?;
    println!(
        "order {} curve: {} points on a {}x{} grid",
        curve.order(),
        curve.length(),
        curve.side(),
        curve.side()
    );

    let path = hilbertpath::CurvePath::generate(3)?;
    for (index, point) in path.iter().take(8).enumerate() {
        println!("{index:>2}: {point}");
    }

    Ok(())
}
