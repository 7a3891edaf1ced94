use hydrolab::{classify, resolve};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A 5 kN load on a piston at 50 kPa needs a 0.1 m² piston face.
    let resolution = resolve(Some(5_000.0), None, Some(50_000.0))?;
    println!("{}", resolution.message);

    let level = classify(resolution.pressure);
    println!("{level} pressure, drawn in {}", level.color_name());

    // Two blanks cannot be solved.
    if let Err(error) = resolve(Some(5_000.0), None, None) {
        println!("rejected: {error}");
    }

    Ok(())
}
