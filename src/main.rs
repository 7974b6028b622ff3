use anyhow::{bail, Context};
use levelkit::{heightmap, init_logging, BUILD_DATE, VERSION};

/// Inspect a saved height map: sample count and measured envelope.
fn main() -> anyhow::Result<()> {
    init_logging()?;

    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("levelkit {} ({})", VERSION, BUILD_DATE);
            eprintln!("Usage: levelkit <height-map-file>");
            std::process::exit(2);
        }
    };

    let state = heightmap::load(&path).with_context(|| format!("loading {}", path))?;
    if state.probed_positions.is_empty() {
        bail!("{} contains no samples", path);
    }

    println!("{}: {} samples", path, state.probed_positions.len());
    match (state.min_z, state.max_z) {
        (Some(min_z), Some(max_z)) => {
            println!("envelope: Z {:.3} .. {:.3} (spread {:.3})", min_z, max_z, max_z - min_z)
        }
        _ => println!("envelope: unknown (one or more samples have no height)"),
    }

    Ok(())
}
