use log::info;
use pairwise_aligner::{align_global, align_local, SubstitutionMatrix};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let blosum50 = SubstitutionMatrix::blosum50();
    let x = "HEAGAWGHEE";
    let y = "PAWHEAE";

    let global = align_global(x, y, &blosum50)?;
    let (gx, gy) = global.aligned_strings();
    info!("Global identity {:.2}", global.identity());
    println!("Global score: {}", global.score);
    println!("{}\n{}", gx, gy);

    let local = align_local(x, y, &blosum50)?;
    let (lx, ly) = local.alignment.aligned_strings();
    info!(
        "Local alignment covers x[{:?}] and y[{:?}]",
        local.alignment.x_range(),
        local.alignment.y_range()
    );
    println!("Local score: {}", local.score());
    println!("{}\n{}", lx, ly);

    Ok(())
}
