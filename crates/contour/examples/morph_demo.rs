//! Build a small scene, grow a target by a margin and carve an organ out of it.
//!
//! Run with `RUST_LOG`-style verbosity by passing `-v`.

use labelmorph_contour::prelude::*;
use labelmorph_core::{VoxelGeometry, VoxelGrid};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn main() -> labelmorph_core::Result<()> {
    setup_logging(std::env::args().any(|a| a == "-v"));

    let geometry = VoxelGeometry::new([-32.0, -32.0, -30.0], [1.0, 1.0, 2.5], [64, 64, 24])?;

    let mut target = VoxelGrid::new(geometry);
    target.fill_box([24, 24, 8], [40, 40, 16], 1u8)?;
    let mut organ = VoxelGrid::new(geometry);
    organ.fill_box([38, 20, 6], [50, 44, 18], 1u8)?;

    let mut scene = Scene::with_standard_colors();
    let gtv = scene.add_labelmap_contour("GTV", target)?;
    let rectum = scene.add_labelmap_contour("Rectum", organ)?;
    let ptv = scene.add_contour("PTV", Representation::RibbonModel);

    let mut logic = ContourMorphologyLogic::new();
    logic.set_request(
        MorphologyRequest::new(gtv, MorphologyOperation::Expand)
            .with_kernel_size([5.0, 5.0, 5.0])
            .with_output_name("PTV")
            .with_output_contour(ptv.clone()),
    );
    let expanded = logic.morph_contour(&mut scene)?;

    logic.set_request(
        MorphologyRequest::new(ptv, MorphologyOperation::Subtract)
            .with_secondary(rectum)
            .with_output_name("PTV-Rectum"),
    );
    let carved = logic.morph_contour(&mut scene)?;

    for outcome in [&expanded, &carved] {
        if let Some(volume) = scene.volume(&outcome.volume) {
            info!(
                name = %outcome.name,
                voxels = volume.grid.foreground_count(),
                "result"
            );
        }
    }
    info!(batches = scene.completed_batches(), artifacts = scene.artifact_count(), "done");
    Ok(())
}
