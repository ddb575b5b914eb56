//! Build the default scene and print its JSON snapshot.
//!
//! The output is the full render list a frontend consumes: numbered
//! tiles with coordinates, section colors and hover payloads.

use honeycomb_scene::{Scene, SceneConfig, Themes};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let scene = Scene::build(&SceneConfig::default(), &Themes::builtin())?;
    println!("{}", scene.to_json()?);

    Ok(())
}
