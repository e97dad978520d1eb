use std::{fs, path::Path, process::ExitCode};

use clap::Parser;
use scenery::{DecodedScene, Document, LoadOptions, SceneLoader};

mod cli;
mod resource;

use cli::Cli;
use resource::{InspectError, Resources};

#[tracing::instrument(skip(options))]
fn inspect(path: &Path, options: LoadOptions) -> Result<DecodedScene, InspectError> {
    let resources = Resources::new(path)?;
    let mut doc: Document = fs::read_to_string(path)?.parse()?;
    resources.attach_all(&mut doc)?;
    Ok(SceneLoader::with_options(&doc, options).load()?)
}

pub fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.initialize_tracing();

    let options = cli.load_options();
    let mut res = ExitCode::SUCCESS;
    for path in &cli.files {
        match inspect(path, options) {
            Ok(scene) => println!("{scene}"),
            Err(error) => {
                tracing::error!(?path, %error, "failed to inspect document");
                res = ExitCode::FAILURE;
            }
        }
    }
    res
}
