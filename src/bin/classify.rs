//! classify - run one classification attempt from the command line.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;

use heritage_classifier::{
    percent, ClassifierBackend, ClassifierConfig, FileSource, GallerySource, HttpClassifier,
    HttpClassifierConfig, ImageSource, NormalizedResult, StubClassifier, Workflow, WorkflowState,
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Image file to classify.
    image: Option<PathBuf>,
    /// Pick an image from the gallery directory by file name instead.
    #[arg(long, conflicts_with = "image")]
    gallery: Option<String>,
    /// List the gallery contents and exit.
    #[arg(long)]
    list_gallery: bool,
    /// Prediction endpoint URL (overrides config).
    #[arg(long)]
    endpoint: Option<String>,
    /// Use the offline stub backend instead of the remote endpoint.
    #[arg(long)]
    stub: bool,
    /// Print the normalized result as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = ClassifierConfig::load()?;
    if let Some(endpoint) = args.endpoint {
        config.predict_url = endpoint;
    }

    if args.list_gallery {
        let gallery = GallerySource::new(config.gallery_dir.clone());
        for name in gallery.list()? {
            println!("{}", name);
        }
        return Ok(());
    }

    let image = match (&args.image, &args.gallery) {
        (Some(path), _) => FileSource::new(path.clone()).acquire()?,
        (None, Some(name)) => GallerySource::new(config.gallery_dir.clone())
            .with_selection(name.clone())
            .acquire()?,
        (None, None) => return Err(anyhow!("pass an image path or --gallery NAME")),
    };
    let image = image.ok_or_else(|| anyhow!("no image selected"))?;

    let mut workflow = Workflow::new();
    workflow.select_image(image);

    let mut backend: Box<dyn ClassifierBackend> = if args.stub {
        Box::new(StubClassifier::default())
    } else {
        Box::new(HttpClassifier::new(HttpClassifierConfig {
            url: config.predict_url.clone(),
            timeout: config.timeout,
        }))
    };

    match workflow.submit(backend.as_mut()) {
        Ok(result) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_result(&result);
            }
            Ok(())
        }
        Err(err) => {
            // The workflow keeps the image so the user could retry; the CLI
            // just reports and exits non-zero.
            if let WorkflowState::Failed { message, .. } = workflow.state() {
                eprintln!("{}", message);
            }
            Err(anyhow!("classification failed: {}", err))
        }
    }
}

fn print_result(result: &NormalizedResult) {
    let top = result.top.class;
    println!("artisanat identifié : {}", top.display_name());
    println!("  région    : {}", top.region());
    println!("  héritage  : {}", top.heritage());
    println!("  confiance : {}%", percent(result.top.confidence));
    println!();
    println!("classement :");
    for (rank, entry) in result.ranking.iter().enumerate() {
        println!(
            "  {}. {:<16} {:>5}%",
            rank + 1,
            entry.class.display_name(),
            percent(entry.confidence)
        );
    }
}
