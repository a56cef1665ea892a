use anyhow::{Context, Result, bail};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use pdf_images::constants::pt_to_mm;
use pdf_images::{ConversionOptions, FnObserver, PageSize, Placement, Progress, Selection};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "img2pdf", about = "Turn images into a PDF, one page per image", version)]
struct Cli {
    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert images (or directories of images) to a PDF
    Convert {
        /// Image files or directories, in page order
        #[arg(required = true, num_args = 1..)]
        images: Vec<PathBuf>,

        /// JSON options file; explicit flags take precedence
        #[arg(long)]
        config: Option<PathBuf>,

        /// Don't print per-page progress
        #[arg(short, long)]
        quiet: bool,

        #[command(flatten)]
        options: OptionArgs,
    },

    /// Show where an image of the given size would be drawn
    Layout {
        /// Image width in pixels
        #[arg(long)]
        width: u32,

        /// Image height in pixels
        #[arg(long)]
        height: u32,

        #[arg(long, default_value = "a4", value_enum)]
        page_size: PageSizeArg,

        #[arg(long, default_value = "center", value_enum)]
        placement: PlacementArg,
    },

    /// Write conversion options to a JSON file
    SaveConfig {
        /// Destination file
        file: PathBuf,

        #[command(flatten)]
        options: OptionArgs,
    },
}

#[derive(Args)]
struct OptionArgs {
    /// Output PDF name (".pdf" is added if missing)
    #[arg(short, long)]
    name: Option<String>,

    /// Output page size
    #[arg(long, value_enum)]
    page_size: Option<PageSizeArg>,

    /// Where to put the image on the page
    #[arg(long, value_enum)]
    placement: Option<PlacementArg>,

    /// Document title stored in the PDF metadata
    #[arg(long)]
    title: Option<String>,
}

impl OptionArgs {
    /// Apply the flags that were given on top of `base`
    fn apply(self, mut base: ConversionOptions) -> ConversionOptions {
        if let Some(name) = self.name {
            base.output_name = name;
        }
        if let Some(page_size) = self.page_size {
            base.page_size = page_size.into();
        }
        if let Some(placement) = self.placement {
            base.placement = placement.into();
        }
        if self.title.is_some() {
            base.title = self.title;
        }
        base
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PageSizeArg {
    Letter,
    A4,
    Legal,
    Tabloid,
    A3,
}

#[derive(Clone, Copy, ValueEnum)]
enum PlacementArg {
    Center,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Stretch,
}

impl From<PageSizeArg> for PageSize {
    fn from(arg: PageSizeArg) -> Self {
        match arg {
            PageSizeArg::Letter => Self::Letter,
            PageSizeArg::A4 => Self::A4,
            PageSizeArg::Legal => Self::Legal,
            PageSizeArg::Tabloid => Self::Tabloid,
            PageSizeArg::A3 => Self::A3,
        }
    }
}

impl From<PlacementArg> for Placement {
    fn from(arg: PlacementArg) -> Self {
        match arg {
            PlacementArg::Center => Self::Center,
            PlacementArg::TopLeft => Self::TopLeft,
            PlacementArg::TopRight => Self::TopRight,
            PlacementArg::BottomLeft => Self::BottomLeft,
            PlacementArg::BottomRight => Self::BottomRight,
            PlacementArg::Stretch => Self::Stretch,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Convert {
            images,
            config,
            quiet,
            options,
        } => {
            let base = match config {
                Some(path) => ConversionOptions::load(&path)
                    .await
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => ConversionOptions::default(),
            };
            let options = options.apply(base);

            let paths = pdf_images::image_io::expand_image_paths(&images)
                .context("Failed to read input directory")?;

            // Rejected files are reported through the log as they are checked
            let selection = tokio::task::spawn_blocking(move || {
                let mut selection = Selection::new();
                selection.add_files(paths);
                selection
            })
            .await?;

            if selection.is_empty() {
                bail!("No valid images to convert");
            }

            let observer = FnObserver(move |progress: &Progress| {
                if !quiet {
                    println!(
                        "[{}/{}] {}",
                        progress.processed, progress.total, progress.file_name
                    );
                }
            });

            let report = pdf_images::convert(&selection, &options, observer)
                .await
                .context("Conversion failed")?;

            println!(
                "Created {} with {} pages",
                report.output_path.display(),
                report.page_count()
            );
            if !report.skipped.is_empty() {
                println!("{} image(s) could not be processed:", report.skipped.len());
                for skipped in &report.skipped {
                    println!("  {}", skipped.warning_text());
                }
            }
        }

        Commands::Layout {
            width,
            height,
            page_size,
            placement,
        } => {
            let page_size: PageSize = page_size.into();
            let placement: Placement = placement.into();
            let descriptor =
                pdf_images::page_descriptor((width as f32, height as f32), page_size, placement)?;
            let rect = descriptor.rect;

            println!(
                "Page: {} ({:.2} x {:.2} pt)",
                page_size, descriptor.page_width, descriptor.page_height
            );
            println!("Placement: {}", placement);
            println!(
                "Image: x={:.2} y={:.2} w={:.2} h={:.2} pt",
                rect.x, rect.y, rect.width, rect.height
            );
            println!(
                "       x={:.1} y={:.1} w={:.1} h={:.1} mm",
                pt_to_mm(rect.x),
                pt_to_mm(rect.y),
                pt_to_mm(rect.width),
                pt_to_mm(rect.height)
            );
        }

        Commands::SaveConfig { file, options } => {
            let options = options.apply(ConversionOptions::default());
            options.validate()?;
            options
                .save(&file)
                .await
                .with_context(|| format!("Failed to write {}", file.display()))?;
            println!("Saved options to {}", file.display());
        }
    }

    Ok(())
}
