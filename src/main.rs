use annotate_icons::icon_gen;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "annotate-icons",
    about = "Generate the pencil badge toolbar icons as PNG files"
)]
struct Cli {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "./icons")]
    output: PathBuf,

    /// Icon sizes to generate, comma separated.
    #[clap(
        short,
        long,
        value_delimiter = ',',
        value_name = "SIZES",
        default_values_t = icon_gen::DEFAULT_SIZES,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    sizes: Vec<u32>,

    /// The badge background color (CSS color format)
    #[clap(long, default_value = icon_gen::DEFAULT_COLOR)]
    color: String,
}

impl From<Cli> for icon_gen::Args {
    fn from(cli: Cli) -> Self {
        Self {
            output: cli.output,
            sizes: cli.sizes,
            color: cli.color,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    icon_gen::generate_icons(cli.into())
}
