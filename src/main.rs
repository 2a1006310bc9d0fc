use bucket_growth::output::{render, OutputType};
use bucket_growth::{GrowthAnalyzer, SourceConfig};
use clap::Parser;
use std::error::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "bucket-growth",
    version,
    about = "Display size and growth statistics of an S3 bucket"
)]
pub struct Opts {
    #[arg(value_name = "BUCKET", help = "Name of the bucket to measure")]
    bucket: String,

    #[arg(long, env = "AWS_PROFILE", help = "AWS profile to use")]
    profile: Option<String>,

    #[arg(long, env = "AWS_DEFAULT_REGION", help = "AWS region to use")]
    region: Option<String>,

    #[arg(long, help = "Custom CloudWatch endpoint URL")]
    endpoint: Option<String>,

    #[arg(short, long, help = "Enable verbose logging")]
    verbose: bool,

    #[arg(
        long,
        value_name = "TYPE",
        value_enum,
        default_value_t = OutputType::Text,
        help = "Output format"
    )]
    output: OutputType,

    #[arg(long, help = "Omit the banner from text output")]
    skip_banner: bool,
}

impl Opts {
    fn source_config(&self) -> SourceConfig {
        SourceConfig::cloudwatch()
            .with_optional("profile", self.profile.as_deref())
            .with_optional("region", self.region.as_deref())
            .with_optional("endpoint", self.endpoint.as_deref())
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run(opts: Opts) -> Result<(), Box<dyn Error + Send + Sync>> {
    if let Some(profile) = &opts.profile {
        info!("Using AWS profile: {}", profile);
    }
    if let Some(region) = &opts.region {
        info!("Using AWS region: {}", region);
    }

    let analyzer = GrowthAnalyzer::builder(opts.source_config())
        .build()
        .await?;
    let report = analyzer.measure(&opts.bucket).await?;

    println!("{}", render(&report, opts.output, !opts.skip_banner)?);
    Ok(())
}

#[tokio::main]
async fn main() {
    let opts = Opts::parse();
    init_tracing(opts.verbose);

    if let Err(e) = run(opts).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
