use clap::Parser;
use convolve::{ConvolutionOptions, convolution};
use itertools::Itertools;
use tracing_forest::{ForestLayer, util::LevelFilter};
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// First sequence, comma separated.
    #[arg(short, long, value_delimiter = ',')]
    a: Vec<u64>,

    /// Second sequence, comma separated.
    #[arg(short, long, value_delimiter = ',')]
    b: Vec<u64>,

    /// Decimal digits of precision for the Fourier engine.
    #[arg(short, long)]
    dps: Option<u32>,

    /// Prime modulus for the number theoretic engine.
    #[arg(short, long)]
    prime: Option<u64>,

    /// Cyclic length; 0 keeps the convolution linear.
    #[arg(short, long, default_value_t = 0)]
    cycle: i64,

    /// Require the number theoretic engine.
    #[arg(long)]
    ntt: bool,
}

fn main() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();

    let args = Args::parse();

    let options = ConvolutionOptions {
        precision: args.dps,
        prime: args.prime,
        cycle: args.cycle,
        request_ntt: args.ntt,
    };

    match convolution(&args.a, &args.b, &options) {
        Ok(out) => println!("[{}]", out.iter().join(", ")),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
