//! # Layout Inspect
//!
//! Demonstrates:
//! - Deriving vertex layouts with `#[derive(VertexRecord)]`
//! - Field, normalized, per-instance and positional bindings
//! - Replaying the resulting attribute calls through `RecordingBackend`
//!
//! No GPU is needed. Each sample format prints the calls a real backend
//! would have received.

use std::process::ExitCode;

use attribind_core::{BackendCall, RecordingBackend};
use attribind_demos::SampleFormat;
use clap::Parser;

/// Which sample format to inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
enum CliFormat {
    /// Every sample format.
    #[default]
    All,
    /// Textured quad vertex (`Vec3` position, `Vec2` texcoord).
    Quad,
    /// Colored vertex with a normalized `[u8; 4]` color.
    Colored,
    /// Per-instance offset and tint.
    Instance,
    /// Bare `[f32; 2]` vertex bound positionally.
    Packed,
}

impl CliFormat {
    fn formats(self) -> Vec<SampleFormat> {
        match self {
            Self::All => SampleFormat::ALL.to_vec(),
            Self::Quad => vec![SampleFormat::Quad],
            Self::Colored => vec![SampleFormat::Colored],
            Self::Instance => vec![SampleFormat::Instance],
            Self::Packed => vec![SampleFormat::Packed],
        }
    }
}

/// Print the attribute calls derived for the bundled vertex formats.
#[derive(Parser, Debug)]
#[command(name = "layout_inspect", version)]
struct Args {
    /// Sample format to inspect.
    #[arg(long, default_value = "all", value_enum)]
    format: CliFormat,

    /// Log every emitted call at debug level.
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    log::info!("attribind demos v{}", attribind_demos::VERSION);

    let mut backend = RecordingBackend::new();
    let mut failed = false;
    for format in args.format.formats() {
        if let Err(e) = inspect(format, &mut backend) {
            log::error!("{format}: {e}");
            backend.clear();
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn inspect(
    format: SampleFormat,
    backend: &mut RecordingBackend,
) -> attribind_core::LayoutResult<()> {
    let bytes = format.bind(backend)?;

    println!("{format} ({}, {bytes} bytes uploaded)", format.shape());
    for call in backend.take_calls() {
        match call {
            BackendCall::SetAttributePointer(d) => println!(
                "  pointer  location={} components={} type={} ({}) normalized={} stride={} bytes={}..{}",
                d.location,
                d.components,
                d.element_type,
                if d.element_type.is_integer() { "integer" } else { "float" },
                d.normalized,
                d.stride,
                d.offset,
                d.end_offset()
            ),
            BackendCall::EnableAttribute(location) => {
                println!("  enable   location={location}")
            }
            BackendCall::SetAttributeDivisor { location, divisor } => {
                println!("  divisor  location={location} divisor={divisor}")
            }
        }
    }
    Ok(())
}
