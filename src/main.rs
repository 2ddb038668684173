use anyhow::Context as _;
use glslmass::cli::{self, HELP};
use glslmass::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match cli::parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            println!("Failed to parse arguments: {e}");
            println!("{HELP}");
            return Ok(());
        }
    };

    if args.show_help {
        println!("{HELP}");
    }
    if args.show_version {
        println!("{}", cli::version_line());
    }

    let ctx = args
        .context
        .build()
        .context("failed to set up compile context")?;
    let config = BuildConfig::load_from_dir(ctx.base_dir())?;

    let compiler = GlslcCompiler::from_config(&config);
    log::info!("Using compiler {}", compiler.program().display());

    let summary = glslmass::compile_all(&ctx, &config, compiler)?;
    println!("{summary}");

    Ok(())
}
