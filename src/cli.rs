//! Command-line argument parsing.
//!
//! The flag syntax is single-dash and positional (`-ei`, `-e -r dir`), so it
//! is parsed by hand into a [`CompileContextBuilder`].

use glslmass_core::{CompileContextBuilder, SearchPath};

use crate::errors::CliError;

pub const HELP: &str = "\
GLSL to SPIR-V help menu:
----------------------------
-r                  recursive search
-f                  force compilation (ignores cache)
-b <filepath>       set base filepath (defaults to the working directory)
-e <filepath(s)>    exclude filepaths, prefix a path with -r to mark it recursive
-i <filepath(s)>    include filepaths, prefix a path with -r to search it recursively
-ei                 exclusive include, only the include filepaths are searched
-help               show help menu
-version, -v        show version";

const OPTIONS: &[&str] = &["-r", "-f", "-b", "-e", "-i", "-ei", "-help", "-version", "-v"];

#[must_use]
pub fn version_line() -> String {
    format!(
        "GLSL To SPIR-V Mass Compiler: Version {}",
        env!("CARGO_PKG_VERSION")
    )
}

/// Result of a successful parse.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub context: CompileContextBuilder,
    pub show_help: bool,
    pub show_version: bool,
}

fn is_option(arg: &str) -> bool {
    OPTIONS.contains(&arg)
}

/// Parses the arguments following the program name.
pub fn parse_args<I, S>(args: I) -> Result<CliArgs, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    let mut parsed = CliArgs::default();
    let mut ctx = CompileContextBuilder::default();

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        i += 1;

        match arg {
            "-help" => parsed.show_help = true,
            "-version" | "-v" => parsed.show_version = true,
            "-r" => ctx = ctx.recursive(true),
            "-f" => ctx = ctx.force(true),
            "-ei" => ctx = ctx.exclusive_include(true),
            "-b" => {
                let value = args
                    .get(i)
                    .ok_or(CliError::MissingValue { flag: "-b" })?;
                i += 1;
                if ctx.has_base_dir() {
                    log::warn!("Base filepath already set, ignoring '-b {value}'");
                } else {
                    ctx = ctx.base_dir(value);
                }
            }
            "-e" => {
                for path in take_search_paths(&args, &mut i, "-e")? {
                    ctx = ctx.exclude(path);
                }
            }
            "-i" => {
                for path in take_search_paths(&args, &mut i, "-i")? {
                    ctx = ctx.include(path);
                }
            }
            other => log::warn!("Ignoring unknown argument '{other}'"),
        }
    }

    parsed.context = ctx;
    Ok(parsed)
}

/// Consumes the path list following `-e` / `-i`.
///
/// A `-r` directly followed by a path marks that path recursive; a `-r` that
/// is not followed by a path ends the list and is left for the caller.
fn take_search_paths(
    args: &[String],
    i: &mut usize,
    flag: &'static str,
) -> Result<Vec<SearchPath>, CliError> {
    let mut paths = Vec::new();

    while let Some(arg) = args.get(*i) {
        if arg == "-r" {
            match args.get(*i + 1) {
                Some(path) if !is_option(path) => {
                    paths.push(SearchPath::new(path, true));
                    *i += 2;
                }
                _ => break,
            }
        } else if is_option(arg) {
            break;
        } else {
            paths.push(SearchPath::new(arg, false));
            *i += 1;
        }
    }

    if paths.is_empty() {
        return Err(CliError::MissingValue { flag });
    }
    Ok(paths)
}
