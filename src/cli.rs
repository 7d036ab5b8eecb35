use crate::decl::{EmitConfig, OutputFormat};
use anyhow::{Result, anyhow};
use std::path::PathBuf;

pub const USAGE: &str = "\
usage: swizzle-typegen [--format <declarations|unions|table>] [--output <path>] [--no-methods]

    --format <shape>   what to print, declarations by default
    --output <path>    write to a file instead of stdout
    --no-methods       emit the Swizzle{L}In{N}Out interfaces only
    --help             print this message";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Cli {
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub no_methods: bool,
    pub help: bool,
}

impl Cli {
    pub fn emit_config(&self) -> EmitConfig {
        if self.no_methods {
            EmitConfig::interfaces_only()
        } else {
            EmitConfig::default()
        }
    }
}

/// Parses arguments, excluding the program name.
pub fn parse_cli(args: &[String]) -> Result<Cli> {
    let mut cli = Cli::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--format" | "-f" => {
                let Some(v) = args.get(i + 1) else {
                    return Err(anyhow!("missing value for --format"));
                };
                cli.format = v.parse::<OutputFormat>()?;
                i += 2;
            }
            "--output" | "-o" => {
                let Some(v) = args.get(i + 1) else {
                    return Err(anyhow!("missing value for --output"));
                };
                cli.output = Some(PathBuf::from(v));
                i += 2;
            }
            "--no-methods" => {
                cli.no_methods = true;
                i += 1;
            }
            "--help" | "-h" => {
                cli.help = true;
                i += 1;
            }
            other => {
                return Err(anyhow!(
                    "unknown argument: {other} (supported: --format <shape>, --output <path>, --no-methods, --help)"
                ));
            }
        }
    }
    Ok(cli)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_cli_defaults() {
        let cli = parse_cli(&[]).unwrap();
        assert_eq!(cli, Cli::default());
        assert_eq!(cli.format, OutputFormat::Declarations);
        assert_eq!(cli.emit_config(), EmitConfig::default());
    }

    #[test]
    fn parse_cli_all_flags() {
        let cli = parse_cli(&args(&["--format", "table", "-o", "out.md", "--no-methods"])).unwrap();
        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.output.as_ref().unwrap(), &PathBuf::from("out.md"));
        assert_eq!(cli.emit_config(), EmitConfig::interfaces_only());
        assert!(!cli.help);
    }

    #[test]
    fn parse_cli_errors() {
        assert!(parse_cli(&args(&["--format"])).is_err());
        assert!(parse_cli(&args(&["--output"])).is_err());
        assert!(parse_cli(&args(&["--format", "json"])).is_err());

        let err = parse_cli(&args(&["--verbose"])).unwrap_err();
        assert!(err.to_string().starts_with("unknown argument: --verbose"));
    }
}
