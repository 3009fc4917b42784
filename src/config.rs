use anyhow::{anyhow, Context, Result};

pub const USAGE: &str = "Usage: furnished-room [--summary-only] [--width N] [--height N] [--look-at] [--face-colors]";

/// Command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    /// Print the scene and exit without opening a window.
    pub summary_only: bool,
    pub width: u32,
    pub height: u32,
    /// Start with the look-at camera driving the view.
    pub look_at: bool,
    /// Shade with the mesh's per-face colors instead of instance colors.
    pub face_colors: bool,
    pub help: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            summary_only: false,
            width: 800,
            height: 600,
            look_at: false,
            face_colors: false,
            help: false,
        }
    }
}

impl CliOptions {
    pub fn parse() -> Result<Self> {
        Self::parse_from(std::env::args().skip(1))
    }

    pub fn parse_from<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--summary-only" => options.summary_only = true,
                "--look-at" => options.look_at = true,
                "--face-colors" => options.face_colors = true,
                "--help" | "-h" => options.help = true,
                "--width" => options.width = parse_dimension("--width", args.next())?,
                "--height" => options.height = parse_dimension("--height", args.next())?,
                other => {
                    return Err(anyhow!("Unknown argument: {other}. {USAGE}"));
                }
            }
        }
        Ok(options)
    }
}

fn parse_dimension(flag: &str, value: Option<String>) -> Result<u32> {
    let value = value.ok_or_else(|| anyhow!("{flag} expects a value"))?;
    let parsed = value
        .parse::<u32>()
        .with_context(|| format!("{flag} expects a positive integer, got {value:?}"))?;
    if parsed == 0 {
        return Err(anyhow!("{flag} must be greater than zero"));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_window() {
        let options = CliOptions::parse_from(Vec::<String>::new()).unwrap();
        assert_eq!((options.width, options.height), (800, 600));
        assert!(!options.summary_only);
    }

    #[test]
    fn parses_flags_and_dimensions() {
        let options = CliOptions::parse_from([
            "--summary-only",
            "--width",
            "1024",
            "--height",
            "768",
            "--look-at",
            "--face-colors",
        ])
        .unwrap();
        assert!(options.summary_only && options.look_at && options.face_colors);
        assert_eq!((options.width, options.height), (1024, 768));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(CliOptions::parse_from(["--bogus"]).is_err());
        assert!(CliOptions::parse_from(["--width"]).is_err());
        assert!(CliOptions::parse_from(["--width", "wide"]).is_err());
        assert!(CliOptions::parse_from(["--height", "0"]).is_err());
    }
}
