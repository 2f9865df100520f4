use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version)]
#[command(about = "Interactive student record manager", long_about = None)]
pub struct Cli {
    /// CSV file loaded at startup (defaults to the configured file, students.csv)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Reject files containing malformed rows instead of loading them best-effort
    #[arg(long)]
    pub strict: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_is_valid() {
        let cli = Cli::try_parse_from(["roster"]).unwrap();
        assert!(cli.file.is_none());
        assert!(!cli.strict);
        assert!(!cli.no_color);
    }

    #[test]
    fn parses_all_flags() {
        let cli =
            Cli::try_parse_from(["roster", "-f", "class.csv", "--strict", "--no-color"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("class.csv")));
        assert!(cli.strict);
        assert!(cli.no_color);
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["roster", "extra"]).is_err());
    }
}
