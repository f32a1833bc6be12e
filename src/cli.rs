use crate::error::{Result, ScorerError};
use crate::types::profile::Attributes;
use clap::{Args, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "web3-privacy-scorer",
    version,
    about = "Toy privacy/soundness score for Web3-style projects, inspired by ecosystems like Aztec, Zama, and soundness-focused research labs"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// List built-in example profiles
    #[arg(long)]
    pub list_profiles: bool,

    /// Use a built-in profile (aztec, zama, soundness)
    #[arg(long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Define a custom project profile using flags
    #[arg(long)]
    pub custom: bool,

    #[command(flatten)]
    pub custom_args: CustomArgs,

    /// Print the result as a JSON object instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct CustomArgs {
    /// Name of the custom project
    #[arg(long)]
    pub name: Option<String>,

    /// Description of the custom project
    #[arg(long)]
    pub description: Option<String>,

    /// Project uses zero-knowledge proofs
    #[arg(long)]
    pub zk: bool,

    /// Project uses fully homomorphic encryption
    #[arg(long)]
    pub fhe: bool,

    /// Project is open source
    #[arg(long)]
    pub open_source: bool,

    /// Project has external audits
    #[arg(long)]
    pub audited: bool,

    /// Strong focus on formal soundness and verification
    #[arg(long)]
    pub soundness: bool,
}

impl CustomArgs {
    pub fn attributes(&self) -> Attributes {
        Attributes {
            uses_zk: self.zk,
            uses_fhe: self.fhe,
            open_source: self.open_source,
            audited: self.audited,
            soundness_focus: self.soundness,
        }
    }

    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.attributes() == Attributes::default()
    }
}

/// What a single invocation asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Mode<'a> {
    List,
    Builtin(&'a str),
    Custom(&'a CustomArgs),
}

impl Cli {
    pub fn mode(&self) -> Result<Mode<'_>> {
        if self.list_profiles {
            return Ok(Mode::List);
        }
        match (self.profile.as_deref(), self.custom) {
            (Some(_), true) => Err(ScorerError::ConflictingMode(
                "--profile and --custom cannot be used together".to_string(),
            )),
            (Some(_), false) if !self.custom_args.is_empty() => {
                Err(ScorerError::ConflictingMode(
                    "custom profile flags require --custom, not --profile".to_string(),
                ))
            }
            (Some(name), false) => Ok(Mode::Builtin(name)),
            (None, true) => Ok(Mode::Custom(&self.custom_args)),
            (None, false) => Err(ScorerError::ConflictingMode(
                "one of --profile, --custom or --list-profiles is required".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("web3-privacy-scorer").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn list_profiles_wins() {
        let cli = parse(&["--list-profiles", "--profile", "aztec"]);
        assert_eq!(cli.mode().expect("list mode"), Mode::List);
    }

    #[test]
    fn profile_selects_builtin() {
        let cli = parse(&["--profile", "zama", "--json"]);
        assert_eq!(cli.mode().expect("builtin mode"), Mode::Builtin("zama"));
        assert!(cli.json);
    }

    #[test]
    fn custom_collects_attribute_switches() {
        let cli = parse(&["--custom", "--name", "MyZkApp", "--zk", "--audited"]);
        let Mode::Custom(args) = cli.mode().expect("custom mode") else {
            panic!("expected custom mode");
        };
        assert_eq!(args.name.as_deref(), Some("MyZkApp"));
        assert_eq!(
            args.attributes(),
            Attributes {
                uses_zk: true,
                audited: true,
                ..Attributes::default()
            }
        );
    }

    #[test]
    fn profile_and_custom_conflict() {
        let cli = parse(&["--profile", "aztec", "--custom", "--name", "x"]);
        assert!(matches!(cli.mode(), Err(ScorerError::ConflictingMode(_))));
    }

    #[test]
    fn profile_with_custom_flags_conflicts() {
        let cli = parse(&["--profile", "aztec", "--fhe"]);
        assert!(matches!(cli.mode(), Err(ScorerError::ConflictingMode(_))));
    }

    #[test]
    fn missing_mode_is_rejected() {
        let cli = parse(&["--zk", "--name", "orphan"]);
        assert!(matches!(cli.mode(), Err(ScorerError::ConflictingMode(_))));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["web3-privacy-scorer", "-q", "-v", "--list-profiles"]);
        assert!(result.is_err());
    }
}
