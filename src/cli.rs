//! Command line definition.

use crate::config::{self, ServerConfig};
use crate::error::CalcError;
use crate::models::AddressInput;
use clap::{Parser, Subcommand};

const BANNER: &str = r"    _____       _                _            _
   / ____|     | |              | |          | |
  | (___  _   _| |__  _ __   ___| |_ ___ __ _| | ___
   \___ \| | | | '_ \| '_ \ / _ \ __/ __/ _\ | |/ __|
   ____) | |_| | |_) | | | |  __/ || (_| (_| | | (__
  |_____/ \__,_|_.__/|_| |_|\___|\__\___\__,_|_|\___|";

/// A small utility to calculate subnet mask and related information
#[derive(Parser, Debug)]
#[command(name = "subnetcalc")]
#[command(version, about, long_about = BANNER)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// IPv4 address with prefix, e.g. 192.168.1.10/24
    #[arg(short = '4', long)]
    pub ipv4: Option<String>,

    /// IPv6 address with prefix, e.g. 2001:db8::1/32
    #[arg(short = '6', long)]
    pub ipv6: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start web server to serve the HTML UI
    Web {
        /// Set port number
        #[arg(short, long, default_value = config::DEFAULT_PORT)]
        port: String,

        /// Set server address
        #[arg(short, long, default_value = config::DEFAULT_SERVER)]
        server: String,

        /// Directory holding layout.html
        #[arg(long, default_value = config::DEFAULT_TEMPLATE_DIR)]
        templates: String,
    },
}

impl Cli {
    /// The single address the user asked about.
    pub fn input(&self) -> Result<AddressInput, CalcError> {
        match (&self.ipv4, &self.ipv6) {
            (Some(_), Some(_)) => Err(CalcError::ConflictingInput),
            (Some(v4), None) => Ok(AddressInput::V4(v4.trim().to_string())),
            (None, Some(v6)) => Ok(AddressInput::V6(v6.trim().to_string())),
            (None, None) => Err(CalcError::MissingInput),
        }
    }
}

impl Commands {
    pub fn server_config(&self) -> ServerConfig {
        match self {
            Commands::Web {
                port,
                server,
                templates,
            } => ServerConfig::from_flags(server, port, templates),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_flag() {
        let cli = Cli::try_parse_from(["subnetcalc", "-4", "10.0.0.1/8"]).unwrap();
        assert_eq!(cli.input(), Ok(AddressInput::V4("10.0.0.1/8".to_string())));

        let cli = Cli::try_parse_from(["subnetcalc", "--ipv4", "10.0.0.1/8"]).unwrap();
        assert_eq!(cli.input(), Ok(AddressInput::V4("10.0.0.1/8".to_string())));
    }

    #[test]
    fn test_ipv6_flag() {
        let cli = Cli::try_parse_from(["subnetcalc", "-6", "2001:db8::1/32"]).unwrap();
        assert_eq!(
            cli.input(),
            Ok(AddressInput::V6("2001:db8::1/32".to_string()))
        );
    }

    #[test]
    fn test_both_flags_conflict() {
        let cli =
            Cli::try_parse_from(["subnetcalc", "-4", "10.0.0.1/8", "-6", "::1/64"]).unwrap();
        let err = cli.input().unwrap_err();
        assert_eq!(err, CalcError::ConflictingInput);
        assert_eq!(err.to_string(), "only one IP address can be specified");
    }

    #[test]
    fn test_no_flags_missing() {
        let cli = Cli::try_parse_from(["subnetcalc"]).unwrap();
        assert_eq!(cli.input(), Err(CalcError::MissingInput));
    }

    #[test]
    fn test_address_flag_with_web_rejected() {
        assert!(Cli::try_parse_from(["subnetcalc", "-4", "10.0.0.1/8", "web"]).is_err());
        assert!(Cli::try_parse_from(["subnetcalc", "-6", "::1/64", "web", "-p", "8080"]).is_err());
    }

    #[test]
    fn test_banner_in_long_help() {
        use clap::CommandFactory;
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("|_____/"));
    }

    #[test]
    fn test_web_defaults() {
        let cli = Cli::try_parse_from(["subnetcalc", "web", "-p", "8080"]).unwrap();
        match cli.command {
            Some(Commands::Web {
                ref port,
                ref server,
                ref templates,
            }) => {
                assert_eq!(port, "8080");
                assert_eq!(server, config::DEFAULT_SERVER);
                assert_eq!(templates, config::DEFAULT_TEMPLATE_DIR);
            }
            None => panic!("expected web command"),
        }
    }
}
