use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "moons-pad")]
#[command(about = "Userspace driver for 10moons graphics tablets")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// USB vendor id (decimal or 0x-prefixed hex)
    #[arg(long, value_parser = parse_usb_id)]
    pub vendor_id: Option<u16>,

    /// USB product id (decimal or 0x-prefixed hex)
    #[arg(long, value_parser = parse_usb_id)]
    pub product_id: Option<u16>,

    /// Name of the virtual pen device
    #[arg(long)]
    pub name: Option<String>,

    /// Swap the X and Y axes
    #[arg(long)]
    pub swap_axis: bool,

    /// Reverse the axis directions
    #[arg(long)]
    pub swap_directions: bool,

    /// Path to config file
    #[arg(long, env = "MOONS_PAD_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print raw reports and how they are classified
    Dump,
}

pub fn parse_usb_id(s: &str) -> Result<u16, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|_| format!("invalid USB id '{}'", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_usb_id() {
        assert_eq!(parse_usb_id("0x08f2"), Ok(0x08f2));
        assert_eq!(parse_usb_id("0X6811"), Ok(0x6811));
        assert_eq!(parse_usb_id("2290"), Ok(2290));
        assert!(parse_usb_id("0xzz").is_err());
        assert!(parse_usb_id("70000").is_err());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["moons-pad", "--swap-axis", "--vendor-id", "0x1234"]);
        assert!(cli.swap_axis);
        assert!(!cli.swap_directions);
        assert_eq!(cli.vendor_id, Some(0x1234));
        assert!(cli.command.is_none());

        let cli = Cli::parse_from(["moons-pad", "dump"]);
        assert!(matches!(cli.command, Some(Command::Dump)));
    }
}
