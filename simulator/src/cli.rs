//! Command line options.

use badge_common::Platform;
use badge_common::config::{DEVICE_HEIGHT, DEVICE_WIDTH};
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "simulator", about = "Responsive name badge simulator")]
pub struct Args {
    /// Device width in pixels when held upright.
    #[arg(long, default_value_t = DEVICE_WIDTH)]
    pub width: u32,

    /// Device height in pixels when held upright.
    #[arg(long, default_value_t = DEVICE_HEIGHT)]
    pub height: u32,

    /// Window pixel scale.
    #[arg(long, default_value_t = 2)]
    pub scale: u32,

    /// Platform whose wording and font weights to use.
    #[arg(long, value_enum, default_value_t = PlatformArg::Other)]
    pub platform: PlatformArg,

    /// Make the simulated orientation service refuse every request.
    #[arg(long)]
    pub reject_orientation: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
    Ios,
    Other,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Ios => Self::Ios,
            PlatformArg::Other => Self::Other,
        }
    }
}
