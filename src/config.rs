use std::path::PathBuf;
use clap::Parser;
use crate::carousel::CarouselTiming;
use crate::constants::*;

/// Birthday greeting with a photo carousel and confetti.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Directory holding the photos, shown in file name order
    pub photo_dir: PathBuf,

    /// Whose birthday it is
    #[arg(long, default_value = DEFAULT_NAME)]
    pub name: String,

    /// Wish shown under the title
    #[arg(long, default_value = DEFAULT_MESSAGE)]
    pub message: String,

    /// Page opened by the donation button
    #[arg(long, default_value = DEFAULT_DONATION_URL)]
    pub donation_url: String,

    /// How long the confetti lasts after startup (seconds)
    #[arg(long, default_value_t = CELEBRATION_DURATION)]
    pub celebration_secs: f32,

    /// Time between automatic photo changes (seconds)
    #[arg(long, default_value_t = AUTOPLAY_PERIOD)]
    pub autoplay_secs: f32,

    /// Encode the rendered frames to this video file through ffmpeg
    #[arg(long)]
    pub record: Option<PathBuf>,

    /// Quit after this many seconds
    #[arg(long)]
    pub duration: Option<f32>,
}

impl Args {
    pub fn timing(&self) -> CarouselTiming {
        CarouselTiming {
            celebration: self.celebration_secs,
            autoplay_period: self.autoplay_secs,
        }
    }

    pub fn donation_label(&self) -> String {
        format!("Buy {} a birthday cake", self.name)
    }
}
