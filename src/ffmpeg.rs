use std::path::Path;
use std::process::{Child, ChildStdin, Command, Stdio};
use std::io::Write;
use anyhow::{Context, Result};
use raylib::prelude::*;

/// Encodes rendered frames to a video through an `ffmpeg` child process.
pub struct Ffmpeg {
    process: Child,
    stdin: Option<ChildStdin>,
}

pub fn encoder_args(width: i32, height: i32, fps: u32, video_path: &Path) -> Vec<String> {
    let mut args: Vec<String> = [
        "-loglevel", "error",
        "-y",
        "-f", "rawvideo",
        "-pixel_format", "rgba",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    args.extend([
        "-video_size".to_string(), format!("{}x{}", width, height),
        "-framerate".to_string(), fps.to_string(),
        "-i".to_string(), "-".to_string(),
        "-c:v".to_string(), "libx264".to_string(),
        "-pix_fmt".to_string(), "yuv420p".to_string(),
        video_path.display().to_string(),
    ]);
    args
}

impl Ffmpeg {
    pub fn new(width: i32, height: i32, fps: u32, video_path: &Path) -> Result<Ffmpeg> {
        let mut process = Command::new("ffmpeg")
            .stdin(Stdio::piped())
            .args(encoder_args(width, height, fps, video_path))
            .spawn()
            .context("Failed to start ffmpeg process")?;
        let stdin = process.stdin.take().context("Failed to open ffmpeg stdin")?;
        tracing::info!(path = %video_path.display(), width, height, fps, "recording started");
        Ok(Ffmpeg { process, stdin: Some(stdin) })
    }

    /// Writes one RGBA frame. Raylib images are bottom-up, ffmpeg wants top-down rows.
    pub fn write(&mut self, image: &Image) -> Result<()> {
        let width = image.width().max(0) as usize;
        let height = image.height().max(0) as usize;
        let row_len = width * 4; // 4 bytes per pixel (RGBA)
        // SAFETY: the framebuffer image holds width * height RGBA8 pixels
        let pixels = unsafe { std::slice::from_raw_parts(image.data() as *const u8, row_len * height) };

        let stdin = self.stdin.as_mut().context("ffmpeg stdin already closed")?;
        for row in pixels.chunks_exact(row_len.max(1)).rev() {
            stdin.write_all(row).context("Failed to write to ffmpeg stdin")?;
        }
        Ok(())
    }
}

impl Drop for Ffmpeg {
    fn drop(&mut self) {
        // Closing stdin lets ffmpeg flush and exit
        self.stdin = None;
        match self.process.wait() {
            Ok(status) if status.success() => tracing::info!("recording finished"),
            Ok(status) => tracing::warn!(%status, "ffmpeg exited with an error"),
            Err(e) => tracing::error!("Failed to wait for ffmpeg process: {}", e),
        }
    }
}
