use std::path::PathBuf;
use anyhow::{anyhow, Result};
use clap::Parser;
use raylib::prelude::*;

mod carousel;
mod config;
mod confetti;
mod constants;
mod ffmpeg;
mod logging;
mod page;
mod photo;
mod slide;
mod state;
mod texture_loader;
mod timer;

use crate::carousel::CarouselController;
use crate::config::Args;
use crate::confetti::Confetti;
use crate::constants::*;
use crate::ffmpeg::Ffmpeg;
use crate::page::{poll_actions, Action, Page};
use crate::photo::PhotoDescriptor;
use crate::slide::Slide;
use crate::state::Phase;
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging()?;
    tracing::info!(photo_dir = %args.photo_dir.display(), "loading photos");

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("Happy Birthday!")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Photos ---
    let image_paths = load_sorted_image_paths(&args.photo_dir).unwrap_or_else(|e| {
        tracing::warn!("{:#}", e);
        Vec::new()
    });

    let mut slides: Vec<Slide> = Vec::new();
    let mut loaded_paths: Vec<PathBuf> = Vec::new();
    for path in image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, &path) {
            Ok(texture) => {
                slides.push(Slide::new(texture));
                loaded_paths.push(path);
            }
            Err(e) => tracing::warn!("Skipping photo: {:#}", e),
        }
    }
    let photos = PhotoDescriptor::from_paths(loaded_paths, &args.name);
    let mut carousel = CarouselController::new(photos, args.timing());
    tracing::info!(photos = carousel.photos().len(), "photos ready");
    let mut confetti = Confetti::new();
    let mut page = Page::new(args.name.clone(), args.message.clone());
    let donation_label = args.donation_label();

    let mut recorder = args
        .record
        .as_deref()
        .map(|path| Ffmpeg::new(RENDER_WIDTH, RENDER_HEIGHT, FPS, path))
        .transpose()?;

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow!("Failed to create render texture: {}", e))?;

    let mut elapsed = 0.0;

    // --- Main Loop ---
    while !rl.window_should_close() {
        // Recordings use a fixed step so the video timing does not depend on the display
        let dt = if recorder.is_some() { FRAME_TIME } else { rl.get_frame_time() };

        // --- Input ---
        for action in poll_actions(&rl, &page.layout) {
            match action {
                Action::ToggleAutoplay => carousel.toggle_autoplay(),
                Action::Next => carousel.advance(),
                Action::Previous => carousel.previous(),
                Action::OpenDonation => {
                    tracing::info!(url = %args.donation_url, "opening donation page");
                    open_url(&args.donation_url);
                }
            }
        }

        // --- Update Logic ---
        carousel.update(dt);
        let view = carousel.view();
        confetti.update(dt, view.is_some_and(|v| v.celebrating));
        page.update(dt, view.as_ref());

        // --- Render each frame into fixed size "framebuffer" ---
        rl.draw_texture_mode(&thread, &mut framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(&thread);
            d.clear_background(Color::BLACK);
            page.draw(&mut d, view.as_ref(), &slides, &confetti, &donation_label);
        });

        // Draw the flipped framebuffer stretched over the window
        {
            let mut d2 = rl.begin_drawing(&thread);
            let sw = d2.get_screen_width() as f32;
            let sh = d2.get_screen_height() as f32;
            d2.draw_texture_pro(
                &framebuffer,
                Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
                Rectangle::new(0.0, 0.0, sw, sh),
                Vector2::new(0.0, 0.0),
                0.0,
                Color::WHITE,
            );
        }

        if let Some(recorder) = recorder.as_mut() {
            let image = framebuffer
                .load_image()
                .map_err(|e| anyhow!("Failed to load image from framebuffer: {}", e))?;
            recorder.write(&image)?;
        }

        // The first frame is the static placeholder, the page turns interactive after it
        if carousel.phase() == Phase::Uninitialized {
            carousel.initialize();
        }

        elapsed += dt;
        if args.duration.is_some_and(|limit| elapsed >= limit) {
            tracing::info!(elapsed, "duration reached");
            break;
        }
    }

    carousel.teardown();
    // Closes the ffmpeg pipe and waits for the encoder
    drop(recorder);
    Ok(())
}
