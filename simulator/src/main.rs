//! Name badge simulator for desktop platforms.
//!
//! Runs the badge on a simulated phone using the embedded-graphics-simulator
//! crate. The window is square so the phone can turn inside it without the
//! host window being resized.
//!
//! # Controls
//!
//! | Input        | Action                                  |
//! |--------------|-----------------------------------------|
//! | Click        | Tap the badge (icons, text color button)|
//! | `R`          | Turn the phone a quarter turn           |
//! | `O` / Space  | Rotate icon                             |
//! | `P`          | Palette icon                            |
//! | `T`          | Change text color                       |
//! | `D`          | Toggle the diagnostic log overlay       |
//! | `Esc`        | Quit                                    |

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod cli;
mod device;
mod timing;

use std::thread;
use std::time::Instant;

use badge_common::colors::{CANVAS_BG, GRAY_666};
use badge_common::palette::BADGE_PALETTE;
use badge_common::widgets::{BadgeScene, draw_badge, draw_log_overlay};
use badge_common::{BadgeAction, DebugLog, DisplayStateController, Platform, Viewport};
use clap::Parser;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, Rectangle, StrokeAlignment};
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

use crate::cli::Args;
use crate::device::SimulatedDevice;
use crate::timing::{Clock, FRAME_TIME};

/// Space between the phone screen and the window edge.
const CANVAS_MARGIN: u32 = 12;

/// Phone bezel thickness around the screen.
const BEZEL: u32 = 4;

/// Height of the log overlay at the bottom of the screen.
const LOG_OVERLAY_HEIGHT: u32 = 84;

fn main() {
    let args = Args::parse();
    let platform = Platform::from(args.platform);

    let device = SimulatedDevice::new(args.width, args.height, args.reject_orientation);
    let Some(initial) = device.viewport() else {
        eprintln!("invalid device size {}x{}", args.width, args.height);
        return;
    };

    let side = device.long_side() + 2 * (CANVAS_MARGIN + BEZEL);
    let canvas = Rectangle::new(Point::zero(), Size::new(side, side));
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(canvas.size);
    let output_settings = OutputSettingsBuilder::new().scale(args.scale.max(1)).build();
    let mut window = Window::new("Name Badge Sim", &output_settings);

    display.clear(CANVAS_BG).ok();
    window.update(&display);

    let mut controller = DisplayStateController::new(device, initial);
    controller.activate();

    let bezel_style = PrimitiveStyleBuilder::new()
        .stroke_color(GRAY_666)
        .stroke_width(BEZEL)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();

    let clock = Clock::start();
    let mut show_log = false;
    let mut reported = controller.service().viewport_size();
    let mut printed = 0u32;

    'running: loop {
        let frame_start = Instant::now();
        let now_ms = clock.now_ms();
        let screen = screen_rect(canvas, controller.viewport());

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Escape => break 'running,
                        Keycode::R => controller.service_mut().rotate_physical(),
                        Keycode::O | Keycode::Space => controller.dispatch(BadgeAction::RequestRotation),
                        Keycode::P => controller.dispatch(BadgeAction::CycleBadgeColor),
                        Keycode::T => controller.dispatch(BadgeAction::CycleTextColor),
                        Keycode::D => show_log = !show_log,
                        _ => {}
                    }
                }
                SimulatorEvent::MouseButtonUp { point, .. } => {
                    let layout = BadgeScene::capture(&controller, now_ms, platform, &BADGE_PALETTE).layout;
                    if let Some(action) = layout.hit_test(point - screen.top_left) {
                        controller.dispatch(action);
                    }
                }
                _ => {}
            }
        }

        // Report the device's viewport the way a host window reports a resize
        let size = controller.service().viewport_size();
        if size != reported {
            reported = size;
            controller.on_viewport_changed(size.0 as f32, size.1 as f32, now_ms);
        }
        controller.tick(now_ms);

        let scene = BadgeScene::capture(&controller, now_ms, platform, &BADGE_PALETTE);
        let screen = screen_rect(canvas, scene.viewport);

        display.clear(CANVAS_BG).ok();
        screen
            .offset(BEZEL as i32)
            .into_styled(bezel_style)
            .draw(&mut display)
            .ok();
        draw_badge(&mut display.cropped(&screen), &scene);

        if show_log {
            let height = LOG_OVERLAY_HEIGHT.min(screen.size.height);
            let area = Rectangle::new(
                Point::new(0, (screen.size.height - height) as i32),
                Size::new(screen.size.width, height),
            );
            draw_log_overlay(&mut display.cropped(&screen), controller.log(), area, scene.badge_color);
        }

        window.update(&display);
        mirror_log(controller.log(), &mut printed);

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }

    controller.deactivate();
    mirror_log(controller.log(), &mut printed);
}

/// Print log lines pushed since the last call to the terminal.
fn mirror_log(
    log: &DebugLog,
    printed: &mut u32,
) {
    for line in log.since(*printed) {
        println!("[badge] {line}");
    }
    *printed = log.sequence();
}

/// Phone screen centered in the canvas.
fn screen_rect(
    canvas: Rectangle,
    viewport: Viewport,
) -> Rectangle {
    let (w, h) = viewport.rounded();
    Rectangle::with_center(canvas.center(), Size::new(w, h))
}
