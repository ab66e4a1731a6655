use anyhow::{bail, Context, Result};
use dotmatrix_gb::{GameBoy, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Headless harness: run a ROM for a number of frames and dump the final
/// framebuffer as raw RGB24.
fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(rom_path), Some(out_path)) = (args.next(), args.next()) else {
        bail!("usage: frame_dump <rom_path> <out_rgb24_path> [frames]");
    };
    let frames: u32 = args
        .next()
        .as_deref()
        .unwrap_or("120")
        .parse()
        .context("invalid frame count")?;

    let rom = std::fs::read(&rom_path).with_context(|| format!("failed to read ROM '{rom_path}'"))?;

    let mut gb = GameBoy::new();
    gb.load_rom(&rom)
        .with_context(|| format!("failed to load '{rom_path}'"))?;

    for frame in 0..frames {
        gb.step_frame()
            .with_context(|| format!("emulation fault in frame {frame}"))?;
    }

    let mut buffer = vec![0u8; SCREEN_WIDTH * SCREEN_HEIGHT * 3];
    gb.video_frame(&mut buffer);
    std::fs::write(&out_path, &buffer).with_context(|| format!("failed to write '{out_path}'"))?;

    println!(
        "wrote {} bytes ({SCREEN_WIDTH}x{SCREEN_HEIGHT} rgb24) after {frames} frames to '{out_path}'",
        buffer.len(),
    );
    Ok(())
}
