//! Build script for badge-simulator.
//!
//! On Windows, links against an SDL2 found in `SDL2_DIR` or `vendor/sdl2`
//! and copies `SDL2.dll` next to the simulator binary.

use std::path::{Path, PathBuf};
use std::{env, fs};

fn main() {
    println!("cargo:rerun-if-env-changed=SDL2_DIR");
    if env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() != "windows" {
        return;
    }

    let Some(sdl2_dir) = sdl2_dir() else {
        println!("cargo:warning=SDL2 not found; set SDL2_DIR or place SDL2.lib and SDL2.dll in vendor/sdl2/");
        return;
    };
    println!("cargo:rerun-if-changed={}", sdl2_dir.display());
    println!("cargo:rustc-link-search=native={}", sdl2_dir.display());

    // OUT_DIR is target/<profile>/build/badge-simulator-*/out
    let target_dir = env::var("OUT_DIR").ok().and_then(|out| profile_dir(Path::new(&out)));
    let dll = sdl2_dir.join("SDL2.dll");
    if let Some(target_dir) = target_dir
        && dll.exists()
    {
        let dest = target_dir.join("SDL2.dll");
        if !dest.exists()
            && let Err(e) = fs::copy(&dll, &dest)
        {
            println!("cargo:warning=Failed to copy SDL2.dll: {e}");
        }
    }
}

fn sdl2_dir() -> Option<PathBuf> {
    if let Ok(dir) = env::var("SDL2_DIR") {
        return Some(PathBuf::from(dir));
    }
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").ok()?);
    let vendored = manifest_dir.parent()?.join("vendor").join("sdl2");
    vendored.exists().then_some(vendored)
}

fn profile_dir(out_dir: &Path) -> Option<PathBuf> {
    out_dir
        .ancestors()
        .find(|p| p.file_name().is_some_and(|n| n == "release" || n == "debug"))
        .map(Path::to_path_buf)
}
