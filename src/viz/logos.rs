// src/viz/logos.rs
//
// Team logo lookup: `<slug>.{png,jpg,jpeg}` in any of the logo directories.

use std::path::{Path, PathBuf};

use crate::core::sanitize::slugify;

const EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Decoded RGBA pixels, ready to upload as a texture.
pub struct LogoImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Candidate file stems for a team: the folded slug ("kk-sljakeri") and the
/// plain lowercase-dashed name ("kk-šljakeri") when they differ.
fn stems(team: &str) -> Vec<String> {
    let folded = slugify(team);
    let plain = team.trim().to_lowercase().replace(' ', "-");
    if plain == folded { vec![folded] } else { vec![folded, plain] }
}

pub fn logo_path<P: AsRef<Path>>(team: &str, dirs: &[P]) -> Option<PathBuf> {
    let stems = stems(team);
    dirs.iter().find_map(|dir| {
        stems.iter().find_map(|stem| {
            EXTENSIONS
                .iter()
                .map(|ext| dir.as_ref().join(join!(stem, ".", ext)))
                .find(|p| p.is_file())
        })
    })
}

pub fn load_logo(path: &Path) -> Result<LogoImage, image::ImageError> {
    let rgba = image::open(path)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(LogoImage { width, height, rgba: rgba.into_raw() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_folded_and_plain_names() {
        let dir = std::env::temp_dir().join("corn_stats_logo_lookup");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("kk-sljakeri.jpg"), b"x").unwrap();
        std::fs::write(dir.join("ravens-belgrade.png"), b"x").unwrap();

        let dirs = [dir.clone()];
        assert_eq!(logo_path("KK Šljakeri", &dirs), Some(dir.join("kk-sljakeri.jpg")));
        assert_eq!(logo_path("Ravens Belgrade", &dirs), Some(dir.join("ravens-belgrade.png")));
        assert_eq!(logo_path("Fireflies", &dirs), None);
    }
}
