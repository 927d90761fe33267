// src/gui/logos.rs
//
// Team logo textures, loaded on first use and kept for the session.
// A team without a (readable) logo is remembered as None so the lookup
// isn't repeated every frame.

use std::collections::HashMap;
use std::path::PathBuf;

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};

use crate::viz::logos::{load_logo, logo_path};

pub struct LogoCache {
    dirs: Vec<PathBuf>,
    textures: HashMap<String, Option<TextureHandle>>,
}

impl LogoCache {
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs, textures: HashMap::new() }
    }

    pub fn get(&mut self, ctx: &egui::Context, team: &str) -> Option<TextureHandle> {
        if let Some(hit) = self.textures.get(team) {
            return hit.clone();
        }

        let tex = logo_path(team, &self.dirs).and_then(|path| match load_logo(&path) {
            Ok(img) => {
                let color = ColorImage::from_rgba_unmultiplied(
                    [img.width as usize, img.height as usize],
                    &img.rgba,
                );
                logd!("Logos: loaded {}", path.display());
                Some(ctx.load_texture(join!("logo-", team), color, TextureOptions::LINEAR))
            }
            Err(e) => {
                logw!("Logos: can't decode {}: {}", path.display(), e);
                None
            }
        });

        self.textures.insert(s!(team), tex.clone());
        tex
    }
}
