//! Per-pokable draw data
//!
//! One instance per visible pokable: an outer disk in the border color and
//! an inner disk in the fill color, inset by the border thickness.

use bytemuck::{Pod, Zeroable};

use crate::sim::Pokable;

/// Instance data for a bordered disk
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct PokableSprite {
    pub center: [f32; 2],
    pub outer_radius: f32,
    pub inner_radius: f32,
    pub border_color: [f32; 4],
    pub fill_color: [f32; 4],
}

impl PokableSprite {
    /// Build the sprite for a pokable; `None` when it is not drawn
    pub fn from_pokable(pokable: &Pokable, border_thickness: f32) -> Option<Self> {
        if !pokable.is_visible() {
            return None;
        }

        let outer_radius = pokable.visual_radius();
        let pos = pokable.position();
        Some(Self {
            center: [pos.x, pos.y],
            outer_radius,
            inner_radius: (outer_radius - border_thickness).max(0.0),
            border_color: pokable.border_color().to_array(),
            fill_color: pokable.color().to_array(),
        })
    }
}

/// Sprites for every drawable pokable, back to front in spawn order
pub fn pokable_sprites(pokables: &[Pokable], border_thickness: f32) -> Vec<PokableSprite> {
    pokables
        .iter()
        .filter_map(|p| PokableSprite::from_pokable(p, border_thickness))
        .collect()
}
