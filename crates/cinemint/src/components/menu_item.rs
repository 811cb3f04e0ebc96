use glam::Vec3;

use crate::components::color::Rgba;
use crate::components::model::ModelId;
use crate::extensions::easing::{lerp, lerp_color, lerp_vec3};

/// Look of an item in its resting and selected states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStyle {
    pub base_color: Rgba,
    pub highlight_color: Rgba,
    pub hover_scale: f32,
    /// Radians added to the Y rotation target on selection.
    pub selection_spin: f32,
    /// Fraction of the remaining distance closed per [`MenuItem::tick`].
    pub smoothing: f32,
}

impl Default for ItemStyle {
    fn default() -> Self {
        Self {
            base_color: Rgba::DARK_GRAY,
            highlight_color: Rgba::BLUE,
            hover_scale: 1.2,
            selection_spin: 0.5,
            smoothing: 0.1,
        }
    }
}

/// One selectable entry.
///
/// Every animated channel keeps a current value and a target. [`tick`](Self::tick)
/// pulls current toward target by a fixed fraction each step. During the intro,
/// [`animate_intro`](Self::animate_intro) bypasses the smoothing and places the item
/// directly between its `initial_*` and `target_*` values.
#[derive(Debug, Clone)]
pub struct MenuItem {
    /// Position in the menu row, 0-based.
    pub slot: usize,
    pub label: String,
    /// Shared model, owned by the scene.
    pub model: ModelId,

    pub position: Vec3,
    /// Euler angles in radians; only Y is rendered.
    pub rotation: Vec3,
    pub scale: Vec3,
    pub color: Rgba,

    pub initial_position: Vec3,
    pub initial_scale: Vec3,
    pub initial_color: Rgba,

    pub target_position: Vec3,
    pub target_rotation: Vec3,
    pub target_scale: Vec3,
    pub target_color: Rgba,

    selected: bool,
    style: ItemStyle,
}

impl MenuItem {
    /// Create an item that rests at `rest`. It starts `drop_height` below,
    /// at zero scale and fully transparent, ready for the intro.
    pub fn new(
        slot: usize,
        label: impl Into<String>,
        model: ModelId,
        rest: Vec3,
        drop_height: f32,
        style: ItemStyle,
    ) -> Self {
        let initial_position = rest - Vec3::new(0.0, drop_height, 0.0);
        let initial_color = style.base_color.with_alpha(0);
        Self {
            slot,
            label: label.into(),
            model,
            position: initial_position,
            rotation: Vec3::ZERO,
            scale: Vec3::ZERO,
            color: initial_color,
            initial_position,
            initial_scale: Vec3::ZERO,
            initial_color,
            target_position: rest,
            target_rotation: Vec3::ZERO,
            target_scale: Vec3::ONE,
            target_color: style.base_color,
            selected: false,
            style,
        }
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn style(&self) -> &ItemStyle {
        &self.style
    }

    /// Switch between the selected and resting looks.
    ///
    /// Only a change of state does anything: the spin is added once per
    /// false→true transition, so repeated calls cannot stack rotation.
    /// Deselecting restores color and scale; rotation is left to the idle driver.
    pub fn set_selected(&mut self, selected: bool) {
        if self.selected == selected {
            return;
        }
        self.selected = selected;
        if selected {
            self.target_color = self.style.highlight_color;
            self.target_scale = Vec3::splat(self.style.hover_scale);
            self.target_rotation.y += self.style.selection_spin;
        } else {
            self.target_color = self.style.base_color;
            self.target_scale = Vec3::ONE;
        }
    }

    /// One smoothing step on every channel, independently.
    pub fn tick(&mut self) {
        let a = self.style.smoothing;
        self.position = lerp_vec3(self.position, self.target_position, a);
        self.rotation = lerp_vec3(self.rotation, self.target_rotation, a);
        self.scale = lerp_vec3(self.scale, self.target_scale, a);
        self.color = lerp_color(self.color, self.target_color, a);
    }

    /// Place the item at intro `progress` (already clamped to [0, 1] by the caller).
    /// Overrides position, scale and alpha outright; RGB is untouched.
    pub fn animate_intro(&mut self, progress: f32) {
        debug_assert!(
            (0.0..=1.0).contains(&progress),
            "intro progress {} outside [0, 1]",
            progress
        );
        self.position = lerp_vec3(self.initial_position, self.target_position, progress);
        self.scale = lerp_vec3(self.initial_scale, self.target_scale, progress);
        self.color.a = lerp(0.0, 255.0, progress) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> MenuItem {
        MenuItem::new(0, "Option 1", ModelId(0), Vec3::new(-5.0, 0.0, 0.0), 20.0, ItemStyle::default())
    }

    #[test]
    fn starts_below_small_and_transparent() {
        let it = item();
        assert_eq!(it.position, Vec3::new(-5.0, -20.0, 0.0));
        assert_eq!(it.scale, Vec3::ZERO);
        assert_eq!(it.color, Rgba::DARK_GRAY.with_alpha(0));
        assert_eq!(it.target_position, Vec3::new(-5.0, 0.0, 0.0));
        assert_eq!(it.target_scale, Vec3::ONE);
        assert_eq!(it.target_color, Rgba::DARK_GRAY);
        assert!(!it.is_selected());
    }

    #[test]
    fn tick_is_identity_at_target() {
        let mut it = item();
        it.position = it.target_position;
        it.rotation = it.target_rotation;
        it.scale = it.target_scale;
        it.color = it.target_color;
        let before = it.clone();
        it.tick();
        assert_eq!(it.position, before.position);
        assert_eq!(it.rotation, before.rotation);
        assert_eq!(it.scale, before.scale);
        assert_eq!(it.color, before.color);
    }

    #[test]
    fn tick_closes_a_tenth_of_the_gap() {
        let mut it = item();
        it.tick();
        assert!((it.position.y - -18.0).abs() < 1e-5);
        assert!((it.scale.x - 0.1).abs() < 1e-6);
        assert_eq!(it.color.a, 26);
    }

    #[test]
    fn tick_converges_without_snapping() {
        let mut it = item();
        it.tick();
        assert_ne!(it.position, it.target_position);
        for _ in 0..300 {
            it.tick();
        }
        assert!((it.position - it.target_position).length() < 1e-3);
        assert_eq!(it.color, it.target_color);
    }

    #[test]
    fn select_then_deselect_restores_targets() {
        let mut it = item();
        let color = it.target_color;
        let scale = it.target_scale;

        it.set_selected(true);
        assert_eq!(it.target_color, Rgba::BLUE);
        assert_eq!(it.target_scale, Vec3::splat(1.2));

        it.set_selected(false);
        assert_eq!(it.target_color, color);
        assert_eq!(it.target_scale, scale);
    }

    #[test]
    fn repeated_select_adds_spin_once() {
        let mut it = item();
        it.set_selected(true);
        it.set_selected(true);
        it.set_selected(true);
        assert!((it.target_rotation.y - 0.5).abs() < 1e-6);

        it.set_selected(false);
        assert!((it.target_rotation.y - 0.5).abs() < 1e-6, "deselect leaves rotation");
        it.set_selected(true);
        assert!((it.target_rotation.y - 1.0).abs() < 1e-6, "a fresh transition spins again");
    }

    #[test]
    fn intro_interpolates_directly() {
        let mut it = item();
        it.animate_intro(0.5);
        assert_eq!(it.position, Vec3::new(-5.0, -10.0, 0.0));
        assert_eq!(it.scale, Vec3::splat(0.5));
        assert_eq!(it.color.a, 127);
        assert_eq!((it.color.r, it.color.g, it.color.b), (80, 80, 80));

        it.animate_intro(1.0);
        assert_eq!(it.position, it.target_position);
        assert_eq!(it.scale, it.target_scale);
        assert_eq!(it.color.a, 255);
    }

    #[test]
    fn intro_uses_selected_scale_target() {
        let mut it = item();
        it.set_selected(true);
        it.animate_intro(1.0);
        assert_eq!(it.scale, Vec3::splat(1.2));
    }
}
