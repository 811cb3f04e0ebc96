use glam::Vec3;

use crate::components::menu_item::{ItemStyle, MenuItem};
use crate::components::model::{ModelDesc, ModelId};

/// Menu item storage, indexed by slot.
/// Owns the model resource the items render with; items only hold its [`ModelId`].
pub struct Scene {
    items: Vec<MenuItem>,
    model: ModelDesc,
}

impl Scene {
    pub const MODEL: ModelId = ModelId(0);

    pub fn new(model: ModelDesc) -> Self {
        Self {
            items: Vec::with_capacity(8),
            model,
        }
    }

    /// Lay out one item per label in a row centred on the origin, `spacing` apart.
    pub fn with_row(
        model: ModelDesc,
        labels: &[String],
        spacing: f32,
        drop_height: f32,
        style: ItemStyle,
    ) -> Self {
        let mut scene = Self::new(model);
        let start_x = -((labels.len().saturating_sub(1)) as f32 * spacing) / 2.0;
        for (slot, label) in labels.iter().enumerate() {
            let rest = Vec3::new(start_x + slot as f32 * spacing, 0.0, 0.0);
            scene.spawn(MenuItem::new(slot, label.as_str(), Self::MODEL, rest, drop_height, style));
        }
        scene
    }

    /// Append an item. Its slot must equal the current item count.
    pub fn spawn(&mut self, item: MenuItem) {
        assert_eq!(item.slot, self.items.len(), "items must be added in slot order");
        self.items.push(item);
    }

    pub fn get(&self, slot: usize) -> Option<&MenuItem> {
        self.items.get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut MenuItem> {
        self.items.get_mut(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut MenuItem> {
        self.items.iter_mut()
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [MenuItem] {
        &mut self.items
    }

    pub fn find_by_label(&self, label: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.label == label)
    }

    /// The model every item shares.
    pub fn model(&self) -> &ModelDesc {
        &self.model
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Option {}", i)).collect()
    }

    #[test]
    fn row_is_centred() {
        let scene = Scene::with_row(ModelDesc::default(), &labels(3), 5.0, 20.0, ItemStyle::default());
        let xs: Vec<f32> = scene.iter().map(|i| i.target_position.x).collect();
        assert_eq!(xs, vec![-5.0, 0.0, 5.0]);
        assert!(scene.iter().all(|i| i.model == Scene::MODEL));
    }

    #[test]
    fn single_item_sits_at_origin() {
        let scene = Scene::with_row(ModelDesc::default(), &labels(1), 5.0, 20.0, ItemStyle::default());
        assert_eq!(scene.get(0).unwrap().target_position, Vec3::ZERO);
    }

    #[test]
    fn find_by_label() {
        let scene = Scene::with_row(ModelDesc::default(), &labels(3), 5.0, 20.0, ItemStyle::default());
        assert_eq!(scene.find_by_label("Option 2").unwrap().slot, 1);
        assert!(scene.find_by_label("Missing").is_none());
    }

    #[test]
    #[should_panic(expected = "slot order")]
    fn spawn_rejects_out_of_order_slot() {
        let mut scene = Scene::new(ModelDesc::default());
        scene.spawn(MenuItem::new(1, "B", Scene::MODEL, Vec3::ZERO, 0.0, ItemStyle::default()));
    }
}
