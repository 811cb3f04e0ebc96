use glam::{Vec2, Vec3};

use crate::menu::orchestrator::MenuScene;
use crate::menu::state::Phase;
use crate::renderer::instance::{GlowInstance, LabelInstance, ModelInstance, RenderBuffer, SphereInstance};

use super::background;

/// Build the render buffer for the current menu state.
/// Spheres are ordered background orbs first, then particles; `orb_split` marks the boundary.
pub fn build_render_buffer(menu: &MenuScene, buffer: &mut RenderBuffer) {
    buffer.clear();

    let config = menu.config();
    let state = menu.state();
    let viewport = Vec2::from(config.viewport);

    buffer.camera = state.camera.uniform(viewport);
    buffer.text_alpha = state.text_alpha();
    buffer.selected = state.current as u32;
    buffer.viewport = config.viewport;
    buffer.phase = match state.phase {
        Phase::Intro => 0.0,
        Phase::Idle => 1.0,
    };

    for item in menu.scene().iter() {
        let [r, g, b, a] = item.color.to_f32();
        buffer.push_model(ModelInstance {
            x: item.position.x,
            y: item.position.y,
            z: item.position.z,
            rotation_y: item.rotation.y,
            scale_x: item.scale.x,
            scale_y: item.scale.y,
            scale_z: item.scale.z,
            r,
            g,
            b,
            a,
            model: item.model.0 as f32,
        });
    }

    let orbs = background::push_orbs(state, config, &mut buffer.spheres);
    buffer.set_orb_split(orbs as u32);

    menu.particles().for_each_alive(|p| {
        let [r, g, b, a] = p.color.to_f32();
        buffer.push_sphere(SphereInstance {
            x: p.position.x,
            y: p.position.y,
            z: p.position.z,
            radius: p.size,
            r,
            g,
            b,
            a,
        });
    });

    let labels = &config.labels;
    let progress = state.intro_progress();
    let offset_x = viewport.x - progress * viewport.x;
    for item in menu.scene().iter() {
        let anchor = item.position + Vec3::new(0.0, labels.lift, 0.0);
        let (screen, visible) = match state.camera.world_to_screen(anchor, viewport) {
            Some(screen) => (screen, 1.0),
            None => (Vec2::ZERO, 0.0),
        };
        buffer.push_label(LabelInstance {
            x: screen.x,
            y: screen.y,
            slot: item.slot as f32,
            alpha: buffer.text_alpha,
            highlighted: if item.slot == state.current { 1.0 } else { 0.0 },
            offset_x,
            font_size: labels.font_size,
            visible,
        });
    }

    if state.phase == Phase::Idle {
        buffer.glow = menu
            .scene()
            .get(state.current)
            .and_then(|item| state.camera.world_to_screen(item.position, viewport))
            .map(|screen| GlowInstance {
                x: screen.x,
                y: screen.y,
                radius: labels.glow_radius,
                alpha: labels.glow_alpha * buffer.text_alpha,
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::MenuConfig;
    use crate::input::queue::InputQueue;

    const DT: f32 = 1.0 / 60.0;

    fn idle_menu() -> MenuScene {
        let mut menu = MenuScene::new(MenuConfig::default());
        let input = InputQueue::new();
        while menu.phase() == Phase::Intro {
            menu.update(DT, &input);
        }
        menu
    }

    #[test]
    fn fresh_menu_renders_hidden_items_and_sliding_labels() {
        let menu = MenuScene::new(MenuConfig::default());
        let mut buf = RenderBuffer::new();
        build_render_buffer(&menu, &mut buf);

        assert_eq!(buf.model_count(), 3);
        assert!(buf.models.iter().all(|m| m.a == 0.0 && m.scale_x == 0.0));
        assert_eq!(buf.orb_split, 50);
        assert_eq!(buf.particle_count(), 0);
        assert_eq!(buf.labels.len(), 3);
        assert!(buf.labels.iter().all(|l| l.offset_x == 1280.0 && l.alpha == 0.0));
        assert_eq!(buf.labels[0].highlighted, 1.0);
        assert!(buf.glow.is_none());
        assert_eq!(buf.phase, 0.0);
    }

    #[test]
    fn idle_menu_renders_glow_on_selection() {
        let menu = idle_menu();
        let mut buf = RenderBuffer::new();
        build_render_buffer(&menu, &mut buf);

        assert_eq!(buf.phase, 1.0);
        assert_eq!(buf.text_alpha, 1.0);
        assert!(buf.labels.iter().all(|l| l.offset_x == 0.0 && l.visible == 1.0));

        let glow = buf.glow.expect("glow once idle");
        assert!((glow.alpha - 0.3).abs() < 1e-6);
        assert_eq!(glow.radius, 100.0);
        // The first item sits left of centre.
        assert!(glow.x < 640.0);
        // Labels float above their items.
        assert!(buf.labels[0].y < glow.y);
    }

    #[test]
    fn particles_follow_orbs() {
        let mut menu = idle_menu();
        menu.particles_mut().clear();
        menu.particles_mut().spawn(Vec3::new(1.0, 2.0, 3.0), crate::components::color::Rgba::GOLD, 4);
        let mut buf = RenderBuffer::new();
        build_render_buffer(&menu, &mut buf);

        assert_eq!(buf.particle_count(), 4);
        let first_particle = buf.spheres[buf.orb_split as usize];
        assert_eq!((first_particle.x, first_particle.y, first_particle.z), (1.0, 2.0, 3.0));
        assert_eq!(first_particle.a, 1.0);
    }
}
