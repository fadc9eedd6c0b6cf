//! Player input snapshot (host → ECS)
//!
//! Host каждый кадр записывает нажатия (edge: "нажато в этом кадре")
//! и позу камеры. Нажатия сбрасываются в `Last`, чтобы не повторяться,
//! если host пропустил кадр.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone, Copy)]
pub struct PlayerInput {
    pub inventory_pressed: bool,
    pub use_pressed: bool,
    /// Левая кнопка мыши
    pub attack_pressed: bool,
    /// Правая кнопка мыши
    pub taunt_pressed: bool,

    /// Позиция камеры (центр экрана)
    pub view_origin: Vec3,
    /// Forward камеры (не обязательно нормализован)
    pub view_forward: Vec3,
}

impl Default for PlayerInput {
    fn default() -> Self {
        Self {
            inventory_pressed: false,
            use_pressed: false,
            attack_pressed: false,
            taunt_pressed: false,
            view_origin: Vec3::ZERO,
            view_forward: Vec3::NEG_Z,
        }
    }
}

impl PlayerInput {
    pub fn clear_presses(&mut self) {
        self.inventory_pressed = false;
        self.use_pressed = false;
        self.attack_pressed = false;
        self.taunt_pressed = false;
    }
}

/// System: сброс нажатий в конце кадра
pub fn clear_input_presses(mut input: ResMut<PlayerInput>) {
    input.clear_presses();
}
