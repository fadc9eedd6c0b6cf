//! HUD / cursor state (ECS → host UI)

use bevy::prelude::*;

/// Состояние курсора мыши
///
/// FPS режим: скрыт и захвачен. Inventory / game over: виден и свободен.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    pub visible: bool,
    pub locked: bool,
}

impl Default for CursorState {
    fn default() -> Self {
        Self::free()
    }
}

impl CursorState {
    pub fn captured() -> Self {
        Self {
            visible: false,
            locked: true,
        }
    }

    pub fn free() -> Self {
        Self {
            visible: true,
            locked: false,
        }
    }
}

/// Видимость HUD игрока
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudState {
    pub visible: bool,
}

impl Default for HudState {
    fn default() -> Self {
        Self { visible: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenFadeType {
    FadeIn,
    FadeOut,
}

/// Event: затемнение/проявление экрана
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ScreenFade {
    pub duration: f32,
    pub fade_type: ScreenFadeType,
}
