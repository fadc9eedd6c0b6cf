//! Attenuation curves (keyframe-based)
//!
//! Кривая = отсортированные keyframes `(time, value, in_tangent, out_tangent)`.
//! Между соседними keys cubic Hermite, за пределами clamp к крайнему key.
//!
//! Используется оружием для ослабления урона/силы по нормализованной дистанции [0, 1].

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Один keyframe кривой
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
    /// Наклон слева от key
    #[serde(default)]
    pub in_tangent: f32,
    /// Наклон справа от key
    #[serde(default)]
    pub out_tangent: f32,
}

impl Keyframe {
    pub fn new(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            in_tangent: 0.0,
            out_tangent: 0.0,
        }
    }

    pub fn with_tangents(time: f32, value: f32, in_tangent: f32, out_tangent: f32) -> Self {
        Self {
            time,
            value,
            in_tangent,
            out_tangent,
        }
    }
}

/// Кривая ослабления эффекта по дистанции
///
/// Инвариант: keys отсортированы по `time`.
/// Пустая кривая всегда даёт 0.0, кривая из одного key: константа.
#[derive(Debug, Clone, Default, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(from = "Vec<Keyframe>", into = "Vec<Keyframe>")]
pub struct AttenuationCurve {
    keys: Vec<Keyframe>,
}

impl From<Vec<Keyframe>> for AttenuationCurve {
    fn from(keys: Vec<Keyframe>) -> Self {
        Self::new(keys)
    }
}

impl From<AttenuationCurve> for Vec<Keyframe> {
    fn from(curve: AttenuationCurve) -> Self {
        curve.keys
    }
}

impl AttenuationCurve {
    pub fn new(mut keys: Vec<Keyframe>) -> Self {
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { keys }
    }

    /// Константный множитель на всей дистанции
    pub fn constant(value: f32) -> Self {
        Self::new(vec![Keyframe::new(0.0, value), Keyframe::new(1.0, value)])
    }

    /// Прямая от `start` (t=0) до `end` (t=1)
    pub fn linear(start: f32, end: f32) -> Self {
        let slope = end - start;
        Self::new(vec![
            Keyframe::with_tangents(0.0, start, slope, slope),
            Keyframe::with_tangents(1.0, end, slope, slope),
        ])
    }

    /// S-образная кривая с нулевыми наклонами на концах
    pub fn ease_in_out(start: f32, end: f32) -> Self {
        Self::new(vec![Keyframe::new(0.0, start), Keyframe::new(1.0, end)])
    }

    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Значение кривой в точке `t`
    pub fn evaluate(&self, t: f32) -> f32 {
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            return 0.0;
        };

        if t.is_nan() || t <= first.time {
            return first.value;
        }
        if t >= last.time {
            return last.value;
        }

        // first.time < t < last.time → segment гарантированно есть
        let upper = self.keys.partition_point(|k| k.time <= t);
        let k0 = &self.keys[upper - 1];
        let k1 = &self.keys[upper];

        hermite(k0, k1, t)
    }
}

fn hermite(k0: &Keyframe, k1: &Keyframe, t: f32) -> f32 {
    let dt = k1.time - k0.time;
    if dt <= f32::EPSILON {
        return k0.value;
    }

    // Бесконечный tangent = ступенька
    if !k0.out_tangent.is_finite() || !k1.in_tangent.is_finite() {
        return k0.value;
    }

    let s = (t - k0.time) / dt;
    let s2 = s * s;
    let s3 = s2 * s;

    let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
    let h10 = s3 - 2.0 * s2 + s;
    let h01 = -2.0 * s3 + 3.0 * s2;
    let h11 = s3 - s2;

    h00 * k0.value + h10 * dt * k0.out_tangent + h01 * k1.value + h11 * dt * k1.in_tangent
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_empty_curve_is_zero() {
        let curve = AttenuationCurve::default();
        assert_eq!(curve.evaluate(0.0), 0.0);
        assert_eq!(curve.evaluate(0.7), 0.0);
    }

    #[test]
    fn test_single_key_is_constant() {
        let curve = AttenuationCurve::new(vec![Keyframe::new(0.5, 0.8)]);
        assert_eq!(curve.evaluate(0.0), 0.8);
        assert_eq!(curve.evaluate(0.5), 0.8);
        assert_eq!(curve.evaluate(1.0), 0.8);
    }

    #[test]
    fn test_linear_curve() {
        let curve = AttenuationCurve::linear(1.0, 0.0);
        assert!((curve.evaluate(0.25) - 0.75).abs() < EPS);
        assert!((curve.evaluate(0.5) - 0.5).abs() < EPS);
        assert!((curve.evaluate(0.9) - 0.1).abs() < EPS);
    }

    #[test]
    fn test_clamped_outside_keys() {
        let curve = AttenuationCurve::linear(1.0, 0.2);
        assert_eq!(curve.evaluate(-3.0), 1.0);
        assert_eq!(curve.evaluate(5.0), 0.2);
        assert_eq!(curve.evaluate(f32::NAN), 1.0);
    }

    #[test]
    fn test_ease_in_out_midpoint() {
        let curve = AttenuationCurve::ease_in_out(1.0, 0.0);
        assert!((curve.evaluate(0.5) - 0.5).abs() < EPS);
        // Пологие концы: у начала почти без падения
        assert!(curve.evaluate(0.05) > 0.99);
    }

    #[test]
    fn test_keys_sorted_on_construction() {
        let curve = AttenuationCurve::new(vec![
            Keyframe::new(1.0, 0.0),
            Keyframe::new(0.0, 1.0),
            Keyframe::new(0.5, 0.5),
        ]);
        let times: Vec<f32> = curve.keys().iter().map(|k| k.time).collect();
        assert_eq!(times, vec![0.0, 0.5, 1.0]);
        assert_eq!(curve.evaluate(0.5), 0.5);
    }

    #[test]
    fn test_infinite_tangent_steps() {
        let curve = AttenuationCurve::new(vec![
            Keyframe::with_tangents(0.0, 1.0, 0.0, f32::INFINITY),
            Keyframe::new(1.0, 0.0),
        ]);
        assert_eq!(curve.evaluate(0.6), 1.0);
    }
}
