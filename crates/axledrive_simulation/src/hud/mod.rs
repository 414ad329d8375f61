//! HUD: время симуляции и скорость машины
//!
//! Форматирование — чистые функции, система только пишет строки
//! в `Readout` entity, на которые указывает `Vehicle`.

use bevy::prelude::*;
use bevy_rapier3d::prelude::Velocity;

use crate::components::{Readout, Vehicle};

/// m/s → km/h
pub const MPS_TO_KMH: f32 = 3.6;

/// `MM.SS.ss` — минуты, целые секунды, сотые
///
/// Время сначала округляется до сотых, поэтому 59.996 даёт `01.00.00`,
/// а не `00.60.00`.
pub fn format_elapsed(seconds: f64) -> String {
    let hundredths = (seconds.max(0.0) * 100.0).round() as u64;
    let minutes = hundredths / 6000;
    let rest = hundredths % 6000;
    format!("{:02}.{:02}.{:02}", minutes, rest / 100, rest % 100)
}

/// Продольная скорость в km/h, два знака, со знаком (назад = минус)
pub fn format_speed(forward_mps: f32) -> String {
    let kmh = (forward_mps * MPS_TO_KMH * 100.0).round() / 100.0;
    // −0.00 не показываем
    let kmh = if kmh == 0.0 { 0.0 } else { kmh };
    format!("{:.2} km/h", kmh)
}

/// Проекция мировой скорости на forward машины (локальная −Z)
pub fn local_forward_speed(rotation: Quat, linvel: Vec3) -> f32 {
    (rotation.inverse() * linvel).dot(Vec3::NEG_Z)
}

/// Обновляет time/speed Readout'ы каждого Vehicle
///
/// Время — по physics clock (`Time<Fixed>`), а не с момента spawn машины.
pub fn update_readouts(
    vehicles: Query<(&Vehicle, &Transform, &Velocity)>,
    mut readouts: Query<&mut Readout>,
    time: Res<Time<Fixed>>,
) {
    let elapsed = format_elapsed(time.elapsed_secs_f64());

    for (vehicle, transform, velocity) in vehicles.iter() {
        if let Some(entity) = vehicle.time_display {
            if let Ok(mut readout) = readouts.get_mut(entity) {
                readout.set_if_neq(Readout(elapsed.clone()));
            }
        }

        if let Some(entity) = vehicle.speed_display {
            if let Ok(mut readout) = readouts.get_mut(entity) {
                let speed = local_forward_speed(transform.rotation, velocity.linvel);
                readout.set_if_neq(Readout(format_speed(speed)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_minutes_and_seconds() {
        assert_eq!(format_elapsed(125.4), "02.05.40");
    }

    #[test]
    fn test_elapsed_zero() {
        assert_eq!(format_elapsed(0.0), "00.00.00");
    }

    #[test]
    fn test_elapsed_rounds_into_next_minute() {
        assert_eq!(format_elapsed(59.996), "01.00.00");
    }

    #[test]
    fn test_elapsed_past_99_minutes() {
        // 100 минут 1.5 сек
        assert_eq!(format_elapsed(6001.5), "100.01.50");
    }

    #[test]
    fn test_speed_conversion() {
        assert_eq!(format_speed(10.0), "36.00 km/h");
    }

    #[test]
    fn test_speed_reverse_is_negative() {
        assert_eq!(format_speed(-2.5), "-9.00 km/h");
    }

    #[test]
    fn test_speed_no_negative_zero() {
        assert_eq!(format_speed(-0.0001), "0.00 km/h");
    }

    #[test]
    fn test_forward_speed_in_local_frame() {
        // Машина развёрнута на 90° влево: её forward смотрит в −X
        let rotation = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let speed = local_forward_speed(rotation, Vec3::new(-10.0, 0.0, 0.0));

        assert!((speed - 10.0).abs() < 1e-4, "speed = {speed}");
    }

    #[test]
    fn test_sideways_velocity_is_not_speed() {
        let speed = local_forward_speed(Quat::IDENTITY, Vec3::new(5.0, 0.0, 0.0));
        assert!(speed.abs() < 1e-6);
    }
}
