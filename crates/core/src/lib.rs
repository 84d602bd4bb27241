//! Core units, constants, and shared primitives for the NEO impact calculator workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Energy released by one megaton of TNT (J).
    pub const JOULES_PER_MEGATON: f64 = 4.184e15;
    /// Metres per kilometre.
    pub const METERS_PER_KM: f64 = 1_000.0;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::METERS_PER_KM;

    /// Convert kilometres per second to metres per second.
    #[inline]
    pub fn kms_to_ms(v: f64) -> f64 {
        v * METERS_PER_KM
    }
}

/// Solid geometry for the spherical body model.
pub mod geometry {
    use std::f64::consts::PI;

    /// Mass of a homogeneous sphere.
    ///
    /// Evaluated left to right as `density * (4/3) * π * r³`.
    #[inline]
    pub fn sphere_mass(density_kg_m3: f64, radius_m: f64) -> f64 {
        density_kg_m3 * (4.0 / 3.0) * PI * radius_m.powf(3.0)
    }

    /// Kinetic energy `½ m v²` in joules.
    #[inline]
    pub fn kinetic_energy(mass_kg: f64, velocity_m_s: f64) -> f64 {
        0.5 * mass_kg * velocity_m_s.powf(2.0)
    }
}
