//! Mapping from item names to their use effects.

/// Which light source an item provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightSource {
    /// The helmet-mounted headlight.
    Headlight,
    /// A chemical glow stick.
    GlowStick,
}

/// Which flavor of replacement battery an item is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryKind {
    /// 9V batteries, compatible with the headlight.
    NineVolt,
    /// Spare batteries of an unhelpful size.
    Spare,
}

/// What using an item does, before any room or state checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseEffect {
    /// Switches on a light source.
    Light(LightSource),
    /// Pries open the sealed airlock inner door.
    OpenAirlock,
    /// Patches the torn suit, stopping the oxygen leak.
    RepairSuit,
    /// Cuts exposed wiring.
    CutWires,
    /// Cuts through the control room door, given fuel.
    FuelTorch,
    /// Swaps batteries into the dead headlight.
    Batteries(BatteryKind),
    /// Cracking the helmet seal for a snack, with fatal potential.
    FatalSnack,
    /// Emits static.
    RadioStatic,
    /// Nothing happens.
    NoEffect,
}

/// Looks up the effect for an item by name, case-insensitively.
pub fn effect_for(name: &str) -> UseEffect {
    match name.to_lowercase().as_str() {
        "headlight" => UseEffect::Light(LightSource::Headlight),
        "glow stick" => UseEffect::Light(LightSource::GlowStick),
        "crowbar" => UseEffect::OpenAirlock,
        "duct tape" => UseEffect::RepairSuit,
        "wire cutters" => UseEffect::CutWires,
        "blow torch" => UseEffect::FuelTorch,
        "9v batteries" => UseEffect::Batteries(BatteryKind::NineVolt),
        "spare batteries" => UseEffect::Batteries(BatteryKind::Spare),
        "energy bar" => UseEffect::FatalSnack,
        "radio" => UseEffect::RadioStatic,
        _ => UseEffect::NoEffect,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(effect_for("Crowbar"), UseEffect::OpenAirlock);
        assert_eq!(effect_for("DUCT TAPE"), UseEffect::RepairSuit);
        assert_eq!(
            effect_for("9V Batteries"),
            UseEffect::Batteries(BatteryKind::NineVolt)
        );
    }

    #[test]
    fn light_sources_are_distinguished() {
        assert_eq!(effect_for("Headlight"), UseEffect::Light(LightSource::Headlight));
        assert_eq!(effect_for("Glow Stick"), UseEffect::Light(LightSource::GlowStick));
    }

    #[test]
    fn unknown_items_have_no_effect() {
        assert_eq!(effect_for("Star Chart"), UseEffect::NoEffect);
        assert_eq!(effect_for("Pressure Gauge"), UseEffect::NoEffect);
        assert_eq!(effect_for(""), UseEffect::NoEffect);
    }
}
