//! Skill Bar Levels

/// CSS width for a `data-level` value, clamped to 0..=100
pub fn skill_width(level: Option<&str>) -> Option<String> {
    let value: f64 = level?.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    // f64 Display drops a trailing `.0`
    Some(format!("{}%", value.clamp(0.0, 100.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_width_parses_percent() {
        assert_eq!(skill_width(Some("85")).as_deref(), Some("85%"));
        assert_eq!(skill_width(Some(" 40 ")).as_deref(), Some("40%"));
    }

    #[test]
    fn test_skill_width_keeps_decimals() {
        assert_eq!(skill_width(Some("75.5")).as_deref(), Some("75.5%"));
        assert_eq!(skill_width(Some("60.0")).as_deref(), Some("60%"));
    }

    #[test]
    fn test_skill_width_clamps() {
        assert_eq!(skill_width(Some("140")).as_deref(), Some("100%"));
        assert_eq!(skill_width(Some("-5")).as_deref(), Some("0%"));
    }

    #[test]
    fn test_skill_width_rejects_junk() {
        assert_eq!(skill_width(None), None);
        assert_eq!(skill_width(Some("high")), None);
        assert_eq!(skill_width(Some("")), None);
        assert_eq!(skill_width(Some("NaN")), None);
        assert_eq!(skill_width(Some("inf")), None);
    }
}
