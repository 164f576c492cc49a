//! Skill diagnostics arithmetic

use crate::domain::content::{Skill, SkillCategory};

/// Needle sweep of a dial gauge, in degrees, from empty to full.
pub const GAUGE_SPAN_DEGREES: f64 = 270.0;
/// Needle angle for a 0% reading; 0 is straight up, negative is counter-clockwise.
pub const GAUGE_START_DEGREES: f64 = -135.0;
/// Horizon roll for a full 100 point gap between the two categories.
pub const MAX_HORIZON_ROLL_DEGREES: f64 = 45.0;
/// Rolls smaller than this read as balanced.
pub const BALANCED_ROLL_DEGREES: f64 = 5.0;

/// Mean value of the skills in `category`. An empty category averages to 0.
pub fn category_average(skills: &[Skill], category: SkillCategory) -> f64 {
    let (sum, count) = skills
        .iter()
        .filter(|skill| skill.category == category)
        .fold((0u32, 0u32), |(sum, count), skill| {
            (sum + u32::from(skill.value), count + 1)
        });
    if count == 0 {
        0.0
    } else {
        f64::from(sum) / f64::from(count)
    }
}

pub fn needle_angle(value: u8) -> f64 {
    GAUGE_START_DEGREES + f64::from(value.min(100)) / 100.0 * GAUGE_SPAN_DEGREES
}

/// Roll of the attitude indicator; positive leans toward software.
pub fn horizon_roll(software_average: f64, hardware_average: f64) -> f64 {
    (software_average - hardware_average) / 100.0 * MAX_HORIZON_ROLL_DEGREES
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Balance {
    Optimal,
    SoftwareBias,
    HardwareFoundation,
}

impl Balance {
    pub fn from_roll(roll: f64) -> Self {
        if roll.abs() < BALANCED_ROLL_DEGREES {
            Balance::Optimal
        } else if roll > 0.0 {
            Balance::SoftwareBias
        } else {
            Balance::HardwareFoundation
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            Balance::Optimal => "Optimal balance between hardware and software domains.",
            Balance::SoftwareBias => "Slight bias toward software security expertise.",
            Balance::HardwareFoundation => "Strong foundation in hardware systems.",
        }
    }
}

/// Everything the diagnostics panel derives from the skill table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics {
    pub software_average: f64,
    pub hardware_average: f64,
    pub roll: f64,
    pub balance: Balance,
}

impl Diagnostics {
    pub fn from_skills(skills: &[Skill]) -> Self {
        let software_average = category_average(skills, SkillCategory::Software);
        let hardware_average = category_average(skills, SkillCategory::Hardware);
        let roll = horizon_roll(software_average, hardware_average);
        Self {
            software_average,
            hardware_average,
            roll,
            balance: Balance::from_roll(roll),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::SKILLS;
    use pretty_assertions::assert_eq;

    fn skill(value: u8, category: SkillCategory) -> Skill {
        Skill {
            name: "TEST",
            value,
            category,
        }
    }

    #[test]
    fn test_software_average() {
        let skills = [
            skill(92, SkillCategory::Software),
            skill(85, SkillCategory::Software),
            skill(95, SkillCategory::Software),
            skill(88, SkillCategory::Software),
        ];
        assert_eq!(category_average(&skills, SkillCategory::Software), 90.0);
    }

    #[test]
    fn test_empty_category_averages_to_zero() {
        let skills = [skill(70, SkillCategory::Software)];
        let average = category_average(&skills, SkillCategory::Hardware);
        assert_eq!(average, 0.0);
        assert!(!average.is_nan());
        assert_eq!(category_average(&[], SkillCategory::Software), 0.0);
    }

    #[test]
    fn test_needle_angle_bounds() {
        assert_eq!(needle_angle(0), -135.0);
        assert_eq!(needle_angle(50), 0.0);
        assert_eq!(needle_angle(100), 135.0);
        assert_eq!(needle_angle(250), 135.0);
    }

    #[test]
    fn test_dossier_diagnostics() {
        let diagnostics = Diagnostics::from_skills(SKILLS);
        assert_eq!(diagnostics.software_average, 90.0);
        assert_eq!(diagnostics.hardware_average, 92.0);
        assert!((diagnostics.roll - -0.9).abs() < 1e-9);
        assert_eq!(diagnostics.balance, Balance::Optimal);
    }

    #[test]
    fn test_balance_verdicts() {
        assert_eq!(Balance::from_roll(4.9), Balance::Optimal);
        assert_eq!(Balance::from_roll(-4.9), Balance::Optimal);
        assert_eq!(Balance::from_roll(5.0), Balance::SoftwareBias);
        assert_eq!(Balance::from_roll(-5.0), Balance::HardwareFoundation);
    }

    #[test]
    fn test_one_sided_table_rolls_fully() {
        let skills = [skill(100, SkillCategory::Software)];
        let diagnostics = Diagnostics::from_skills(&skills);
        assert_eq!(diagnostics.roll, 45.0);
        assert_eq!(diagnostics.balance, Balance::SoftwareBias);
    }
}
