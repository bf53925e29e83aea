//! Course outline content model, validation, and hour derivation.
//!
//! This module lives in `core` (zero internal deps) so it can be used by
//! both the API layer and the repository layer. The same content shape is
//! carried by the current outline, per-editor drafts, and every historical
//! version, so validation and hour derivation are defined exactly once
//! here.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum number of units an outline may contain.
pub const MAX_UNITS: usize = 50;

/// Maximum number of final assessment items an outline may contain.
pub const MAX_FINAL_ASSESSMENT_ITEMS: usize = 20;

/// Maximum hour count accepted for a single unit or assessment item.
pub const MAX_HOURS_PER_ENTRY: f64 = 1000.0;

/// Maximum length of a unit or assessment item label, in characters.
pub const MAX_LABEL_CHARS: usize = 200;

/// Maximum length of any free-text field, in characters.
pub const MAX_TEXT_CHARS: usize = 20_000;

// ---------------------------------------------------------------------------
// Data types
// ---------------------------------------------------------------------------

/// The structured curriculum document for a course.
///
/// All scalar fields are optional so a draft can be partially filled.
/// Unknown JSON fields are ignored at deserialization; in particular a
/// client-supplied total-hours value never reaches the stored content --
/// the total is always recomputed via [`total_hours`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutlineContent {
    pub name: Option<String>,
    pub grade: Option<String>,
    #[serde(rename = "type")]
    pub course_type: Option<String>,
    pub credit: Option<f64>,
    pub description: Option<String>,
    pub learning_goals: Option<String>,
    pub assessment_narrative: Option<String>,
    pub prerequisite: Option<String>,
    /// Ordered sequence of instructional units.
    #[serde(default)]
    pub units: Vec<OutlineUnit>,
    /// Ordered breakdown of the final assessment.
    #[serde(default)]
    pub final_assessment_items: Vec<FinalAssessmentItem>,
}

/// One instructional unit within an outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineUnit {
    /// Zero-based position of the unit within the outline sequence.
    pub position: i32,
    pub label: String,
    pub description: Option<String>,
    pub hours: f64,
}

/// One line of the final assessment breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalAssessmentItem {
    pub label: String,
    pub hours: f64,
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Total instructional hours: sum of all unit hours plus all final
/// assessment item hours. This is the only source of the stored
/// `total_hours` value.
pub fn total_hours(content: &OutlineContent) -> f64 {
    let unit_hours: f64 = content.units.iter().map(|u| u.hours).sum();
    let assessment_hours: f64 = content.final_assessment_items.iter().map(|i| i.hours).sum();
    unit_hours + assessment_hours
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate the shape of outline content.
///
/// Applied identically to draft saves and publishes, before any write.
/// No field is required -- drafts may be partially filled -- but every
/// field that is present must be well-formed.
pub fn validate_content(content: &OutlineContent) -> Result<(), String> {
    if content.units.len() > MAX_UNITS {
        return Err(format!(
            "Outline has {} units, maximum is {MAX_UNITS}",
            content.units.len()
        ));
    }
    if content.final_assessment_items.len() > MAX_FINAL_ASSESSMENT_ITEMS {
        return Err(format!(
            "Outline has {} final assessment items, maximum is {MAX_FINAL_ASSESSMENT_ITEMS}",
            content.final_assessment_items.len()
        ));
    }

    if let Some(credit) = content.credit {
        if !credit.is_finite() || credit < 0.0 {
            return Err(format!("Credit value {credit} must be a non-negative number"));
        }
    }

    for field in [
        &content.description,
        &content.learning_goals,
        &content.assessment_narrative,
        &content.prerequisite,
    ]
    .into_iter()
    .flatten()
    {
        if field.chars().count() > MAX_TEXT_CHARS {
            return Err(format!(
                "Free-text field exceeds {MAX_TEXT_CHARS} characters"
            ));
        }
    }

    for (index, unit) in content.units.iter().enumerate() {
        if unit.position < 0 {
            return Err(format!(
                "Unit {index} has negative sequence position {}",
                unit.position
            ));
        }
        validate_label(&unit.label, "unit", index)?;
        validate_hours(unit.hours, "unit", index)?;
    }

    for (index, item) in content.final_assessment_items.iter().enumerate() {
        validate_label(&item.label, "final assessment item", index)?;
        validate_hours(item.hours, "final assessment item", index)?;
    }

    Ok(())
}

fn validate_label(label: &str, kind: &str, index: usize) -> Result<(), String> {
    if label.chars().count() > MAX_LABEL_CHARS {
        return Err(format!(
            "Label of {kind} {index} exceeds {MAX_LABEL_CHARS} characters"
        ));
    }
    Ok(())
}

fn validate_hours(hours: f64, kind: &str, index: usize) -> Result<(), String> {
    if !hours.is_finite() {
        return Err(format!("Hour count of {kind} {index} is not a finite number"));
    }
    if hours < 0.0 {
        return Err(format!("Hour count of {kind} {index} is negative"));
    }
    if hours > MAX_HOURS_PER_ENTRY {
        return Err(format!(
            "Hour count of {kind} {index} exceeds {MAX_HOURS_PER_ENTRY}"
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
