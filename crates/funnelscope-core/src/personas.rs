use std::path::Path;

use calamine::Reader;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ConfigError, CoreError};

/// A buyer persona. Records are appended or deleted, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub id: u32,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pain_points: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Persona fields before an id and timestamp are assigned.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct NewPersona {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pain_points: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
}

impl NewPersona {
    /// Build a persona from form-style input where pain points and goals are
    /// newline-separated. Entries are trimmed and blank lines dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPersona`] if `name` or `role` is blank.
    pub fn from_form(
        name: &str,
        role: &str,
        description: &str,
        pain_points: &str,
        goals: &str,
    ) -> Result<Self, CoreError> {
        let persona = Self {
            name: name.trim().to_string(),
            role: role.trim().to_string(),
            description: description.trim().to_string(),
            pain_points: split_entries(pain_points, '\n'),
            goals: split_entries(goals, '\n'),
        };
        persona.validate()?;
        Ok(persona)
    }

    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPersona`] if `name` or `role` is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::InvalidPersona(
                "persona name must be non-empty".to_string(),
            ));
        }
        if self.role.trim().is_empty() {
            return Err(CoreError::InvalidPersona(format!(
                "persona '{}' has no role",
                self.name
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn into_persona(self, id: u32, created_at: DateTime<Utc>) -> Persona {
        Persona {
            id,
            name: self.name,
            role: self.role,
            description: self.description,
            pain_points: self.pain_points,
            goals: self.goals,
            created_at,
        }
    }
}

fn split_entries(raw: &str, sep: char) -> Vec<String> {
    raw.split(sep)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[derive(Debug, Deserialize)]
struct PersonasFile {
    personas: Vec<NewPersona>,
}

/// Load personas for bulk import from a `.yaml`/`.yml`, `.csv` or
/// `.xlsx`/`.xls` file.
///
/// CSV files and spreadsheets need a header row with the columns
/// `Persona Name`, `Role/Title`, `Description`, `Pain Points` and `Goals`;
/// the last two hold comma-separated lists. Only the first worksheet of a
/// workbook is read.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or any row fails
/// validation.
pub fn load_personas_file(path: &Path) -> Result<Vec<NewPersona>, ConfigError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let personas = match extension.as_str() {
        "yaml" | "yml" => {
            let file: PersonasFile = serde_yaml::from_str(&read_text(path)?)?;
            file.personas
        }
        "csv" => parse_personas_csv(&read_text(path)?)?,
        "xlsx" | "xls" => read_personas_workbook(path)?,
        other => return Err(ConfigError::UnsupportedPersonaFormat(other.to_string())),
    };

    for persona in &personas {
        persona
            .validate()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
    }

    Ok(personas)
}

fn read_text(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| ConfigError::PersonaFileIo {
        path: path.display().to_string(),
        source: e,
    })
}

const COL_NAME: &str = "Persona Name";
const COL_ROLE: &str = "Role/Title";
const COL_DESCRIPTION: &str = "Description";
const COL_PAIN_POINTS: &str = "Pain Points";
const COL_GOALS: &str = "Goals";

/// Column positions resolved from a header row.
struct PersonaColumns {
    name: usize,
    role: usize,
    description: Option<usize>,
    pain_points: Option<usize>,
    goals: Option<usize>,
}

impl PersonaColumns {
    fn from_header<S: AsRef<str>>(header: &[S]) -> Result<Self, ConfigError> {
        let find = |column: &str| header.iter().position(|h| h.as_ref().trim() == column);
        Ok(Self {
            name: find(COL_NAME).ok_or(ConfigError::MissingPersonaColumn(COL_NAME))?,
            role: find(COL_ROLE).ok_or(ConfigError::MissingPersonaColumn(COL_ROLE))?,
            description: find(COL_DESCRIPTION),
            pain_points: find(COL_PAIN_POINTS),
            goals: find(COL_GOALS),
        })
    }

    /// `None` for a row whose cells are all blank.
    fn persona<S: AsRef<str>>(&self, row: &[S]) -> Option<NewPersona> {
        if row.iter().all(|c| c.as_ref().trim().is_empty()) {
            return None;
        }
        let cell = |col: Option<usize>| {
            col.and_then(|c| row.get(c))
                .map(|s| s.as_ref().trim().to_string())
                .unwrap_or_default()
        };
        Some(NewPersona {
            name: cell(Some(self.name)),
            role: cell(Some(self.role)),
            description: cell(self.description),
            pain_points: split_entries(&cell(self.pain_points), ','),
            goals: split_entries(&cell(self.goals), ','),
        })
    }
}

fn csv_error(err: &csv::Error) -> ConfigError {
    ConfigError::PersonaCsv {
        line: err.position().map_or(0, csv::Position::line),
        reason: err.to_string(),
    }
}

fn parse_personas_csv(content: &str) -> Result<Vec<NewPersona>, ConfigError> {
    // Excel prefixes UTF-8 exports with a byte-order mark.
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let header: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(&e))?
        .iter()
        .map(ToString::to_string)
        .collect();
    let columns = PersonaColumns::from_header(&header)?;

    let mut personas = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(&e))?;
        let row: Vec<&str> = record.iter().collect();
        personas.extend(columns.persona(&row));
    }
    Ok(personas)
}

fn read_personas_workbook(path: &Path) -> Result<Vec<NewPersona>, ConfigError> {
    let sheet_error = |reason: String| ConfigError::PersonaSpreadsheet {
        path: path.display().to_string(),
        reason,
    };

    let mut workbook =
        calamine::open_workbook_auto(path).map_err(|e| sheet_error(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| sheet_error("workbook has no worksheets".to_string()))?
        .map_err(|e| sheet_error(e.to_string()))?;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(ToString::to_string).collect::<Vec<String>>());
    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };
    let columns = PersonaColumns::from_header(&header)?;
    Ok(rows.filter_map(|row| columns.persona(&row)).collect())
}

#[cfg(test)]
#[path = "personas_test.rs"]
mod tests;
