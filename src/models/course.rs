use serde::{Deserialize, Serialize};

/// The three schedule columns of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionKind {
    Lecture,
    Tutorial,
    Lab,
}

impl SessionKind {
    /// Iteration order used by the slot mapper and the conflict detector
    pub const ALL: [Self; 3] = [Self::Lecture, Self::Tutorial, Self::Lab];

    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Lecture => crate::constants::COL_LECTURE,
            Self::Tutorial => crate::constants::COL_TUTORIAL,
            Self::Lab => crate::constants::COL_LAB,
        }
    }

    #[must_use]
    pub fn from_column(column: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.column() == column)
    }
}

/// One catalog entry, serialized with the timetable sheet's column names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "E", default, with = "text_serde")]
    pub code: String,
    #[serde(rename = "Course Name", default, with = "text_serde")]
    pub name: String,
    #[serde(rename = "L", default, with = "text_serde")]
    pub lecture_hours: String,
    #[serde(rename = "T", default, with = "text_serde")]
    pub tutorial_hours: String,
    #[serde(rename = "P", default, with = "text_serde")]
    pub practical_hours: String,
    #[serde(rename = "C", default, with = "text_serde")]
    pub credits: String,
    #[serde(rename = "Name of the Instructors and Tutors", default, with = "text_serde")]
    pub instructors: String,
    #[serde(rename = "Lecture", default, with = "text_serde")]
    pub lecture: String,
    #[serde(rename = "Tutorial", default, with = "text_serde")]
    pub tutorial: String,
    #[serde(rename = "Lab", default, with = "text_serde")]
    pub lab: String,
    #[serde(rename = "HSS/BS elective", default, with = "text_serde")]
    pub elective: String,
}

impl Course {
    /// Raw schedule text for one session kind
    #[must_use]
    pub fn schedule(&self, kind: SessionKind) -> &str {
        match kind {
            SessionKind::Lecture => &self.lecture,
            SessionKind::Tutorial => &self.tutorial,
            SessionKind::Lab => &self.lab,
        }
    }

    pub fn set_schedule(&mut self, kind: SessionKind, text: String) {
        match kind {
            SessionKind::Lecture => self.lecture = text,
            SessionKind::Tutorial => self.tutorial = text,
            SessionKind::Lab => self.lab = text,
        }
    }

    /// Value of a canonical column by its sheet name
    #[must_use]
    pub fn column(&self, column: &str) -> Option<&str> {
        use crate::constants::{
            COL_CODE, COL_CREDITS, COL_ELECTIVE, COL_INSTRUCTORS, COL_LAB, COL_LECTURE,
            COL_LECTURE_HOURS, COL_NAME, COL_PRACTICAL_HOURS, COL_TUTORIAL, COL_TUTORIAL_HOURS,
        };

        let value = match column {
            COL_CODE => &self.code,
            COL_NAME => &self.name,
            COL_LECTURE_HOURS => &self.lecture_hours,
            COL_TUTORIAL_HOURS => &self.tutorial_hours,
            COL_PRACTICAL_HOURS => &self.practical_hours,
            COL_CREDITS => &self.credits,
            COL_INSTRUCTORS => &self.instructors,
            COL_LECTURE => &self.lecture,
            COL_TUTORIAL => &self.tutorial,
            COL_LAB => &self.lab,
            COL_ELECTIVE => &self.elective,
            _ => return None,
        };
        Some(value)
    }

    /// Mutable access to a canonical column, used by the CSV importer
    pub fn column_mut(&mut self, column: &str) -> Option<&mut String> {
        use crate::constants::{
            COL_CODE, COL_CREDITS, COL_ELECTIVE, COL_INSTRUCTORS, COL_LAB, COL_LECTURE,
            COL_LECTURE_HOURS, COL_NAME, COL_PRACTICAL_HOURS, COL_TUTORIAL, COL_TUTORIAL_HOURS,
        };

        let value = match column {
            COL_CODE => &mut self.code,
            COL_NAME => &mut self.name,
            COL_LECTURE_HOURS => &mut self.lecture_hours,
            COL_TUTORIAL_HOURS => &mut self.tutorial_hours,
            COL_PRACTICAL_HOURS => &mut self.practical_hours,
            COL_CREDITS => &mut self.credits,
            COL_INSTRUCTORS => &mut self.instructors,
            COL_LECTURE => &mut self.lecture,
            COL_TUTORIAL => &mut self.tutorial,
            COL_LAB => &mut self.lab,
            COL_ELECTIVE => &mut self.elective,
            _ => return None,
        };
        Some(value)
    }
}

// Spreadsheet exports put numbers (credit structure) and nulls (blank cells)
// where the model keeps text.
mod text_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(String::new()),
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(serde::de::Error::custom(format!(
                "Expected text or number, found {other}"
            ))),
        }
    }
}
