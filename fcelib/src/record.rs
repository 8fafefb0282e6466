//! The FCE record model.
//!
//! An FCE export row is a flat list of comma-separated fields. Only a handful
//! of them matter here, and they are picked out by fixed position. [`Field`]
//! is the position table; [`Record`] holds the named values after a row has
//! been validated against it.

use serde::Serialize;

use crate::error::FceError;
use crate::Result;

/// The fields of an FCE row that are read, with their column positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Semester,
    Year,
    Instructor,
    Department,
    CourseNo,
    CourseName,
    Section,
    Hours,
    Rating,
}

impl Field {
    /// All consumed fields, in column order.
    pub const ALL: [Field; 9] = [
        Field::Semester,
        Field::Year,
        Field::Instructor,
        Field::Department,
        Field::CourseNo,
        Field::CourseName,
        Field::Section,
        Field::Hours,
        Field::Rating,
    ];

    /// The fields shown in the info table, in display order.
    pub const DISPLAY: [Field; 5] = [
        Field::Semester,
        Field::Year,
        Field::Instructor,
        Field::Hours,
        Field::Rating,
    ];

    /// Column position of this field in a raw row.
    pub const fn index(self) -> usize {
        match self {
            Field::Semester => 0,
            Field::Year => 1,
            Field::Instructor => 2,
            Field::Department => 3,
            Field::CourseNo => 4,
            Field::CourseName => 5,
            Field::Section => 6,
            Field::Hours => 11,
            Field::Rating => 20,
        }
    }

    /// Lowercase name used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Field::Semester => "semester",
            Field::Year => "year",
            Field::Instructor => "instructor",
            Field::Department => "department",
            Field::CourseNo => "courseno",
            Field::CourseName => "coursename",
            Field::Section => "section",
            Field::Hours => "hours",
            Field::Rating => "rating",
        }
    }
}

/// Minimum number of fields a row needs to be a record.
pub const MIN_FIELDS: usize = Field::Rating.index() + 1;

/// One FCE entry. Values are kept exactly as they appeared in the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub semester: String,
    pub year: String,
    pub instructor: String,
    pub department: String,
    pub courseno: String,
    pub coursename: String,
    pub section: String,
    pub hours: String,
    pub rating: String,
}

impl Record {
    /// Build a record from the fields of a raw row.
    ///
    /// Fails with [`FceError::ShortRecord`] if the row cannot hold every
    /// field in [`Field::ALL`].
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self> {
        if fields.len() < MIN_FIELDS {
            return Err(FceError::ShortRecord {
                found: fields.len(),
                required: MIN_FIELDS,
            });
        }
        let take = |field: Field| fields[field.index()].as_ref().to_string();

        Ok(Record {
            semester: take(Field::Semester),
            year: take(Field::Year),
            instructor: take(Field::Instructor),
            department: take(Field::Department),
            courseno: take(Field::CourseNo),
            coursename: take(Field::CourseName),
            section: take(Field::Section),
            hours: take(Field::Hours),
            rating: take(Field::Rating),
        })
    }

    /// Raw value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Semester => &self.semester,
            Field::Year => &self.year,
            Field::Instructor => &self.instructor,
            Field::Department => &self.department,
            Field::CourseNo => &self.courseno,
            Field::CourseName => &self.coursename,
            Field::Section => &self.section,
            Field::Hours => &self.hours,
            Field::Rating => &self.rating,
        }
    }

    /// Values of the info-table columns, in display order.
    pub fn display_fields(&self) -> [&str; 5] {
        Field::DISPLAY.map(|f| self.get(f))
    }

    /// The year as an integer.
    pub fn year_value(&self) -> Result<i64> {
        parse_number(Field::Year, &self.year)
    }

    /// Weekly hours as a float.
    pub fn hours_value(&self) -> Result<f64> {
        parse_number(Field::Hours, &self.hours)
    }

    /// Overall rating as a float.
    pub fn rating_value(&self) -> Result<f64> {
        parse_number(Field::Rating, &self.rating)
    }

    /// The course number as an integer, which drops any leading zeros.
    pub fn courseno_value(&self) -> Result<i64> {
        parse_number(Field::CourseNo, &self.courseno)
    }
}

fn parse_number<T: std::str::FromStr>(field: Field, raw: &str) -> Result<T> {
    raw.trim().parse().map_err(|_| FceError::Parse {
        field: field.name(),
        value: raw.to_string(),
    })
}
