//! Fixed option tables for the selection groups

/// Academic programme tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Degree {
    Masters,
    Bachelors,
}

impl Degree {
    /// All degrees in display order
    pub const ALL: [Degree; 2] = [Degree::Masters, Degree::Bachelors];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Masters => "Masters",
            Self::Bachelors => "Bachelors",
        }
    }

    /// Courses offered for this degree
    pub fn courses(&self) -> &'static [&'static str] {
        match self {
            Self::Bachelors => BACHELORS_COURSES,
            Self::Masters => MASTERS_COURSES,
        }
    }
}

const BACHELORS_COURSES: &[&str] = &["SAT", "ACT", "TOLC", "IELTS", "PTE", "TOEFL"];
const MASTERS_COURSES: &[&str] = &["GRE", "GMAT", "IELTS", "PTE", "TOEFL"];

/// Courses shown before a degree is chosen
pub const DEFAULT_COURSES: &[&str] = &["IELTS", "TOEFL", "PTE", "GRE", "GMAT", "SAT"];

/// Study destinations in display order
pub const DESTINATIONS: &[&str] = &[
    "US",
    "UK",
    "CANADA",
    "NEW ZEALAND",
    "AUSTRALIA",
    "GERMANY",
    "ITALY",
    "FRANCE",
    "Dubai",
    "SINGAPORE",
    "IRELAND",
];

/// Course table lookup keyed by the optional degree
pub fn courses_for(degree: Option<Degree>) -> &'static [&'static str] {
    degree.map_or(DEFAULT_COURSES, |d| d.courses())
}
