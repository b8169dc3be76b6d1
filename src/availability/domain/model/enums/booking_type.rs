use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BookingType {
    Lesson,
    Exam,
    Meeting,
}

impl BookingType {
    pub const VALID_NAMES: [&'static str; 3] = ["lesson", "exam", "meeting"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lesson => "lesson",
            Self::Exam => "exam",
            Self::Meeting => "meeting",
        }
    }
}

impl FromStr for BookingType {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "lesson" => Ok(Self::Lesson),
            "exam" => Ok(Self::Exam),
            "meeting" => Ok(Self::Meeting),
            _ => Err(()),
        }
    }
}
