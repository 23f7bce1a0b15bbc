use crate::time::TimeValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardioSession {
    pub name: String,
    pub duration: TimeValue,
    pub intensity: String,
}

impl CardioSession {
    pub fn new(name: impl Into<String>, duration: TimeValue, intensity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            duration,
            intensity: intensity.into(),
        }
    }

    pub fn from_minutes(name: impl Into<String>, minutes: u64, intensity: impl Into<String>) -> Self {
        Self::new(name, TimeValue::from_minutes(minutes), intensity)
    }
}
