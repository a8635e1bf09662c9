use crate::Archetype;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Treat every muscle group as fully recovered.
    pub all_recovered: bool,
    pub lower_body_cap: Option<usize>,
    pub upper_body_cap: Option<usize>,
    pub full_body_cap: Option<usize>,
}

impl EngineConfig {
    #[must_use]
    pub fn cap(&self, archetype: Archetype) -> Option<usize> {
        match archetype {
            Archetype::LowerBody => self.lower_body_cap,
            Archetype::UpperBody => self.upper_body_cap,
            Archetype::FullBody => self.full_body_cap,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            all_recovered: false,
            lower_body_cap: Some(8),
            upper_body_cap: None,
            full_body_cap: None,
        }
    }
}
