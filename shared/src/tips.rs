use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SustainabilityTip {
    pub title: String,
    pub content: String,
    pub category: String,
}

impl SustainabilityTip {
    /// CSS modifier used for the category pill.
    pub fn category_class(&self) -> &'static str {
        match self.category.as_str() {
            "Plastics" => "tip-plastics",
            "Organic" => "tip-organic",
            "Electronic" => "tip-electronic",
            "Glass" => "tip-glass",
            "Paper" => "tip-paper",
            _ => "tip-other",
        }
    }
}

/// Cursor over a list of tips that wraps in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TipCarousel {
    index: usize,
    len: usize,
}

impl TipCarousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    pub fn current<'a>(&self, tips: &'a [SustainabilityTip]) -> Option<&'a SustainabilityTip> {
        tips.get(self.index)
    }
}
