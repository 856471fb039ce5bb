//! Event categories and their display colors

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use csscolorparser::Color;
use once_cell::sync::Lazy;

/// The closed set of category labels an event can carry.
///
/// Categories are assigned once, when the event is created, by the classification service. \
/// The current edit flow does not allow changing them afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Meeting,
    Exercise,
    Personal,
    Other,
}

impl Category {
    /// The category substituted when classification is unavailable or returns an unknown label
    pub fn default_category() -> Self {
        Category::Other
    }

    /// Map a label returned by the classification service to a category.
    ///
    /// The service is not required to answer with a known label: anything unrecognized maps to [`Category::Other`],
    /// the same label the display-color fallback uses.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "meeting" => Category::Meeting,
            "exercise" => Category::Exercise,
            "personal" => Category::Personal,
            "other" => Category::Other,
            unknown => {
                log::debug!("Unknown category label {:?}, falling back to \"other\"", unknown);
                Category::Other
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Meeting => "meeting",
            Category::Exercise => "exercise",
            Category::Personal => "personal",
            Category::Other => "other",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.label())
    }
}

static MEETING_COLOR: Lazy<Color> = Lazy::new(|| "#4CAF50".parse().unwrap());
static EXERCISE_COLOR: Lazy<Color> = Lazy::new(|| "#FFC107".parse().unwrap());
static PERSONAL_COLOR: Lazy<Color> = Lazy::new(|| "#03A9F4".parse().unwrap());
static OTHER_COLOR: Lazy<Color> = Lazy::new(|| "#9E9E9E".parse().unwrap());

/// The fixed category → display color table, for the rendering layer.
///
/// [`Category::Other`] doubles as the fallback entry for anything else.
pub fn category_color(category: Category) -> &'static Color {
    match category {
        Category::Meeting => &MEETING_COLOR,
        Category::Exercise => &EXERCISE_COLOR,
        Category::Personal => &PERSONAL_COLOR,
        Category::Other => &OTHER_COLOR,
    }
}

/// What the UI's category dropdown selects: either everything, or a single category
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Show every event of the day
    All,
    /// Show only events of this category
    Only(Category),
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}
