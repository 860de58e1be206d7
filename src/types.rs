//! Common types and data structures

/// Top-level page selected in the sidebar
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Overview,
    ModelQuery,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Overview, Page::ModelQuery];

    pub fn label(self) -> &'static str {
        match self {
            Page::Overview => "Task & Data",
            Page::ModelQuery => "Model Query",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Overview => egui_phosphor::regular::BOOK_OPEN,
            Page::ModelQuery => egui_phosphor::regular::CHART_LINE_UP,
        }
    }
}

/// Query type selected inside the Model Query page
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Rmse,
    FirstFive,
    Custom,
    EasterEgg,
}

impl QueryKind {
    pub const ALL: [QueryKind; 4] = [
        QueryKind::Rmse,
        QueryKind::FirstFive,
        QueryKind::Custom,
        QueryKind::EasterEgg,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QueryKind::Rmse => "RMSE",
            QueryKind::FirstFive => "First 5 predictions",
            QueryKind::Custom => "Custom example",
            QueryKind::EasterEgg => "Easter egg",
        }
    }
}

/// Customer gender as recorded in the dataset
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

/// City category A/B/C from the dataset
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum CityCategory {
    A,
    B,
    C,
}

impl CityCategory {
    pub const ALL: [CityCategory; 3] = [CityCategory::A, CityCategory::B, CityCategory::C];

    pub fn label(self) -> &'static str {
        match self {
            CityCategory::A => "A",
            CityCategory::B => "B",
            CityCategory::C => "C",
        }
    }
}

/// Years the customer has stayed in their current city
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum StayYears {
    One,
    Two,
    Three,
    FourPlus,
}

impl StayYears {
    pub const ALL: [StayYears; 4] = [
        StayYears::One,
        StayYears::Two,
        StayYears::Three,
        StayYears::FourPlus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StayYears::One => "1",
            StayYears::Two => "2",
            StayYears::Three => "3",
            StayYears::FourPlus => "4+",
        }
    }
}

/// Form state for the custom-example query. Widget bounds keep the numeric
/// fields inside the ranges the encoders expect.
#[derive(Clone, Copy)]
pub struct QueryForm {
    pub gender: Gender,
    pub age: u32,
    pub city: CityCategory,
    pub stay: StayYears,
    pub married: bool,
    pub occupation: u32,
    pub category: u32,
}

impl Default for QueryForm {
    fn default() -> Self {
        Self {
            gender: Gender::Male,
            age: 30,
            city: CityCategory::A,
            stay: StayYears::One,
            married: false,
            occupation: 0,
            category: 0,
        }
    }
}
