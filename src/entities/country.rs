use serde::{Deserialize, Serialize};

/// Countries offered by the profile form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Country {
    Russia,
    Belarus,
    Ukraine,
    Kazakhstan,
    Armenia,
}

impl Country {
    pub const ALL: [Country; 5] = [
        Country::Russia,
        Country::Belarus,
        Country::Ukraine,
        Country::Kazakhstan,
        Country::Armenia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Russia => "Russia",
            Country::Belarus => "Belarus",
            Country::Ukraine => "Ukraine",
            Country::Kazakhstan => "Kazakhstan",
            Country::Armenia => "Armenia",
        }
    }

    pub fn next(&self) -> Country {
        match self {
            Country::Russia => Country::Belarus,
            Country::Belarus => Country::Ukraine,
            Country::Ukraine => Country::Kazakhstan,
            Country::Kazakhstan => Country::Armenia,
            Country::Armenia => Country::Russia,
        }
    }

    pub fn prev(&self) -> Country {
        match self {
            Country::Russia => Country::Armenia,
            Country::Belarus => Country::Russia,
            Country::Ukraine => Country::Belarus,
            Country::Kazakhstan => Country::Ukraine,
            Country::Armenia => Country::Kazakhstan,
        }
    }
}
