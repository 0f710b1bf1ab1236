#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentToken {
    Static {
        value: String,
    },
    Wildcard {
        multi: bool,
    },
    Glob {
        source: String,
        multi: bool,
    },
    Param {
        name: String,
        optional: bool,
        pattern: Option<ParamPattern>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamPattern {
    Star,
    DoubleStar,
    Glob(String),
}
