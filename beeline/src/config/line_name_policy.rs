use beeline_core::model::schedule::TransitLine;
use serde::{Deserialize, Serialize};

/// derives the name under which a transit line is compared across schedules.
/// schedules produced by different tools often decorate the same line name
/// differently (e.g. `"M41---17445_700"` versus `"pt:M41"`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum LineNamePolicy {
    /// the line identifier as-is
    Identity,
    /// the line's name attribute, or its identifier when it has none
    LineName,
    /// the part of the identifier before the first delimiter
    FirstSegment { delimiter: String },
    /// the part of the identifier after the last delimiter
    LastSegment { delimiter: String },
}

impl LineNamePolicy {
    pub fn name_of(&self, line: &TransitLine) -> String {
        let id = line.id.as_str();
        match self {
            LineNamePolicy::Identity => String::from(id),
            LineNamePolicy::LineName => line.name.clone().unwrap_or_else(|| String::from(id)),
            LineNamePolicy::FirstSegment { delimiter } => id
                .split(delimiter.as_str())
                .next()
                .map(String::from)
                .unwrap_or_default(),
            LineNamePolicy::LastSegment { delimiter } => id
                .rsplit(delimiter.as_str())
                .next()
                .map(String::from)
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beeline_core::model::schedule::TransitLineId;

    #[test]
    fn test_segment_policies() {
        let line = TransitLine::new(TransitLineId::from("M41---17445_700"), None);
        let first = LineNamePolicy::FirstSegment {
            delimiter: String::from("---"),
        };
        assert_eq!(first.name_of(&line), "M41");

        let prepared = TransitLine::new(TransitLineId::from("pt:bus:M41"), None);
        let last = LineNamePolicy::LastSegment {
            delimiter: String::from(":"),
        };
        assert_eq!(last.name_of(&prepared), "M41");
        assert_eq!(LineNamePolicy::Identity.name_of(&prepared), "pt:bus:M41");
    }

    #[test]
    fn test_line_name_falls_back_to_id() {
        let named = TransitLine::new(TransitLineId::from("17445"), Some(String::from("M41")));
        let unnamed = TransitLine::new(TransitLineId::from("17446"), None);
        assert_eq!(LineNamePolicy::LineName.name_of(&named), "M41");
        assert_eq!(LineNamePolicy::LineName.name_of(&unnamed), "17446");
    }
}
