use crate::error::Error;
use plotters::chart::SeriesLabelPosition;
use std::fmt;
use std::str::FromStr;

/// Where the legend box goes inside the plotting area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendLoc {
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
    Right,
    CenterLeft,
    CenterRight,
    LowerCenter,
    UpperCenter,
    Center,
}

/// accepted names with their numeric codes, "best" (0) falls back to upper right
const NAMES: [(&str, &str, LegendLoc); 11] = [
    ("best", "0", LegendLoc::UpperRight),
    ("upper right", "1", LegendLoc::UpperRight),
    ("upper left", "2", LegendLoc::UpperLeft),
    ("lower left", "3", LegendLoc::LowerLeft),
    ("lower right", "4", LegendLoc::LowerRight),
    ("right", "5", LegendLoc::Right),
    ("center left", "6", LegendLoc::CenterLeft),
    ("center right", "7", LegendLoc::CenterRight),
    ("lower center", "8", LegendLoc::LowerCenter),
    ("upper center", "9", LegendLoc::UpperCenter),
    ("center", "10", LegendLoc::Center),
];

impl LegendLoc {
    pub fn position(self) -> SeriesLabelPosition {
        match self {
            LegendLoc::UpperRight => SeriesLabelPosition::UpperRight,
            LegendLoc::UpperLeft => SeriesLabelPosition::UpperLeft,
            LegendLoc::LowerLeft => SeriesLabelPosition::LowerLeft,
            LegendLoc::LowerRight => SeriesLabelPosition::LowerRight,
            LegendLoc::Right | LegendLoc::CenterRight => SeriesLabelPosition::MiddleRight,
            LegendLoc::CenterLeft => SeriesLabelPosition::MiddleLeft,
            LegendLoc::LowerCenter => SeriesLabelPosition::LowerMiddle,
            LegendLoc::UpperCenter => SeriesLabelPosition::UpperMiddle,
            LegendLoc::Center => SeriesLabelPosition::MiddleMiddle,
        }
    }
}

impl Default for LegendLoc {
    fn default() -> Self {
        LegendLoc::UpperRight
    }
}

impl FromStr for LegendLoc {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        NAMES
            .iter()
            .find(|(name, code, _)| *name == wanted || *code == wanted)
            .map(|(_, _, loc)| *loc)
            .ok_or_else(|| Error::UnknownLegendLoc(s.to_string()))
    }
}

impl fmt::Display for LegendLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // skip "best", it is only an alias
        let name = NAMES[1..]
            .iter()
            .find(|(_, _, loc)| loc == self)
            .map_or("upper right", |(name, _, _)| *name);
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("upper right", LegendLoc::UpperRight)]
    #[case("best", LegendLoc::UpperRight)]
    #[case("Lower Left", LegendLoc::LowerLeft)]
    #[case(" center ", LegendLoc::Center)]
    #[case("9", LegendLoc::UpperCenter)]
    #[case("6", LegendLoc::CenterLeft)]
    fn known_locations(#[case] raw: &str, #[case] expected: LegendLoc) {
        assert_eq!(raw.parse::<LegendLoc>().unwrap(), expected);
    }

    #[rstest]
    #[case("top")]
    #[case("11")]
    #[case("")]
    fn unknown_locations(#[case] raw: &str) {
        match raw.parse::<LegendLoc>() {
            Err(Error::UnknownLegendLoc(name)) => assert_eq!(name, raw),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn display_gives_back_the_name() {
        assert_eq!(LegendLoc::LowerCenter.to_string(), "lower center");
        assert_eq!(LegendLoc::default().to_string(), "upper right");
    }

    fn position_name(position: SeriesLabelPosition) -> &'static str {
        match position {
            SeriesLabelPosition::UpperLeft => "upper left",
            SeriesLabelPosition::MiddleLeft => "middle left",
            SeriesLabelPosition::LowerLeft => "lower left",
            SeriesLabelPosition::UpperMiddle => "upper middle",
            SeriesLabelPosition::MiddleMiddle => "middle middle",
            SeriesLabelPosition::LowerMiddle => "lower middle",
            SeriesLabelPosition::UpperRight => "upper right",
            SeriesLabelPosition::MiddleRight => "middle right",
            SeriesLabelPosition::LowerRight => "lower right",
            _ => "coordinate",
        }
    }

    #[rstest]
    #[case(LegendLoc::UpperRight, "upper right")]
    #[case(LegendLoc::UpperLeft, "upper left")]
    #[case(LegendLoc::LowerLeft, "lower left")]
    #[case(LegendLoc::LowerRight, "lower right")]
    #[case(LegendLoc::Right, "middle right")]
    #[case(LegendLoc::CenterLeft, "middle left")]
    #[case(LegendLoc::CenterRight, "middle right")]
    #[case(LegendLoc::LowerCenter, "lower middle")]
    #[case(LegendLoc::UpperCenter, "upper middle")]
    #[case(LegendLoc::Center, "middle middle")]
    fn maps_to_series_label_position(#[case] loc: LegendLoc, #[case] expected: &str) {
        assert_eq!(position_name(loc.position()), expected);
    }
}
