// Suffix grid parser
//
// A grid is `|`-separated segments along the outer axis (Person for verbs,
// Case for nouns). Each segment holds the singular and plural cells
// separated by `;`, and each cell is a comma list of alternative endings:
//
//   ti;nti|si;tha|mi;ma
//
// An empty segment (or a lone `;`) leaves both cells empty. An empty cell
// means no attested ending.

use pali_core::ending::Ending;
use pali_core::enums::Number;

use crate::TableError;

/// Endings of one outer-axis segment, indexed by [`Number::index`].
pub type Row = [Vec<Ending>; Number::COUNT];

/// Parses a grid with exactly `N` segments.
pub fn parse_grid<const N: usize>(line: usize, spec: &str) -> Result<[Row; N], TableError> {
    let rows = spec
        .split('|')
        .enumerate()
        .map(|(segment, text)| parse_row(line, segment, text))
        .collect::<Result<Vec<Row>, _>>()?;
    let actual = rows.len();
    rows.try_into().map_err(|_| TableError::SegmentCount {
        line,
        expected: N,
        actual,
    })
}

fn parse_row(line: usize, segment: usize, text: &str) -> Result<Row, TableError> {
    let text = text.trim();
    if text.is_empty() || text == ";" {
        return Ok(Row::default());
    }
    let cells: Vec<&str> = text.split(';').collect();
    let [sing, plu] = cells.as_slice() else {
        return Err(TableError::SubSegmentCount {
            line,
            segment: segment + 1,
            actual: cells.len(),
        });
    };
    Ok([parse_cell(line, sing)?, parse_cell(line, plu)?])
}

fn parse_cell(line: usize, text: &str) -> Result<Vec<Ending>, TableError> {
    text.split(',')
        .map(str::trim)
        .filter(|alt| !alt.is_empty())
        .map(|alt| {
            alt.parse::<Ending>()
                .map_err(|source| TableError::Vocabulary { line, source })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(cell: &[Ending]) -> Vec<String> {
        cell.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn parses_three_segments() {
        let grid: [Row; 3] = parse_grid(1, "ti;nti|si;tha|mi,āmi;ma").unwrap();
        assert_eq!(texts(&grid[0][0]), ["ti"]);
        assert_eq!(texts(&grid[0][1]), ["nti"]);
        assert_eq!(texts(&grid[2][0]), ["mi", "āmi"]);
    }

    #[test]
    fn empty_segment_and_cells() {
        let grid: [Row; 3] = parse_grid(1, "ti;|;|;ma").unwrap();
        assert!(grid[0][1].is_empty());
        assert!(grid[1][0].is_empty() && grid[1][1].is_empty());
        assert!(grid[2][0].is_empty());
        assert_eq!(texts(&grid[2][1]), ["ma"]);

        let grid: [Row; 2] = parse_grid(1, "|a;b").unwrap();
        assert!(grid[0][0].is_empty());
    }

    #[test]
    fn wrong_segment_count() {
        let err = parse_grid::<3>(4, "ti;nti|si;tha").unwrap_err();
        assert_eq!(
            err,
            TableError::SegmentCount {
                line: 4,
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn wrong_number_fields() {
        let err = parse_grid::<1>(9, "a;b;c").unwrap_err();
        assert_eq!(
            err,
            TableError::SubSegmentCount {
                line: 9,
                segment: 1,
                actual: 3
            }
        );
        assert!(parse_grid::<1>(9, "abc").is_err());
    }

    #[test]
    fn malformed_ending_reports_line() {
        let err = parse_grid::<1>(12, "-x;a").unwrap_err();
        assert!(matches!(err, TableError::Vocabulary { line: 12, .. }));
    }
}
